//! Reads OWL 2 axioms out of RDF triples.

use super::vocab as owl;
use crate::annotation::{Annotation, AnnotationSubject, AnnotationValue};
use crate::axiom::{Axiom, PropertyCharacteristic};
use crate::entity::{EntityKind, Individual};
use crate::error::OwlParseError;
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::ontology::Ontology;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term, Triple};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

type Statement = (Term, NamedNode, Term);

/// Datatypes that are always data ranges, declared or not.
const BUILTIN_DATATYPES: &[&str] = &[
    "http://www.w3.org/2000/01/rdf-schema#Literal",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral",
    "http://www.w3.org/2002/07/owl#rational",
    "http://www.w3.org/2002/07/owl#real",
];

/// Predicates of axiom nodes that are not annotations of the axiom.
const AXIOM_NODE_PREDICATES: &[NamedNodeRef<'static>] = &[
    rdf::TYPE,
    owl::MEMBERS,
    owl::DISTINCT_MEMBERS,
    owl::SOURCE_INDIVIDUAL,
    owl::ASSERTION_PROPERTY,
    owl::TARGET_INDIVIDUAL,
    owl::TARGET_VALUE,
    owl::ANNOTATED_SOURCE,
    owl::ANNOTATED_PROPERTY,
    owl::ANNOTATED_TARGET,
];

/// Configuration for the parser.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum nesting depth of anonymous class expressions and data ranges.
    pub max_depth: usize,
    /// Maximum number of members of an RDF list.
    pub max_list_length: usize,
    /// Skip the triples that do not map to an axiom instead of failing.
    pub lenient: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 100,
            max_list_length: 10000,
            lenient: false,
        }
    }
}

impl ParserConfig {
    /// Sets lenient mode.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }
}

/// Builds an [`Ontology`] from the triples of an RDF graph.
///
/// Triples are indexed by subject once. Property kinds come from the
/// declarations found anywhere in the graph, so a property used before its
/// declaration is still mapped to the right axiom type.
pub struct OntologyParser {
    config: ParserConfig,
    statements: Vec<Statement>,
    index: FxHashMap<Term, Vec<(NamedNode, Term)>>,
    kinds: FxHashMap<NamedNode, FxHashSet<EntityKind>>,
}

impl OntologyParser {
    pub fn new(triples: impl IntoIterator<Item = Triple>) -> Self {
        Self::with_config(triples, ParserConfig::default())
    }

    pub fn with_config(triples: impl IntoIterator<Item = Triple>, config: ParserConfig) -> Self {
        let mut parser = Self {
            config,
            statements: Vec::new(),
            index: FxHashMap::default(),
            kinds: FxHashMap::default(),
        };
        let mut seen = FxHashSet::default();
        for triple in triples {
            let statement = (Term::from(triple.subject), triple.predicate, triple.object);
            if !seen.insert(statement.clone()) {
                continue;
            }
            let (subject, predicate, object) = &statement;
            parser
                .index
                .entry(subject.clone())
                .or_default()
                .push((predicate.clone(), object.clone()));
            if predicate.as_ref() == rdf::TYPE {
                if let (Term::NamedNode(subject), Term::NamedNode(class)) = (subject, object) {
                    if let Some(kind) = implied_kind(class.as_ref()) {
                        parser
                            .kinds
                            .entry(subject.clone())
                            .or_default()
                            .insert(kind);
                    }
                }
            }
            parser.statements.push(statement);
        }
        parser
    }

    /// Maps every triple to the ontology header, an axiom, or a part of one.
    pub fn parse(&self) -> Result<Ontology, OwlParseError> {
        let mut ontology = Ontology::new(None);
        let headers = self.subjects_of_type(owl::ONTOLOGY);
        for header in &headers {
            self.parse_header(header, &mut ontology)?;
        }
        let structural = self.structural_nodes()?;
        let reified = self.reified_annotations()?;

        for statement in &self.statements {
            let (subject, predicate, object) = statement;
            if headers.contains(subject)
                || structural.contains(subject)
                || is_expression_statement(subject, predicate, object)
            {
                continue;
            }
            let parsed = self.parse_statement(subject, predicate, object);
            if let Some(axiom) = self.tolerate(parsed)? {
                let annotations = reified.get(statement).cloned().unwrap_or_default();
                ontology.add_axiom(axiom.with_annotations(annotations));
            }
        }

        for (subject, predicate, object) in &self.statements {
            if predicate.as_ref() != rdf::TYPE || !matches!(subject, Term::BlankNode(_)) {
                continue;
            }
            if let Term::NamedNode(node_type) = object {
                let parsed = self.parse_axiom_node(subject, node_type.as_ref());
                if let Some(axiom) = self.tolerate(parsed)? {
                    ontology.add_axiom(axiom);
                }
            }
        }

        debug!(
            triples = self.statements.len(),
            axioms = ontology.len(),
            "parsed ontology"
        );
        Ok(ontology)
    }

    fn tolerate(
        &self,
        parsed: Result<Option<Axiom>, OwlParseError>,
    ) -> Result<Option<Axiom>, OwlParseError> {
        match parsed {
            Err(error) if self.config.lenient => {
                warn!("skipping triples that do not map to an axiom: {error}");
                Ok(None)
            }
            parsed => parsed,
        }
    }

    fn parse_header(&self, header: &Term, ontology: &mut Ontology) -> Result<(), OwlParseError> {
        if let Term::NamedNode(iri) = header {
            if ontology.iri().is_none() {
                ontology.set_iri(Some(iri.clone()));
            }
        }
        for (predicate, object) in self.properties(header) {
            let predicate_ref = predicate.as_ref();
            if predicate_ref == rdf::TYPE {
                continue;
            } else if predicate_ref == owl::VERSION_IRI {
                ontology.set_version_iri(Some(named(object)?));
            } else if predicate_ref == owl::IMPORTS {
                ontology.add_import(named(object)?);
            } else {
                ontology.add_annotation(Annotation::new(
                    predicate.clone(),
                    annotation_value(object)?,
                ));
            }
        }
        Ok(())
    }

    /// Blank nodes whose triples are all consumed by some other construct:
    /// list cells, facet restrictions and axiom nodes.
    fn structural_nodes(&self) -> Result<FxHashSet<Term>, OwlParseError> {
        let mut nodes = FxHashSet::default();
        for (subject, predicate, object) in &self.statements {
            if !matches!(subject, Term::BlankNode(_)) {
                continue;
            }
            let predicate = predicate.as_ref();
            if predicate == rdf::FIRST
                || (predicate == rdf::TYPE && owl::AXIOM_NODE_TYPES.iter().any(|t| is(object, *t)))
            {
                nodes.insert(subject.clone());
            } else if predicate == owl::WITH_RESTRICTIONS {
                nodes.extend(self.list(object)?.into_iter().cloned());
            }
        }
        Ok(nodes)
    }

    /// Annotations of reified triples, keyed by the triple they annotate.
    fn reified_annotations(&self) -> Result<FxHashMap<Statement, Vec<Annotation>>, OwlParseError> {
        let mut reified = FxHashMap::<Statement, Vec<Annotation>>::default();
        for node in self.subjects_of_type(owl::AXIOM) {
            let source = self.required(&node, owl::ANNOTATED_SOURCE)?;
            let property = named(self.required(&node, owl::ANNOTATED_PROPERTY)?)?;
            let target = self.required(&node, owl::ANNOTATED_TARGET)?;
            reified
                .entry((source.clone(), property, target.clone()))
                .or_default()
                .extend(self.node_annotations(&node)?);
        }
        Ok(reified)
    }

    fn node_annotations(&self, node: &Term) -> Result<Vec<Annotation>, OwlParseError> {
        self.properties(node)
            .iter()
            .filter(|(predicate, _)| {
                !AXIOM_NODE_PREDICATES
                    .iter()
                    .any(|p| *p == predicate.as_ref())
            })
            .map(|(predicate, object)| {
                Ok(Annotation::new(predicate.clone(), annotation_value(object)?))
            })
            .collect()
    }

    fn parse_statement(
        &self,
        subject: &Term,
        predicate: &NamedNode,
        object: &Term,
    ) -> Result<Option<Axiom>, OwlParseError> {
        let p = predicate.as_ref();
        let axiom = if p == rdf::TYPE {
            return self.parse_type(subject, object);
        } else if p == rdfs::SUB_CLASS_OF {
            Axiom::subclass_of(
                self.class_expression(subject, 0)?,
                self.class_expression(object, 0)?,
            )
        } else if p == owl::EQUIVALENT_CLASS {
            if self.is_data_range(subject) || self.is_data_range(object) {
                Axiom::datatype_definition(named(subject)?, self.data_range(object, 0)?)
            } else {
                Axiom::equivalent_classes([
                    self.class_expression(subject, 0)?,
                    self.class_expression(object, 0)?,
                ])
            }
        } else if p == owl::DISJOINT_WITH {
            Axiom::disjoint_classes([
                self.class_expression(subject, 0)?,
                self.class_expression(object, 0)?,
            ])
        } else if p == owl::DISJOINT_UNION_OF {
            Axiom::disjoint_union(named(subject)?, self.class_list(object, 0)?)
        } else if p == owl::HAS_KEY {
            self.has_key(subject, object)?
        } else if p == rdfs::SUB_PROPERTY_OF {
            self.sub_property_of(subject, object)?
        } else if p == owl::PROPERTY_CHAIN_AXIOM {
            Axiom::sub_property_chain_of(self.property_list(object)?, named(subject)?)
        } else if p == owl::EQUIVALENT_PROPERTY {
            if self.is_data_property(subject) || self.is_data_property(object) {
                Axiom::equivalent_data_properties([named(subject)?, named(object)?])
            } else {
                Axiom::equivalent_object_properties([
                    self.object_property(subject)?,
                    self.object_property(object)?,
                ])
            }
        } else if p == owl::PROPERTY_DISJOINT_WITH {
            if self.is_data_property(subject) || self.is_data_property(object) {
                Axiom::disjoint_data_properties([named(subject)?, named(object)?])
            } else {
                Axiom::disjoint_object_properties([
                    self.object_property(subject)?,
                    self.object_property(object)?,
                ])
            }
        } else if p == owl::INVERSE_OF {
            Axiom::inverse_object_properties(named(subject)?, named(object)?)
        } else if p == rdfs::DOMAIN {
            self.domain(subject, object)?
        } else if p == rdfs::RANGE {
            self.range(subject, object)?
        } else if p == owl::SAME_AS {
            Axiom::same_individual([individual(subject)?, individual(object)?])
        } else if p == owl::DIFFERENT_FROM {
            Axiom::different_individuals([individual(subject)?, individual(object)?])
        } else {
            self.assertion(subject, predicate, object)?
        };
        Ok(Some(axiom))
    }

    fn parse_type(&self, subject: &Term, class: &Term) -> Result<Option<Axiom>, OwlParseError> {
        let Term::NamedNode(class_iri) = class else {
            return Ok(Some(Axiom::class_assertion(
                self.class_expression(class, 0)?,
                individual(subject)?,
            )));
        };
        let class_ref = class_iri.as_ref();
        if let Some(kind) = declared_kind(class_ref) {
            return Ok(match subject {
                Term::NamedNode(iri) => Some(Axiom::declaration(kind.entity(iri.clone()))),
                _ => None,
            });
        }
        if class_ref == owl::FUNCTIONAL_PROPERTY && self.is_data_property(subject) {
            return Ok(Some(Axiom::functional_data_property(named(subject)?)));
        }
        if let Some(characteristic) = characteristic(class_ref) {
            return Ok(Some(Axiom::object_property_characteristic(
                characteristic,
                self.object_property(subject)?,
            )));
        }
        if class_ref != owl::THING && is_builtin(class_ref) {
            debug!("skipping {subject} typed with the built-in {class_iri}");
            return Ok(None);
        }
        Ok(Some(Axiom::class_assertion(
            class_iri.clone(),
            individual(subject)?,
        )))
    }

    fn parse_axiom_node(
        &self,
        node: &Term,
        node_type: NamedNodeRef<'_>,
    ) -> Result<Option<Axiom>, OwlParseError> {
        let axiom = if node_type == owl::ALL_DISJOINT_CLASSES {
            Axiom::disjoint_classes(self.class_list(self.required(node, owl::MEMBERS)?, 0)?)
        } else if node_type == owl::ALL_DIFFERENT {
            let members = self
                .object(node, owl::DISTINCT_MEMBERS)
                .or_else(|| self.object(node, owl::MEMBERS))
                .ok_or_else(|| OwlParseError::missing_property(node, "owl:distinctMembers"))?;
            Axiom::different_individuals(self.individual_list(members)?)
        } else if node_type == owl::ALL_DISJOINT_PROPERTIES {
            let members = self.list(self.required(node, owl::MEMBERS)?)?;
            if members.iter().any(|member| self.is_data_property(member)) {
                Axiom::disjoint_data_properties(
                    members.into_iter().map(named).collect::<Result<Vec<_>, _>>()?,
                )
            } else {
                Axiom::disjoint_object_properties(
                    members
                        .into_iter()
                        .map(|member| self.object_property(member))
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
        } else if node_type == owl::NEGATIVE_PROPERTY_ASSERTION {
            let source = individual(self.required(node, owl::SOURCE_INDIVIDUAL)?)?;
            let property = self.required(node, owl::ASSERTION_PROPERTY)?;
            if let Some(value) = self.object(node, owl::TARGET_VALUE) {
                Axiom::negative_data_property_assertion(named(property)?, source, literal(value)?)
            } else {
                let target = individual(self.required(node, owl::TARGET_INDIVIDUAL)?)?;
                Axiom::negative_object_property_assertion(
                    self.object_property(property)?,
                    source,
                    target,
                )
            }
        } else {
            return Ok(None);
        };
        Ok(Some(axiom.with_annotations(self.node_annotations(node)?)))
    }

    fn has_key(&self, class: &Term, key: &Term) -> Result<Axiom, OwlParseError> {
        let mut object_properties = Vec::new();
        let mut data_properties = Vec::new();
        for member in self.list(key)? {
            if self.is_data_property(member) {
                data_properties.push(named(member)?);
            } else {
                object_properties.push(self.object_property(member)?);
            }
        }
        Ok(Axiom::has_key(
            self.class_expression(class, 0)?,
            object_properties,
            data_properties,
        ))
    }

    fn sub_property_of(&self, sub: &Term, sup: &Term) -> Result<Axiom, OwlParseError> {
        Ok(
            match self.property_kind(sub).or_else(|| self.property_kind(sup)) {
                Some(EntityKind::DataProperty) => {
                    Axiom::sub_data_property_of(named(sub)?, named(sup)?)
                }
                Some(EntityKind::AnnotationProperty) => {
                    Axiom::sub_annotation_property_of(named(sub)?, named(sup)?)
                }
                _ => Axiom::sub_object_property_of(
                    self.object_property(sub)?,
                    self.object_property(sup)?,
                ),
            },
        )
    }

    fn domain(&self, property: &Term, domain: &Term) -> Result<Axiom, OwlParseError> {
        Ok(match self.property_kind(property) {
            Some(EntityKind::AnnotationProperty) => {
                Axiom::annotation_property_domain(named(property)?, named(domain)?)
            }
            Some(EntityKind::DataProperty) => {
                Axiom::data_property_domain(named(property)?, self.class_expression(domain, 0)?)
            }
            _ => Axiom::object_property_domain(
                self.object_property(property)?,
                self.class_expression(domain, 0)?,
            ),
        })
    }

    fn range(&self, property: &Term, range: &Term) -> Result<Axiom, OwlParseError> {
        Ok(match self.property_kind(property) {
            Some(EntityKind::AnnotationProperty) => {
                Axiom::annotation_property_range(named(property)?, named(range)?)
            }
            Some(EntityKind::ObjectProperty) => Axiom::object_property_range(
                self.object_property(property)?,
                self.class_expression(range, 0)?,
            ),
            Some(EntityKind::DataProperty) => {
                Axiom::data_property_range(named(property)?, self.data_range(range, 0)?)
            }
            _ if self.is_data_range(range) => {
                Axiom::data_property_range(named(property)?, self.data_range(range, 0)?)
            }
            _ => Axiom::object_property_range(
                self.object_property(property)?,
                self.class_expression(range, 0)?,
            ),
        })
    }

    /// Object and data property assertions, or an annotation assertion for
    /// any other predicate.
    fn assertion(
        &self,
        subject: &Term,
        property: &NamedNode,
        object: &Term,
    ) -> Result<Axiom, OwlParseError> {
        let declared = |kind| self.kinds.get(property).is_some_and(|k| k.contains(&kind));
        match object {
            Term::Literal(value) if declared(EntityKind::DataProperty) => {
                return Ok(Axiom::data_property_assertion(
                    property.clone(),
                    individual(subject)?,
                    value.clone(),
                ));
            }
            Term::NamedNode(_) | Term::BlankNode(_) if declared(EntityKind::ObjectProperty) => {
                return Ok(Axiom::object_property_assertion(
                    property.clone(),
                    individual(subject)?,
                    individual(object)?,
                ));
            }
            _ => {}
        }
        let subject = match subject {
            Term::NamedNode(iri) => AnnotationSubject::Iri(iri.clone()),
            Term::BlankNode(node) => AnnotationSubject::Anonymous(node.clone()),
            _ => {
                return Err(OwlParseError::invalid_value(format!(
                    "{subject} cannot be annotated"
                )));
            }
        };
        Ok(Axiom::annotation_assertion(
            subject,
            Annotation::new(property.clone(), annotation_value(object)?),
        ))
    }

    fn class_expression(&self, term: &Term, depth: usize) -> Result<ClassExpression, OwlParseError> {
        match term {
            Term::NamedNode(iri) => Ok(ClassExpression::Class(iri.clone())),
            Term::BlankNode(_) => {
                self.check_depth(term, depth)?;
                self.anonymous_class(term, depth + 1)
            }
            _ => Err(OwlParseError::invalid_value(format!(
                "{term} is not a class expression"
            ))),
        }
    }

    fn anonymous_class(&self, node: &Term, depth: usize) -> Result<ClassExpression, OwlParseError> {
        if self.has_type(node, owl::RESTRICTION) || self.object(node, owl::ON_PROPERTY).is_some() {
            return self.restriction(node, depth);
        }
        if let Some(list) = self.object(node, owl::INTERSECTION_OF) {
            return Ok(ClassExpression::ObjectIntersectionOf(
                self.class_list(list, depth)?,
            ));
        }
        if let Some(list) = self.object(node, owl::UNION_OF) {
            return Ok(ClassExpression::ObjectUnionOf(self.class_list(list, depth)?));
        }
        if let Some(complement) = self.object(node, owl::COMPLEMENT_OF) {
            return Ok(ClassExpression::ObjectComplementOf(Box::new(
                self.class_expression(complement, depth)?,
            )));
        }
        if let Some(list) = self.object(node, owl::ONE_OF) {
            return Ok(ClassExpression::ObjectOneOf(self.individual_list(list)?));
        }
        Err(OwlParseError::unknown_construct(format!(
            "{node} is not a known class expression"
        )))
    }

    fn restriction(&self, node: &Term, depth: usize) -> Result<ClassExpression, OwlParseError> {
        let property = self.required(node, owl::ON_PROPERTY)?;
        if self.is_data_restriction(node, property) {
            return self.data_restriction(node, named(property)?, depth);
        }
        let property = self.object_property(property)?;
        if let Some(filler) = self.object(node, owl::SOME_VALUES_FROM) {
            return Ok(ClassExpression::ObjectSomeValuesFrom {
                property,
                filler: Box::new(self.class_expression(filler, depth)?),
            });
        }
        if let Some(filler) = self.object(node, owl::ALL_VALUES_FROM) {
            return Ok(ClassExpression::ObjectAllValuesFrom {
                property,
                filler: Box::new(self.class_expression(filler, depth)?),
            });
        }
        if let Some(value) = self.object(node, owl::HAS_VALUE) {
            return Ok(ClassExpression::ObjectHasValue {
                property,
                individual: individual(value)?,
            });
        }
        if self.object(node, owl::HAS_SELF).is_some() {
            return Ok(ClassExpression::ObjectHasSelf(property));
        }
        let filler = self
            .object(node, owl::ON_CLASS)
            .map(|class| self.class_expression(class, depth).map(Box::new))
            .transpose()?;
        if let Some(cardinality) =
            self.cardinality(node, owl::MIN_QUALIFIED_CARDINALITY, owl::MIN_CARDINALITY)?
        {
            return Ok(ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) =
            self.cardinality(node, owl::MAX_QUALIFIED_CARDINALITY, owl::MAX_CARDINALITY)?
        {
            return Ok(ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) =
            self.cardinality(node, owl::QUALIFIED_CARDINALITY, owl::CARDINALITY)?
        {
            return Ok(ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            });
        }
        Err(OwlParseError::unknown_construct(format!(
            "{node} is not a known restriction"
        )))
    }

    fn is_data_restriction(&self, node: &Term, property: &Term) -> bool {
        match self.property_kind(property) {
            Some(EntityKind::DataProperty) => return true,
            Some(EntityKind::ObjectProperty) => return false,
            _ => {}
        }
        self.object(node, owl::ON_DATA_RANGE).is_some()
            || matches!(self.object(node, owl::HAS_VALUE), Some(Term::Literal(_)))
            || [owl::SOME_VALUES_FROM, owl::ALL_VALUES_FROM]
                .into_iter()
                .any(|p| self.object(node, p).is_some_and(|f| self.is_data_range(f)))
    }

    fn data_restriction(
        &self,
        node: &Term,
        property: NamedNode,
        depth: usize,
    ) -> Result<ClassExpression, OwlParseError> {
        if let Some(filler) = self.object(node, owl::SOME_VALUES_FROM) {
            return Ok(ClassExpression::DataSomeValuesFrom {
                property,
                filler: self.data_range(filler, depth)?,
            });
        }
        if let Some(filler) = self.object(node, owl::ALL_VALUES_FROM) {
            return Ok(ClassExpression::DataAllValuesFrom {
                property,
                filler: self.data_range(filler, depth)?,
            });
        }
        if let Some(value) = self.object(node, owl::HAS_VALUE) {
            return Ok(ClassExpression::DataHasValue {
                property,
                value: literal(value)?,
            });
        }
        let filler = self
            .object(node, owl::ON_DATA_RANGE)
            .map(|range| self.data_range(range, depth))
            .transpose()?;
        if let Some(cardinality) =
            self.cardinality(node, owl::MIN_QUALIFIED_CARDINALITY, owl::MIN_CARDINALITY)?
        {
            return Ok(ClassExpression::DataMinCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) =
            self.cardinality(node, owl::MAX_QUALIFIED_CARDINALITY, owl::MAX_CARDINALITY)?
        {
            return Ok(ClassExpression::DataMaxCardinality {
                cardinality,
                property,
                filler,
            });
        }
        if let Some(cardinality) =
            self.cardinality(node, owl::QUALIFIED_CARDINALITY, owl::CARDINALITY)?
        {
            return Ok(ClassExpression::DataExactCardinality {
                cardinality,
                property,
                filler,
            });
        }
        Err(OwlParseError::unknown_construct(format!(
            "{node} is not a known data restriction"
        )))
    }

    fn cardinality(
        &self,
        node: &Term,
        qualified: NamedNodeRef<'_>,
        unqualified: NamedNodeRef<'_>,
    ) -> Result<Option<u32>, OwlParseError> {
        self.object(node, qualified)
            .or_else(|| self.object(node, unqualified))
            .map(|value| {
                literal(value)?.value().parse::<u32>().map_err(|_| {
                    OwlParseError::invalid_value(format!("{value} is not a valid cardinality"))
                })
            })
            .transpose()
    }

    fn data_range(&self, term: &Term, depth: usize) -> Result<DataRange, OwlParseError> {
        match term {
            Term::NamedNode(iri) => Ok(DataRange::Datatype(iri.clone())),
            Term::BlankNode(_) => {
                self.check_depth(term, depth)?;
                self.anonymous_data_range(term, depth + 1)
            }
            _ => Err(OwlParseError::invalid_value(format!(
                "{term} is not a data range"
            ))),
        }
    }

    fn anonymous_data_range(&self, node: &Term, depth: usize) -> Result<DataRange, OwlParseError> {
        let ranges = |list: &Term| -> Result<Vec<DataRange>, OwlParseError> {
            self.list(list)?
                .into_iter()
                .map(|member| self.data_range(member, depth))
                .collect()
        };
        if let Some(list) = self.object(node, owl::INTERSECTION_OF) {
            return Ok(DataRange::DataIntersectionOf(ranges(list)?));
        }
        if let Some(list) = self.object(node, owl::UNION_OF) {
            return Ok(DataRange::DataUnionOf(ranges(list)?));
        }
        if let Some(complement) = self.object(node, owl::DATATYPE_COMPLEMENT_OF) {
            return Ok(DataRange::DataComplementOf(Box::new(
                self.data_range(complement, depth)?,
            )));
        }
        if let Some(list) = self.object(node, owl::ONE_OF) {
            return Ok(DataRange::DataOneOf(
                self.list(list)?
                    .into_iter()
                    .map(literal)
                    .collect::<Result<_, _>>()?,
            ));
        }
        if let Some(datatype) = self.object(node, owl::ON_DATATYPE) {
            let mut facets = Vec::new();
            for facet in self.list(self.required(node, owl::WITH_RESTRICTIONS)?)? {
                let [(constraint, value)] = self.properties(facet) else {
                    return Err(OwlParseError::invalid_value(format!(
                        "{facet} is not a facet restriction"
                    )));
                };
                facets.push((constraint.clone(), literal(value)?));
            }
            return Ok(DataRange::DatatypeRestriction {
                datatype: named(datatype)?,
                facets,
            });
        }
        Err(OwlParseError::unknown_construct(format!(
            "{node} is not a known data range"
        )))
    }

    fn object_property(&self, term: &Term) -> Result<ObjectPropertyExpression, OwlParseError> {
        match term {
            Term::NamedNode(iri) => Ok(ObjectPropertyExpression::ObjectProperty(iri.clone())),
            Term::BlankNode(_) => match self.object(term, owl::INVERSE_OF) {
                Some(Term::NamedNode(iri)) => Ok(ObjectPropertyExpression::ObjectInverseOf(iri.clone())),
                _ => Err(OwlParseError::invalid_value(format!(
                    "{term} is not an object property expression"
                ))),
            },
            _ => Err(OwlParseError::invalid_value(format!(
                "{term} is not an object property expression"
            ))),
        }
    }

    fn class_list(&self, head: &Term, depth: usize) -> Result<Vec<ClassExpression>, OwlParseError> {
        self.list(head)?
            .into_iter()
            .map(|member| self.class_expression(member, depth))
            .collect()
    }

    fn individual_list(&self, head: &Term) -> Result<Vec<Individual>, OwlParseError> {
        self.list(head)?.into_iter().map(individual).collect()
    }

    fn property_list(&self, head: &Term) -> Result<Vec<ObjectPropertyExpression>, OwlParseError> {
        self.list(head)?
            .into_iter()
            .map(|member| self.object_property(member))
            .collect()
    }

    /// Members of the RDF list starting at `head`.
    fn list<'a>(&'a self, head: &'a Term) -> Result<Vec<&'a Term>, OwlParseError> {
        let mut members = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = head;
        while !is(current, rdf::NIL) {
            if members.len() >= self.config.max_list_length {
                return Err(OwlParseError::malformed_list(format!(
                    "list {head} has more than {} members",
                    self.config.max_list_length
                )));
            }
            if !visited.insert(current) {
                return Err(OwlParseError::malformed_list(format!("list {head} is cyclic")));
            }
            members.push(self.object(current, rdf::FIRST).ok_or_else(|| {
                OwlParseError::malformed_list(format!("{current} has no rdf:first"))
            })?);
            current = self.object(current, rdf::REST).ok_or_else(|| {
                OwlParseError::malformed_list(format!("{current} has no rdf:rest"))
            })?;
        }
        Ok(members)
    }

    fn check_depth(&self, term: &Term, depth: usize) -> Result<(), OwlParseError> {
        if depth >= self.config.max_depth {
            return Err(OwlParseError::invalid_value(format!(
                "{term} is nested more than {} levels deep",
                self.config.max_depth
            )));
        }
        Ok(())
    }

    fn properties(&self, subject: &Term) -> &[(NamedNode, Term)] {
        self.index.get(subject).map_or(&[], Vec::as_slice)
    }

    fn object(&self, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<&Term> {
        self.properties(subject)
            .iter()
            .find(|(p, _)| p.as_ref() == predicate)
            .map(|(_, o)| o)
    }

    fn required(&self, subject: &Term, predicate: NamedNodeRef<'_>) -> Result<&Term, OwlParseError> {
        self.object(subject, predicate)
            .ok_or_else(|| OwlParseError::missing_property(subject, predicate.as_str()))
    }

    fn has_type(&self, subject: &Term, class: NamedNodeRef<'_>) -> bool {
        self.properties(subject)
            .iter()
            .any(|(p, o)| p.as_ref() == rdf::TYPE && is(o, class))
    }

    fn subjects_of_type(&self, class: NamedNodeRef<'_>) -> Vec<Term> {
        self.statements
            .iter()
            .filter(|(_, p, o)| p.as_ref() == rdf::TYPE && is(o, class))
            .map(|(s, _, _)| s.clone())
            .collect()
    }

    /// The declared kind of a property, data properties first.
    fn property_kind(&self, term: &Term) -> Option<EntityKind> {
        let Term::NamedNode(iri) = term else {
            return None;
        };
        let kinds = self.kinds.get(iri)?;
        [
            EntityKind::DataProperty,
            EntityKind::ObjectProperty,
            EntityKind::AnnotationProperty,
        ]
        .into_iter()
        .find(|kind| kinds.contains(kind))
    }

    fn is_data_property(&self, term: &Term) -> bool {
        self.property_kind(term) == Some(EntityKind::DataProperty)
    }

    fn is_data_range(&self, term: &Term) -> bool {
        match term {
            Term::NamedNode(iri) => {
                iri.as_str().starts_with(owl::XSD_NAMESPACE)
                    || BUILTIN_DATATYPES.contains(&iri.as_str())
                    || self
                        .kinds
                        .get(iri)
                        .is_some_and(|kinds| kinds.contains(&EntityKind::Datatype))
            }
            Term::BlankNode(_) => {
                self.has_type(term, rdfs::DATATYPE)
                    || self.object(term, owl::DATATYPE_COMPLEMENT_OF).is_some()
                    || self.object(term, owl::ON_DATATYPE).is_some()
            }
            _ => false,
        }
    }
}

/// Parses an ontology from RDF triples.
pub fn parse_ontology(triples: impl IntoIterator<Item = Triple>) -> Result<Ontology, OwlParseError> {
    OntologyParser::new(triples).parse()
}

/// Parses an ontology from RDF triples with a custom configuration.
pub fn parse_ontology_with_config(
    triples: impl IntoIterator<Item = Triple>,
    config: ParserConfig,
) -> Result<Ontology, OwlParseError> {
    OntologyParser::with_config(triples, config).parse()
}

/// Triples that only describe the inside of an anonymous expression.
fn is_expression_statement(subject: &Term, predicate: &NamedNode, object: &Term) -> bool {
    if !matches!(subject, Term::BlankNode(_)) {
        return false;
    }
    let predicate = predicate.as_ref();
    owl::EXPRESSION_PREDICATES.iter().any(|p| *p == predicate)
        || (predicate == rdf::TYPE
            && [owl::CLASS, owl::RESTRICTION, rdfs::DATATYPE]
                .into_iter()
                .any(|t| is(object, t)))
}

fn declared_kind(class: NamedNodeRef<'_>) -> Option<EntityKind> {
    Some(if class == owl::CLASS {
        EntityKind::Class
    } else if class == owl::OBJECT_PROPERTY {
        EntityKind::ObjectProperty
    } else if class == owl::DATATYPE_PROPERTY {
        EntityKind::DataProperty
    } else if class == owl::ANNOTATION_PROPERTY {
        EntityKind::AnnotationProperty
    } else if class == owl::NAMED_INDIVIDUAL {
        EntityKind::NamedIndividual
    } else if class == rdfs::DATATYPE {
        EntityKind::Datatype
    } else {
        return None;
    })
}

/// The kind a type implies: the declared kind, or object property for the
/// characteristics only object properties can have.
fn implied_kind(class: NamedNodeRef<'_>) -> Option<EntityKind> {
    declared_kind(class).or_else(|| {
        characteristic(class)
            .filter(|c| *c != PropertyCharacteristic::Functional)
            .map(|_| EntityKind::ObjectProperty)
    })
}

fn characteristic(class: NamedNodeRef<'_>) -> Option<PropertyCharacteristic> {
    Some(if class == owl::FUNCTIONAL_PROPERTY {
        PropertyCharacteristic::Functional
    } else if class == owl::INVERSE_FUNCTIONAL_PROPERTY {
        PropertyCharacteristic::InverseFunctional
    } else if class == owl::REFLEXIVE_PROPERTY {
        PropertyCharacteristic::Reflexive
    } else if class == owl::IRREFLEXIVE_PROPERTY {
        PropertyCharacteristic::Irreflexive
    } else if class == owl::SYMMETRIC_PROPERTY {
        PropertyCharacteristic::Symmetric
    } else if class == owl::ASYMMETRIC_PROPERTY {
        PropertyCharacteristic::Asymmetric
    } else if class == owl::TRANSITIVE_PROPERTY {
        PropertyCharacteristic::Transitive
    } else {
        return None;
    })
}

fn is_builtin(iri: NamedNodeRef<'_>) -> bool {
    [
        owl::OWL_NAMESPACE,
        owl::RDF_NAMESPACE,
        owl::RDFS_NAMESPACE,
        owl::XSD_NAMESPACE,
    ]
    .into_iter()
    .any(|namespace| iri.as_str().starts_with(namespace))
}

fn is(term: &Term, node: NamedNodeRef<'_>) -> bool {
    matches!(term, Term::NamedNode(n) if n.as_ref() == node)
}

fn named(term: &Term) -> Result<NamedNode, OwlParseError> {
    match term {
        Term::NamedNode(iri) => Ok(iri.clone()),
        _ => Err(OwlParseError::invalid_value(format!("{term} is not an IRI"))),
    }
}

fn individual(term: &Term) -> Result<Individual, OwlParseError> {
    match term {
        Term::NamedNode(iri) => Ok(Individual::Named(iri.clone())),
        Term::BlankNode(node) => Ok(Individual::Anonymous(node.clone())),
        _ => Err(OwlParseError::invalid_value(format!(
            "{term} is not an individual"
        ))),
    }
}

fn literal(term: &Term) -> Result<Literal, OwlParseError> {
    match term {
        Term::Literal(value) => Ok(value.clone()),
        _ => Err(OwlParseError::invalid_value(format!("{term} is not a literal"))),
    }
}

fn annotation_value(term: &Term) -> Result<AnnotationValue, OwlParseError> {
    match term {
        Term::NamedNode(iri) => Ok(AnnotationValue::Iri(iri.clone())),
        Term::BlankNode(node) => Ok(AnnotationValue::Anonymous(node.clone())),
        Term::Literal(value) => Ok(AnnotationValue::Literal(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom_type::AxiomType;
    use crate::entity::Entity;
    use crate::error::ParseErrorKind;
    use crate::store::OntologyStore;
    use oxrdfio::{RdfFormat, RdfParser};

    const PREFIXES: &str = "
        @prefix : <http://example.org/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
    ";

    fn triples(turtle: &str) -> Vec<Triple> {
        RdfParser::from_format(RdfFormat::Turtle)
            .for_reader(format!("{PREFIXES}{turtle}").as_bytes())
            .map(|quad| {
                let quad = quad.unwrap();
                Triple::new(quad.subject, quad.predicate, quad.object)
            })
            .collect()
    }

    fn parse(turtle: &str) -> Ontology {
        parse_ontology(triples(turtle)).unwrap()
    }

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{local}"))
    }

    #[test]
    fn test_header() {
        let ontology = parse(
            ":onto a owl:Ontology ; owl:versionIRI :onto-1 ; owl:imports :other ;
                rdfs:comment \"test\" .",
        );
        assert_eq!(ontology.iri(), Some(&iri("onto")));
        assert_eq!(ontology.version_iri(), Some(&iri("onto-1")));
        assert_eq!(ontology.imports(), &[iri("other")]);
        assert_eq!(ontology.annotations().len(), 1);
        assert!(ontology.is_empty());
    }

    #[test]
    fn test_declarations_and_class_axioms() {
        let ontology = parse(
            ":A a owl:Class ; rdfs:subClassOf :B .
             :B owl:equivalentClass :C ; owl:disjointWith :D .
             :p a owl:ObjectProperty .",
        );
        assert!(ontology.contains_axiom(&Axiom::declaration(Entity::Class(iri("A")))));
        assert!(ontology.contains_axiom(&Axiom::declaration(Entity::ObjectProperty(iri("p")))));
        assert!(ontology.contains_axiom(&Axiom::subclass_of(iri("A"), iri("B"))));
        assert!(ontology.contains_axiom(&Axiom::equivalent_classes([
            ClassExpression::class(iri("B")),
            ClassExpression::class(iri("C")),
        ])));
        assert_eq!(ontology.axioms_of_type(AxiomType::DisjointClasses).count(), 1);
        assert_eq!(ontology.len(), 5);
    }

    #[test]
    fn test_restriction() {
        let ontology = parse(
            ":p a owl:ObjectProperty .
             :A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :p ; owl:someValuesFrom :B ] .",
        );
        assert!(ontology.contains_axiom(&Axiom::subclass_of(
            iri("A"),
            ClassExpression::some_values_from(iri("p"), ClassExpression::class(iri("B"))),
        )));
        assert_eq!(ontology.len(), 2);
    }

    #[test]
    fn test_data_restriction_and_cardinality() {
        let ontology = parse(
            ":age a owl:DatatypeProperty .
             :A rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :age ; owl:someValuesFrom xsd:integer ] ,
                 [ a owl:Restriction ; owl:onProperty :q ; owl:minQualifiedCardinality \"2\"^^xsd:nonNegativeInteger ; owl:onClass :B ] .",
        );
        assert!(ontology.contains_axiom(&Axiom::subclass_of(
            iri("A"),
            ClassExpression::DataSomeValuesFrom {
                property: iri("age"),
                filler: DataRange::Datatype(xsd_integer()),
            },
        )));
        assert!(ontology.contains_axiom(&Axiom::subclass_of(
            iri("A"),
            ClassExpression::ObjectMinCardinality {
                cardinality: 2,
                property: ObjectPropertyExpression::ObjectProperty(iri("q")),
                filler: Some(Box::new(ClassExpression::class(iri("B")))),
            },
        )));
    }

    fn xsd_integer() -> NamedNode {
        NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#integer")
    }

    #[test]
    fn test_boolean_class_expressions() {
        let ontology = parse(
            ":A owl:equivalentClass [ a owl:Class ; owl:intersectionOf ( :B [ owl:complementOf :C ] ) ] .",
        );
        assert!(ontology.contains_axiom(&Axiom::equivalent_classes([
            ClassExpression::class(iri("A")),
            ClassExpression::ObjectIntersectionOf(vec![
                ClassExpression::class(iri("B")),
                ClassExpression::complement(ClassExpression::class(iri("C"))),
            ]),
        ])));
        assert_eq!(ontology.len(), 1);
    }

    #[test]
    fn test_assertions_by_declared_kind() {
        let ontology = parse(
            ":knows a owl:ObjectProperty .
             :age a owl:DatatypeProperty .
             :rex a :Dog ; :knows :fido ; :age 3 ; rdfs:label \"Rex\" ; owl:sameAs :rex2 .",
        );
        assert!(ontology.contains_axiom(&Axiom::class_assertion(iri("Dog"), iri("rex"))));
        assert_eq!(
            ontology.axioms_of_type(AxiomType::ObjectPropertyAssertion).count(),
            1
        );
        assert_eq!(ontology.axioms_of_type(AxiomType::DataPropertyAssertion).count(), 1);
        assert_eq!(ontology.axioms_of_type(AxiomType::AnnotationAssertion).count(), 1);
        assert_eq!(ontology.axioms_of_type(AxiomType::SameIndividual).count(), 1);
    }

    #[test]
    fn test_property_axioms() {
        let ontology = parse(
            ":p a owl:ObjectProperty , owl:TransitiveProperty ; rdfs:subPropertyOf :q ;
                 rdfs:domain :A ; rdfs:range :B ; owl:inverseOf :r ;
                 owl:propertyChainAxiom ( :s :t ) .
             :d a owl:DatatypeProperty , owl:FunctionalProperty ; rdfs:range xsd:string .
             :note a owl:AnnotationProperty ; rdfs:range xsd:string .",
        );
        for axiom_type in [
            AxiomType::TransitiveObjectProperty,
            AxiomType::SubObjectPropertyOf,
            AxiomType::ObjectPropertyDomain,
            AxiomType::ObjectPropertyRange,
            AxiomType::InverseObjectProperties,
            AxiomType::SubPropertyChainOf,
            AxiomType::FunctionalDataProperty,
            AxiomType::DataPropertyRange,
            AxiomType::AnnotationPropertyRangeOf,
        ] {
            assert_eq!(ontology.axioms_of_type(axiom_type).count(), 1, "{axiom_type}");
        }
    }

    #[test]
    fn test_reified_annotations() {
        let ontology = parse(
            ":A rdfs:subClassOf :B .
             [] a owl:Axiom ; owl:annotatedSource :A ; owl:annotatedProperty rdfs:subClassOf ;
                owl:annotatedTarget :B ; rdfs:comment \"why\" .",
        );
        assert_eq!(ontology.len(), 1);
        assert_eq!(ontology.axioms()[0].annotations().len(), 1);
    }

    #[test]
    fn test_axiom_nodes() {
        let ontology = parse(
            "[] a owl:AllDisjointClasses ; owl:members ( :A :B :C ) ; rdfs:comment \"n-ary\" .
             [] a owl:NegativePropertyAssertion ; owl:sourceIndividual :a ;
                owl:assertionProperty :p ; owl:targetIndividual :b .",
        );
        assert_eq!(ontology.len(), 2);
        let disjoint = ontology
            .axioms_of_type(AxiomType::DisjointClasses)
            .next()
            .unwrap();
        assert_eq!(disjoint.operands().len(), 3);
        assert_eq!(disjoint.annotations().len(), 1);
        assert_eq!(
            ontology
                .axioms_of_type(AxiomType::NegativeObjectPropertyAssertion)
                .count(),
            1
        );
    }

    #[test]
    fn test_anonymous_individual_annotation() {
        let ontology = parse("[ rdfs:label \"nobody\" ] .");
        assert_eq!(ontology.len(), 1);
        assert!(ontology.entities().iter().any(Entity::is_anonymous));
    }

    #[test]
    fn test_malformed_list() {
        let error = parse_ontology(triples(":A owl:disjointUnionOf [ rdf:first :B ] .")).unwrap_err();
        assert_eq!(error.kind(), ParseErrorKind::MalformedList);
    }

    #[test]
    fn test_list_length_limit() {
        let config = ParserConfig {
            max_list_length: 2,
            ..ParserConfig::default()
        };
        let error =
            parse_ontology_with_config(triples(":A owl:disjointUnionOf ( :B :C :D ) ."), config)
                .unwrap_err();
        assert_eq!(error.kind(), ParseErrorKind::MalformedList);
    }

    #[test]
    fn test_lenient_skips_unmappable_triples() {
        let turtle = ":A rdfs:subClassOf [ owl:onProperty :p ] . :A rdfs:subClassOf :B .";
        let error = parse_ontology(triples(turtle)).unwrap_err();
        assert_eq!(error.kind(), ParseErrorKind::UnknownConstruct);
        let ontology =
            parse_ontology_with_config(triples(turtle), ParserConfig::default().lenient()).unwrap();
        assert_eq!(ontology.len(), 1);
    }
}
