//! Writes an ontology back to RDF triples.

use super::vocab as owl;
use crate::annotation::{Annotation, AnnotationValue};
use crate::axiom::{Axiom, Operand, PropertyCharacteristic};
use crate::axiom_type::AxiomType;
use crate::entity::{Entity, EntityKind};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::ontology::Ontology;
use crate::store::OntologyStore;
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, Term, Triple};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Maps `ontology` to RDF triples.
///
/// The output is deterministic: axioms are written in insertion order and
/// fresh blank nodes are labeled `b0`, `b1`, ... skipping the labels the
/// ontology already uses. Entity records that no axiom mentions are written
/// as declarations so they survive a round trip.
pub fn serialize_ontology(ontology: &Ontology) -> Vec<Triple> {
    let mut serializer = OntologySerializer::new(ontology);
    serializer.header(ontology);
    for axiom in ontology.axioms() {
        serializer.axiom(axiom);
    }
    serializer.dangling_entities(ontology);
    debug!(
        axioms = ontology.len(),
        triples = serializer.triples.len(),
        "serialized ontology"
    );
    serializer.triples
}

struct OntologySerializer {
    triples: Vec<Triple>,
    reserved: FxHashSet<String>,
    next_label: usize,
}

impl OntologySerializer {
    fn new(ontology: &Ontology) -> Self {
        let mut reserved = FxHashSet::default();
        let mut reserve = |value: &AnnotationValue| {
            if let AnnotationValue::Anonymous(node) = value {
                reserved.insert(node.as_str().to_owned());
            }
        };
        for annotation in ontology.annotations() {
            reserve(annotation.value());
        }
        for axiom in ontology.axioms() {
            for annotation in axiom.annotations() {
                reserve(annotation.value());
            }
        }
        for entity in ontology.entity_records() {
            if let Entity::AnonymousIndividual(node) = entity {
                reserved.insert(node.as_str().to_owned());
            }
        }
        Self {
            triples: Vec::new(),
            reserved,
            next_label: 0,
        }
    }

    fn fresh(&mut self) -> Term {
        loop {
            let label = format!("b{}", self.next_label);
            self.next_label += 1;
            if !self.reserved.contains(&label) {
                return BlankNode::new_unchecked(label).into();
            }
        }
    }

    fn push(&mut self, subject: &Term, predicate: NamedNodeRef<'_>, object: impl Into<Term>) {
        let object = object.into();
        match subject {
            Term::NamedNode(node) => {
                self.triples
                    .push(Triple::new(node.clone(), predicate, object));
            }
            Term::BlankNode(node) => {
                self.triples
                    .push(Triple::new(node.clone(), predicate, object));
            }
            _ => debug!("skipping a triple with subject {subject}"),
        }
    }

    fn header(&mut self, ontology: &Ontology) {
        let subject = match ontology.iri() {
            Some(iri) => Term::from(iri.clone()),
            None if ontology.version_iri().is_some()
                || !ontology.imports().is_empty()
                || !ontology.annotations().is_empty() =>
            {
                self.fresh()
            }
            None => return,
        };
        self.push(&subject, rdf::TYPE, owl::ONTOLOGY.into_owned());
        if let Some(version_iri) = ontology.version_iri() {
            self.push(&subject, owl::VERSION_IRI, version_iri.clone());
        }
        for import in ontology.imports() {
            self.push(&subject, owl::IMPORTS, import.clone());
        }
        self.annotate(&subject, ontology.annotations());
    }

    fn dangling_entities(&mut self, ontology: &Ontology) {
        let mentioned = ontology
            .axioms()
            .iter()
            .flat_map(Axiom::signature)
            .collect::<FxHashSet<_>>();
        let mut dangling = ontology
            .entity_records()
            .filter(|entity| !mentioned.contains(*entity))
            .filter_map(|entity| Some((entity.iri()?, entity.kind()?)))
            .collect::<Vec<_>>();
        dangling.sort_by(|(a, a_kind), (b, b_kind)| {
            (a.as_str(), declaration_type(*a_kind).as_str())
                .cmp(&(b.as_str(), declaration_type(*b_kind).as_str()))
        });
        for (iri, kind) in dangling {
            self.push(
                &Term::from(iri.clone()),
                rdf::TYPE,
                declaration_type(kind).into_owned(),
            );
        }
    }

    fn axiom(&mut self, axiom: &Axiom) {
        let annotations = axiom.annotations();
        match (axiom.axiom_type(), axiom.operands()) {
            (AxiomType::Declaration, [Operand::Entity(entity)]) => {
                if let (Some(iri), Some(kind)) = (entity.iri(), entity.kind()) {
                    self.statement(
                        iri.clone().into(),
                        rdf::TYPE,
                        declaration_type(kind).into_owned().into(),
                        annotations,
                    );
                }
                return;
            }
            (
                AxiomType::ObjectPropertyAssertion,
                [Operand::InverseProperty(property), source, target],
            ) => {
                let source = self.operand(source);
                let target = self.operand(target);
                self.statement(target, property.as_ref(), source, annotations);
                return;
            }
            _ => {}
        }

        let terms = axiom
            .operands()
            .iter()
            .map(|operand| self.operand(operand))
            .collect::<Vec<_>>();
        match axiom.axiom_type() {
            AxiomType::Declaration => {}
            AxiomType::SubClassOf => self.binary(rdfs::SUB_CLASS_OF, &terms, annotations),
            AxiomType::EquivalentClasses => {
                self.pairwise(owl::EQUIVALENT_CLASS, &terms, annotations)
            }
            AxiomType::DisjointClasses => self.nary(
                owl::DISJOINT_WITH,
                owl::ALL_DISJOINT_CLASSES,
                owl::MEMBERS,
                terms,
                annotations,
            ),
            AxiomType::DisjointUnion => {
                self.head_list(owl::DISJOINT_UNION_OF, &terms, annotations)
            }
            AxiomType::HasKey => self.head_list(owl::HAS_KEY, &terms, annotations),
            AxiomType::SubObjectPropertyOf
            | AxiomType::SubDataPropertyOf
            | AxiomType::SubAnnotationPropertyOf => {
                self.binary(rdfs::SUB_PROPERTY_OF, &terms, annotations)
            }
            AxiomType::SubPropertyChainOf => {
                if let Some((sup, chain)) = terms.split_last() {
                    let list = self.list(chain.to_vec());
                    self.statement(sup.clone(), owl::PROPERTY_CHAIN_AXIOM, list, annotations);
                }
            }
            AxiomType::EquivalentObjectProperties | AxiomType::EquivalentDataProperties => {
                self.pairwise(owl::EQUIVALENT_PROPERTY, &terms, annotations)
            }
            AxiomType::DisjointObjectProperties | AxiomType::DisjointDataProperties => self.nary(
                owl::PROPERTY_DISJOINT_WITH,
                owl::ALL_DISJOINT_PROPERTIES,
                owl::MEMBERS,
                terms,
                annotations,
            ),
            AxiomType::InverseObjectProperties => {
                self.binary(owl::INVERSE_OF, &terms, annotations)
            }
            AxiomType::ObjectPropertyDomain
            | AxiomType::DataPropertyDomain
            | AxiomType::AnnotationPropertyDomain => {
                self.binary(rdfs::DOMAIN, &terms, annotations)
            }
            AxiomType::ObjectPropertyRange
            | AxiomType::DataPropertyRange
            | AxiomType::AnnotationPropertyRangeOf => {
                self.binary(rdfs::RANGE, &terms, annotations)
            }
            AxiomType::FunctionalObjectProperty
            | AxiomType::InverseFunctionalObjectProperty
            | AxiomType::ReflexiveObjectProperty
            | AxiomType::IrreflexiveObjectProperty
            | AxiomType::SymmetricObjectProperty
            | AxiomType::AsymmetricObjectProperty
            | AxiomType::TransitiveObjectProperty
            | AxiomType::FunctionalDataProperty => {
                if let [property] = terms.as_slice() {
                    self.statement(
                        property.clone(),
                        rdf::TYPE,
                        characteristic_type(axiom.axiom_type()).into_owned().into(),
                        annotations,
                    );
                }
            }
            AxiomType::DatatypeDefinition => {
                self.binary(owl::EQUIVALENT_CLASS, &terms, annotations)
            }
            AxiomType::ClassAssertion => {
                if let [class, individual] = terms.as_slice() {
                    self.statement(individual.clone(), rdf::TYPE, class.clone(), annotations);
                }
            }
            AxiomType::ObjectPropertyAssertion
            | AxiomType::DataPropertyAssertion
            | AxiomType::AnnotationAssertion => {
                if let [Term::NamedNode(property), subject, object] = terms.as_slice() {
                    self.statement(subject.clone(), property.as_ref(), object.clone(), annotations);
                }
            }
            AxiomType::NegativeObjectPropertyAssertion
            | AxiomType::NegativeDataPropertyAssertion => {
                if let [property, source, target] = terms.as_slice() {
                    let target_predicate =
                        if axiom.axiom_type() == AxiomType::NegativeDataPropertyAssertion {
                            owl::TARGET_VALUE
                        } else {
                            owl::TARGET_INDIVIDUAL
                        };
                    self.axiom_node(
                        owl::NEGATIVE_PROPERTY_ASSERTION,
                        vec![
                            (owl::SOURCE_INDIVIDUAL, source.clone()),
                            (owl::ASSERTION_PROPERTY, property.clone()),
                            (target_predicate, target.clone()),
                        ],
                        annotations,
                    );
                }
            }
            AxiomType::SameIndividual => self.pairwise(owl::SAME_AS, &terms, annotations),
            AxiomType::DifferentIndividuals => self.nary(
                owl::DIFFERENT_FROM,
                owl::ALL_DIFFERENT,
                owl::DISTINCT_MEMBERS,
                terms,
                annotations,
            ),
        }
    }

    /// Writes one triple, reified through an `owl:Axiom` node if annotated.
    fn statement(
        &mut self,
        subject: Term,
        predicate: NamedNodeRef<'_>,
        object: Term,
        annotations: &[Annotation],
    ) {
        self.push(&subject, predicate, object.clone());
        if annotations.is_empty() {
            return;
        }
        let node = self.fresh();
        self.push(&node, rdf::TYPE, owl::AXIOM.into_owned());
        self.push(&node, owl::ANNOTATED_SOURCE, subject);
        self.push(&node, owl::ANNOTATED_PROPERTY, predicate.into_owned());
        self.push(&node, owl::ANNOTATED_TARGET, object);
        self.annotate(&node, annotations);
    }

    fn binary(&mut self, predicate: NamedNodeRef<'_>, terms: &[Term], annotations: &[Annotation]) {
        if let [subject, object] = terms {
            self.statement(subject.clone(), predicate, object.clone(), annotations);
        }
    }

    /// Chains the members two by two: `a p b`, `b p c`, ...
    fn pairwise(&mut self, predicate: NamedNodeRef<'_>, terms: &[Term], annotations: &[Annotation]) {
        for pair in terms.windows(2) {
            self.statement(pair[0].clone(), predicate, pair[1].clone(), annotations);
        }
    }

    /// A single triple for two members, an axiom node over a list otherwise.
    fn nary(
        &mut self,
        predicate: NamedNodeRef<'_>,
        node_type: NamedNodeRef<'_>,
        members_predicate: NamedNodeRef<'_>,
        terms: Vec<Term>,
        annotations: &[Annotation],
    ) {
        if terms.len() == 2 {
            self.binary(predicate, &terms, annotations);
        } else {
            let list = self.list(terms);
            self.axiom_node(node_type, vec![(members_predicate, list)], annotations);
        }
    }

    /// The first member as subject, the others as an RDF list.
    fn head_list(&mut self, predicate: NamedNodeRef<'_>, terms: &[Term], annotations: &[Annotation]) {
        if let Some((head, rest)) = terms.split_first() {
            let list = self.list(rest.to_vec());
            self.statement(head.clone(), predicate, list, annotations);
        }
    }

    fn axiom_node(
        &mut self,
        node_type: NamedNodeRef<'_>,
        properties: Vec<(NamedNodeRef<'_>, Term)>,
        annotations: &[Annotation],
    ) {
        let node = self.fresh();
        self.push(&node, rdf::TYPE, node_type.into_owned());
        for (predicate, object) in properties {
            self.push(&node, predicate, object);
        }
        self.annotate(&node, annotations);
    }

    fn annotate(&mut self, subject: &Term, annotations: &[Annotation]) {
        for annotation in annotations {
            self.push(
                subject,
                annotation.property().as_ref(),
                value_term(annotation.value()),
            );
        }
    }

    fn list(&mut self, members: Vec<Term>) -> Term {
        let cells = members.iter().map(|_| self.fresh()).collect::<Vec<_>>();
        for (i, member) in members.into_iter().enumerate() {
            let rest = cells
                .get(i + 1)
                .cloned()
                .unwrap_or_else(|| rdf::NIL.into_owned().into());
            self.push(&cells[i], rdf::FIRST, member);
            self.push(&cells[i], rdf::REST, rest);
        }
        cells
            .into_iter()
            .next()
            .unwrap_or_else(|| rdf::NIL.into_owned().into())
    }

    fn operand(&mut self, operand: &Operand) -> Term {
        match operand {
            Operand::Entity(Entity::AnonymousIndividual(node)) => node.clone().into(),
            Operand::Entity(
                Entity::Class(iri)
                | Entity::ObjectProperty(iri)
                | Entity::DataProperty(iri)
                | Entity::AnnotationProperty(iri)
                | Entity::NamedIndividual(iri)
                | Entity::Datatype(iri),
            )
            | Operand::Iri(iri) => iri.clone().into(),
            Operand::Expression(expression) => self.class_expression(expression),
            Operand::InverseProperty(property) => self.inverse(property),
            Operand::DataRange(range) => self.data_range(range),
            Operand::Literal(literal) => literal.clone().into(),
        }
    }

    fn inverse(&mut self, property: &NamedNode) -> Term {
        let node = self.fresh();
        self.push(&node, owl::INVERSE_OF, property.clone());
        node
    }

    fn object_property(&mut self, property: &ObjectPropertyExpression) -> Term {
        match property {
            ObjectPropertyExpression::ObjectProperty(iri) => iri.clone().into(),
            ObjectPropertyExpression::ObjectInverseOf(iri) => self.inverse(iri),
        }
    }

    fn class_expression(&mut self, expression: &ClassExpression) -> Term {
        match expression {
            ClassExpression::Class(iri) => iri.clone().into(),
            ClassExpression::ObjectIntersectionOf(operands) => {
                let members = operands.iter().map(|c| self.class_expression(c)).collect();
                self.class_node(owl::INTERSECTION_OF, members)
            }
            ClassExpression::ObjectUnionOf(operands) => {
                let members = operands.iter().map(|c| self.class_expression(c)).collect();
                self.class_node(owl::UNION_OF, members)
            }
            ClassExpression::ObjectComplementOf(operand) => {
                let complement = self.class_expression(operand);
                let node = self.fresh();
                self.push(&node, rdf::TYPE, owl::CLASS.into_owned());
                self.push(&node, owl::COMPLEMENT_OF, complement);
                node
            }
            ClassExpression::ObjectOneOf(individuals) => {
                let members = individuals.iter().cloned().map(Term::from).collect();
                self.class_node(owl::ONE_OF, members)
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let property = self.object_property(property);
                let filler = self.class_expression(filler);
                self.restriction(property, vec![(owl::SOME_VALUES_FROM, filler)])
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                let property = self.object_property(property);
                let filler = self.class_expression(filler);
                self.restriction(property, vec![(owl::ALL_VALUES_FROM, filler)])
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                let property = self.object_property(property);
                self.restriction(
                    property,
                    vec![(owl::HAS_VALUE, individual.clone().into())],
                )
            }
            ClassExpression::ObjectHasSelf(property) => {
                let property = self.object_property(property);
                self.restriction(property, vec![(owl::HAS_SELF, Literal::from(true).into())])
            }
            ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => {
                let property = self.object_property(property);
                let filler = filler.as_deref().map(|c| self.class_expression(c));
                self.cardinality(
                    property,
                    *cardinality,
                    filler.map(|c| (owl::ON_CLASS, c)),
                    owl::MIN_QUALIFIED_CARDINALITY,
                    owl::MIN_CARDINALITY,
                )
            }
            ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => {
                let property = self.object_property(property);
                let filler = filler.as_deref().map(|c| self.class_expression(c));
                self.cardinality(
                    property,
                    *cardinality,
                    filler.map(|c| (owl::ON_CLASS, c)),
                    owl::MAX_QUALIFIED_CARDINALITY,
                    owl::MAX_CARDINALITY,
                )
            }
            ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => {
                let property = self.object_property(property);
                let filler = filler.as_deref().map(|c| self.class_expression(c));
                self.cardinality(
                    property,
                    *cardinality,
                    filler.map(|c| (owl::ON_CLASS, c)),
                    owl::QUALIFIED_CARDINALITY,
                    owl::CARDINALITY,
                )
            }
            ClassExpression::DataSomeValuesFrom { property, filler } => {
                let filler = self.data_range(filler);
                self.restriction(property.clone().into(), vec![(owl::SOME_VALUES_FROM, filler)])
            }
            ClassExpression::DataAllValuesFrom { property, filler } => {
                let filler = self.data_range(filler);
                self.restriction(property.clone().into(), vec![(owl::ALL_VALUES_FROM, filler)])
            }
            ClassExpression::DataHasValue { property, value } => self.restriction(
                property.clone().into(),
                vec![(owl::HAS_VALUE, value.clone().into())],
            ),
            ClassExpression::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => {
                let filler = filler.as_ref().map(|d| self.data_range(d));
                self.cardinality(
                    property.clone().into(),
                    *cardinality,
                    filler.map(|d| (owl::ON_DATA_RANGE, d)),
                    owl::MIN_QUALIFIED_CARDINALITY,
                    owl::MIN_CARDINALITY,
                )
            }
            ClassExpression::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => {
                let filler = filler.as_ref().map(|d| self.data_range(d));
                self.cardinality(
                    property.clone().into(),
                    *cardinality,
                    filler.map(|d| (owl::ON_DATA_RANGE, d)),
                    owl::MAX_QUALIFIED_CARDINALITY,
                    owl::MAX_CARDINALITY,
                )
            }
            ClassExpression::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => {
                let filler = filler.as_ref().map(|d| self.data_range(d));
                self.cardinality(
                    property.clone().into(),
                    *cardinality,
                    filler.map(|d| (owl::ON_DATA_RANGE, d)),
                    owl::QUALIFIED_CARDINALITY,
                    owl::CARDINALITY,
                )
            }
        }
    }

    fn class_node(&mut self, predicate: NamedNodeRef<'_>, members: Vec<Term>) -> Term {
        let list = self.list(members);
        let node = self.fresh();
        self.push(&node, rdf::TYPE, owl::CLASS.into_owned());
        self.push(&node, predicate, list);
        node
    }

    fn restriction(&mut self, property: Term, properties: Vec<(NamedNodeRef<'_>, Term)>) -> Term {
        let node = self.fresh();
        self.push(&node, rdf::TYPE, owl::RESTRICTION.into_owned());
        self.push(&node, owl::ON_PROPERTY, property);
        for (predicate, object) in properties {
            self.push(&node, predicate, object);
        }
        node
    }

    fn cardinality(
        &mut self,
        property: Term,
        cardinality: u32,
        filler: Option<(NamedNodeRef<'_>, Term)>,
        qualified: NamedNodeRef<'_>,
        unqualified: NamedNodeRef<'_>,
    ) -> Term {
        let value = Literal::new_typed_literal(cardinality.to_string(), xsd::NON_NEGATIVE_INTEGER);
        match filler {
            Some(filler) => self.restriction(property, vec![(qualified, value.into()), filler]),
            None => self.restriction(property, vec![(unqualified, value.into())]),
        }
    }

    fn data_range(&mut self, range: &DataRange) -> Term {
        match range {
            DataRange::Datatype(iri) => iri.clone().into(),
            DataRange::DataIntersectionOf(ranges) => {
                let members = ranges.iter().map(|r| self.data_range(r)).collect();
                let list = self.list(members);
                self.datatype_node(vec![(owl::INTERSECTION_OF, list)])
            }
            DataRange::DataUnionOf(ranges) => {
                let members = ranges.iter().map(|r| self.data_range(r)).collect();
                let list = self.list(members);
                self.datatype_node(vec![(owl::UNION_OF, list)])
            }
            DataRange::DataComplementOf(range) => {
                let complement = self.data_range(range);
                self.datatype_node(vec![(owl::DATATYPE_COMPLEMENT_OF, complement)])
            }
            DataRange::DataOneOf(values) => {
                let list = self.list(values.iter().cloned().map(Term::from).collect());
                self.datatype_node(vec![(owl::ONE_OF, list)])
            }
            DataRange::DatatypeRestriction { datatype, facets } => {
                let facets = facets
                    .iter()
                    .map(|(facet, value)| {
                        let node = self.fresh();
                        self.push(&node, facet.as_ref(), value.clone());
                        node
                    })
                    .collect();
                let list = self.list(facets);
                self.datatype_node(vec![
                    (owl::ON_DATATYPE, datatype.clone().into()),
                    (owl::WITH_RESTRICTIONS, list),
                ])
            }
        }
    }

    fn datatype_node(&mut self, properties: Vec<(NamedNodeRef<'_>, Term)>) -> Term {
        let node = self.fresh();
        self.push(&node, rdf::TYPE, rdfs::DATATYPE.into_owned());
        for (predicate, object) in properties {
            self.push(&node, predicate, object);
        }
        node
    }
}

fn declaration_type(kind: EntityKind) -> NamedNodeRef<'static> {
    match kind {
        EntityKind::Class => owl::CLASS,
        EntityKind::ObjectProperty => owl::OBJECT_PROPERTY,
        EntityKind::DataProperty => owl::DATATYPE_PROPERTY,
        EntityKind::AnnotationProperty => owl::ANNOTATION_PROPERTY,
        EntityKind::NamedIndividual => owl::NAMED_INDIVIDUAL,
        EntityKind::Datatype => rdfs::DATATYPE,
    }
}

fn characteristic_type(axiom_type: AxiomType) -> NamedNodeRef<'static> {
    match PropertyCharacteristic::from_axiom_type(axiom_type) {
        Some(PropertyCharacteristic::InverseFunctional) => owl::INVERSE_FUNCTIONAL_PROPERTY,
        Some(PropertyCharacteristic::Reflexive) => owl::REFLEXIVE_PROPERTY,
        Some(PropertyCharacteristic::Irreflexive) => owl::IRREFLEXIVE_PROPERTY,
        Some(PropertyCharacteristic::Symmetric) => owl::SYMMETRIC_PROPERTY,
        Some(PropertyCharacteristic::Asymmetric) => owl::ASYMMETRIC_PROPERTY,
        Some(PropertyCharacteristic::Transitive) => owl::TRANSITIVE_PROPERTY,
        Some(PropertyCharacteristic::Functional) | None => owl::FUNCTIONAL_PROPERTY,
    }
}

fn value_term(value: &AnnotationValue) -> Term {
    match value {
        AnnotationValue::Iri(iri) => iri.clone().into(),
        AnnotationValue::Literal(literal) => literal.clone().into(),
        AnnotationValue::Anonymous(node) => node.clone().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_ontology;

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{local}"))
    }

    fn round_trip(ontology: &Ontology) -> Ontology {
        parse_ontology(serialize_ontology(ontology)).unwrap()
    }

    fn comment(text: &str) -> Annotation {
        Annotation::new(rdfs::COMMENT.into_owned(), Literal::new_simple_literal(text))
    }

    #[test]
    fn test_header() {
        let mut ontology = Ontology::new(Some(iri("onto")));
        ontology.set_version_iri(Some(iri("onto/1.0")));
        ontology.add_import(iri("other"));
        let triples = serialize_ontology(&ontology);
        assert_eq!(triples.len(), 3);
        let parsed = round_trip(&ontology);
        assert_eq!(parsed.iri(), Some(&iri("onto")));
        assert_eq!(parsed.version_iri(), Some(&iri("onto/1.0")));
        assert_eq!(parsed.imports(), &[iri("other")]);
    }

    #[test]
    fn test_nested_expressions_round_trip() {
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::declaration(Entity::ObjectProperty(iri("eats"))));
        ontology.add_axiom(Axiom::declaration(Entity::DataProperty(iri("age"))));
        ontology.add_axiom(Axiom::subclass_of(
            iri("Herbivore"),
            ClassExpression::ObjectIntersectionOf(vec![
                ClassExpression::all_values_from(
                    iri("eats"),
                    ClassExpression::ObjectUnionOf(vec![
                        ClassExpression::class(iri("Plant")),
                        ClassExpression::complement(ClassExpression::class(iri("Animal"))),
                    ]),
                ),
                ClassExpression::ObjectExactCardinality {
                    cardinality: 1,
                    property: ObjectPropertyExpression::ObjectInverseOf(iri("eats")),
                    filler: None,
                },
                ClassExpression::DataSomeValuesFrom {
                    property: iri("age"),
                    filler: DataRange::DatatypeRestriction {
                        datatype: xsd::INTEGER.into_owned(),
                        facets: vec![(
                            NamedNode::new_unchecked(
                                "http://www.w3.org/2001/XMLSchema#minInclusive",
                            ),
                            Literal::from(0),
                        )],
                    },
                },
            ]),
        ));
        let parsed = round_trip(&ontology);
        assert_eq!(parsed.axioms(), ontology.axioms());
    }

    #[test]
    fn test_annotated_axioms_round_trip() {
        let mut ontology = Ontology::default();
        ontology.add_axiom(
            Axiom::subclass_of(iri("A"), iri("B")).with_annotations([comment("asserted")]),
        );
        ontology.add_axiom(
            Axiom::disjoint_classes([
                ClassExpression::class(iri("A")),
                ClassExpression::class(iri("C")),
                ClassExpression::class(iri("D")),
            ])
            .with_annotations([comment("pairwise")]),
        );
        let parsed = round_trip(&ontology);
        assert_eq!(
            parsed.axioms().iter().collect::<FxHashSet<_>>(),
            ontology.axioms().iter().collect::<FxHashSet<_>>()
        );
    }

    #[test]
    fn test_fresh_labels_skip_existing_blank_nodes() {
        let existing = BlankNode::new_unchecked("b0");
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::class_assertion(
            ClassExpression::some_values_from(iri("p"), ClassExpression::class(iri("A"))),
            existing.clone(),
        ));
        let restrictions = serialize_ontology(&ontology)
            .into_iter()
            .filter(|triple| triple.predicate.as_ref() == owl::ON_PROPERTY)
            .map(|triple| Term::from(triple.subject))
            .collect::<Vec<_>>();
        assert_eq!(restrictions, [Term::from(BlankNode::new_unchecked("b1"))]);
        assert_eq!(round_trip(&ontology).axioms(), ontology.axioms());
    }

    #[test]
    fn test_dangling_entities_are_declared() {
        let mut ontology = Ontology::default();
        ontology.add_entity(Entity::Class(iri("Lonely")));
        let parsed = round_trip(&ontology);
        assert!(parsed.contains_entity(&Entity::Class(iri("Lonely"))));
    }
}
