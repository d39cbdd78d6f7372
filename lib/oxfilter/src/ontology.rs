//! OWL 2 ontology: the in-memory [`OntologyStore`].

use crate::annotation::{Annotation, AnnotationSubject};
use crate::axiom::{Axiom, Operand};
use crate::axiom_type::AxiomType;
use crate::entity::Entity;
use crate::relation::RelationType;
use crate::store::OntologyStore;
use oxrdf::NamedNode;
use rustc_hash::{FxHashMap, FxHashSet};

/// An OWL 2 ontology.
///
/// Axioms keep their insertion order and identical axioms collapse.
/// Entity records are kept apart from the axioms, so an entity may outlive
/// every axiom that mentioned it until the ontology is trimmed.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    /// The ontology IRI (optional)
    iri: Option<NamedNode>,

    /// The version IRI (optional)
    version_iri: Option<NamedNode>,

    /// Imported ontology IRIs
    imports: Vec<NamedNode>,

    /// Annotations on the ontology itself
    annotations: Vec<Annotation>,

    /// Entity records, named and anonymous
    entities: FxHashSet<Entity>,

    /// All axioms in the ontology
    axioms: Vec<Axiom>,

    /// Membership index over `axioms`
    axiom_set: FxHashSet<Axiom>,
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    /// Returns the ontology IRI.
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    /// Sets the ontology IRI.
    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    /// Returns the version IRI.
    pub fn version_iri(&self) -> Option<&NamedNode> {
        self.version_iri.as_ref()
    }

    /// Sets the version IRI.
    pub fn set_version_iri(&mut self, iri: Option<NamedNode>) {
        self.version_iri = iri;
    }

    /// Returns the imported ontology IRIs.
    pub fn imports(&self) -> &[NamedNode] {
        &self.imports
    }

    /// Adds an import declaration.
    pub fn add_import(&mut self, iri: NamedNode) {
        if !self.imports.contains(&iri) {
            self.imports.push(iri);
        }
    }

    /// Returns the annotations on the ontology itself.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Adds an annotation on the ontology itself.
    pub fn add_annotation(&mut self, annotation: Annotation) {
        if !self.annotations.contains(&annotation) {
            self.annotations.push(annotation);
        }
    }

    /// Adds an axiom and records every entity of its signature.
    ///
    /// Returns `false` if the axiom was already present.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        if self.axiom_set.contains(&axiom) {
            return false;
        }
        self.entities.extend(axiom.signature());
        self.axiom_set.insert(axiom.clone());
        self.axioms.push(axiom);
        true
    }

    /// Records an entity without any axiom about it.
    pub fn add_entity(&mut self, entity: Entity) -> bool {
        self.entities.insert(entity)
    }

    /// Returns `true` if the ontology has an entity record for `entity`.
    pub fn contains_entity(&self, entity: &Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Returns `true` if the ontology holds `axiom`.
    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axiom_set.contains(axiom)
    }

    /// Iterates over the entity records.
    pub fn entity_records(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterates over the axioms of the given type.
    pub fn axioms_of_type(&self, axiom_type: AxiomType) -> impl Iterator<Item = &Axiom> {
        self.axioms
            .iter()
            .filter(move |axiom| axiom.axiom_type() == axiom_type)
    }

    /// Returns the number of axioms.
    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    /// Returns `true` if the ontology has no axioms.
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    fn links(&self) -> Vec<Link<'_>> {
        let mut links = Vec::new();
        for axiom in &self.axioms {
            let operands = axiom.operands();
            match axiom.axiom_type() {
                AxiomType::SubClassOf
                | AxiomType::SubObjectPropertyOf
                | AxiomType::SubDataPropertyOf
                | AxiomType::SubAnnotationPropertyOf => {
                    if let [sub, sup] = operands {
                        links.push(Link::Sub { sub, sup });
                    }
                }
                AxiomType::ClassAssertion => {
                    if let [class, individual] = operands {
                        links.push(Link::Type { individual, class });
                    }
                }
                AxiomType::EquivalentClasses
                | AxiomType::EquivalentObjectProperties
                | AxiomType::EquivalentDataProperties
                | AxiomType::SameIndividual => links.push(Link::Equivalent(operands)),
                AxiomType::DisjointClasses
                | AxiomType::DisjointObjectProperties
                | AxiomType::DisjointDataProperties
                | AxiomType::DifferentIndividuals => links.push(Link::Disjoint(operands)),
                AxiomType::DisjointUnion => {
                    if let [_, members @ ..] = operands {
                        links.push(Link::Disjoint(members));
                    }
                }
                _ => {}
            }
        }
        links
    }

    /// Every operand reachable from `seeds` through `relation`.
    fn reach(&self, seeds: &FxHashSet<Entity>, relation: RelationType) -> FxHashSet<&Operand> {
        match relation {
            RelationType::Identity => self
                .axioms
                .iter()
                .filter(|axiom| seeds.iter().any(|seed| axiom.has_operand(seed)))
                .flat_map(|axiom| axiom.operands())
                .filter(|operand| operand.is_anonymous())
                .collect(),
            RelationType::Ancestors => closure(&self.links(), seeds, RelationType::Parents),
            RelationType::Descendants => closure(&self.links(), seeds, RelationType::Children),
            direct => step(&self.links(), seeds, direct).collect(),
        }
    }
}

/// A structural edge between axiom operands.
#[derive(Clone, Copy)]
enum Link<'a> {
    Sub { sub: &'a Operand, sup: &'a Operand },
    Type { individual: &'a Operand, class: &'a Operand },
    Equivalent(&'a [Operand]),
    Disjoint(&'a [Operand]),
}

fn is_seed(operand: &Operand, seeds: &FxHashSet<Entity>) -> bool {
    operand.as_entity().is_some_and(|entity| seeds.contains(entity))
}

/// Operands one `relation` step away from `seeds`.
fn step<'a>(
    links: &[Link<'a>],
    seeds: &FxHashSet<Entity>,
    relation: RelationType,
) -> impl Iterator<Item = &'a Operand> {
    links.iter().flat_map(move |link| {
        let mut found = Vec::new();
        match (*link, relation) {
            (Link::Sub { sub, sup }, RelationType::Parents) if is_seed(sub, seeds) => found.push(sup),
            (Link::Sub { sub, sup }, RelationType::Children) if is_seed(sup, seeds) => {
                found.push(sub)
            }
            (Link::Type { individual, class }, RelationType::Types) if is_seed(individual, seeds) => {
                found.push(class)
            }
            (Link::Type { individual, class }, RelationType::Instances) if is_seed(class, seeds) => {
                found.push(individual)
            }
            (Link::Equivalent(members), RelationType::Equivalents)
            | (Link::Disjoint(members), RelationType::Disjoints) => {
                for (i, member) in members.iter().enumerate() {
                    if is_seed(member, seeds) {
                        found.extend(
                            members
                                .iter()
                                .enumerate()
                                .filter(|(j, _)| *j != i)
                                .map(|(_, other)| other),
                        );
                    }
                }
            }
            _ => {}
        }
        found
    })
}

/// Transitive closure of `relation`, cycle safe.
///
/// Anonymous operands are collected but never expanded further.
fn closure<'a>(
    links: &[Link<'a>],
    seeds: &FxHashSet<Entity>,
    relation: RelationType,
) -> FxHashSet<&'a Operand> {
    let mut reached = FxHashSet::default();
    let mut expanded = FxHashSet::default();
    let mut frontier = seeds.clone();
    while !frontier.is_empty() {
        expanded.extend(frontier.iter().cloned());
        let mut next = FxHashSet::default();
        for operand in step(links, &frontier, relation) {
            if let Operand::Entity(entity) = operand {
                if !expanded.contains(entity) {
                    next.insert(entity.clone());
                }
            }
            reached.insert(operand);
        }
        frontier = next;
    }
    reached
}

impl OntologyStore for Ontology {
    fn entities(&self) -> FxHashSet<Entity> {
        self.entities.clone()
    }

    fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    fn related(&self, seeds: &FxHashSet<Entity>, relation: RelationType) -> FxHashSet<Entity> {
        if relation == RelationType::Identity {
            return seeds.clone();
        }
        self.reach(seeds, relation)
            .into_iter()
            .filter_map(|operand| operand.as_entity().cloned())
            .collect()
    }

    fn related_anonymous(
        &self,
        seeds: &FxHashSet<Entity>,
        relation: RelationType,
    ) -> FxHashSet<Operand> {
        self.reach(seeds, relation)
            .into_iter()
            .filter(|operand| operand.is_anonymous())
            .cloned()
            .collect()
    }

    fn annotated(&self, annotation: &Annotation) -> FxHashSet<Entity> {
        let mut by_iri = FxHashMap::<&NamedNode, Vec<&Entity>>::default();
        for entity in &self.entities {
            if let Some(iri) = entity.iri() {
                by_iri.entry(iri).or_default().push(entity);
            }
        }
        let mut annotated = FxHashSet::default();
        for (subject, found) in self
            .axioms_of_type(AxiomType::AnnotationAssertion)
            .filter_map(Axiom::as_annotation_assertion)
        {
            if found != *annotation {
                continue;
            }
            match subject {
                AnnotationSubject::Iri(iri) => {
                    if let Some(entities) = by_iri.get(&iri) {
                        annotated.extend(entities.iter().map(|e| (*e).clone()));
                    }
                }
                AnnotationSubject::Anonymous(node) => {
                    annotated.insert(Entity::AnonymousIndividual(node));
                }
            }
        }
        annotated
    }

    fn derive(
        &self,
        entities: impl IntoIterator<Item = Entity>,
        axioms: impl IntoIterator<Item = Axiom>,
    ) -> Self {
        let mut derived = Self {
            iri: self.iri.clone(),
            version_iri: self.version_iri.clone(),
            imports: self.imports.clone(),
            annotations: self.annotations.clone(),
            ..Self::default()
        };
        derived.entities.extend(entities);
        for axiom in axioms {
            derived.add_axiom(axiom);
        }
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ClassExpression;
    use oxrdf::{BlankNode, Literal};

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{local}"))
    }

    fn class(local: &str) -> Entity {
        Entity::Class(iri(local))
    }

    fn seeds(entities: impl IntoIterator<Item = Entity>) -> FxHashSet<Entity> {
        entities.into_iter().collect()
    }

    fn chain() -> Ontology {
        let mut ontology = Ontology::new(Some(iri("onto")));
        ontology.add_axiom(Axiom::subclass_of(iri("A"), iri("B")));
        ontology.add_axiom(Axiom::subclass_of(iri("B"), iri("C")));
        ontology.add_axiom(Axiom::subclass_of(
            iri("B"),
            ClassExpression::some_values_from(iri("p"), ClassExpression::class(iri("D"))),
        ));
        ontology
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut ontology = Ontology::default();
        assert!(ontology.add_axiom(Axiom::subclass_of(iri("A"), iri("B"))));
        assert!(!ontology.add_axiom(Axiom::subclass_of(iri("A"), iri("B"))));
        assert_eq!(ontology.len(), 1);
        assert_eq!(ontology.entities(), seeds([class("A"), class("B")]));
    }

    #[test]
    fn test_parents_and_children() {
        let ontology = chain();
        assert_eq!(
            ontology.related(&seeds([class("B")]), RelationType::Parents),
            seeds([class("C")])
        );
        assert_eq!(
            ontology.related(&seeds([class("B")]), RelationType::Children),
            seeds([class("A")])
        );
        assert_eq!(
            ontology
                .related_anonymous(&seeds([class("B")]), RelationType::Parents)
                .len(),
            1
        );
    }

    #[test]
    fn test_ancestors_are_transitive() {
        let ontology = chain();
        assert_eq!(
            ontology.related(&seeds([class("A")]), RelationType::Ancestors),
            seeds([class("B"), class("C")])
        );
        assert_eq!(
            ontology
                .related_anonymous(&seeds([class("A")]), RelationType::Ancestors)
                .len(),
            1
        );
        assert_eq!(
            ontology.related(&seeds([class("C")]), RelationType::Descendants),
            seeds([class("A"), class("B")])
        );
    }

    #[test]
    fn test_cycles_terminate() {
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::subclass_of(iri("A"), iri("B")));
        ontology.add_axiom(Axiom::subclass_of(iri("B"), iri("A")));
        assert_eq!(
            ontology.related(&seeds([class("A")]), RelationType::Ancestors),
            seeds([class("A"), class("B")])
        );
    }

    #[test]
    fn test_equivalents_and_disjoints() {
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::equivalent_classes([
            ClassExpression::class(iri("A")),
            ClassExpression::class(iri("B")),
            ClassExpression::complement(ClassExpression::class(iri("C"))),
        ]));
        ontology.add_axiom(Axiom::disjoint_classes([
            ClassExpression::class(iri("A")),
            ClassExpression::class(iri("D")),
        ]));
        assert_eq!(
            ontology.related(&seeds([class("A")]), RelationType::Equivalents),
            seeds([class("B")])
        );
        assert_eq!(
            ontology
                .related_anonymous(&seeds([class("A")]), RelationType::Equivalents)
                .len(),
            1
        );
        assert_eq!(
            ontology.related(&seeds([class("D")]), RelationType::Disjoints),
            seeds([class("A")])
        );
    }

    #[test]
    fn test_types_and_instances() {
        let anonymous = BlankNode::new_unchecked("x");
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::class_assertion(iri("Dog"), iri("rex")));
        ontology.add_axiom(Axiom::class_assertion(iri("Dog"), anonymous.clone()));
        assert_eq!(
            ontology.related(&seeds([Entity::NamedIndividual(iri("rex"))]), RelationType::Types),
            seeds([class("Dog")])
        );
        assert_eq!(
            ontology.related(&seeds([class("Dog")]), RelationType::Instances),
            seeds([
                Entity::NamedIndividual(iri("rex")),
                Entity::AnonymousIndividual(anonymous.clone())
            ])
        );
        assert_eq!(
            ontology.related_anonymous(&seeds([class("Dog")]), RelationType::Instances),
            FxHashSet::from_iter([Operand::Entity(Entity::AnonymousIndividual(anonymous))])
        );
    }

    #[test]
    fn test_identity_anonymous_operands() {
        let ontology = chain();
        let anonymous = ontology.related_anonymous(&seeds([class("B")]), RelationType::Identity);
        assert_eq!(anonymous.len(), 1);
        assert!(
            ontology
                .related_anonymous(&seeds([class("A")]), RelationType::Identity)
                .is_empty()
        );
    }

    #[test]
    fn test_annotated() {
        let label = Annotation::new(iri("label"), Literal::new_simple_literal("dog"));
        let mut ontology = Ontology::default();
        ontology.add_axiom(Axiom::declaration(class("Dog")));
        ontology.add_axiom(Axiom::annotation_assertion(iri("Dog"), label.clone()));
        ontology.add_axiom(Axiom::annotation_assertion(
            iri("Cat"),
            Annotation::new(iri("label"), Literal::new_simple_literal("cat")),
        ));
        assert_eq!(ontology.annotated(&label), seeds([class("Dog")]));
    }

    #[test]
    fn test_derive_keeps_metadata() {
        let ontology = chain();
        let derived = ontology.derive([class("Z")], []);
        assert_eq!(derived.iri(), Some(&iri("onto")));
        assert!(derived.is_empty());
        assert_eq!(derived.entities(), seeds([class("Z")]));
    }
}
