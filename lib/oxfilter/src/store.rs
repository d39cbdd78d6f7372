use crate::annotation::Annotation;
use crate::axiom::{Axiom, Operand};
use crate::entity::Entity;
use crate::relation::RelationType;
use rustc_hash::FxHashSet;

/// The graph primitives the filter engine is built on.
///
/// Implementations are treated as immutable values: every transformation
/// goes through [`derive`](Self::derive) and yields a new graph.
pub trait OntologyStore: Sized {
    /// Every entity record of the graph, named and anonymous.
    fn entities(&self) -> FxHashSet<Entity>;

    /// The axioms of the graph, without duplicates.
    fn axioms(&self) -> &[Axiom];

    /// Named entities and anonymous individuals reachable from any of
    /// `seeds` through `relation`.
    fn related(&self, seeds: &FxHashSet<Entity>, relation: RelationType) -> FxHashSet<Entity>;

    /// Anonymous operands structurally linked to any of `seeds` through `relation`.
    fn related_anonymous(
        &self,
        seeds: &FxHashSet<Entity>,
        relation: RelationType,
    ) -> FxHashSet<Operand>;

    /// Entities that are the subject of an annotation assertion carrying exactly `annotation`.
    fn annotated(&self, annotation: &Annotation) -> FxHashSet<Entity>;

    /// A new graph of the same kind with the given entity records and axioms.
    ///
    /// Graph metadata (e.g. the ontology IRI) is carried over from `self`.
    fn derive(
        &self,
        entities: impl IntoIterator<Item = Entity>,
        axioms: impl IntoIterator<Item = Axiom>,
    ) -> Self;
}
