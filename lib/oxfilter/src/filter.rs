//! Graph transformations: axiom filtering, merging and trimming.
//!
//! Every function here builds a new graph through [`OntologyStore::derive`]
//! and leaves its input untouched. Filtered graphs keep the entity records
//! of their input; [`trim_dangling`] drops the ones no axiom mentions anymore.

use crate::axiom::{Axiom, Operand};
use crate::axiom_type::AxiomType;
use crate::entity::Entity;
use crate::relation::RelationType;
use crate::store::OntologyStore;
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Every entity of `graph` that is not in `seeds`.
pub fn complement<S: OntologyStore>(graph: &S, seeds: &FxHashSet<Entity>) -> FxHashSet<Entity> {
    graph
        .entities()
        .into_iter()
        .filter(|entity| !seeds.contains(entity))
        .collect()
}

fn retain<S: OntologyStore>(graph: &S, keep: impl Fn(&Axiom) -> bool) -> S {
    let axioms = graph
        .axioms()
        .iter()
        .filter(|axiom| keep(*axiom))
        .cloned()
        .collect::<Vec<_>>();
    debug!(
        kept = axioms.len(),
        dropped = graph.axioms().len() - axioms.len(),
        "filtered axioms"
    );
    graph.derive(graph.entities(), axioms)
}

/// Keeps the axioms of an allowed type that reference at least one of `entities`.
pub fn filter<S: OntologyStore>(
    graph: &S,
    entities: &FxHashSet<Entity>,
    axiom_types: &FxHashSet<AxiomType>,
) -> S {
    retain(graph, |axiom| {
        axiom_types.contains(&axiom.axiom_type()) && axiom.references(entities)
    })
}

/// Keeps the axioms of an allowed type that reference none of `entities`.
pub fn filter_complement<S: OntologyStore>(
    graph: &S,
    entities: &FxHashSet<Entity>,
    axiom_types: &FxHashSet<AxiomType>,
) -> S {
    retain(graph, |axiom| {
        axiom_types.contains(&axiom.axiom_type()) && !axiom.references(entities)
    })
}

/// Keeps the axioms of an allowed type that have an anonymous operand related
/// to any of `seeds`.
///
/// Without relation types, the anonymous operands of the axioms the seeds
/// directly appear in are used.
pub fn filter_anonymous<S: OntologyStore>(
    graph: &S,
    seeds: &FxHashSet<Entity>,
    relation_types: &FxHashSet<RelationType>,
    axiom_types: &FxHashSet<AxiomType>,
) -> S {
    let mut anonymous = FxHashSet::<Operand>::default();
    if relation_types.is_empty() {
        anonymous.extend(graph.related_anonymous(seeds, RelationType::Identity));
    }
    for relation in relation_types {
        anonymous.extend(graph.related_anonymous(seeds, *relation));
    }
    debug!(operands = anonymous.len(), "related anonymous operands");
    retain(graph, |axiom| {
        axiom_types.contains(&axiom.axiom_type())
            && axiom
                .operands()
                .iter()
                .any(|operand| anonymous.contains(operand))
    })
}

/// Union of two graphs: axioms and entity records of both, duplicates collapsed.
///
/// Metadata is taken from `first`.
pub fn merge<S: OntologyStore>(first: &S, second: &S) -> S {
    let mut entities = first.entities();
    entities.extend(second.entities());
    first.derive(
        entities,
        first
            .axioms()
            .iter()
            .chain(second.axioms())
            .cloned(),
    )
}

/// Drops every entity record that no remaining axiom references.
///
/// Axioms are never removed.
pub fn trim_dangling<S: OntologyStore>(graph: &S) -> S {
    let mut referenced = FxHashSet::default();
    let mut iris = FxHashSet::<&NamedNode>::default();
    for axiom in graph.axioms() {
        referenced.extend(axiom.signature());
        iris.extend(axiom.operands().iter().filter_map(|operand| match operand {
            Operand::Iri(iri) => Some(iri),
            _ => None,
        }));
    }
    let entities = graph.entities();
    let total = entities.len();
    let kept = entities
        .into_iter()
        .filter(|entity| {
            referenced.contains(entity) || entity.iri().is_some_and(|iri| iris.contains(iri))
        })
        .collect::<Vec<_>>();
    debug!(trimmed = total - kept.len(), "trimmed dangling entities");
    graph.derive(kept, graph.axioms().iter().cloned())
}
