//! The filter pipeline: a left fold of select clauses over a working graph.

use crate::axiom_type::AxiomType;
use crate::entity::Entity;
use crate::error::FilterError;
use crate::filter::{complement, filter, filter_anonymous, filter_complement, merge, trim_dangling};
use crate::prefix::PrefixMap;
use crate::select::{Branch, SelectClause, select_entities};
use crate::store::OntologyStore;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Raw, unparsed filter options, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Seed terms (CURIEs or IRIs). Empty means every entity of the input.
    pub entities: Vec<String>,
    /// Select tokens, applied in order. Empty means `self`.
    pub select: Vec<String>,
    /// Axiom type tokens. Empty means `all`.
    pub axioms: Vec<String>,
    /// Drop dangling entities once every clause ran.
    pub trim: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            select: Vec::new(),
            axioms: Vec::new(),
            trim: true,
        }
    }
}

/// A validated filter, ready to be applied to any [`OntologyStore`].
///
/// The seed set is fixed for the whole pipeline: each clause expands it
/// against the graph produced by the previous clause.
///
/// ```
/// use oxfilter::{Axiom, Filter, Ontology, OntologyStore, SelectClause};
/// use oxfilter::PrefixMap;
/// use oxrdf::NamedNode;
///
/// let a = NamedNode::new("http://example.org/A")?;
/// let b = NamedNode::new("http://example.org/B")?;
/// let c = NamedNode::new("http://example.org/C")?;
/// let mut ontology = Ontology::default();
/// ontology.add_axiom(Axiom::subclass_of(a.clone(), b.clone()));
/// ontology.add_axiom(Axiom::subclass_of(b, c.clone()));
///
/// let filter = Filter::new()
///     .with_seeds([oxfilter::Entity::Class(c)])
///     .with_clauses([SelectClause::parse("descendants named", &PrefixMap::default())?]);
/// let output = filter.apply(&ontology);
/// assert_eq!(output.axioms().len(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    seeds: Option<FxHashSet<Entity>>,
    clauses: Vec<SelectClause>,
    axiom_types: FxHashSet<AxiomType>,
    trim: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            seeds: None,
            clauses: vec![SelectClause::identity()],
            axiom_types: AxiomType::ALL.iter().copied().collect(),
            trim: true,
        }
    }
}

impl Filter {
    /// The identity filter: every entity, the `self` clause, every axiom type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from raw options, validating all of them up front.
    ///
    /// Seed terms are resolved with `prefixes` and looked up in `graph`.
    pub fn from_options<S: OntologyStore>(
        options: &FilterOptions,
        graph: &S,
        prefixes: &PrefixMap,
    ) -> Result<Self, FilterError> {
        let axiom_types = AxiomType::resolve(&options.axioms)?;
        let clauses = options
            .select
            .iter()
            .map(|token| SelectClause::parse(token, prefixes))
            .collect::<Result<Vec<_>, _>>()?;
        let mut seeds = FxHashSet::default();
        if !options.entities.is_empty() {
            let universe = graph.entities();
            for term in &options.entities {
                let iri = prefixes
                    .resolve(term)
                    .ok_or_else(|| FilterError::UnresolvableIdentifier(term.clone()))?;
                let before = seeds.len();
                seeds.extend(
                    universe
                        .iter()
                        .filter(|entity| entity.iri() == Some(&iri))
                        .cloned(),
                );
                if seeds.len() == before {
                    return Err(FilterError::UnknownEntity(term.clone()));
                }
            }
        }
        Ok(Self::new()
            .with_seeds(seeds)
            .with_clauses(clauses)
            .with_axiom_types(axiom_types)
            .with_trim(options.trim))
    }

    /// Sets the seed entities. An empty set means every entity of the input.
    #[must_use]
    pub fn with_seeds(mut self, seeds: impl IntoIterator<Item = Entity>) -> Self {
        let seeds = seeds.into_iter().collect::<FxHashSet<_>>();
        self.seeds = if seeds.is_empty() { None } else { Some(seeds) };
        self
    }

    /// Sets the clauses, applied in order. No clause means the `self` clause.
    #[must_use]
    pub fn with_clauses(mut self, clauses: impl IntoIterator<Item = SelectClause>) -> Self {
        self.clauses = clauses.into_iter().collect();
        if self.clauses.is_empty() {
            self.clauses.push(SelectClause::identity());
        }
        self
    }

    /// Sets the axiom types an output axiom may have.
    #[must_use]
    pub fn with_axiom_types(mut self, axiom_types: impl IntoIterator<Item = AxiomType>) -> Self {
        self.axiom_types = axiom_types.into_iter().collect();
        self
    }

    /// Sets whether dangling entities are dropped at the end.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn clauses(&self) -> &[SelectClause] {
        &self.clauses
    }

    pub fn axiom_types(&self) -> &FxHashSet<AxiomType> {
        &self.axiom_types
    }

    /// Runs every clause over `input` and returns the resulting graph.
    pub fn apply<S: OntologyStore>(&self, input: &S) -> S {
        let seeds = self.seeds.clone().unwrap_or_else(|| input.entities());
        info!(
            axioms = input.axioms().len(),
            seeds = seeds.len(),
            clauses = self.clauses.len(),
            "filtering"
        );
        let mut graph = input.derive(input.entities(), input.axioms().iter().cloned());
        for clause in &self.clauses {
            graph = self.apply_clause(&graph, &seeds, clause);
        }
        if self.trim {
            graph = trim_dangling(&graph);
        }
        info!(
            axioms = graph.axioms().len(),
            entities = graph.entities().len(),
            "filtered"
        );
        graph
    }

    fn apply_clause<S: OntologyStore>(
        &self,
        graph: &S,
        seeds: &FxHashSet<Entity>,
        clause: &SelectClause,
    ) -> S {
        let types = &self.axiom_types;
        match clause.branch() {
            Branch::Anonymous => {
                debug!("filtering for references to related anonymous entities");
                filter_anonymous(graph, seeds, &clause.relation_types, types)
            }
            Branch::AnonymousComplement => {
                debug!("filtering for anonymous entities related to the complement set");
                filter_anonymous(graph, &complement(graph, seeds), &clause.relation_types, types)
            }
            Branch::Named => {
                debug!("filtering for references to related named entities");
                filter(graph, &expand(graph, seeds, clause), types)
            }
            Branch::Complement => {
                debug!("filtering for the complement set");
                filter_complement(graph, &expand(graph, seeds, clause), types)
            }
            Branch::Both => {
                debug!("filtering for references to all related entities");
                merge(
                    &filter(graph, &expand(graph, seeds, clause), types),
                    &filter_anonymous(graph, seeds, &clause.relation_types, types),
                )
            }
        }
    }
}

/// The entities selected by `clause`, named ones only for a `named` clause.
fn expand<S: OntologyStore>(
    graph: &S,
    seeds: &FxHashSet<Entity>,
    clause: &SelectClause,
) -> FxHashSet<Entity> {
    let mut selected = select_entities(graph, seeds, clause);
    if clause.named && !clause.anonymous {
        selected.retain(Entity::is_named);
    }
    debug!(selected = selected.len(), "expanded seed");
    selected
}
