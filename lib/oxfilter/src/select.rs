//! The `--select` mini-language.
//!
//! A select token is either a single annotation match (`CURIE=value`) or a
//! whitespace separated list of relation names and flag keywords:
//!
//! ```text
//! clause          := annotation | relation_clause
//! annotation      := property "=" value
//! value           := "<" iri ">" | "'" literal "'" | "~'" pattern "'" | curie
//! relation_clause := token (" " token)*
//! token           := relation_name | "complement" | "named" | "anonymous"
//! ```

use crate::annotation::{Annotation, AnnotationValue};
use crate::entity::Entity;
use crate::error::FilterError;
use crate::prefix::PrefixMap;
use crate::relation::RelationType;
use crate::store::OntologyStore;
use oxrdf::{Literal, NamedNode};
use rustc_hash::FxHashSet;

const PATTERN_MARKER: &str = "~'";

/// One parsed `--select` token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectClause {
    pub relation_types: FxHashSet<RelationType>,
    pub annotations: FxHashSet<Annotation>,
    pub complement: bool,
    pub named: bool,
    pub anonymous: bool,
}

/// How a clause turns the working graph into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Axioms referencing anonymous operands related to the seed.
    Anonymous,
    /// [`Anonymous`](Self::Anonymous) over the complement of the seed.
    AnonymousComplement,
    /// Axioms referencing the expanded entity set.
    Named,
    /// Axioms referencing none of the expanded entity set.
    Complement,
    /// Union of [`Named`](Self::Named) and [`Anonymous`](Self::Anonymous).
    Both,
}

impl SelectClause {
    /// Parses one `--select` token.
    pub fn parse(token: &str, prefixes: &PrefixMap) -> Result<Self, FilterError> {
        if token.contains('=') {
            if token.matches('=').count() > 1 {
                return Err(FilterError::InvalidSelect(token.into()));
            }
            return Ok(Self {
                annotations: FxHashSet::from_iter([parse_annotation(token, prefixes)?]),
                ..Self::default()
            });
        }
        if token.trim().is_empty() {
            return Err(FilterError::InvalidSelect(token.into()));
        }
        let mut clause = Self::default();
        for word in token.split_whitespace() {
            if let Some(relation) = RelationType::from_name(word) {
                clause.relation_types.insert(relation);
            } else if word.eq_ignore_ascii_case("complement") {
                clause.complement = true;
            } else if word.eq_ignore_ascii_case("named") {
                clause.named = true;
            } else if word.eq_ignore_ascii_case("anonymous") {
                clause.anonymous = true;
            } else {
                return Err(FilterError::InvalidSelect(word.into()));
            }
        }
        Ok(clause)
    }

    /// The clause selecting the seed set itself.
    pub fn identity() -> Self {
        Self {
            relation_types: FxHashSet::from_iter([RelationType::Identity]),
            ..Self::default()
        }
    }

    /// The relation types used to expand the seed.
    ///
    /// A clause with neither relation types nor annotations expands through
    /// [`RelationType::Identity`].
    pub fn expansion(&self) -> FxHashSet<RelationType> {
        if self.relation_types.is_empty() && self.annotations.is_empty() {
            FxHashSet::from_iter([RelationType::Identity])
        } else {
            self.relation_types.clone()
        }
    }

    /// Picks the filtering branch from the clause flags.
    ///
    /// Setting neither `named` nor `anonymous` behaves like setting both.
    pub fn branch(&self) -> Branch {
        match (self.named, self.anonymous, self.complement) {
            (false, true, false) => Branch::Anonymous,
            (false, true, true) => Branch::AnonymousComplement,
            (true, false, false) => Branch::Named,
            (_, _, true) => Branch::Complement,
            (_, _, false) => Branch::Both,
        }
    }
}

enum ValueSyntax<'a> {
    Iri(&'a str),
    Pattern,
    Literal(&'a str),
    Curie(&'a str),
}

impl<'a> ValueSyntax<'a> {
    fn classify(value: &'a str) -> Self {
        if let Some(iri) = value.strip_prefix('<').and_then(|v| v.strip_suffix('>')) {
            Self::Iri(iri)
        } else if value.contains(PATTERN_MARKER) {
            Self::Pattern
        } else if let Some(literal) = value
            .strip_prefix('\'')
            .and_then(|v| v.strip_suffix('\''))
        {
            Self::Literal(literal)
        } else {
            Self::Curie(value)
        }
    }
}

fn resolve(token: &str, prefixes: &PrefixMap) -> Result<NamedNode, FilterError> {
    prefixes
        .resolve(token)
        .ok_or_else(|| FilterError::UnresolvableIdentifier(token.into()))
}

/// Parses a `CURIE=value` annotation match.
pub fn parse_annotation(token: &str, prefixes: &PrefixMap) -> Result<Annotation, FilterError> {
    let Some((property, value)) = token.split_once('=') else {
        return Err(FilterError::InvalidSelect(token.into()));
    };
    let property = resolve(property, prefixes)?;
    let value = match ValueSyntax::classify(value) {
        ValueSyntax::Iri(iri) => AnnotationValue::Iri(resolve(iri, prefixes)?),
        ValueSyntax::Pattern => {
            return Err(FilterError::UnimplementedFeature("pattern".into()));
        }
        ValueSyntax::Literal(literal) => {
            AnnotationValue::Literal(Literal::new_simple_literal(literal))
        }
        ValueSyntax::Curie(curie) => AnnotationValue::Iri(resolve(curie, prefixes)?),
    };
    Ok(Annotation::new(property, value))
}

/// Entities related to `seeds` through the clause relations, plus the
/// entities carrying any of the clause annotations.
pub fn select_entities<S: OntologyStore>(
    graph: &S,
    seeds: &FxHashSet<Entity>,
    clause: &SelectClause,
) -> FxHashSet<Entity> {
    let mut selected = FxHashSet::default();
    for relation in clause.expansion() {
        selected.extend(graph.related(seeds, relation));
    }
    for annotation in &clause.annotations {
        selected.extend(graph.annotated(annotation));
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> PrefixMap {
        let mut prefixes = PrefixMap::default();
        prefixes.add("ex", "http://example.org/").unwrap();
        prefixes
    }

    fn label() -> NamedNode {
        NamedNode::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label")
    }

    #[test]
    fn test_relation_union_and_flags() {
        let clause = SelectClause::parse("Parents  children named", &prefixes()).unwrap();
        assert_eq!(
            clause.relation_types,
            FxHashSet::from_iter([RelationType::Parents, RelationType::Children])
        );
        assert!(clause.named);
        assert!(!clause.anonymous);
        assert_eq!(clause.branch(), Branch::Named);
    }

    #[test]
    fn test_invalid_word() {
        assert_eq!(
            SelectClause::parse("parents cousins", &prefixes()),
            Err(FilterError::InvalidSelect("cousins".into()))
        );
    }

    #[test]
    fn test_blank_token() {
        for token in ["", "   "] {
            assert_eq!(
                SelectClause::parse(token, &prefixes()),
                Err(FilterError::InvalidSelect(token.into()))
            );
        }
    }

    #[test]
    fn test_branches() {
        let branch = |token| SelectClause::parse(token, &prefixes()).unwrap().branch();
        assert_eq!(branch("anonymous"), Branch::Anonymous);
        assert_eq!(branch("anonymous complement"), Branch::AnonymousComplement);
        assert_eq!(branch("named complement"), Branch::Complement);
        assert_eq!(branch("complement"), Branch::Complement);
        assert_eq!(branch("named anonymous complement"), Branch::Complement);
        assert_eq!(branch("self"), Branch::Both);
        assert_eq!(branch("named anonymous"), Branch::Both);
    }

    #[test]
    fn test_flag_only_clause_expands_through_self() {
        let clause = SelectClause::parse("complement", &prefixes()).unwrap();
        assert_eq!(clause.expansion(), FxHashSet::from_iter([RelationType::Identity]));
    }

    #[test]
    fn test_literal_annotation() {
        let clause = SelectClause::parse("rdfs:label='dog'", &prefixes()).unwrap();
        assert!(clause.relation_types.is_empty());
        assert!(clause.expansion().is_empty());
        assert_eq!(
            clause.annotations,
            FxHashSet::from_iter([Annotation::new(label(), Literal::new_simple_literal("dog"))])
        );
    }

    #[test]
    fn test_iri_and_curie_annotation_values() {
        let see_also = NamedNode::new_unchecked("http://www.w3.org/2000/01/rdf-schema#seeAlso");
        let dog = NamedNode::new_unchecked("http://example.org/Dog");
        for token in ["rdfs:seeAlso=<http://example.org/Dog>", "rdfs:seeAlso=<ex:Dog>", "rdfs:seeAlso=ex:Dog"] {
            assert_eq!(
                parse_annotation(token, &prefixes()),
                Ok(Annotation::new(see_also.clone(), dog.clone()))
            );
        }
    }

    #[test]
    fn test_pattern_is_rejected() {
        assert_eq!(
            parse_annotation("rdfs:label=~'do.*'", &prefixes()),
            Err(FilterError::UnimplementedFeature("pattern".into()))
        );
    }

    #[test]
    fn test_unresolvable_property() {
        assert_eq!(
            parse_annotation("label='dog'", &prefixes()),
            Err(FilterError::UnresolvableIdentifier("label".into()))
        );
    }

    #[test]
    fn test_two_equal_signs() {
        assert_eq!(
            SelectClause::parse("rdfs:label='a=b'", &prefixes()),
            Err(FilterError::InvalidSelect("rdfs:label='a=b'".into()))
        );
    }
}
