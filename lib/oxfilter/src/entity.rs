//! OWL 2 entities (classes, properties, datatypes and individuals).

use oxrdf::{BlankNode, NamedNode, Term};
use std::fmt;

/// The kind of a named OWL entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// `owl:Class`
    Class,
    /// `owl:ObjectProperty`
    ObjectProperty,
    /// `owl:DatatypeProperty`
    DataProperty,
    /// `owl:AnnotationProperty`
    AnnotationProperty,
    /// `owl:NamedIndividual`
    NamedIndividual,
    /// `rdfs:Datatype`
    Datatype,
}

impl EntityKind {
    /// Every entity kind.
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::ObjectProperty,
        Self::DataProperty,
        Self::AnnotationProperty,
        Self::NamedIndividual,
        Self::Datatype,
    ];

    /// Builds the entity of this kind with the given IRI.
    #[inline]
    pub fn entity(self, iri: NamedNode) -> Entity {
        match self {
            Self::Class => Entity::Class(iri),
            Self::ObjectProperty => Entity::ObjectProperty(iri),
            Self::DataProperty => Entity::DataProperty(iri),
            Self::AnnotationProperty => Entity::AnnotationProperty(iri),
            Self::NamedIndividual => Entity::NamedIndividual(iri),
            Self::Datatype => Entity::Datatype(iri),
        }
    }
}

/// An entity of an ontology graph.
///
/// Named entities are identified by their kind and IRI, so a punned IRI
/// (e.g. used both as a class and as an individual) yields two distinct entities.
/// Anonymous individuals are identified by their blank node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    /// An OWL class.
    Class(NamedNode),
    /// An object property, relating individuals to individuals.
    ObjectProperty(NamedNode),
    /// A data property, relating individuals to literals.
    DataProperty(NamedNode),
    /// An annotation property.
    AnnotationProperty(NamedNode),
    /// A named individual.
    NamedIndividual(NamedNode),
    /// A datatype.
    Datatype(NamedNode),
    /// An anonymous individual (blank node).
    AnonymousIndividual(BlankNode),
}

impl Entity {
    /// Returns the kind of this entity, `None` for anonymous individuals.
    #[inline]
    pub fn kind(&self) -> Option<EntityKind> {
        Some(match self {
            Self::Class(_) => EntityKind::Class,
            Self::ObjectProperty(_) => EntityKind::ObjectProperty,
            Self::DataProperty(_) => EntityKind::DataProperty,
            Self::AnnotationProperty(_) => EntityKind::AnnotationProperty,
            Self::NamedIndividual(_) => EntityKind::NamedIndividual,
            Self::Datatype(_) => EntityKind::Datatype,
            Self::AnonymousIndividual(_) => return None,
        })
    }

    /// Returns the IRI of this entity, `None` for anonymous individuals.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Class(iri)
            | Self::ObjectProperty(iri)
            | Self::DataProperty(iri)
            | Self::AnnotationProperty(iri)
            | Self::NamedIndividual(iri)
            | Self::Datatype(iri) => Some(iri),
            Self::AnonymousIndividual(_) => None,
        }
    }

    /// Returns `true` if this entity is identified by an IRI.
    #[inline]
    pub fn is_named(&self) -> bool {
        !self.is_anonymous()
    }

    /// Returns `true` if this entity is an anonymous individual.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::AnonymousIndividual(_))
    }

    /// Returns `true` if this entity is an individual, named or anonymous.
    #[inline]
    pub fn is_individual(&self) -> bool {
        matches!(self, Self::NamedIndividual(_) | Self::AnonymousIndividual(_))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(iri) => write!(f, "Class({iri})"),
            Self::ObjectProperty(iri) => write!(f, "ObjectProperty({iri})"),
            Self::DataProperty(iri) => write!(f, "DataProperty({iri})"),
            Self::AnnotationProperty(iri) => write!(f, "AnnotationProperty({iri})"),
            Self::NamedIndividual(iri) => write!(f, "NamedIndividual({iri})"),
            Self::Datatype(iri) => write!(f, "Datatype({iri})"),
            Self::AnonymousIndividual(node) => write!(f, "{node}"),
        }
    }
}

impl From<Individual> for Entity {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(iri) => Self::NamedIndividual(iri),
            Individual::Anonymous(node) => Self::AnonymousIndividual(node),
        }
    }
}

/// An OWL individual (named or anonymous).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual (identified by an IRI).
    Named(NamedNode),
    /// An anonymous individual (blank node).
    Anonymous(BlankNode),
}

impl Individual {
    /// Returns `true` if this is a named individual.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns `true` if this is an anonymous individual.
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entity() {
        let iri = NamedNode::new_unchecked("http://example.org/Person");
        let class = Entity::Class(iri.clone());
        assert!(class.is_named());
        assert_eq!(class.iri(), Some(&iri));
        assert_eq!(class.kind(), Some(EntityKind::Class));
        assert_eq!(EntityKind::Class.entity(iri), class);
    }

    #[test]
    fn test_punning_yields_distinct_entities() {
        let iri = NamedNode::new_unchecked("http://example.org/Eagle");
        assert_ne!(Entity::Class(iri.clone()), Entity::NamedIndividual(iri));
    }

    #[test]
    fn test_anonymous_individual() {
        let node = BlankNode::new_unchecked("a1");
        let entity = Entity::from(Individual::Anonymous(node.clone()));
        assert!(entity.is_anonymous());
        assert!(entity.is_individual());
        assert_eq!(entity.iri(), None);
        assert_eq!(entity.kind(), None);
        assert_eq!(entity, Entity::AnonymousIndividual(node));
    }
}
