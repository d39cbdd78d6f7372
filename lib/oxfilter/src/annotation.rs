use oxrdf::{BlankNode, Literal, NamedNode, Term};
use std::fmt;

/// An annotation: a property paired with a value.
///
/// Annotations appear both as annotation assertions about an entity and
/// attached to any axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    property: NamedNode,
    value: AnnotationValue,
}

impl Annotation {
    #[inline]
    pub fn new(property: NamedNode, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    #[inline]
    pub fn property(&self) -> &NamedNode {
        &self.property
    }

    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.property, self.value)
    }
}

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(NamedNode),
    Literal(Literal),
    Anonymous(BlankNode),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
            Self::Anonymous(node) => node.fmt(f),
        }
    }
}

impl From<NamedNode> for AnnotationValue {
    fn from(iri: NamedNode) -> Self {
        Self::Iri(iri)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<BlankNode> for AnnotationValue {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

/// The subject of an annotation assertion: an IRI or an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSubject {
    Iri(NamedNode),
    Anonymous(BlankNode),
}

impl From<NamedNode> for AnnotationSubject {
    fn from(iri: NamedNode) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for AnnotationSubject {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<AnnotationValue> for Term {
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Iri(iri) => iri.into(),
            AnnotationValue::Literal(literal) => literal.into(),
            AnnotationValue::Anonymous(node) => node.into(),
        }
    }
}
