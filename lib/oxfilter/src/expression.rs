//! OWL 2 class expressions, object property expressions, and data ranges.
//!
//! Anything that is not a plain named class, property or datatype is an
//! anonymous structure: it has no IRI of its own and only exists through the
//! axioms that mention it.

use crate::entity::{Entity, Individual};
use oxrdf::{Literal, NamedNode};
use rustc_hash::FxHashSet;

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(NamedNode),

    /// ObjectIntersectionOf(C1, ..., Cn)
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn)
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectComplementOf(C)
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectOneOf(a1, ..., an)
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C)
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C)
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectHasValue(P, a)
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// ObjectHasSelf(P)
    ObjectHasSelf(ObjectPropertyExpression),

    /// ObjectMinCardinality(n, P [C])
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P [C])
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectExactCardinality(n, P [C])
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// DataSomeValuesFrom(P, D)
    DataSomeValuesFrom {
        property: NamedNode,
        filler: DataRange,
    },

    /// DataAllValuesFrom(P, D)
    DataAllValuesFrom {
        property: NamedNode,
        filler: DataRange,
    },

    /// DataHasValue(P, v)
    DataHasValue { property: NamedNode, value: Literal },

    /// DataMinCardinality(n, P [D])
    DataMinCardinality {
        cardinality: u32,
        property: NamedNode,
        filler: Option<DataRange>,
    },

    /// DataMaxCardinality(n, P [D])
    DataMaxCardinality {
        cardinality: u32,
        property: NamedNode,
        filler: Option<DataRange>,
    },

    /// DataExactCardinality(n, P [D])
    DataExactCardinality {
        cardinality: u32,
        property: NamedNode,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(iri: impl Into<NamedNode>) -> Self {
        Self::Class(iri.into())
    }

    /// Creates an existential restriction.
    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates a universal restriction.
    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates the complement of a class expression.
    pub fn complement(c: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(c))
    }

    /// Returns true if this is not a named class.
    pub fn is_anonymous(&self) -> bool {
        !matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&NamedNode> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Adds every entity mentioned in this expression, at any depth, to `signature`.
    pub fn collect_signature(&self, signature: &mut FxHashSet<Entity>) {
        match self {
            Self::Class(c) => {
                signature.insert(Entity::Class(c.clone()));
            }
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                for operand in operands {
                    operand.collect_signature(signature);
                }
            }
            Self::ObjectComplementOf(operand) => operand.collect_signature(signature),
            Self::ObjectOneOf(individuals) => {
                signature.extend(individuals.iter().cloned().map(Entity::from));
            }
            Self::ObjectSomeValuesFrom { property, filler }
            | Self::ObjectAllValuesFrom { property, filler } => {
                property.collect_signature(signature);
                filler.collect_signature(signature);
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => {
                property.collect_signature(signature);
                signature.insert(individual.clone().into());
            }
            Self::ObjectHasSelf(property) => property.collect_signature(signature),
            Self::ObjectMinCardinality {
                property, filler, ..
            }
            | Self::ObjectMaxCardinality {
                property, filler, ..
            }
            | Self::ObjectExactCardinality {
                property, filler, ..
            } => {
                property.collect_signature(signature);
                if let Some(filler) = filler {
                    filler.collect_signature(signature);
                }
            }
            Self::DataSomeValuesFrom { property, filler }
            | Self::DataAllValuesFrom { property, filler } => {
                signature.insert(Entity::DataProperty(property.clone()));
                filler.collect_signature(signature);
            }
            Self::DataHasValue { property, .. } => {
                signature.insert(Entity::DataProperty(property.clone()));
            }
            Self::DataMinCardinality {
                property, filler, ..
            }
            | Self::DataMaxCardinality {
                property, filler, ..
            }
            | Self::DataExactCardinality {
                property, filler, ..
            } => {
                signature.insert(Entity::DataProperty(property.clone()));
                if let Some(filler) = filler {
                    filler.collect_signature(signature);
                }
            }
        }
    }
}

impl From<NamedNode> for ClassExpression {
    fn from(iri: NamedNode) -> Self {
        Self::Class(iri)
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// A named object property
    ObjectProperty(NamedNode),

    /// ObjectInverseOf(P)
    ObjectInverseOf(NamedNode),
}

impl ObjectPropertyExpression {
    /// Returns the named property, ignoring a possible inversion.
    pub fn base_property(&self) -> &NamedNode {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => p,
        }
    }

    fn collect_signature(&self, signature: &mut FxHashSet<Entity>) {
        signature.insert(Entity::ObjectProperty(self.base_property().clone()));
    }
}

impl From<NamedNode> for ObjectPropertyExpression {
    fn from(p: NamedNode) -> Self {
        Self::ObjectProperty(p)
    }
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    /// A named datatype (e.g., xsd:string)
    Datatype(NamedNode),

    /// DataIntersectionOf(D1, ..., Dn)
    DataIntersectionOf(Vec<DataRange>),

    /// DataUnionOf(D1, ..., Dn)
    DataUnionOf(Vec<DataRange>),

    /// DataComplementOf(D)
    DataComplementOf(Box<DataRange>),

    /// DataOneOf(v1, ..., vn)
    DataOneOf(Vec<Literal>),

    /// DatatypeRestriction(D, facet1 value1, ...)
    DatatypeRestriction {
        datatype: NamedNode,
        facets: Vec<(NamedNode, Literal)>,
    },
}

impl DataRange {
    /// Returns true if this is not a plain datatype.
    pub fn is_anonymous(&self) -> bool {
        !matches!(self, Self::Datatype(_))
    }

    /// Adds every datatype mentioned in this range to `signature`.
    pub fn collect_signature(&self, signature: &mut FxHashSet<Entity>) {
        match self {
            Self::Datatype(dt) | Self::DatatypeRestriction { datatype: dt, .. } => {
                signature.insert(Entity::Datatype(dt.clone()));
            }
            Self::DataIntersectionOf(ranges) | Self::DataUnionOf(ranges) => {
                for range in ranges {
                    range.collect_signature(signature);
                }
            }
            Self::DataComplementOf(range) => range.collect_signature(signature),
            Self::DataOneOf(_) => {}
        }
    }
}

impl From<NamedNode> for DataRange {
    fn from(node: NamedNode) -> Self {
        Self::Datatype(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{local}"))
    }

    #[test]
    fn test_nested_signature() {
        let expression = ClassExpression::ObjectIntersectionOf(vec![
            ClassExpression::class(iri("Animal")),
            ClassExpression::some_values_from(
                ObjectPropertyExpression::ObjectInverseOf(iri("eats")),
                ClassExpression::complement(ClassExpression::class(iri("Plant"))),
            ),
        ]);
        assert!(expression.is_anonymous());

        let mut signature = FxHashSet::default();
        expression.collect_signature(&mut signature);
        assert_eq!(signature.len(), 3);
        assert!(signature.contains(&Entity::Class(iri("Animal"))));
        assert!(signature.contains(&Entity::Class(iri("Plant"))));
        assert!(signature.contains(&Entity::ObjectProperty(iri("eats"))));
    }

    #[test]
    fn test_named_class_is_not_anonymous() {
        let class = ClassExpression::class(iri("Dog"));
        assert!(!class.is_anonymous());
        assert_eq!(class.as_class(), Some(&iri("Dog")));
    }
}
