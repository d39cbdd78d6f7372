//! OWL 2 axioms as typed operand lists.
//!
//! Every axiom is a tag drawn from [`AxiomType`], an ordered list of
//! [`Operand`]s and the annotations attached to the statement itself.
//! The typed constructors below fix the operand layout of each axiom type.

use crate::annotation::{Annotation, AnnotationSubject, AnnotationValue};
use crate::axiom_type::AxiomType;
use crate::entity::{Entity, EntityKind, Individual};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use oxrdf::{Literal, NamedNode};
use rustc_hash::FxHashSet;

/// One position of an axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A named entity or an anonymous individual.
    Entity(Entity),
    /// An anonymous class expression.
    Expression(ClassExpression),
    /// `ObjectInverseOf(P)`.
    InverseProperty(NamedNode),
    /// An anonymous data range.
    DataRange(DataRange),
    /// A literal value.
    Literal(Literal),
    /// A bare IRI (annotation subjects and values, annotation property domains and ranges).
    Iri(NamedNode),
}

impl Operand {
    /// Returns `true` for operands that have no IRI of their own.
    pub fn is_anonymous(&self) -> bool {
        match self {
            Self::Entity(entity) => entity.is_anonymous(),
            Self::Expression(_) | Self::InverseProperty(_) | Self::DataRange(_) => true,
            Self::Literal(_) | Self::Iri(_) => false,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    fn collect_signature(&self, signature: &mut FxHashSet<Entity>) {
        match self {
            Self::Entity(entity) => {
                signature.insert(entity.clone());
            }
            Self::Expression(expression) => expression.collect_signature(signature),
            Self::InverseProperty(iri) => {
                signature.insert(Entity::ObjectProperty(iri.clone()));
            }
            Self::DataRange(range) => range.collect_signature(signature),
            Self::Literal(_) | Self::Iri(_) => {}
        }
    }
}

impl From<Entity> for Operand {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<Individual> for Operand {
    fn from(individual: Individual) -> Self {
        Self::Entity(individual.into())
    }
}

impl From<ClassExpression> for Operand {
    fn from(expression: ClassExpression) -> Self {
        match expression {
            ClassExpression::Class(iri) => Self::Entity(Entity::Class(iri)),
            expression => Self::Expression(expression),
        }
    }
}

impl From<ObjectPropertyExpression> for Operand {
    fn from(property: ObjectPropertyExpression) -> Self {
        match property {
            ObjectPropertyExpression::ObjectProperty(iri) => Self::Entity(Entity::ObjectProperty(iri)),
            ObjectPropertyExpression::ObjectInverseOf(iri) => Self::InverseProperty(iri),
        }
    }
}

impl From<DataRange> for Operand {
    fn from(range: DataRange) -> Self {
        match range {
            DataRange::Datatype(iri) => Self::Entity(Entity::Datatype(iri)),
            range => Self::DataRange(range),
        }
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<AnnotationValue> for Operand {
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Iri(iri) => Self::Iri(iri),
            AnnotationValue::Literal(literal) => Self::Literal(literal),
            AnnotationValue::Anonymous(node) => Self::Entity(Entity::AnonymousIndividual(node)),
        }
    }
}

impl From<AnnotationSubject> for Operand {
    fn from(subject: AnnotationSubject) -> Self {
        match subject {
            AnnotationSubject::Iri(iri) => Self::Iri(iri),
            AnnotationSubject::Anonymous(node) => Self::Entity(Entity::AnonymousIndividual(node)),
        }
    }
}

fn class_operand(class: impl Into<ClassExpression>) -> Operand {
    let class: ClassExpression = class.into();
    class.into()
}

fn property_operand(property: impl Into<ObjectPropertyExpression>) -> Operand {
    let property: ObjectPropertyExpression = property.into();
    property.into()
}

fn range_operand(range: impl Into<DataRange>) -> Operand {
    let range: DataRange = range.into();
    range.into()
}

fn individual_operand(individual: impl Into<Individual>) -> Operand {
    let individual: Individual = individual.into();
    individual.into()
}

fn subject_operand(subject: impl Into<AnnotationSubject>) -> Operand {
    let subject: AnnotationSubject = subject.into();
    subject.into()
}

/// An object property characteristic, each one its own axiom type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCharacteristic {
    Functional,
    InverseFunctional,
    Reflexive,
    Irreflexive,
    Symmetric,
    Asymmetric,
    Transitive,
}

impl PropertyCharacteristic {
    pub const ALL: [Self; 7] = [
        Self::Functional,
        Self::InverseFunctional,
        Self::Reflexive,
        Self::Irreflexive,
        Self::Symmetric,
        Self::Asymmetric,
        Self::Transitive,
    ];

    pub const fn axiom_type(self) -> AxiomType {
        match self {
            Self::Functional => AxiomType::FunctionalObjectProperty,
            Self::InverseFunctional => AxiomType::InverseFunctionalObjectProperty,
            Self::Reflexive => AxiomType::ReflexiveObjectProperty,
            Self::Irreflexive => AxiomType::IrreflexiveObjectProperty,
            Self::Symmetric => AxiomType::SymmetricObjectProperty,
            Self::Asymmetric => AxiomType::AsymmetricObjectProperty,
            Self::Transitive => AxiomType::TransitiveObjectProperty,
        }
    }

    pub fn from_axiom_type(axiom_type: AxiomType) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.axiom_type() == axiom_type)
    }
}

/// An OWL 2 axiom.
///
/// Axioms are immutable: two axioms with the same type, operands and
/// annotations are the same statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Axiom {
    axiom_type: AxiomType,
    operands: Vec<Operand>,
    annotations: Vec<Annotation>,
}

impl Axiom {
    fn new(axiom_type: AxiomType, operands: Vec<Operand>) -> Self {
        Self {
            axiom_type,
            operands,
            annotations: Vec::new(),
        }
    }

    fn nary<T: Into<Operand>>(axiom_type: AxiomType, members: impl IntoIterator<Item = T>) -> Self {
        Self::new(axiom_type, members.into_iter().map(Into::into).collect())
    }

    // === Declarations ===

    /// `Declaration(E)`
    pub fn declaration(entity: Entity) -> Self {
        Self::new(AxiomType::Declaration, vec![entity.into()])
    }

    // === Class axioms ===

    /// `SubClassOf(sub, super)`
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::new(
            AxiomType::SubClassOf,
            vec![class_operand(sub), class_operand(sup)],
        )
    }

    /// `EquivalentClasses(C1, ..., Cn)`
    pub fn equivalent_classes(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::nary(AxiomType::EquivalentClasses, classes)
    }

    /// `DisjointClasses(C1, ..., Cn)`
    pub fn disjoint_classes(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::nary(AxiomType::DisjointClasses, classes)
    }

    /// `DisjointUnion(C, C1, ..., Cn)`: the class comes first.
    pub fn disjoint_union(
        class: NamedNode,
        classes: impl IntoIterator<Item = ClassExpression>,
    ) -> Self {
        let mut operands = vec![Operand::Entity(Entity::Class(class))];
        operands.extend(classes.into_iter().map(Operand::from));
        Self::new(AxiomType::DisjointUnion, operands)
    }

    /// `HasKey(C, (P1 ... Pm), (D1 ... Dn))`: the class then every key property.
    pub fn has_key(
        class: impl Into<ClassExpression>,
        object_properties: impl IntoIterator<Item = ObjectPropertyExpression>,
        data_properties: impl IntoIterator<Item = NamedNode>,
    ) -> Self {
        let mut operands = vec![class_operand(class)];
        operands.extend(object_properties.into_iter().map(Operand::from));
        operands.extend(
            data_properties
                .into_iter()
                .map(|p| Operand::Entity(Entity::DataProperty(p))),
        );
        Self::new(AxiomType::HasKey, operands)
    }

    // === Object property axioms ===

    /// `SubObjectPropertyOf(sub, super)`
    pub fn sub_object_property_of(
        sub: impl Into<ObjectPropertyExpression>,
        sup: impl Into<ObjectPropertyExpression>,
    ) -> Self {
        Self::new(
            AxiomType::SubObjectPropertyOf,
            vec![property_operand(sub), property_operand(sup)],
        )
    }

    /// `SubObjectPropertyOf(ObjectPropertyChain(P1 ... Pn), P)`: the chain then the super property.
    pub fn sub_property_chain_of(
        chain: impl IntoIterator<Item = ObjectPropertyExpression>,
        sup: NamedNode,
    ) -> Self {
        let mut operands = chain.into_iter().map(Operand::from).collect::<Vec<_>>();
        operands.push(Operand::Entity(Entity::ObjectProperty(sup)));
        Self::new(AxiomType::SubPropertyChainOf, operands)
    }

    /// `EquivalentObjectProperties(P1, ..., Pn)`
    pub fn equivalent_object_properties(
        properties: impl IntoIterator<Item = ObjectPropertyExpression>,
    ) -> Self {
        Self::nary(AxiomType::EquivalentObjectProperties, properties)
    }

    /// `DisjointObjectProperties(P1, ..., Pn)`
    pub fn disjoint_object_properties(
        properties: impl IntoIterator<Item = ObjectPropertyExpression>,
    ) -> Self {
        Self::nary(AxiomType::DisjointObjectProperties, properties)
    }

    /// `InverseObjectProperties(P, Q)`
    pub fn inverse_object_properties(first: NamedNode, second: NamedNode) -> Self {
        Self::new(
            AxiomType::InverseObjectProperties,
            vec![
                Entity::ObjectProperty(first).into(),
                Entity::ObjectProperty(second).into(),
            ],
        )
    }

    /// `ObjectPropertyDomain(P, C)`
    pub fn object_property_domain(
        property: impl Into<ObjectPropertyExpression>,
        domain: impl Into<ClassExpression>,
    ) -> Self {
        Self::new(
            AxiomType::ObjectPropertyDomain,
            vec![property_operand(property), class_operand(domain)],
        )
    }

    /// `ObjectPropertyRange(P, C)`
    pub fn object_property_range(
        property: impl Into<ObjectPropertyExpression>,
        range: impl Into<ClassExpression>,
    ) -> Self {
        Self::new(
            AxiomType::ObjectPropertyRange,
            vec![property_operand(property), class_operand(range)],
        )
    }

    /// `FunctionalObjectProperty(P)`, `TransitiveObjectProperty(P)`, ...
    pub fn object_property_characteristic(
        characteristic: PropertyCharacteristic,
        property: impl Into<ObjectPropertyExpression>,
    ) -> Self {
        Self::new(characteristic.axiom_type(), vec![property_operand(property)])
    }

    // === Data property axioms ===

    /// `SubDataPropertyOf(sub, super)`
    pub fn sub_data_property_of(sub: NamedNode, sup: NamedNode) -> Self {
        Self::new(
            AxiomType::SubDataPropertyOf,
            vec![
                Entity::DataProperty(sub).into(),
                Entity::DataProperty(sup).into(),
            ],
        )
    }

    /// `EquivalentDataProperties(P1, ..., Pn)`
    pub fn equivalent_data_properties(properties: impl IntoIterator<Item = NamedNode>) -> Self {
        Self::nary(
            AxiomType::EquivalentDataProperties,
            properties.into_iter().map(Entity::DataProperty),
        )
    }

    /// `DisjointDataProperties(P1, ..., Pn)`
    pub fn disjoint_data_properties(properties: impl IntoIterator<Item = NamedNode>) -> Self {
        Self::nary(
            AxiomType::DisjointDataProperties,
            properties.into_iter().map(Entity::DataProperty),
        )
    }

    /// `DataPropertyDomain(P, C)`
    pub fn data_property_domain(property: NamedNode, domain: impl Into<ClassExpression>) -> Self {
        Self::new(
            AxiomType::DataPropertyDomain,
            vec![Entity::DataProperty(property).into(), class_operand(domain)],
        )
    }

    /// `DataPropertyRange(P, D)`
    pub fn data_property_range(property: NamedNode, range: impl Into<DataRange>) -> Self {
        Self::new(
            AxiomType::DataPropertyRange,
            vec![Entity::DataProperty(property).into(), range_operand(range)],
        )
    }

    /// `FunctionalDataProperty(P)`
    pub fn functional_data_property(property: NamedNode) -> Self {
        Self::new(
            AxiomType::FunctionalDataProperty,
            vec![Entity::DataProperty(property).into()],
        )
    }

    /// `DatatypeDefinition(DT, D)`
    pub fn datatype_definition(datatype: NamedNode, range: impl Into<DataRange>) -> Self {
        Self::new(
            AxiomType::DatatypeDefinition,
            vec![Entity::Datatype(datatype).into(), range_operand(range)],
        )
    }

    // === Assertions ===

    /// `ClassAssertion(C, a)`
    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::new(
            AxiomType::ClassAssertion,
            vec![class_operand(class), individual_operand(individual)],
        )
    }

    /// `ObjectPropertyAssertion(P, a, b)`
    pub fn object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::new(
            AxiomType::ObjectPropertyAssertion,
            vec![
                property_operand(property),
                individual_operand(source),
                individual_operand(target),
            ],
        )
    }

    /// `NegativeObjectPropertyAssertion(P, a, b)`
    pub fn negative_object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::new(
            AxiomType::NegativeObjectPropertyAssertion,
            vec![
                property_operand(property),
                individual_operand(source),
                individual_operand(target),
            ],
        )
    }

    /// `DataPropertyAssertion(P, a, v)`
    pub fn data_property_assertion(
        property: NamedNode,
        source: impl Into<Individual>,
        target: Literal,
    ) -> Self {
        Self::new(
            AxiomType::DataPropertyAssertion,
            vec![
                Entity::DataProperty(property).into(),
                individual_operand(source),
                target.into(),
            ],
        )
    }

    /// `NegativeDataPropertyAssertion(P, a, v)`
    pub fn negative_data_property_assertion(
        property: NamedNode,
        source: impl Into<Individual>,
        target: Literal,
    ) -> Self {
        Self::new(
            AxiomType::NegativeDataPropertyAssertion,
            vec![
                Entity::DataProperty(property).into(),
                individual_operand(source),
                target.into(),
            ],
        )
    }

    /// `SameIndividual(a1, ..., an)`
    pub fn same_individual(individuals: impl IntoIterator<Item = Individual>) -> Self {
        Self::nary(AxiomType::SameIndividual, individuals)
    }

    /// `DifferentIndividuals(a1, ..., an)`
    pub fn different_individuals(individuals: impl IntoIterator<Item = Individual>) -> Self {
        Self::nary(AxiomType::DifferentIndividuals, individuals)
    }

    // === Annotation axioms ===

    /// `AnnotationAssertion(AP, s, v)`
    pub fn annotation_assertion(subject: impl Into<AnnotationSubject>, annotation: Annotation) -> Self {
        let property = Entity::AnnotationProperty(annotation.property().clone());
        let value = annotation.value().clone();
        Self::new(
            AxiomType::AnnotationAssertion,
            vec![property.into(), subject_operand(subject), value.into()],
        )
    }

    /// `SubAnnotationPropertyOf(sub, super)`
    pub fn sub_annotation_property_of(sub: NamedNode, sup: NamedNode) -> Self {
        Self::new(
            AxiomType::SubAnnotationPropertyOf,
            vec![
                Entity::AnnotationProperty(sub).into(),
                Entity::AnnotationProperty(sup).into(),
            ],
        )
    }

    /// `AnnotationPropertyDomain(AP, U)`
    pub fn annotation_property_domain(property: NamedNode, domain: NamedNode) -> Self {
        Self::new(
            AxiomType::AnnotationPropertyDomain,
            vec![
                Entity::AnnotationProperty(property).into(),
                Operand::Iri(domain),
            ],
        )
    }

    /// `AnnotationPropertyRange(AP, U)`
    pub fn annotation_property_range(property: NamedNode, range: NamedNode) -> Self {
        Self::new(
            AxiomType::AnnotationPropertyRangeOf,
            vec![
                Entity::AnnotationProperty(property).into(),
                Operand::Iri(range),
            ],
        )
    }

    /// Attaches annotations to this axiom. Repeated annotations collapse.
    #[must_use]
    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        for annotation in annotations {
            if !self.annotations.contains(&annotation) {
                self.annotations.push(annotation);
            }
        }
        self
    }

    #[inline]
    pub fn axiom_type(&self) -> AxiomType {
        self.axiom_type
    }

    #[inline]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Every entity this axiom mentions, including the ones nested in
    /// anonymous expressions and the annotation properties of its annotations.
    pub fn signature(&self) -> FxHashSet<Entity> {
        let mut signature = FxHashSet::default();
        for operand in &self.operands {
            operand.collect_signature(&mut signature);
        }
        for annotation in &self.annotations {
            signature.insert(Entity::AnnotationProperty(annotation.property().clone()));
        }
        signature
    }

    /// Returns `true` if this axiom mentions any entity of `entities`.
    ///
    /// A bare IRI operand (e.g. the subject of an annotation assertion)
    /// references every named entity carrying that IRI.
    pub fn references(&self, entities: &FxHashSet<Entity>) -> bool {
        if self.signature().iter().any(|e| entities.contains(e)) {
            return true;
        }
        self.operands.iter().any(|operand| match operand {
            Operand::Iri(iri) => EntityKind::ALL
                .into_iter()
                .any(|kind| entities.contains(&kind.entity(iri.clone()))),
            _ => false,
        })
    }

    /// Returns `true` if `entity` is one of the top-level operands.
    pub fn has_operand(&self, entity: &Entity) -> bool {
        self.operands.iter().any(|operand| match operand {
            Operand::Entity(e) => e == entity,
            Operand::Iri(iri) => entity.iri() == Some(iri),
            _ => false,
        })
    }

    /// Splits an annotation assertion into its subject and annotation.
    pub fn as_annotation_assertion(&self) -> Option<(AnnotationSubject, Annotation)> {
        if self.axiom_type != AxiomType::AnnotationAssertion {
            return None;
        }
        let [Operand::Entity(Entity::AnnotationProperty(property)), subject, value] =
            self.operands.as_slice()
        else {
            return None;
        };
        let subject = match subject {
            Operand::Iri(iri) => AnnotationSubject::Iri(iri.clone()),
            Operand::Entity(Entity::AnonymousIndividual(node)) => {
                AnnotationSubject::Anonymous(node.clone())
            }
            _ => return None,
        };
        let value = match value {
            Operand::Iri(iri) => AnnotationValue::Iri(iri.clone()),
            Operand::Literal(literal) => AnnotationValue::Literal(literal.clone()),
            Operand::Entity(Entity::AnonymousIndividual(node)) => {
                AnnotationValue::Anonymous(node.clone())
            }
            _ => return None,
        };
        Some((subject, Annotation::new(property.clone(), value)))
    }
}
