//! The closed set of OWL 2 axiom kinds and the `--axioms` selection syntax.

use crate::error::FilterError;
use rustc_hash::FxHashSet;
use std::fmt;

/// The kind of an OWL 2 axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxiomType {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    HasKey,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRangeOf,
}

impl AxiomType {
    /// Every axiom type.
    pub const ALL: &[Self] = &[
        Self::Declaration,
        Self::SubClassOf,
        Self::EquivalentClasses,
        Self::DisjointClasses,
        Self::DisjointUnion,
        Self::SubObjectPropertyOf,
        Self::SubPropertyChainOf,
        Self::EquivalentObjectProperties,
        Self::DisjointObjectProperties,
        Self::InverseObjectProperties,
        Self::ObjectPropertyDomain,
        Self::ObjectPropertyRange,
        Self::FunctionalObjectProperty,
        Self::InverseFunctionalObjectProperty,
        Self::ReflexiveObjectProperty,
        Self::IrreflexiveObjectProperty,
        Self::SymmetricObjectProperty,
        Self::AsymmetricObjectProperty,
        Self::TransitiveObjectProperty,
        Self::SubDataPropertyOf,
        Self::EquivalentDataProperties,
        Self::DisjointDataProperties,
        Self::DataPropertyDomain,
        Self::DataPropertyRange,
        Self::FunctionalDataProperty,
        Self::DatatypeDefinition,
        Self::HasKey,
        Self::ClassAssertion,
        Self::ObjectPropertyAssertion,
        Self::NegativeObjectPropertyAssertion,
        Self::DataPropertyAssertion,
        Self::NegativeDataPropertyAssertion,
        Self::SameIndividual,
        Self::DifferentIndividuals,
        Self::AnnotationAssertion,
        Self::SubAnnotationPropertyOf,
        Self::AnnotationPropertyDomain,
        Self::AnnotationPropertyRangeOf,
    ];

    /// Assertional axioms, about individuals.
    pub const A_BOX: &[Self] = &[
        Self::ClassAssertion,
        Self::ObjectPropertyAssertion,
        Self::NegativeObjectPropertyAssertion,
        Self::DataPropertyAssertion,
        Self::NegativeDataPropertyAssertion,
        Self::SameIndividual,
        Self::DifferentIndividuals,
    ];

    /// Terminological axioms, about classes.
    pub const T_BOX: &[Self] = &[
        Self::SubClassOf,
        Self::EquivalentClasses,
        Self::DisjointClasses,
        Self::DisjointUnion,
        Self::ObjectPropertyDomain,
        Self::ObjectPropertyRange,
        Self::FunctionalObjectProperty,
        Self::InverseFunctionalObjectProperty,
        Self::DataPropertyDomain,
        Self::DataPropertyRange,
        Self::FunctionalDataProperty,
        Self::DatatypeDefinition,
        Self::HasKey,
    ];

    /// Role axioms, about properties.
    pub const R_BOX: &[Self] = &[
        Self::SubObjectPropertyOf,
        Self::SubPropertyChainOf,
        Self::EquivalentObjectProperties,
        Self::DisjointObjectProperties,
        Self::InverseObjectProperties,
        Self::ReflexiveObjectProperty,
        Self::IrreflexiveObjectProperty,
        Self::SymmetricObjectProperty,
        Self::AsymmetricObjectProperty,
        Self::TransitiveObjectProperty,
        Self::SubDataPropertyOf,
        Self::EquivalentDataProperties,
        Self::DisjointDataProperties,
    ];

    /// The OWL 2 functional-syntax name of this axiom type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Declaration => "Declaration",
            Self::SubClassOf => "SubClassOf",
            Self::EquivalentClasses => "EquivalentClasses",
            Self::DisjointClasses => "DisjointClasses",
            Self::DisjointUnion => "DisjointUnion",
            Self::SubObjectPropertyOf => "SubObjectPropertyOf",
            Self::SubPropertyChainOf => "SubPropertyChainOf",
            Self::EquivalentObjectProperties => "EquivalentObjectProperties",
            Self::DisjointObjectProperties => "DisjointObjectProperties",
            Self::InverseObjectProperties => "InverseObjectProperties",
            Self::ObjectPropertyDomain => "ObjectPropertyDomain",
            Self::ObjectPropertyRange => "ObjectPropertyRange",
            Self::FunctionalObjectProperty => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty => "TransitiveObjectProperty",
            Self::SubDataPropertyOf => "SubDataPropertyOf",
            Self::EquivalentDataProperties => "EquivalentDataProperties",
            Self::DisjointDataProperties => "DisjointDataProperties",
            Self::DataPropertyDomain => "DataPropertyDomain",
            Self::DataPropertyRange => "DataPropertyRange",
            Self::FunctionalDataProperty => "FunctionalDataProperty",
            Self::DatatypeDefinition => "DatatypeDefinition",
            Self::HasKey => "HasKey",
            Self::ClassAssertion => "ClassAssertion",
            Self::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion => "NegativeDataPropertyAssertion",
            Self::SameIndividual => "SameIndividual",
            Self::DifferentIndividuals => "DifferentIndividuals",
            Self::AnnotationAssertion => "AnnotationAssertion",
            Self::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            Self::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            Self::AnnotationPropertyRangeOf => "AnnotationPropertyRangeOf",
        }
    }

    /// Looks up an axiom type by its name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    /// Resolves `--axioms` values into a set of axiom types.
    ///
    /// Each value may join several tokens with `+`. Dashes are stripped from
    /// every token before comparison, which is then case-insensitive.
    /// A token is either an axiom type name, `all`, or one of the `a_box`,
    /// `t_box` and `r_box` groups. No value at all selects every type.
    pub fn resolve(values: &[impl AsRef<str>]) -> Result<FxHashSet<Self>, FilterError> {
        let mut tokens = values
            .iter()
            .flat_map(|value| value.as_ref().split('+'))
            .map(|token| token.replace('-', ""))
            .collect::<Vec<_>>();
        if tokens.is_empty() {
            tokens.push("all".into());
        }
        let mut types = FxHashSet::default();
        for token in tokens {
            if let Some(axiom_type) = Self::from_name(&token) {
                types.insert(axiom_type);
            } else if token.eq_ignore_ascii_case("all") {
                types.extend(Self::ALL);
            } else if token.eq_ignore_ascii_case("a_box") {
                types.extend(Self::A_BOX);
            } else if token.eq_ignore_ascii_case("t_box") {
                types.extend(Self::T_BOX);
            } else if token.eq_ignore_ascii_case("r_box") {
                types.extend(Self::R_BOX);
            } else {
                return Err(FilterError::InvalidAxiomType(token));
            }
        }
        Ok(types)
    }
}

impl fmt::Display for AxiomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
