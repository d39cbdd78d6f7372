//! OWL 2 vocabulary terms used by the RDF mapping.

use oxrdf::NamedNodeRef;

pub const OWL_NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

macro_rules! owl {
    ($($name:ident = $local:literal),* $(,)?) => {
        $(pub const $name: NamedNodeRef<'_> =
            NamedNodeRef::new_unchecked(concat!("http://www.w3.org/2002/07/owl#", $local));)*
    };
}

owl! {
    // Classes of the vocabulary
    ONTOLOGY = "Ontology",
    CLASS = "Class",
    THING = "Thing",
    RESTRICTION = "Restriction",
    OBJECT_PROPERTY = "ObjectProperty",
    DATATYPE_PROPERTY = "DatatypeProperty",
    ANNOTATION_PROPERTY = "AnnotationProperty",
    NAMED_INDIVIDUAL = "NamedIndividual",
    AXIOM = "Axiom",
    ANNOTATION = "Annotation",
    ALL_DISJOINT_CLASSES = "AllDisjointClasses",
    ALL_DISJOINT_PROPERTIES = "AllDisjointProperties",
    ALL_DIFFERENT = "AllDifferent",
    NEGATIVE_PROPERTY_ASSERTION = "NegativePropertyAssertion",

    // Property characteristics
    FUNCTIONAL_PROPERTY = "FunctionalProperty",
    INVERSE_FUNCTIONAL_PROPERTY = "InverseFunctionalProperty",
    TRANSITIVE_PROPERTY = "TransitiveProperty",
    SYMMETRIC_PROPERTY = "SymmetricProperty",
    ASYMMETRIC_PROPERTY = "AsymmetricProperty",
    REFLEXIVE_PROPERTY = "ReflexiveProperty",
    IRREFLEXIVE_PROPERTY = "IrreflexiveProperty",

    // Header
    IMPORTS = "imports",
    VERSION_IRI = "versionIRI",

    // Class and property axioms
    EQUIVALENT_CLASS = "equivalentClass",
    DISJOINT_WITH = "disjointWith",
    DISJOINT_UNION_OF = "disjointUnionOf",
    HAS_KEY = "hasKey",
    EQUIVALENT_PROPERTY = "equivalentProperty",
    PROPERTY_DISJOINT_WITH = "propertyDisjointWith",
    PROPERTY_CHAIN_AXIOM = "propertyChainAxiom",
    INVERSE_OF = "inverseOf",
    SAME_AS = "sameAs",
    DIFFERENT_FROM = "differentFrom",
    MEMBERS = "members",
    DISTINCT_MEMBERS = "distinctMembers",

    // Negative assertions
    SOURCE_INDIVIDUAL = "sourceIndividual",
    ASSERTION_PROPERTY = "assertionProperty",
    TARGET_INDIVIDUAL = "targetIndividual",
    TARGET_VALUE = "targetValue",

    // Reification
    ANNOTATED_SOURCE = "annotatedSource",
    ANNOTATED_PROPERTY = "annotatedProperty",
    ANNOTATED_TARGET = "annotatedTarget",

    // Restrictions
    ON_PROPERTY = "onProperty",
    SOME_VALUES_FROM = "someValuesFrom",
    ALL_VALUES_FROM = "allValuesFrom",
    HAS_VALUE = "hasValue",
    HAS_SELF = "hasSelf",
    MIN_CARDINALITY = "minCardinality",
    MAX_CARDINALITY = "maxCardinality",
    CARDINALITY = "cardinality",
    MIN_QUALIFIED_CARDINALITY = "minQualifiedCardinality",
    MAX_QUALIFIED_CARDINALITY = "maxQualifiedCardinality",
    QUALIFIED_CARDINALITY = "qualifiedCardinality",
    ON_CLASS = "onClass",
    ON_DATA_RANGE = "onDataRange",

    // Boolean combinations and enumerations
    INTERSECTION_OF = "intersectionOf",
    UNION_OF = "unionOf",
    COMPLEMENT_OF = "complementOf",
    ONE_OF = "oneOf",

    // Data ranges
    DATATYPE_COMPLEMENT_OF = "datatypeComplementOf",
    ON_DATATYPE = "onDatatype",
    WITH_RESTRICTIONS = "withRestrictions",
}

/// Predicates that only describe the inside of an anonymous expression.
pub const EXPRESSION_PREDICATES: &[NamedNodeRef<'static>] = &[
    ON_PROPERTY,
    SOME_VALUES_FROM,
    ALL_VALUES_FROM,
    HAS_VALUE,
    HAS_SELF,
    MIN_CARDINALITY,
    MAX_CARDINALITY,
    CARDINALITY,
    MIN_QUALIFIED_CARDINALITY,
    MAX_QUALIFIED_CARDINALITY,
    QUALIFIED_CARDINALITY,
    ON_CLASS,
    ON_DATA_RANGE,
    INTERSECTION_OF,
    UNION_OF,
    COMPLEMENT_OF,
    ONE_OF,
    DATATYPE_COMPLEMENT_OF,
    ON_DATATYPE,
    WITH_RESTRICTIONS,
    INVERSE_OF,
];

/// Node types that make a blank node a standalone axiom rather than an individual.
pub const AXIOM_NODE_TYPES: &[NamedNodeRef<'static>] = &[
    AXIOM,
    ANNOTATION,
    ALL_DISJOINT_CLASSES,
    ALL_DISJOINT_PROPERTIES,
    ALL_DIFFERENT,
    NEGATIVE_PROPERTY_ASSERTION,
];
