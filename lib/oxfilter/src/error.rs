//! Error types for axiom filtering and for loading ontologies from RDF.

/// An invalid filter option.
///
/// Every variant embeds the offending token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    /// An `--axioms` token that names no axiom type, group or `all`.
    #[error("{0} is not a valid axiom type")]
    InvalidAxiomType(String),

    /// A `--select` token that is neither a relation nor a flag keyword.
    #[error("{0} is not a valid selection")]
    InvalidSelect(String),

    /// A CURIE or IRI that could not be expanded.
    #[error("{0} cannot be resolved to an IRI")]
    UnresolvableIdentifier(String),

    /// A recognized but unsupported feature.
    #[error("{0} is not implemented")]
    UnimplementedFeature(String),

    /// A seed term that no entity of the input carries.
    #[error("{0} does not identify any entity of the ontology")]
    UnknownEntity(String),

    /// A malformed `prefix: namespace` declaration.
    #[error("invalid prefix declaration '{0}', expected 'prefix: namespace'")]
    InvalidPrefix(String),
}

/// An RDF graph that does not map to OWL 2 axioms.
#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct OwlParseError {
    kind: ParseErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing required property.
    MissingProperty,
    /// Invalid property value type.
    InvalidValue,
    /// Unknown OWL construct.
    UnknownConstruct,
    /// Malformed RDF list.
    MalformedList,
}

impl OwlParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_property(subject: impl std::fmt::Display, property: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingProperty,
            format!("{subject} has no {property}"),
        )
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, message)
    }

    pub fn unknown_construct(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnknownConstruct, message)
    }

    pub fn malformed_list(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedList, message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}
