//! Mapping between RDF graphs and [`Ontology`](crate::Ontology) values.
//!
//! Reading and writing concrete RDF syntaxes is left to `oxrdfio`: this
//! module only turns triples into axioms and back.

mod parser;
mod serializer;
mod vocab;

pub use parser::{OntologyParser, ParserConfig, parse_ontology, parse_ontology_with_config};
pub use serializer::serialize_ontology;
