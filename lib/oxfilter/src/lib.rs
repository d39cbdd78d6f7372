#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod annotation;
mod axiom;
mod axiom_type;
mod entity;
mod error;
mod expression;
mod filter;
pub mod io;
mod ontology;
mod pipeline;
mod prefix;
mod relation;
mod select;
mod store;

pub use annotation::{Annotation, AnnotationSubject, AnnotationValue};
pub use axiom::{Axiom, Operand, PropertyCharacteristic};
pub use axiom_type::AxiomType;
pub use entity::{Entity, EntityKind, Individual};
pub use error::{FilterError, OwlParseError, ParseErrorKind};
pub use expression::{ClassExpression, DataRange, ObjectPropertyExpression};
pub use filter::{complement, filter, filter_anonymous, filter_complement, merge, trim_dangling};
pub use ontology::Ontology;
pub use pipeline::{Filter, FilterOptions};
pub use prefix::PrefixMap;
pub use relation::RelationType;
pub use select::{Branch, SelectClause, parse_annotation, select_entities};
pub use store::OntologyStore;
