//! CURIE expansion for command-line terms.

use crate::error::FilterError;
use oxrdf::NamedNode;
use std::collections::BTreeMap;

const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("obo", "http://purl.obolibrary.org/obo/"),
    ("oboInOwl", "http://www.geneontology.org/formats/oboInOwl#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
];

/// A set of `prefix → namespace` bindings.
///
/// [`PrefixMap::default`] carries the usual semantic web prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMap {
    prefixes: BTreeMap<String, String>,
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES
                .iter()
                .map(|(prefix, namespace)| ((*prefix).into(), (*namespace).into()))
                .collect(),
        }
    }
}

impl PrefixMap {
    /// Binds `prefix` to `namespace`, replacing any previous binding.
    pub fn add(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<(), FilterError> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if prefix.contains(|c: char| c == ':' || c.is_whitespace())
            || NamedNode::new(namespace.as_str()).is_err()
        {
            return Err(FilterError::InvalidPrefix(format!("{prefix}: {namespace}")));
        }
        self.prefixes.insert(prefix, namespace);
        Ok(())
    }

    /// Parses and adds a `prefix: namespace` declaration.
    pub fn add_declaration(&mut self, declaration: &str) -> Result<(), FilterError> {
        let Some((prefix, namespace)) = declaration.split_once(':') else {
            return Err(FilterError::InvalidPrefix(declaration.into()));
        };
        let namespace = namespace.trim();
        if namespace.is_empty() {
            return Err(FilterError::InvalidPrefix(declaration.into()));
        }
        self.add(prefix.trim(), namespace)
    }

    /// The namespace bound to `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Iterates over `(prefix, namespace)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    /// Expands `<iri>`, a CURIE with a known prefix, or an absolute IRI.
    ///
    /// Returns `None` when the token is none of those.
    pub fn resolve(&self, token: &str) -> Option<NamedNode> {
        let token = token.trim();
        if let Some(iri) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            return NamedNode::new(iri).ok();
        }
        if let Some((prefix, local)) = token.split_once(':') {
            if let Some(namespace) = self.prefixes.get(prefix) {
                return NamedNode::new(format!("{namespace}{local}")).ok();
            }
        }
        NamedNode::new(token).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let prefixes = PrefixMap::default();
        assert_eq!(
            prefixes.resolve("rdfs:label"),
            Some(NamedNode::new_unchecked("http://www.w3.org/2000/01/rdf-schema#label"))
        );
        assert_eq!(
            prefixes.resolve("obo:UBERON_0000001"),
            Some(NamedNode::new_unchecked("http://purl.obolibrary.org/obo/UBERON_0000001"))
        );
    }

    #[test]
    fn test_angle_brackets_and_absolute_iris() {
        let prefixes = PrefixMap::default();
        let dog = NamedNode::new_unchecked("http://example.org/Dog");
        assert_eq!(prefixes.resolve("<http://example.org/Dog>"), Some(dog.clone()));
        assert_eq!(prefixes.resolve("http://example.org/Dog"), Some(dog));
    }

    #[test]
    fn test_unresolvable_tokens() {
        let prefixes = PrefixMap::default();
        assert_eq!(prefixes.resolve("label"), None);
        assert_eq!(prefixes.resolve("<not an iri>"), None);
    }

    #[test]
    fn test_declarations() {
        let mut prefixes = PrefixMap::default();
        prefixes.add_declaration("ex: http://example.org/").unwrap();
        assert_eq!(
            prefixes.resolve("ex:Dog"),
            Some(NamedNode::new_unchecked("http://example.org/Dog"))
        );
        assert_eq!(prefixes.get("ex"), Some("http://example.org/"));
        assert!(matches!(
            prefixes.add_declaration("ex http://example.org/"),
            Err(FilterError::InvalidPrefix(_))
        ));
        assert!(prefixes.add_declaration("ex:").is_err());
    }
}
