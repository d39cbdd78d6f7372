use std::fmt;

/// A way of expanding a seed entity into related entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// The seed itself.
    Identity,
    /// Direct super-classes and super-properties.
    Parents,
    /// Direct sub-classes and sub-properties.
    Children,
    /// Transitive closure of [`Parents`](Self::Parents).
    Ancestors,
    /// Transitive closure of [`Children`](Self::Children).
    Descendants,
    /// Other members of equivalence axioms.
    Equivalents,
    /// Other members of disjointness axioms.
    Disjoints,
    /// Classes an individual is asserted to belong to.
    Types,
    /// Individuals asserted to belong to a class.
    Instances,
}

impl RelationType {
    pub const ALL: [Self; 9] = [
        Self::Identity,
        Self::Parents,
        Self::Children,
        Self::Ancestors,
        Self::Descendants,
        Self::Equivalents,
        Self::Disjoints,
        Self::Types,
        Self::Instances,
    ];

    /// The keyword naming this relation in a select clause.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identity => "self",
            Self::Parents => "parents",
            Self::Children => "children",
            Self::Ancestors => "ancestors",
            Self::Descendants => "descendants",
            Self::Equivalents => "equivalents",
            Self::Disjoints => "disjoints",
            Self::Types => "types",
            Self::Instances => "instances",
        }
    }

    /// Parses a relation keyword, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|relation| relation.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(RelationType::from_name("self"), Some(RelationType::Identity));
        assert_eq!(RelationType::from_name("Ancestors"), Some(RelationType::Ancestors));
        assert_eq!(RelationType::from_name("ancestor"), None);
        for relation in RelationType::ALL {
            assert_eq!(RelationType::from_name(relation.name()), Some(relation));
        }
    }
}
