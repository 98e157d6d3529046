//! RDF quad: a triple plus the named graph it belongs to.

use crate::Term;
use serde::{Deserialize, Serialize};

/// The graph component of a quad.
///
/// TriG documents place triples either in the default graph or inside a
/// named graph block labeled by an IRI or blank node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphName {
    /// The unnamed default graph
    #[default]
    Default,
    /// A named graph labeled by an IRI or blank node
    Named(Term),
}

impl GraphName {
    /// Check if this is the default graph
    pub fn is_default(&self) -> bool {
        matches!(self, GraphName::Default)
    }

    /// Get the label term for a named graph
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            GraphName::Named(t) => Some(t),
            GraphName::Default => None,
        }
    }
}

impl std::fmt::Display for GraphName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphName::Default => Ok(()),
            GraphName::Named(t) => write!(f, "{}", t),
        }
    }
}

/// A single RDF statement with its graph label.
///
/// # Invariants
///
/// - `s` is an IRI or blank node
/// - `p` is always an IRI
/// - `g` labels are IRIs or blank nodes
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    /// Subject
    pub s: Term,
    /// Predicate
    pub p: Term,
    /// Object
    pub o: Term,
    /// Graph label
    pub g: GraphName,
}

impl Quad {
    /// Create a new quad
    pub fn new(s: Term, p: Term, o: Term, g: GraphName) -> Self {
        Self { s, p, o, g }
    }

    /// Create a quad in the default graph
    pub fn triple(s: Term, p: Term, o: Term) -> Self {
        Self::new(s, p, o, GraphName::Default)
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.g {
            GraphName::Default => write!(f, "{} {} {} .", self.s, self.p, self.o),
            GraphName::Named(g) => write!(f, "{} {} {} {} .", self.s, self.p, self.o, g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_name() {
        assert!(GraphName::Default.is_default());
        assert!(GraphName::Default.as_term().is_none());

        let named = GraphName::Named(Term::iri("http://example.org/g"));
        assert!(!named.is_default());
        assert_eq!(
            named.as_term().and_then(|t| t.as_iri()),
            Some("http://example.org/g")
        );
    }

    #[test]
    fn test_quad_display() {
        let q = Quad::triple(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(
            format!("{}", q),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );

        let q = Quad::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
            GraphName::Named(Term::iri("http://example.org/g")),
        );
        assert_eq!(
            format!("{}", q),
            "<http://example.org/s> <http://example.org/p> \"o\" <http://example.org/g> ."
        );
    }
}
