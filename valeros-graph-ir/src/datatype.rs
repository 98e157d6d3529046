//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`, and language-tagged strings use
//! `rdf:langString`.

use crate::vocab::{rdf, xsd};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RDF literal datatype, stored as an expanded IRI.
///
/// Use `Datatype::xsd_string()` for plain strings and
/// `Datatype::rdf_lang_string()` for language-tagged strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(xsd::STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(xsd::BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(xsd::INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(xsd::DOUBLE)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(xsd::DECIMAL)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(rdf::LANG_STRING)
    }

    /// Get the expanded IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is xsd:string
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == xsd::STRING
    }

    /// Check if this is rdf:langString
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == rdf::LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Datatype::xsd_string().as_iri(),
            "http://www.w3.org/2001/XMLSchema#string"
        );
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_boolean().is_xsd_string());
        assert!(Datatype::rdf_lang_string().is_lang_string());
    }

    #[test]
    fn test_from_iri_roundtrip() {
        let dt = Datatype::from_iri("http://www.w3.org/2001/XMLSchema#date");
        assert_eq!(dt.as_iri(), "http://www.w3.org/2001/XMLSchema#date");
        assert_eq!(dt, Datatype::from_iri("http://www.w3.org/2001/XMLSchema#date"));
    }
}
