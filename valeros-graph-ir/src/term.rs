//! RDF term types: IRI, blank node, and literal
//!
//! Terms are the building blocks of quads. A term can be:
//! - An IRI (always expanded, never prefixed)
//! - A blank node (with stable identifier)
//! - A literal (value + explicit datatype + optional language tag)

use crate::Datatype;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Blank node identifier
///
/// Blank node IDs are stable within a dataset but have no global meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Literal value storage
///
/// Stores the actual value in a type-appropriate format so downstream
/// consumers never re-parse lexical forms that the source already decoded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    /// String value (UTF-8)
    String(Arc<str>),
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64 range)
    Integer(i64),
    /// Floating point value (f64)
    Double(f64),
}

impl LiteralValue {
    /// Create a string literal value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Double(d) => {
                if d.is_nan() {
                    "NaN".to_string()
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        "INF".to_string()
                    } else {
                        "-INF".to_string()
                    }
                } else {
                    d.to_string()
                }
            }
        }
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a == b,
            // Bit comparison so NaN == NaN and datasets stay hashable
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            LiteralValue::String(s) => s.hash(state),
            LiteralValue::Boolean(b) => b.hash(state),
            LiteralValue::Integer(i) => i.hash(state),
            LiteralValue::Double(d) => d.to_bits().hash(state),
        }
    }
}

/// An RDF term (subject, predicate, object, or graph-label position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - For `Term::Literal` with a language tag, the datatype must be
///   `rdf:langString`.
/// - The predicate position of a quad can only be `Term::Iri`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    Iri(Arc<str>),

    /// Blank node with stable identifier
    BlankNode(BlankId),

    /// Literal value with explicit datatype
    Literal {
        /// The actual value
        value: LiteralValue,
        /// Datatype (always present, never None)
        datatype: Datatype,
        /// Language tag (only valid when datatype is rdf:langString)
        language: Option<Arc<str>>,
    },
}

impl Term {
    /// Create an IRI term from an expanded IRI string
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Arc::from(iri.as_ref()))
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Term::Literal {
            value: LiteralValue::string(value),
            datatype: Datatype::xsd_string(),
            language: None,
        }
    }

    /// Create a boolean literal (xsd:boolean)
    pub fn boolean(value: bool) -> Self {
        Term::Literal {
            value: LiteralValue::Boolean(value),
            datatype: Datatype::xsd_boolean(),
            language: None,
        }
    }

    /// Create an integer literal (xsd:integer)
    pub fn integer(value: i64) -> Self {
        Term::Literal {
            value: LiteralValue::Integer(value),
            datatype: Datatype::xsd_integer(),
            language: None,
        }
    }

    /// Create a double literal (xsd:double)
    pub fn double(value: f64) -> Self {
        Term::Literal {
            value: LiteralValue::Double(value),
            datatype: Datatype::xsd_double(),
            language: None,
        }
    }

    /// Create a language-tagged string literal (rdf:langString)
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal {
            value: LiteralValue::string(value),
            datatype: Datatype::rdf_lang_string(),
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Create a typed literal with a custom datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            value: LiteralValue::string(value),
            datatype,
            language: None,
        }
    }

    /// Check if this is an IRI term
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Try to get as IRI string
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<(&LiteralValue, &Datatype, Option<&str>)> {
        match self {
            Term::Literal {
                value,
                datatype,
                language,
            } => Some((value, datatype, language.as_deref())),
            _ => None,
        }
    }

    /// Identity string for subject and graph-label positions.
    ///
    /// IRIs yield the bare IRI; blank nodes yield their `_:label` form;
    /// literals yield their lexical form (they cannot legally occur in these
    /// positions, but the conversion is total).
    pub fn id_string(&self) -> String {
        match self {
            Term::Iri(iri) => iri.to_string(),
            Term::BlankNode(id) => id.to_string(),
            Term::Literal { value, .. } => value.lexical(),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", value.lexical())?;
                if let Some(lang) = language {
                    write!(f, "@{}", lang)
                } else if !datatype.is_xsd_string() {
                    write!(f, "^^<{}>", datatype.as_iri())
                } else {
                    Ok(())
                }
            }
        }
    }
}
