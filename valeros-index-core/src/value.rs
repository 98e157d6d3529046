//! Decoded document values.
//!
//! RDF objects become plain JSON-friendly scalars before they enter a
//! document. Decoding is a single fixed function over the term's explicit
//! datatype - never runtime type inspection of serialized forms.

use serde::Serialize;
use valeros_graph_ir::vocab::xsd;
use valeros_graph_ir::{Datatype, LiteralValue, Term};

/// Datatypes whose lexical forms decode to `Value::Integer`.
const INTEGER_DATATYPES: &[&str] = &[
    xsd::INTEGER,
    xsd::LONG,
    xsd::INT,
    xsd::SHORT,
    xsd::BYTE,
    xsd::NON_NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::POSITIVE_INTEGER,
    xsd::NEGATIVE_INTEGER,
    xsd::UNSIGNED_LONG,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_BYTE,
];

/// Datatypes whose lexical forms decode to `Value::Float`.
const FLOAT_DATATYPES: &[&str] = &[xsd::FLOAT, xsd::DOUBLE, xsd::DECIMAL];

/// A single decoded field value.
///
/// `Text` and `Reference` both serialize as JSON strings; the distinction
/// matters to type classification, where both map to the text type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean scalar
    Boolean(bool),
    /// Integer scalar
    Integer(i64),
    /// Floating-point scalar
    Float(f64),
    /// Plain string (any literal without a recognized scalar datatype)
    Text(String),
    /// Identifier of another resource (IRI or blank node)
    Reference(String),
}

impl Value {
    /// Decode an RDF object term into a document value.
    ///
    /// Booleans and numeric literals decode to their typed scalar; every
    /// other literal and every reference decodes to its string form. A
    /// lexical form that does not parse as its declared numeric type falls
    /// back to text rather than failing.
    pub fn decode(term: &Term) -> Value {
        match term {
            Term::Iri(iri) => Value::Reference(iri.to_string()),
            Term::BlankNode(id) => Value::Reference(id.to_string()),
            Term::Literal {
                value, datatype, ..
            } => match value {
                LiteralValue::Boolean(b) => Value::Boolean(*b),
                LiteralValue::Integer(i) => Value::Integer(*i),
                LiteralValue::Double(d) => Value::Float(*d),
                LiteralValue::String(s) => decode_lexical(s, datatype),
            },
        }
    }
}

/// Decode a string-carried literal according to its declared datatype.
fn decode_lexical(lexical: &str, datatype: &Datatype) -> Value {
    let dt = datatype.as_iri();

    if dt == xsd::BOOLEAN {
        match lexical {
            "true" | "1" => Value::Boolean(true),
            "false" | "0" => Value::Boolean(false),
            _ => Value::Text(lexical.to_string()),
        }
    } else if INTEGER_DATATYPES.contains(&dt) {
        match lexical.parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Text(lexical.to_string()),
        }
    } else if FLOAT_DATATYPES.contains(&dt) {
        match lexical.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Text(lexical.to_string()),
        }
    } else {
        Value::Text(lexical.to_string())
    }
}
