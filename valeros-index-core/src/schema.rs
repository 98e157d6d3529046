//! Dynamic schema inference over a document collection.
//!
//! Every observed field gets a mapping entry. Classification samples the
//! first available value per field and assumes reasonably homogeneous
//! typing per predicate across the dataset; the sample cap bounds
//! inference cost on large collections at the cost of occasional
//! misclassification when early documents are atypical.

use crate::{DocumentCollection, Value, ID_FIELD};
use indexmap::{IndexMap, IndexSet};
use serde_json::json;

/// Documents examined per field when sampling values.
const SAMPLE_CAP: usize = 10;

/// Code-unit threshold beyond which exact-match indexing no longer applies
/// to a text field (longer values stay stored and full-text searchable).
const KEYWORD_IGNORE_ABOVE: u32 = 256;

/// Index-level field type.
///
/// Text fields additionally carry a `keyword` exact-match sub-field;
/// scalar types carry no sub-field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Boolean
    Boolean,
    /// 64-bit integer
    Long,
    /// 64-bit float
    Double,
    /// Analyzed text with a keyword sub-field
    Text,
}

impl FieldType {
    /// Wire name of this type in the mapping body.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Boolean => "boolean",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Text => "text",
        }
    }
}

/// Inferred per-field schema for an index, in first-observed field order.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexSchema {
    properties: IndexMap<String, FieldType>,
}

impl IndexSchema {
    /// Look up the inferred type for a field.
    pub fn get(&self, field: &str) -> Option<FieldType> {
        self.properties.get(field).copied()
    }

    /// Number of mapped fields, `@id` included.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// An inferred schema always contains at least the `@id` field.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate (field, type) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Render the index creation body.
    ///
    /// Date auto-detection is disabled: date-like text must stay text and
    /// never be reinterpreted as a date type.
    pub fn mapping_body(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for (field, field_type) in &self.properties {
            properties.insert(field.clone(), field_mapping(*field_type));
        }

        json!({
            "mappings": {
                "date_detection": false,
                "properties": properties,
            }
        })
    }
}

fn field_mapping(field_type: FieldType) -> serde_json::Value {
    match field_type {
        FieldType::Text => json!({
            "type": "text",
            "fields": {
                "keyword": {
                    "type": "keyword",
                    "ignore_above": KEYWORD_IGNORE_ABOVE,
                }
            }
        }),
        other => json!({ "type": other.as_str() }),
    }
}

/// Infer a field-type mapping from sampled document values.
///
/// The reserved `@id` field is always emitted with the fixed text+keyword
/// schema. Every other field key observed anywhere in the collection is
/// classified from the earliest available sample: values are gathered from
/// up to `SAMPLE_CAP` documents (in collection iteration order) that carry
/// the field, and the first sample - the first element, for a sequence -
/// decides the type. No majority vote, no mixed-type detection.
pub fn infer_schema(docs: &DocumentCollection) -> IndexSchema {
    let mut properties = IndexMap::new();
    properties.insert(ID_FIELD.to_string(), FieldType::Text);

    // Field keys in first-observed order across the collection
    let mut keys: IndexSet<&str> = IndexSet::new();
    for doc in docs.values() {
        keys.extend(doc.keys());
    }

    for key in keys {
        if key == ID_FIELD {
            continue;
        }

        let mut samples = Vec::new();
        for doc in docs.values() {
            if let Some(field) = doc.get(key) {
                samples.push(field);
                if samples.len() >= SAMPLE_CAP {
                    break;
                }
            }
        }

        // Only the earliest sample drives classification
        let field_type = samples
            .first()
            .and_then(|field| field.first())
            .map(classify)
            .unwrap_or(FieldType::Text);

        properties.insert(key.to_string(), field_type);
    }

    tracing::debug!(properties = properties.len(), "inferred index schema");
    IndexSchema { properties }
}

/// Classify a representative sample.
///
/// Boolean is checked before integer so booleans never classify as longs.
fn classify(value: &Value) -> FieldType {
    match value {
        Value::Boolean(_) => FieldType::Boolean,
        Value::Integer(_) => FieldType::Long,
        Value::Float(_) => FieldType::Double,
        Value::Text(_) | Value::Reference(_) => FieldType::Text,
    }
}
