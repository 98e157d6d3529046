//! Per-subject documents.
//!
//! A document is a flat, insertion-ordered mapping from field key to one or
//! many values. The shape of a field (scalar vs sequence) depends on how
//! many times it was observed, in encounter order - it is never normalized
//! after the fact.

use crate::Value;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Reserved field holding the subject identifier.
pub const ID_FIELD: &str = "@id";

/// A field's accumulated value(s).
///
/// A field starts out as `Single`; the second observed value promotes it to
/// `Multiple`, preserving first-seen order and exact duplicates.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Exactly one value observed so far
    Single(Value),
    /// Two or more values, in first-seen order, duplicates preserved
    Multiple(Vec<Value>),
}

impl FieldValue {
    /// The representative sample for this field: the scalar itself, or the
    /// first element of a sequence.
    pub fn first(&self) -> Option<&Value> {
        match self {
            FieldValue::Single(v) => Some(v),
            FieldValue::Multiple(seq) => seq.first(),
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Single(_) => 1,
            FieldValue::Multiple(seq) => seq.len(),
        }
    }

    /// A field only exists once a value was observed, so this is never
    /// true for fields built through `Document::insert`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume self, appending one more value (promoting a scalar to a
    /// sequence on the second sighting).
    fn pushed(self, value: Value) -> Self {
        match self {
            FieldValue::Single(prev) => FieldValue::Multiple(vec![prev, value]),
            FieldValue::Multiple(mut seq) => {
                seq.push(value);
                FieldValue::Multiple(seq)
            }
        }
    }
}

/// One denormalized document per subject.
///
/// Serializes as a flat JSON object with `@id` first (insertion order).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    fields: IndexMap<String, FieldValue>,
}

impl Document {
    /// Create a document for a subject, with `@id` set to the subject string.
    pub fn new(subject: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(
            ID_FIELD.to_string(),
            FieldValue::Single(Value::Text(subject.into())),
        );
        Self { fields }
    }

    /// Record one observed value for a field.
    ///
    /// A new key is stored as a scalar; an existing key accumulates into a
    /// sequence. The reserved `@id` key gets no special treatment here: a
    /// predicate literally named `@id` merges into the identity field
    /// (promoting it to a sequence). Callers should avoid such predicates;
    /// the engine does not guard against them.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        match self.fields.entry(key.into()) {
            Entry::Vacant(e) => {
                e.insert(FieldValue::Single(value));
            }
            Entry::Occupied(mut e) => {
                let prior = std::mem::replace(e.get_mut(), FieldValue::Multiple(Vec::new()));
                *e.get_mut() = prior.pushed(value);
            }
        }
    }

    /// The subject identity, when the `@id` field is still the scalar it was
    /// created with.
    pub fn id(&self) -> Option<&str> {
        match self.fields.get(ID_FIELD)? {
            FieldValue::Single(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Check whether a field key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate field keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields, `@id` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// A document always carries at least its `@id` field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Mapping from subject identifier to its document, in first-seen order.
pub type DocumentCollection = IndexMap<String, Document>;
