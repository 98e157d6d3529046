//! Quad-to-document aggregation.
//!
//! A single linear pass folds the quad stream into one document per
//! subject. No sorting, no deduplication, no cross-subject interaction.
//! The graph component of each quad is read but never partitions the
//! output: all named graphs merge into one flat document space.

use crate::{Document, DocumentCollection, Value};
use valeros_graph_ir::Quad;

/// Options affecting how quads fold into documents.
#[derive(Clone, Debug, Default)]
pub struct AggregateOptions {
    /// Replace `.` with a space in predicate keys before use as field
    /// names. Never applied to subject identifiers.
    pub replace_dots_with_spaces: bool,
}

/// Folds a quad stream into a document collection.
///
/// The aggregator owns no state across calls; each `aggregate` builds a
/// fresh collection and returns it by value.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    options: AggregateOptions,
}

impl Aggregator {
    /// Create an aggregator with the given options.
    pub fn new(options: AggregateOptions) -> Self {
        if options.replace_dots_with_spaces {
            tracing::info!("dot-to-space replacement is enabled for predicate keys");
        }
        Self { options }
    }

    /// Fold quads into one document per subject, in first-seen order.
    ///
    /// Documents are created on a subject's first quad (so subjects with no
    /// quads cannot appear), and every further value for the same
    /// (subject, predicate) accumulates in encounter order, duplicates
    /// included.
    pub fn aggregate<I>(&self, quads: I) -> DocumentCollection
    where
        I: IntoIterator<Item = Quad>,
    {
        let mut documents = DocumentCollection::new();

        for quad in quads {
            let subject = quad.s.id_string();
            let mut predicate = quad.p.id_string();
            if self.options.replace_dots_with_spaces {
                predicate = predicate.replace('.', " ");
            }
            let value = Value::decode(&quad.o);

            let doc = documents
                .entry(subject.clone())
                .or_insert_with(|| Document::new(subject));
            doc.insert(predicate, value);
        }

        tracing::debug!(documents = documents.len(), "aggregated quad stream");
        documents
    }
}
