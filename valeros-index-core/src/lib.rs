//! Quad-to-document aggregation, schema inference, and bulk loading.
//!
//! This crate turns an unordered, repeating, multi-valued quad stream into
//! one denormalized document per subject, derives a field-type mapping from
//! sampled values, and writes the result to a search backend.
//!
//! # Pipeline
//!
//! ```text
//! quads -> Aggregator -> DocumentCollection -> infer_schema -> IndexSchema
//!                                   |                              |
//!                                   v                              v
//!                                 load()  <---  recreate_index() <-+
//! ```
//!
//! Index creation strictly precedes loading. Aggregation and inference are
//! pure, single-threaded, deterministic transformations; only the backend
//! steps perform I/O.
//!
//! # Example
//!
//! ```
//! use valeros_graph_ir::{Quad, Term};
//! use valeros_index_core::{infer_schema, Aggregator, FieldType};
//!
//! let quads = vec![Quad::triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://example.org/age"),
//!     Term::integer(30),
//! )];
//!
//! let docs = Aggregator::default().aggregate(quads);
//! let schema = infer_schema(&docs);
//!
//! assert_eq!(schema.get("http://example.org/age"), Some(FieldType::Long));
//! ```

mod aggregate;
pub mod backend;
mod document;
pub mod error;
mod lifecycle;
mod loader;
mod schema;
mod value;

pub use aggregate::{AggregateOptions, Aggregator};
pub use backend::{HttpBackend, HttpBackendConfig, SearchBackend};
pub use document::{Document, DocumentCollection, FieldValue, ID_FIELD};
pub use error::{IndexError, Result};
pub use lifecycle::recreate_index;
pub use loader::load;
pub use schema::{infer_schema, FieldType, IndexSchema};
pub use value::Value;
