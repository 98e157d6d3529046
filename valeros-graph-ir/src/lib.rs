//! Format-agnostic RDF quad intermediate representation
//!
//! This crate provides canonical types for representing RDF datasets that can
//! be produced by parsers and consumed by downstream stages (document
//! aggregation, serialization) regardless of the source format.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Prefix compaction is a formatter concern.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype,
//!    never optional. Plain strings use `xsd:string`, language-tagged strings
//!    use `rdf:langString`.
//!
//! 3. **Bag semantics** - The `Dataset` type uses `Vec<Quad>` and preserves
//!    both duplicates and source order. Downstream consumers that are
//!    order-sensitive rely on this.
//!
//! # Example
//!
//! ```
//! use valeros_graph_ir::{Dataset, GraphName, Term};
//!
//! let mut dataset = Dataset::new();
//!
//! dataset.add_quad(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//!     GraphName::Default,
//! );
//!
//! assert_eq!(dataset.len(), 1);
//! ```

mod dataset;
pub mod datatype;
mod quad;
mod sink;
mod term;
pub mod vocab;

pub use dataset::Dataset;
pub use datatype::Datatype;
pub use quad::{GraphName, Quad};
pub use sink::{DatasetCollectorSink, QuadSink, TermId};
pub use term::{BlankId, LiteralValue, Term};
