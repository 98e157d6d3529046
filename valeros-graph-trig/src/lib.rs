//! TriG parser and N-Quads/N-Triples writers.
//!
//! This crate provides a TriG parser that emits to
//! `valeros_graph_ir::QuadSink`, plus line-based serializers for converting
//! parsed datasets to N-Triples or N-Quads.
//!
//! # Example
//!
//! ```
//! use valeros_graph_trig::parse_dataset;
//!
//! let trig = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:people {
//!         ex:alice ex:name "Alice" ;
//!                  ex:age 30 .
//!     }
//! "#;
//!
//! let dataset = parse_dataset(trig).unwrap();
//! assert_eq!(dataset.len(), 2);
//! ```

pub mod error;
pub mod lex;
pub mod nquads;
pub mod parser;

pub use error::{Result, TrigError};
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use nquads::{write_nquads, write_ntriples};
pub use parser::parse;

use valeros_graph_ir::{Dataset, DatasetCollectorSink};

/// Parse a TriG document into an in-memory dataset.
///
/// This is a convenience wrapper that drives a `DatasetCollectorSink`.
pub fn parse_dataset(input: &str) -> Result<Dataset> {
    let mut sink = DatasetCollectorSink::new();
    parse(input, &mut sink)?;
    Ok(sink.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let trig = r#"
            @prefix ex: <http://example.org/> .
            ex:g {
                ex:alice ex:name "Alice" .
                ex:bob ex:name "Bob" .
            }
        "#;

        let ds = parse_dataset(trig).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.graph_count(), 1);
    }

    #[test]
    fn test_roundtrip_to_ntriples() {
        let trig = r#"
            @prefix ex: <http://example.org/> .
            ex:g { ex:alice ex:age 30 . }
            ex:alice ex:name "Alice" .
        "#;

        let ds = parse_dataset(trig).unwrap();
        let nt = write_ntriples(&ds);

        assert_eq!(nt.lines().count(), 2);
        // Graph labels never leak into N-Triples output
        assert!(!nt.contains("example.org/g"));
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(parse_dataset("this is not trig").is_err());
    }
}
