//! QuadSink trait for event-driven dataset construction
//!
//! Parsers call methods like `term_iri()` and `emit_quad()` on a sink
//! without knowing the concrete sink type. Graph context is stateful:
//! `begin_graph` / `end_graph` bracket a named graph block, and every
//! `emit_quad` in between lands in that graph.

use crate::{Dataset, Datatype, GraphName, LiteralValue, Quad, Term};
use std::collections::HashMap;

/// Opaque term identifier for efficient quad emission
///
/// `TermId` is only valid within a single sink session. It allows parsers
/// to reference terms without repeated string allocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(pub(crate) u32);

impl TermId {
    /// Create a new TermId from a raw index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Event-driven interface for RDF dataset construction
///
/// # Example
///
/// ```
/// use valeros_graph_ir::{DatasetCollectorSink, Datatype, QuadSink};
///
/// let mut sink = DatasetCollectorSink::new();
///
/// sink.on_prefix("foaf", "http://xmlns.com/foaf/0.1/");
///
/// let alice = sink.term_iri("http://example.org/alice");
/// let name = sink.term_iri("http://xmlns.com/foaf/0.1/name");
/// let alice_name = sink.term_literal("Alice", Datatype::xsd_string(), None);
///
/// let g = sink.term_iri("http://example.org/people");
/// sink.begin_graph(g);
/// sink.emit_quad(alice, name, alice_name);
/// sink.end_graph();
///
/// let dataset = sink.finish();
/// assert_eq!(dataset.len(), 1);
/// ```
pub trait QuadSink {
    /// Called when a base IRI is declared
    fn on_base(&mut self, base_iri: &str);

    /// Called when a prefix is declared
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Create an IRI term and return its ID
    ///
    /// The IRI should be fully expanded (not prefixed).
    fn term_iri(&mut self, iri: &str) -> TermId;

    /// Create a blank node term and return its ID
    ///
    /// If `label` is Some, the blank node has that label (for consistent
    /// identity across references). If None, generate a fresh blank node.
    fn term_blank(&mut self, label: Option<&str>) -> TermId;

    /// Create a literal term from its lexical form
    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId;

    /// Create a literal term from a native value
    ///
    /// Use this for non-string values (boolean, integer, double).
    fn term_literal_value(&mut self, value: LiteralValue, datatype: Datatype) -> TermId;

    /// Enter a named graph block labeled by a previously created term
    fn begin_graph(&mut self, label: TermId);

    /// Leave the current named graph block (back to the default graph)
    fn end_graph(&mut self);

    /// Emit a quad into the current graph using previously created term IDs
    fn emit_quad(&mut self, subject: TermId, predicate: TermId, object: TermId);
}

/// A sink that collects quads into a Dataset
///
/// This is the standard sink for building an in-memory dataset from parser
/// events.
#[derive(Debug, Default)]
pub struct DatasetCollectorSink {
    /// The dataset being built
    dataset: Dataset,
    /// Terms indexed by TermId
    terms: Vec<Term>,
    /// Counter for generating blank node IDs
    blank_counter: u32,
    /// Cache for blank node labels to TermId mapping
    blank_labels: HashMap<String, TermId>,
    /// Graph context for emitted quads
    current_graph: GraphName,
}

impl DatasetCollectorSink {
    /// Create a new collector sink
    pub fn new() -> Self {
        Self {
            dataset: Dataset::new(),
            terms: Vec::new(),
            blank_counter: 0,
            blank_labels: HashMap::new(),
            current_graph: GraphName::Default,
        }
    }

    /// Finish building and return the dataset
    ///
    /// Consumes the sink.
    pub fn finish(self) -> Dataset {
        self.dataset
    }

    /// Get the current dataset (non-consuming)
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn get_term(&self, id: TermId) -> &Term {
        &self.terms[id.0 as usize]
    }

    fn add_term(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }
}

impl QuadSink for DatasetCollectorSink {
    fn on_base(&mut self, base_iri: &str) {
        self.dataset.set_base(base_iri);
    }

    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.dataset.add_prefix(prefix, namespace_iri);
    }

    fn term_iri(&mut self, iri: &str) -> TermId {
        self.add_term(Term::iri(iri))
    }

    fn term_blank(&mut self, label: Option<&str>) -> TermId {
        match label {
            Some(l) => {
                if let Some(&id) = self.blank_labels.get(l) {
                    return id;
                }

                let id = self.add_term(Term::blank(l));
                self.blank_labels.insert(l.to_string(), id);
                id
            }
            None => {
                self.blank_counter += 1;
                let label = format!("b{}", self.blank_counter);
                self.add_term(Term::blank(label))
            }
        }
    }

    fn term_literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        let term = match language {
            Some(lang) => Term::lang_string(value, lang),
            None if datatype.is_xsd_string() => Term::string(value),
            None => Term::typed(value, datatype),
        };
        self.add_term(term)
    }

    fn term_literal_value(&mut self, value: LiteralValue, datatype: Datatype) -> TermId {
        let term = Term::Literal {
            value,
            datatype,
            language: None,
        };
        self.add_term(term)
    }

    fn begin_graph(&mut self, label: TermId) {
        self.current_graph = GraphName::Named(self.get_term(label).clone());
    }

    fn end_graph(&mut self) {
        self.current_graph = GraphName::Default;
    }

    fn emit_quad(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        let s = self.get_term(subject).clone();
        let p = self.get_term(predicate).clone();
        let o = self.get_term(object).clone();
        self.dataset.add(Quad::new(s, p, o, self.current_graph.clone()));
    }
}
