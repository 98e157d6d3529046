//! RDF dataset - a collection of quads
//!
//! The `Dataset` type uses `Vec<Quad>` and keeps quads in source order,
//! duplicates included (bag semantics). Downstream aggregation is
//! order-sensitive, so nothing here sorts or deduplicates implicitly.

use crate::{GraphName, Quad, Term};
use std::collections::BTreeMap;

/// A collection of RDF quads in source order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// The quads in this dataset
    quads: Vec<Quad>,
    /// Base IRI from parsing (for reconstruction)
    pub base: Option<String>,
    /// Prefix mappings from parsing (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base IRI
    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a quad to the dataset
    pub fn add(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// Add a quad by components
    pub fn add_quad(&mut self, s: Term, p: Term, o: Term, g: GraphName) {
        self.add(Quad::new(s, p, o, g));
    }

    /// Get the number of quads
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over quads in source order
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Get a reference to the quads
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Get all quads (consuming the dataset)
    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }

    /// Count the distinct graph labels present (default graph included
    /// when any quad belongs to it).
    pub fn graph_count(&self) -> usize {
        let mut names: Vec<&GraphName> = self.quads.iter().map(|q| &q.g).collect();
        names.sort_by_key(|g| format!("{}", g));
        names.dedup();
        names.len()
    }
}

impl IntoIterator for Dataset {
    type Item = Quad;
    type IntoIter = std::vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}
