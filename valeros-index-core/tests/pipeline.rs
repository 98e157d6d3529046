//! End-to-end pipeline behavior against a recording mock backend.

use async_trait::async_trait;
use std::sync::Mutex;
use valeros_graph_ir::{Quad, Term};
use valeros_index_core::{
    infer_schema, load, recreate_index, Aggregator, DocumentCollection, FieldType, IndexSchema,
    Result, SearchBackend,
};

/// Mock backend that records every call in order.
#[derive(Debug, Default)]
struct MockBackend {
    exists: bool,
    calls: Mutex<Vec<String>>,
}

impl MockBackend {
    fn new(exists: bool) -> Self {
        Self {
            exists,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn ping(&self) -> Result<()> {
        self.record("ping");
        Ok(())
    }

    async fn index_exists(&self, index: &str) -> Result<bool> {
        self.record(format!("exists:{index}"));
        Ok(self.exists)
    }

    async fn delete_index(&self, index: &str) -> Result<()> {
        self.record(format!("delete:{index}"));
        Ok(())
    }

    async fn create_index(&self, index: &str, _schema: &IndexSchema) -> Result<()> {
        self.record(format!("create:{index}"));
        Ok(())
    }

    async fn bulk_write(&self, index: &str, docs: &DocumentCollection) -> Result<usize> {
        self.record(format!("bulk:{index}:{}", docs.len()));
        Ok(docs.len())
    }
}

fn sample_quads() -> Vec<Quad> {
    vec![
        Quad::triple(
            Term::iri("http://e.org/1"),
            Term::iri("http://e.org/name"),
            Term::string("Alice"),
        ),
        Quad::triple(
            Term::iri("http://e.org/1"),
            Term::iri("http://e.org/age"),
            Term::integer(30),
        ),
        Quad::triple(
            Term::iri("http://e.org/2"),
            Term::iri("http://e.org/name"),
            Term::string("Bob"),
        ),
    ]
}

#[tokio::test]
async fn recreate_deletes_existing_index_first() {
    let backend = MockBackend::new(true);
    let docs = Aggregator::default().aggregate(sample_quads());
    let schema = infer_schema(&docs);

    recreate_index(&backend, "valeros", &schema).await.unwrap();

    assert_eq!(
        backend.calls(),
        vec!["exists:valeros", "delete:valeros", "create:valeros"]
    );
}

#[tokio::test]
async fn recreate_skips_delete_when_absent() {
    let backend = MockBackend::new(false);
    let docs = Aggregator::default().aggregate(sample_quads());
    let schema = infer_schema(&docs);

    recreate_index(&backend, "valeros", &schema).await.unwrap();

    assert_eq!(backend.calls(), vec!["exists:valeros", "create:valeros"]);
}

#[tokio::test]
async fn load_writes_one_batch_with_subject_ids() {
    let backend = MockBackend::new(false);
    let docs = Aggregator::default().aggregate(sample_quads());

    let written = load(&backend, "valeros", &docs).await.unwrap();

    assert_eq!(written, 2);
    assert_eq!(backend.calls(), vec!["bulk:valeros:2"]);
}

#[tokio::test]
async fn empty_collection_performs_no_write() {
    let backend = MockBackend::new(false);
    let docs = Aggregator::default().aggregate(Vec::new());

    let written = load(&backend, "valeros", &docs).await.unwrap();

    assert_eq!(written, 0);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn empty_stream_schema_has_identity_only() {
    let docs = Aggregator::default().aggregate(Vec::new());
    let schema = infer_schema(&docs);

    assert_eq!(schema.len(), 1);
    assert_eq!(schema.get("@id"), Some(FieldType::Text));
}

#[tokio::test]
async fn full_pipeline_sequences_create_before_load() {
    let backend = MockBackend::new(true);
    let docs = Aggregator::default().aggregate(sample_quads());
    let schema = infer_schema(&docs);

    backend.ping().await.unwrap();
    recreate_index(&backend, "valeros", &schema).await.unwrap();
    let written = load(&backend, "valeros", &docs).await.unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        backend.calls(),
        vec![
            "ping",
            "exists:valeros",
            "delete:valeros",
            "create:valeros",
            "bulk:valeros:2",
        ]
    );
}
