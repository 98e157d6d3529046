//! The `load` command: TriG file -> documents -> schema -> index.

use crate::config::Config;
use crate::error::CliResult;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use valeros_graph_trig::parse_dataset;
use valeros_index_core::{
    infer_schema, load as bulk_load, recreate_index, AggregateOptions, Aggregator, HttpBackend,
    SearchBackend,
};

pub async fn run(file: &Path, config: &Config) -> CliResult<()> {
    let start = Instant::now();

    info!(file = %file.display(), "loading RDF data");
    let text = std::fs::read_to_string(file)?;
    let dataset = parse_dataset(&text)?;
    info!(
        quads = dataset.len(),
        graphs = dataset.graph_count(),
        "parsed input"
    );

    let aggregator = Aggregator::new(AggregateOptions {
        replace_dots_with_spaces: config.replace_dots_with_spaces,
    });
    let documents = aggregator.aggregate(dataset);
    info!(documents = documents.len(), "built documents from quads");

    let schema = infer_schema(&documents);
    info!(properties = schema.len(), "inferred index schema");

    info!(url = %config.url, "connecting to search backend");
    let backend = HttpBackend::new(config.backend_config());
    backend.ping().await?;
    info!("connected");

    recreate_index(&backend, &config.index, &schema).await?;
    let written = bulk_load(&backend, &config.index, &documents).await?;

    info!(
        index = %config.index,
        documents = written,
        elapsed_s = format!("{:.1}", start.elapsed().as_secs_f64()),
        "process complete, index ready"
    );

    println!(
        "Indexed {} documents into '{}'",
        written, config.index
    );

    Ok(())
}
