//! The `convert` command: TriG -> N-Triples / N-Quads.
//!
//! Single-file mode needs an explicit output path. Directory mode derives
//! output names by suffix substitution and keeps going past per-file parse
//! errors, reporting each one; the run fails at the end if anything failed.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use valeros_graph_trig::{parse_dataset, write_nquads, write_ntriples};

pub fn run(input: &Path, output: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    if input.is_dir() {
        return convert_directory(input, output, format);
    }

    if !input.is_file() {
        return Err(CliError::Input(format!(
            "input file does not exist: {}",
            input.display()
        )));
    }

    let output = output.ok_or_else(|| {
        CliError::Usage("an explicit output path is required for single-file conversion".into())
    })?;

    convert_file(input, output, format)?;
    println!("Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn convert_file(input: &Path, output: &Path, format: OutputFormat) -> CliResult<()> {
    let text = fs::read_to_string(input)?;
    let dataset = parse_dataset(&text)
        .map_err(|e| CliError::Parse(format!("{}: {e}", input.display())))?;

    let serialized = match format {
        OutputFormat::Ntriples => write_ntriples(&dataset),
        OutputFormat::Nquads => write_nquads(&dataset),
    };

    fs::write(output, serialized)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        quads = dataset.len(),
        "converted file"
    );
    Ok(())
}

fn convert_directory(
    dir: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> CliResult<()> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "trig"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        return Err(CliError::Input(format!(
            "no .trig files found in {}",
            dir.display()
        )));
    }

    let out_dir = output_dir.unwrap_or(dir);
    fs::create_dir_all(out_dir)?;

    let total = inputs.len();
    let mut failed = 0;

    for input in &inputs {
        let out_path = out_dir.join(derive_output_name(input, format));
        if let Err(e) = convert_file(input, &out_path, format) {
            failed += 1;
            eprintln!("{} {}", "failed:".red().bold(), e.message());
        }
    }

    println!("Converted {} of {} files", total - failed, total);

    if failed > 0 {
        Err(CliError::PartialConversion { failed, total })
    } else {
        Ok(())
    }
}

/// Derive the output file name by suffix substitution (`x.trig` -> `x.nt`).
fn derive_output_name(input: &Path, format: OutputFormat) -> PathBuf {
    input
        .with_extension(format.extension())
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("out.{}", format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_name() {
        assert_eq!(
            derive_output_name(Path::new("/data/chunk_01.trig"), OutputFormat::Ntriples),
            PathBuf::from("chunk_01.nt")
        );
        assert_eq!(
            derive_output_name(Path::new("data.trig"), OutputFormat::Nquads),
            PathBuf::from("data.nq")
        );
    }
}
