use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "valeros", about = "Load RDF named-graph data into a search index", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a TriG file, infer an index schema, and bulk load the documents
    Load {
        /// Path to the TriG input file
        file: PathBuf,

        /// Search backend URL (overrides $VALEROS_URL)
        #[arg(long)]
        url: Option<String>,

        /// Target index name (overrides $VALEROS_INDEX)
        #[arg(long)]
        index: Option<String>,

        /// Replace `.` with a space in predicate field keys
        /// (subject identifiers are never rewritten)
        #[arg(long)]
        replace_dots: bool,
    },

    /// Convert TriG to N-Triples or N-Quads
    Convert {
        /// Input file or directory of .trig files
        input: PathBuf,

        /// Output path. Required for single-file input; for a directory,
        /// an optional output directory (defaults to the input directory,
        /// names derived by suffix substitution)
        output: Option<PathBuf>,

        /// Output serialization
        #[arg(long, value_enum, default_value_t = OutputFormat::Ntriples)]
        format: OutputFormat,
    },
}

/// Target serialization for `convert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// N-Triples (graph labels dropped)
    Ntriples,
    /// N-Quads (graph labels kept)
    Nquads,
}

impl OutputFormat {
    /// File suffix used when deriving output names in directory mode.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ntriples => "nt",
            OutputFormat::Nquads => "nq",
        }
    }
}
