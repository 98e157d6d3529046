use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Malformed RDF input (aborts before aggregation).
    Parse(String),
    /// Bad file path, unreadable input.
    Input(String),
    /// Backend connectivity, lifecycle, or bulk-write failure.
    Index(valeros_index_core::IndexError),
    /// Argument / usage errors.
    Usage(String),
    /// Directory conversion finished, but some files failed.
    PartialConversion { failed: usize, total: usize },
}

impl CliError {
    /// The bare message, without the `error:` prefix (for inline reports).
    pub fn message(&self) -> String {
        match self {
            CliError::Parse(msg) | CliError::Input(msg) | CliError::Usage(msg) => msg.clone(),
            CliError::Index(e) => e.to_string(),
            CliError::PartialConversion { failed, total } => {
                format!("{failed} of {total} files failed to convert")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Index(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::PartialConversion { failed, total } => write!(
                f,
                "{} {failed} of {total} files failed to convert",
                "error:".red().bold(),
            ),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<valeros_graph_trig::TrigError> for CliError {
    fn from(e: valeros_graph_trig::TrigError) -> Self {
        CliError::Parse(e.to_string())
    }
}

impl From<valeros_index_core::IndexError> for CliError {
    fn from(e: valeros_index_core::IndexError) -> Self {
        CliError::Index(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
