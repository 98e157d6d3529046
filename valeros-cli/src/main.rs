mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → "debug" level for valeros crates
    //   default   → "info" for valeros crates (pipeline progress lines)
    //   RUST_LOG  → honoured unless --quiet is set
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "valeros_cli=debug,valeros_index_core=debug,valeros_graph_trig=debug".into()
        })
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "valeros_cli=info,valeros_index_core=info,valeros_graph_trig=info".into()
        })
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color flag or NO_COLOR env var is set.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        exit_with_error(e);
    }
}

async fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Load {
            file,
            url,
            index,
            replace_dots,
        } => {
            let config = config::Config::resolve(url, index, replace_dots);
            commands::load::run(&file, &config).await
        }

        Commands::Convert {
            input,
            output,
            format,
        } => commands::convert::run(&input, output.as_deref(), format),
    }
}
