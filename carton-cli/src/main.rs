//! `carton` - build, inspect and sort encoded cartons.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.debug);

    let result = match cli.command {
        Commands::New(args) => commands::new::execute(args, &cli.global),
        Commands::Inspect(args) => commands::inspect::execute(args, &cli.global),
        Commands::Sort(args) => commands::sort::execute(args, &cli.global),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean stream of encodings.
/// `--debug` wins over `RUST_LOG`; otherwise the default is `warn`.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
    {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}
