//! Confab CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use confab::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => confab::cli::commands::check::execute(args, cli.json),
        Commands::Defaults => confab::cli::commands::defaults::execute(cli.json),
    };

    if let Err(err) = result {
        confab::cli::handle_error(&err, cli.json);
    }
}
