//! CLI entry point for seeded, rule-checked outfit composition

use clap::Parser;
use closetmix::io::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> closetmix::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    Runner::new(cli).run()
}
