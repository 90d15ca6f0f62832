//! salecast — retail sales predictor.
//!
//! Predict units sold for a product in a given store and month, from
//! pre-trained artifacts and a historical sales CSV.

mod app;
mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", style("error:").red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = app::resolve_config(cli)?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.observability.log_level));

    let app = App::build(&config)?;
    match &cli.command {
        Command::Predict {
            year,
            month,
            store,
            product,
        } => commands::predict::run(&app, *year, *month, store, product),
        Command::List { target } => commands::list::run(&app, target),
        Command::Interactive => commands::interactive::run(&app),
    }
}

/// RUST_LOG wins; otherwise the --log-level flag or the config file value.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
