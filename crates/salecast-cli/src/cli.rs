use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "salecast",
    author,
    version,
    about = "Predict units sold for a product in a given store and month",
    long_about = None
)]
pub struct Cli {
    /// Optional TOML configuration file; flags override its values
    #[arg(long, env = "SALECAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Historical sales CSV path
    #[arg(long, env = "SALECAST_DATA")]
    pub data: Option<String>,

    /// Directory the serialized artifacts are read from
    #[arg(long, env = "SALECAST_ARTIFACTS")]
    pub artifacts: Option<PathBuf>,

    /// Tracing filter when RUST_LOG is unset
    #[arg(long, env = "SALECAST_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict units sold for one (store, product, year, month)
    Predict {
        #[arg(long)]
        year: i32,

        /// Month, 1-12
        #[arg(long)]
        month: u32,

        /// Store identifier as it appears in the history
        #[arg(long)]
        store: String,

        /// Product identifier as it appears in the history
        #[arg(long)]
        product: String,
    },
    /// Print valid inputs discovered from the history
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
    /// Single-screen form: select inputs, get a forecast
    Interactive,
}

#[derive(Subcommand, Debug)]
pub enum ListTarget {
    /// Sorted store identifiers
    Stores,
    /// Sorted product identifiers
    Products,
    /// Months present in the history
    Months,
}
