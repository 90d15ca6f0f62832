//! Startup wiring: config resolution and one-time loading.

use std::path::Path;

use anyhow::{Context, Result};

use salecast_core::config::SalecastConfig;
use salecast_dataset::{load_table, SalesTable};
use salecast_model::ArtifactBundle;
use salecast_prediction::ForecastEngine;

use crate::cli::Cli;

/// Read the config file if given, then apply flag overrides on top.
pub fn resolve_config(cli: &Cli) -> Result<SalecastConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            SalecastConfig::from_toml(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => SalecastConfig::default(),
    };

    if let Some(data) = &cli.data {
        config.dataset.csv_path = data.clone();
    }
    if let Some(dir) = &cli.artifacts {
        // Redirect each artifact into the given directory, keeping file names.
        for path in [
            &mut config.artifacts.model_path,
            &mut config.artifacts.store_encoder_path,
            &mut config.artifacts.product_encoder_path,
            &mut config.artifacts.feature_list_path,
        ] {
            let file_name = Path::new(path.as_str())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            *path = dir.join(file_name).to_string_lossy().into_owned();
        }
    }

    Ok(config)
}


/// Artifacts and history, loaded once at startup and read-only afterwards.
pub struct App {
    pub engine: ForecastEngine<SalesTable>,
}

impl App {
    pub fn build(config: &SalecastConfig) -> Result<Self> {
        let table = load_table(&config.dataset).context("loading sales history")?;
        let artifacts = ArtifactBundle::load(&config.artifacts).context("loading artifacts")?;
        let engine = ForecastEngine::new(table, artifacts, &config.recommendation);
        Ok(Self { engine })
    }
}
