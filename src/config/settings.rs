use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_EXTENSION: &str = ".gif";

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub max_results: usize,
    pub extension: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            max_results: DEFAULT_MAX_RESULTS,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// No timeout unless one is configured: a stalled server blocks the request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
}

/// Builds the settings from the built-in defaults, layered with the TOML file
/// given on the command line, if any.
pub fn load_settings(config_file: Option<&Path>) -> Result<Settings> {
    let mut builder = Config::builder()
        .set_default("scraper.max_results", DEFAULT_MAX_RESULTS as i64)?
        .set_default("scraper.extension", DEFAULT_EXTENSION)?
        .set_default("log.verbose", false)?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let settings: Settings = builder
        .build()
        .context("Failed to read settings file")?
        .try_deserialize()
        .context("Failed to parse settings file")?;

    if settings.scraper.max_results == 0 {
        anyhow::bail!("scraper.max_results must be at least 1");
    }
    if settings.scraper.extension.is_empty() {
        anyhow::bail!("scraper.extension must not be empty");
    }

    Ok(settings)
}
