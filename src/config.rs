use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level model configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Surfaces in geometry load order.
    #[serde(default)]
    pub surfaces: Vec<SurfaceToml>,

    /// Tally filters.
    #[serde(default)]
    pub filters: Vec<FilterToml>,

    /// Statepoint output settings.
    #[serde(default)]
    pub statepoint: StatepointToml,
}

impl ModelConfig {
    /// Reads and parses a TOML model file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceToml {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    pub id: u32,
    #[serde(rename = "type", default = "default_filter_type")]
    pub kind: String,
    #[serde(default)]
    pub bins: Vec<i32>,
}

fn default_filter_type() -> String {
    "surface".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StatepointToml {
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub overwrite: bool,
}
