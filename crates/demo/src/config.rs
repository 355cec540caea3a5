//! Environment-driven configuration for the demo session.
//!
//! - `CARTKIT_CATALOG`: path to a JSON catalog file (default: built-in sample)
//! - `CARTKIT_LOG_FORMAT`: `json` or `pretty` (default: `json`)
//! - `RUST_LOG`: standard tracing filter (default: `info`)

use std::path::PathBuf;

use anyhow::Context;

use cartkit_catalog::Catalog;
use cartkit_observability::{LogFormat, ObservabilityConfig};

pub const CATALOG_VAR: &str = "CARTKIT_CATALOG";
pub const LOG_FORMAT_VAR: &str = "CARTKIT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub catalog_path: Option<PathBuf>,
    pub observability: ObservabilityConfig,
    /// Problems found while reading the environment; logged once tracing is up.
    pub warnings: Vec<String>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = DemoConfig::default();

        if let Some(path) = lookup(CATALOG_VAR).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.observability.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using json")),
            }
        }

        config
    }

    /// Load the configured catalog, or the sample catalog when none is set.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::sample());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        Ok(catalog)
    }
}
