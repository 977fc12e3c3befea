//! Application configuration management.
//!
//! Configuration is layered from default values, an optional TOML file,
//! and environment variables, in increasing order of precedence.

use crate::Cli;
use rop_core::ElasticityConfig;
use rop_solver::GridSettings;
use serde::{Deserialize, Serialize};

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Candidate-price grid settings (bounds as fractions of the
    /// reference price, sample count)
    #[serde(default)]
    pub grid: GridSettings,

    /// Per-regime elasticity coefficients and the promotion uplift
    #[serde(default)]
    pub elasticity: ElasticityConfig,
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `ROP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Use a denser candidate grid
    /// export ROP_GRID__SAMPLES=400
    ///
    /// # Re-fit promotion uplift
    /// export ROP_ELASTICITY__PROMO_UPLIFT=1.08
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps ROP_GRID__SAMPLES to grid.samples
        config = config.add_source(
            config::Environment::with_prefix("ROP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
