//! Command-line interface definition and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the pricing simulator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the historical dataset (CSV with date, price, demand columns).
    #[arg(short, long, env = "ROP_DATA", default_value = "data/retail_pricing_data.csv")]
    pub data: PathBuf,

    /// The candidate price to evaluate. Clamped to the grid bounds and
    /// rounded to a whole unit; defaults to the reference price.
    #[arg(short, long, env = "ROP_PRICE")]
    pub price: Option<f64>,

    /// Activate the promotion regime.
    #[arg(long, env = "ROP_PROMO")]
    pub promo: bool,

    /// Path to configuration file.
    #[arg(short, long, env = "ROP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the demand and revenue curves to this path as JSON.
    #[arg(long, env = "ROP_CURVES")]
    pub curves: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
