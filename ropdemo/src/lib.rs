#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod cli;
pub use cli::Cli;

mod config;
pub use config::AppConfig;

mod history;
pub use history::{CsvSalesHistory, HistoryError};

pub mod report;

mod slider;
pub use slider::slider_price;
