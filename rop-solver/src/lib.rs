#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod demand;
pub use demand::{DemandError, demand};

mod grid;
pub use grid::{GridError, GridSettings};

mod sweep;
pub use sweep::{OptimalPoint, PriceSweep, SweepError, evaluate, sweep};
