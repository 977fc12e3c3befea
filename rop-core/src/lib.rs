#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the pricing simulator.
///
/// The models in this module are primarily data structures with minimal
/// business logic. Anything that can be invalid carries a validated
/// constructor and a "raw" DTO form for (de)serialization, so that bad
/// data is rejected at the boundary rather than deep in a computation.
pub mod models;

/// Interface traits for the pricing simulator.
///
/// These traits define the contract between the domain logic and external
/// adapters (files, databases, fixtures) without specifying implementation
/// details, so infrastructure can be swapped without touching the models.
pub mod ports;

pub use models::{
    BaselineError, Baselines, ElasticityConfig, ElasticityError, PricingRegime, PricingRequest,
    RawSalesRecord, RecordError, SalesRecord, ScenarioOutcome,
};
