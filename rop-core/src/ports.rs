use crate::models::SalesRecord;

/// A source of historical sales observations.
///
/// The pipeline only ever needs the dataset once, at startup, to derive
/// its baselines; adapters (CSV files, databases, in-memory fixtures)
/// implement this trait so the domain logic stays ignorant of where the
/// data lives.
pub trait SalesHistorySource {
    /// The adapter-specific failure type
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the full historical dataset, preserving its original order.
    ///
    /// A failure here is fatal to startup: without the dataset there are
    /// no baselines, and nothing downstream may run.
    fn load(&self) -> Result<Vec<SalesRecord>, Self::Error>;
}
