mod baseline;
mod elasticity;
mod record;
mod scenario;

pub use baseline::{BaselineError, Baselines};
pub use elasticity::{ElasticityConfig, ElasticityError, PricingRegime};
pub use record::{RawSalesRecord, RecordError, SalesRecord};
pub use scenario::{PricingRequest, ScenarioOutcome};
