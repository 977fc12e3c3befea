use super::PricingRegime;
use serde::{Deserialize, Serialize};

/// A user-supplied pricing scenario.
///
/// A transient value object with no identity beyond the current
/// interaction; every interaction recomputes from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// The candidate price to evaluate
    pub price: f64,
    /// Whether the promotion toggle is on
    pub promo_active: bool,
}

impl PricingRequest {
    /// The regime implied by the promotion toggle.
    pub fn regime(&self) -> PricingRegime {
        PricingRegime::from_promo_flag(self.promo_active)
    }
}

/// The scalar outputs for one evaluated scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    /// The evaluated price
    pub price: f64,
    /// Estimated demand at that price, in units
    pub demand: f64,
    /// Revenue at that price (price × demand)
    pub revenue: f64,
    /// The elasticity coefficient that produced the estimate
    pub elasticity: f64,
    /// The regime that selected the coefficient
    pub regime: PricingRegime,
}
