use crate::{DemandError, GridError, GridSettings, demand};
use rop_core::{Baselines, ElasticityConfig, PricingRegime, PricingRequest, ScenarioOutcome};
use thiserror::Error;

/// Demand and revenue evaluated over the candidate-price grid.
///
/// The three vectors are index-aligned and, by construction, contain at
/// least two entries (`GridSettings` refuses smaller grids).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSweep {
    /// The candidate prices, in ascending order
    pub prices: Vec<f64>,
    /// Estimated demand at each candidate price
    pub demands: Vec<f64>,
    /// Revenue at each candidate price (price × demand)
    pub revenues: Vec<f64>,
}

impl PriceSweep {
    /// The revenue-maximizing grid point.
    ///
    /// Ties break to the first occurrence in ascending-price order.
    pub fn optimum(&self) -> OptimalPoint {
        let mut best = 0;
        for (index, &revenue) in self.revenues.iter().enumerate().skip(1) {
            if revenue > self.revenues[best] {
                best = index;
            }
        }
        OptimalPoint {
            index: best,
            price: self.prices[best],
            revenue: self.revenues[best],
        }
    }
}

/// The revenue-maximizing grid point, accurate to grid resolution only.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimalPoint {
    /// Position of the optimum within the grid
    pub index: usize,
    /// The optimal candidate price
    pub price: f64,
    /// Revenue at the optimal price
    pub revenue: f64,
}

/// Sweeps the candidate-price grid for the given regime.
pub fn sweep(
    baselines: &Baselines,
    regime: PricingRegime,
    config: &ElasticityConfig,
    settings: &GridSettings,
) -> Result<PriceSweep, SweepError> {
    settings.validate()?;

    let coefficient = config.coefficient(regime);
    let uplift = config.uplift(regime);
    tracing::debug!(
        %regime,
        coefficient,
        samples = settings.samples,
        "sweeping candidate prices"
    );

    let prices = settings.prices(baselines.reference_price);
    let mut demands = Vec::with_capacity(prices.len());
    let mut revenues = Vec::with_capacity(prices.len());
    for &price in &prices {
        let units = demand(price, baselines, coefficient, uplift)?;
        demands.push(units);
        revenues.push(price * units);
    }

    Ok(PriceSweep {
        prices,
        demands,
        revenues,
    })
}

/// Evaluates a single pricing scenario.
pub fn evaluate(
    baselines: &Baselines,
    request: &PricingRequest,
    config: &ElasticityConfig,
) -> Result<ScenarioOutcome, DemandError> {
    let regime = request.regime();
    let elasticity = config.coefficient(regime);
    let units = demand(request.price, baselines, elasticity, config.uplift(regime))?;
    Ok(ScenarioOutcome {
        price: request.price,
        demand: units,
        revenue: request.price * units,
        elasticity,
        regime,
    })
}

/// The ways in which a sweep can fail
#[derive(Debug, Error)]
pub enum SweepError {
    /// Error when the grid settings are unusable
    #[error("invalid grid settings: {0}")]
    Grid(#[from] GridError),
    /// Error when a candidate price cannot be evaluated
    #[error("invalid candidate price: {0}")]
    Demand(#[from] DemandError),
}
