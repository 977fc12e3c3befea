//! Text and JSON presentation of the computed outputs.
//!
//! Display conventions follow the dashboard this tool fronts for: prices
//! and revenue as truncated whole currency units with thousands
//! separators, demand as a whole unit count.

use rop_core::{PricingRegime, ScenarioOutcome};
use rop_solver::{OptimalPoint, PriceSweep};
use serde::Serialize;

/// The curve data a charting front-end consumes: the two curves over the
/// candidate grid plus the vertical markers for the current and optimal
/// price.
#[derive(Debug, Serialize)]
pub struct CurvesDocument<'a> {
    /// The candidate prices, ascending
    pub prices: &'a [f64],
    /// Demand at each candidate price
    pub demands: &'a [f64],
    /// Revenue at each candidate price
    pub revenues: &'a [f64],
    /// Marker: the currently evaluated price
    pub current_price: f64,
    /// Marker: the revenue-maximizing price
    pub optimal_price: f64,
}

impl<'a> CurvesDocument<'a> {
    /// Assembles the document from a sweep and the two markers.
    pub fn new(sweep: &'a PriceSweep, current_price: f64, optimal: &OptimalPoint) -> Self {
        Self {
            prices: &sweep.prices,
            demands: &sweep.demands,
            revenues: &sweep.revenues,
            current_price,
            optimal_price: optimal.price,
        }
    }
}

/// The three scalar metrics for the evaluated scenario.
///
/// The current price prints ungrouped (it is a slider position, never
/// more than a few digits); only revenue gets thousands separators.
pub fn metrics_block(outcome: &ScenarioOutcome) -> String {
    format!(
        "Current Price      ₹{}\nEstimated Demand   {} units\nRevenue            {}",
        outcome.price as u64,
        outcome.demand as u64,
        currency(outcome.revenue),
    )
}

/// Which elasticity produced the estimate, and under which regime.
pub fn elasticity_line(outcome: &ScenarioOutcome) -> String {
    format!(
        "Elasticity used: {} ({})",
        outcome.elasticity, outcome.regime
    )
}

/// The closing summary: optimal price, maximum revenue, and the
/// qualitative promotion-impact message.
pub fn summary_line(optimal: &OptimalPoint, regime: PricingRegime) -> String {
    format!(
        "Optimal Price: {} | Max Revenue: {} | {}",
        currency(optimal.price),
        currency(optimal.revenue),
        impact_message(regime),
    )
}

/// The qualitative promotion-impact message.
pub fn impact_message(regime: PricingRegime) -> &'static str {
    match regime {
        PricingRegime::Promotion => "Higher optimal price under promotion",
        PricingRegime::Baseline => "Baseline price sensitivity",
    }
}

/// Formats a non-negative amount as whole currency units with thousands
/// separators, truncating the fraction.
pub fn currency(value: f64) -> String {
    format!("₹{}", group_thousands(value as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_truncates() {
        assert_eq!(currency(0.0), "₹0");
        assert_eq!(currency(999.9), "₹999");
        assert_eq!(currency(1000.0), "₹1,000");
        assert_eq!(currency(518_440.7), "₹518,440");
        assert_eq!(currency(1_234_567.0), "₹1,234,567");
    }

    #[test]
    fn summary_reflects_the_regime() {
        let optimal = OptimalPoint {
            index: 199,
            price: 650.0,
            revenue: 612_345.6,
        };
        assert_eq!(
            summary_line(&optimal, PricingRegime::Promotion),
            "Optimal Price: ₹650 | Max Revenue: ₹612,345 | Higher optimal price under promotion"
        );
        assert_eq!(
            summary_line(&optimal, PricingRegime::Baseline),
            "Optimal Price: ₹650 | Max Revenue: ₹612,345 | Baseline price sensitivity"
        );
    }

    #[test]
    fn metrics_group_revenue_but_not_price() {
        let outcome = ScenarioOutcome {
            price: 1040.0,
            demand: 997.3,
            revenue: 1_037_192.9,
            elasticity: -0.252,
            regime: PricingRegime::Promotion,
        };
        assert_eq!(
            metrics_block(&outcome),
            "Current Price      ₹1040\nEstimated Demand   997 units\nRevenue            ₹1,037,192"
        );
    }

    #[test]
    fn elasticity_line_names_the_regime() {
        let outcome = ScenarioOutcome {
            price: 500.0,
            demand: 1000.0,
            revenue: 500_000.0,
            elasticity: -0.265,
            regime: PricingRegime::Baseline,
        };
        assert_eq!(
            elasticity_line(&outcome),
            "Elasticity used: -0.265 (Promo OFF)"
        );
    }
}
