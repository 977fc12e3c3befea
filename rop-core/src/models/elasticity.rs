use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The demand regime in effect for a pricing scenario.
///
/// Each regime selects a pre-computed elasticity coefficient and a demand
/// uplift; neither is estimated at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRegime {
    /// Ordinary trading, no promotion running
    Baseline,
    /// A promotion is active
    Promotion,
}

impl PricingRegime {
    /// Maps the user-facing promotion toggle onto a regime.
    pub fn from_promo_flag(promo_active: bool) -> Self {
        if promo_active {
            Self::Promotion
        } else {
            Self::Baseline
        }
    }
}

impl std::fmt::Display for PricingRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "Promo OFF"),
            Self::Promotion => write!(f, "Promo ON"),
        }
    }
}

/// The per-regime demand parameters.
///
/// An explicit table rather than an inline conditional, so further regimes
/// can be added without touching the demand formula. The defaults are the
/// two pre-computed coefficients and the fixed 12% promotion uplift.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElasticityConfig", into = "RawElasticityConfig")]
pub struct ElasticityConfig {
    baseline: f64,
    promotion: f64,
    promo_uplift: f64,
}

impl ElasticityConfig {
    /// Creates a configuration, validating the downward-sloping-demand
    /// assumption (negative coefficients) and a positive uplift.
    pub fn new(baseline: f64, promotion: f64, promo_uplift: f64) -> Result<Self, ElasticityError> {
        for coefficient in [baseline, promotion] {
            if !(coefficient.is_finite() && coefficient < 0.0) {
                return Err(ElasticityError::Coefficient(coefficient));
            }
        }
        if !(promo_uplift.is_finite() && promo_uplift > 0.0) {
            return Err(ElasticityError::Uplift(promo_uplift));
        }
        Ok(Self {
            baseline,
            promotion,
            promo_uplift,
        })
    }

    /// The elasticity coefficient for the given regime. A lookup, never a
    /// computation.
    pub fn coefficient(&self, regime: PricingRegime) -> f64 {
        match regime {
            PricingRegime::Baseline => self.baseline,
            PricingRegime::Promotion => self.promotion,
        }
    }

    /// The multiplicative demand uplift for the given regime.
    pub fn uplift(&self, regime: PricingRegime) -> f64 {
        match regime {
            PricingRegime::Baseline => 1.0,
            PricingRegime::Promotion => self.promo_uplift,
        }
    }
}

impl Default for ElasticityConfig {
    fn default() -> Self {
        Self {
            baseline: -0.265,
            promotion: -0.252,
            promo_uplift: 1.12,
        }
    }
}

/// The ways in which an elasticity configuration can be invalid
#[derive(Debug, Error)]
pub enum ElasticityError {
    /// Error when a coefficient is not finite and strictly negative
    #[error("elasticity coefficient must be finite and negative, got {0}")]
    Coefficient(f64),
    /// Error when the promotion uplift is not finite and strictly positive
    #[error("promotion uplift must be finite and positive, got {0}")]
    Uplift(f64),
}

/// The "DTO" type for the elasticity configuration
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RawElasticityConfig {
    /// Coefficient used when no promotion is running
    pub baseline: f64,
    /// Coefficient used while a promotion is active
    pub promotion: f64,
    /// Demand multiplier applied while a promotion is active
    pub promo_uplift: f64,
}

impl TryFrom<RawElasticityConfig> for ElasticityConfig {
    type Error = ElasticityError;

    fn try_from(value: RawElasticityConfig) -> Result<Self, Self::Error> {
        ElasticityConfig::new(value.baseline, value.promotion, value.promo_uplift)
    }
}

impl From<ElasticityConfig> for RawElasticityConfig {
    fn from(value: ElasticityConfig) -> Self {
        Self {
            baseline: value.baseline,
            promotion: value.promotion,
            promo_uplift: value.promo_uplift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fitted_coefficients() {
        let config = ElasticityConfig::default();
        assert_eq!(config.coefficient(PricingRegime::Baseline), -0.265);
        assert_eq!(config.coefficient(PricingRegime::Promotion), -0.252);
        assert_eq!(config.uplift(PricingRegime::Baseline), 1.0);
        assert_eq!(config.uplift(PricingRegime::Promotion), 1.12);
    }

    #[test]
    fn positive_coefficient_is_rejected() {
        assert!(matches!(
            ElasticityConfig::new(0.265, -0.252, 1.12),
            Err(ElasticityError::Coefficient(_))
        ));
    }

    #[test]
    fn nonpositive_uplift_is_rejected() {
        assert!(matches!(
            ElasticityConfig::new(-0.265, -0.252, 0.0),
            Err(ElasticityError::Uplift(_))
        ));
    }

    #[test]
    fn deserialization_validates() {
        let err = serde_json::from_str::<ElasticityConfig>(
            r#"{"baseline": 0.5, "promotion": -0.252, "promo_uplift": 1.12}"#,
        );
        assert!(err.is_err());

        let ok: ElasticityConfig = serde_json::from_str(
            r#"{"baseline": -0.3, "promotion": -0.2, "promo_uplift": 1.05}"#,
        )
        .unwrap();
        assert_eq!(ok.coefficient(PricingRegime::Baseline), -0.3);
    }
}
