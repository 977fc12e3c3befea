use rop_core::Baselines;
use thiserror::Error;

/// Evaluates the constant-elasticity demand curve at `price`.
///
/// `raw = base_demand * (price / reference_price)^coefficient`, clamped
/// to zero, then scaled by the regime's demand uplift.
///
/// The clamp precedes the uplift and must stay that way: for the
/// negative coefficients in use it never engages (a positive base raised
/// to any real power is positive), but the contract is
/// clamp-then-multiply should a non-negative coefficient ever be
/// admitted.
pub fn demand(
    price: f64,
    baselines: &Baselines,
    coefficient: f64,
    uplift: f64,
) -> Result<f64, DemandError> {
    if !price.is_finite() {
        return Err(DemandError::NotFinite);
    }
    if price <= 0.0 {
        // A non-integer exponent over a non-positive base is undefined in
        // the reals; refuse rather than return NaN.
        return Err(DemandError::NotPositive(price));
    }
    let raw = baselines.base_demand * (price / baselines.reference_price).powf(coefficient);
    Ok(raw.max(0.0) * uplift)
}

/// The ways in which a demand evaluation can be rejected
#[derive(Debug, Error)]
pub enum DemandError {
    /// Error when the price is NaN or infinite
    #[error("price is not finite")]
    NotFinite,
    /// Error when the price is zero or negative
    #[error("price must be strictly positive, got {0}")]
    NotPositive(f64),
}
