use thiserror::Error;

/// Settings for the candidate-price grid.
///
/// The defaults reproduce the standard sweep: 200 evenly spaced prices
/// over 70% to 130% of the reference price, endpoints included. The
/// optimum reported downstream is only as accurate as this resolution
/// (about 0.3% of the reference price at the defaults).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSettings {
    /// Lower bound of the grid, as a fraction of the reference price
    pub lower_fraction: f64,
    /// Upper bound of the grid, as a fraction of the reference price
    pub upper_fraction: f64,
    /// Number of candidate prices, inclusive of both endpoints
    pub samples: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            lower_fraction: 0.7,
            upper_fraction: 1.3,
            samples: 200,
        }
    }
}

impl GridSettings {
    /// Checks that the settings describe a usable grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(self.lower_fraction.is_finite() && self.lower_fraction > 0.0) {
            return Err(GridError::LowerFraction(self.lower_fraction));
        }
        if !(self.upper_fraction.is_finite() && self.upper_fraction > self.lower_fraction) {
            return Err(GridError::UpperFraction(self.upper_fraction));
        }
        if self.samples < 2 {
            return Err(GridError::Samples(self.samples));
        }
        Ok(())
    }

    /// The candidate prices: `samples` values linearly spaced over
    /// `[lower_fraction * reference_price, upper_fraction * reference_price]`,
    /// with both endpoints landing exactly on the bounds.
    ///
    /// Callers must `validate` first; the spacing arithmetic requires at
    /// least two samples.
    pub fn prices(&self, reference_price: f64) -> Vec<f64> {
        debug_assert!(self.samples >= 2, "validate() before prices()");
        let lo = self.lower_fraction * reference_price;
        let hi = self.upper_fraction * reference_price;
        let step = (hi - lo) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| {
                if i + 1 == self.samples {
                    // pin the last point to the bound rather than trust
                    // accumulated rounding
                    hi
                } else {
                    lo + step * i as f64
                }
            })
            .collect()
    }

    /// The grid bounds for a given reference price.
    pub fn bounds(&self, reference_price: f64) -> (f64, f64) {
        (
            self.lower_fraction * reference_price,
            self.upper_fraction * reference_price,
        )
    }
}

/// The ways in which grid settings can be invalid
#[derive(Debug, Error)]
pub enum GridError {
    /// Error when the lower fraction is not finite and strictly positive
    #[error("lower fraction must be finite and positive, got {0}")]
    LowerFraction(f64),
    /// Error when the upper fraction does not exceed the lower fraction
    #[error("upper fraction must be finite and exceed the lower fraction, got {0}")]
    UpperFraction(f64),
    /// Error when fewer than two samples are requested
    #[error("the grid needs at least two samples, got {0}")]
    Samples(usize),
}
