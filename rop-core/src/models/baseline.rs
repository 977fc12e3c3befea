use super::SalesRecord;
use serde::Serialize;
use thiserror::Error;

/// The reference point against which relative price changes are measured.
///
/// Derived once from the historical dataset (arithmetic means of the price
/// and demand columns) and immutable thereafter. Both fields are
/// guaranteed strictly positive; the demand formula divides by the
/// reference price, so this is not optional.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Baselines {
    /// Mean historical price
    pub reference_price: f64,
    /// Mean historical demand
    pub base_demand: f64,
}

impl Baselines {
    /// Creates baselines from explicit values, validating positivity.
    pub fn new(reference_price: f64, base_demand: f64) -> Result<Self, BaselineError> {
        if !(reference_price.is_finite() && reference_price > 0.0) {
            return Err(BaselineError::ReferencePrice(reference_price));
        }
        if !(base_demand.is_finite() && base_demand > 0.0) {
            return Err(BaselineError::BaseDemand(base_demand));
        }
        Ok(Self {
            reference_price,
            base_demand,
        })
    }

    /// Derives baselines from the historical dataset.
    ///
    /// An empty dataset is a configuration error: without baselines the
    /// rest of the pipeline must not run.
    pub fn from_records(records: &[SalesRecord]) -> Result<Self, BaselineError> {
        if records.is_empty() {
            return Err(BaselineError::EmptyDataset);
        }
        let n = records.len() as f64;
        let reference_price = records.iter().map(|r| r.price).sum::<f64>() / n;
        let base_demand = records.iter().map(|r| r.demand).sum::<f64>() / n;
        Self::new(reference_price, base_demand)
    }
}

/// The ways in which baseline derivation can fail
#[derive(Debug, Error)]
pub enum BaselineError {
    /// Error when the dataset contains no records
    #[error("cannot derive baselines from an empty dataset")]
    EmptyDataset,
    /// Error when the mean price is not finite and strictly positive
    #[error("reference price must be finite and strictly positive, got {0}")]
    ReferencePrice(f64),
    /// Error when the mean demand is not finite and strictly positive
    #[error("base demand must be finite and strictly positive, got {0}")]
    BaseDemand(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn record(price: f64, demand: f64) -> SalesRecord {
        SalesRecord::new(date!(2024 - 01 - 15), price, demand).unwrap()
    }

    #[test]
    fn means_over_the_dataset() {
        let records = vec![record(400.0, 1200.0), record(500.0, 1000.0), record(600.0, 800.0)];
        let baselines = Baselines::from_records(&records).unwrap();
        assert_eq!(baselines.reference_price, 500.0);
        assert_eq!(baselines.base_demand, 1000.0);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(matches!(
            Baselines::from_records(&[]),
            Err(BaselineError::EmptyDataset)
        ));
    }

    #[test]
    fn nonpositive_values_are_rejected() {
        assert!(matches!(
            Baselines::new(0.0, 1000.0),
            Err(BaselineError::ReferencePrice(_))
        ));
        assert!(matches!(
            Baselines::new(500.0, f64::NAN),
            Err(BaselineError::BaseDemand(_))
        ));
    }

    #[test]
    fn all_zero_demand_is_rejected() {
        // The demand column may contain zeros, but a zero mean cannot
        // anchor the demand curve.
        let records = vec![record(500.0, 0.0), record(500.0, 0.0)];
        assert!(matches!(
            Baselines::from_records(&records),
            Err(BaselineError::BaseDemand(_))
        ));
    }
}
