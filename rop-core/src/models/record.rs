use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A single observation from the historical pricing dataset.
///
/// Records are validated on construction: the price must be finite and
/// strictly positive, the demand finite and non-negative. Downstream code
/// (baseline derivation in particular) relies on these guarantees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSalesRecord", into = "RawSalesRecord")]
pub struct SalesRecord {
    /// The calendar date of the observation
    pub date: Date,
    /// The offered price on that date
    pub price: f64,
    /// The realized demand, in units
    pub demand: f64,
}

impl SalesRecord {
    /// Creates a new record, validating the price and demand columns.
    pub fn new(date: Date, price: f64, demand: f64) -> Result<Self, RecordError> {
        if !price.is_finite() {
            return Err(RecordError::PriceNotFinite);
        }
        if price <= 0.0 {
            return Err(RecordError::PriceNotPositive(price));
        }
        if !demand.is_finite() {
            return Err(RecordError::DemandNotFinite);
        }
        if demand < 0.0 {
            return Err(RecordError::DemandNegative(demand));
        }
        Ok(Self {
            date,
            price,
            demand,
        })
    }
}

/// The various ways in which a dataset row can be invalid
#[derive(Debug, Error)]
pub enum RecordError {
    /// Error when the date column does not parse as a calendar date
    #[error("unparseable date `{0}` (expected YYYY-MM-DD)")]
    Date(String),
    /// Error when the price is NaN or infinite
    #[error("price is not finite")]
    PriceNotFinite,
    /// Error when the price is zero or negative
    #[error("price must be strictly positive, got {0}")]
    PriceNotPositive(f64),
    /// Error when the demand is NaN or infinite
    #[error("demand is not finite")]
    DemandNotFinite,
    /// Error when the demand is negative
    #[error("demand must be non-negative, got {0}")]
    DemandNegative(f64),
}

/// The "DTO" type for a dataset row
///
/// This struct matches the on-disk schema of the dataset (the `date`
/// column is a string); conversion into [`SalesRecord`] performs the
/// strict parse and validation step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawSalesRecord {
    /// The date column, formatted as YYYY-MM-DD
    pub date: String,
    /// The price column
    pub price: f64,
    /// The demand column
    pub demand: f64,
}

impl TryFrom<RawSalesRecord> for SalesRecord {
    type Error = RecordError;

    fn try_from(value: RawSalesRecord) -> Result<Self, Self::Error> {
        let date = Date::parse(&value.date, DATE_FORMAT)
            .map_err(|_| RecordError::Date(value.date.clone()))?;
        SalesRecord::new(date, value.price, value.demand)
    }
}

impl From<SalesRecord> for RawSalesRecord {
    fn from(value: SalesRecord) -> Self {
        Self {
            date: format!(
                "{:04}-{:02}-{:02}",
                value.date.year(),
                u8::from(value.date.month()),
                value.date.day()
            ),
            price: value.price,
            demand: value.demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn valid_row_parses() {
        let record: SalesRecord =
            serde_json::from_str(r#"{"date": "2024-03-01", "price": 520.0, "demand": 987.5}"#)
                .unwrap();
        assert_eq!(record.date, date!(2024 - 03 - 01));
        assert_eq!(record.price, 520.0);
        assert_eq!(record.demand, 987.5);
    }

    #[test]
    fn bad_date_is_rejected() {
        let raw = RawSalesRecord {
            date: "03/01/2024".into(),
            price: 520.0,
            demand: 1000.0,
        };
        assert!(matches!(
            SalesRecord::try_from(raw),
            Err(RecordError::Date(_))
        ));
    }

    #[test]
    fn nonpositive_price_is_rejected() {
        for price in [0.0, -10.0] {
            let raw = RawSalesRecord {
                date: "2024-03-01".into(),
                price,
                demand: 1000.0,
            };
            assert!(matches!(
                SalesRecord::try_from(raw),
                Err(RecordError::PriceNotPositive(_))
            ));
        }
    }

    #[test]
    fn negative_demand_is_rejected() {
        let raw = RawSalesRecord {
            date: "2024-03-01".into(),
            price: 520.0,
            demand: -1.0,
        };
        assert!(matches!(
            SalesRecord::try_from(raw),
            Err(RecordError::DemandNegative(_))
        ));
    }

    #[test]
    fn nan_columns_are_rejected() {
        assert!(matches!(
            SalesRecord::new(date!(2024 - 03 - 01), f64::NAN, 1.0),
            Err(RecordError::PriceNotFinite)
        ));
        assert!(matches!(
            SalesRecord::new(date!(2024 - 03 - 01), 520.0, f64::INFINITY),
            Err(RecordError::DemandNotFinite)
        ));
    }

    #[test]
    fn roundtrips_through_serde() {
        let record = SalesRecord::new(date!(2024 - 03 - 01), 520.0, 1000.0).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
