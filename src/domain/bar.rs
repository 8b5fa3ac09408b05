//! Bar — a single OHLCV observation an order is executed against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised constructing a [`Bar`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarError {
    #[error("high ({high}) must be >= low ({low})")]
    CrossedWicks { high: Decimal, low: Decimal },
    #[error("high ({high}) must be >= open ({open})")]
    HighBelowOpen { high: Decimal, open: Decimal },
    #[error("high ({high}) must be >= close ({close})")]
    HighBelowClose { high: Decimal, close: Decimal },
    #[error("low ({low}) must be <= open ({open})")]
    LowAboveOpen { low: Decimal, open: Decimal },
    #[error("low ({low}) must be <= close ({close})")]
    LowAboveClose { low: Decimal, close: Decimal },
}

/// OHLCV bar for a single symbol on a single day.
///
/// Can only be constructed through [`Bar::new`], which enforces the OHLC
/// invariant (`high` is the max, `low` is the min of the four prices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl Bar {
    pub fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Result<Bar, BarError> {
        if high < low {
            return Err(BarError::CrossedWicks { high, low });
        }
        if high < open {
            return Err(BarError::HighBelowOpen { high, open });
        }
        if high < close {
            return Err(BarError::HighBelowClose { high, close });
        }
        if low > open {
            return Err(BarError::LowAboveOpen { low, open });
        }
        if low > close {
            return Err(BarError::LowAboveClose { low, close });
        }
        Ok(Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Build a modified bar whose open is the fill price of a just-filled
    /// parent order, widening high/low so the new open stays inside the
    /// range. Close and volume are unchanged. Used to recurse into child
    /// orders without claiming the parent's fill happened before or after
    /// the bar's recorded extremes.
    pub fn with_open(&self, new_open: Decimal) -> Bar {
        Bar {
            date: self.date,
            open: new_open,
            high: self.high.max(new_open),
            low: self.low.min(new_open),
            close: self.close,
            volume: self.volume,
        }
    }
}
