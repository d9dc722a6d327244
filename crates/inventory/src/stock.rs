//! Stock classifier.
//!
//! Two predicates over `(current_stock, min_stock_level)`:
//!
//! - [`classify`]: the three-way badge (critical / low / good) based on the
//!   stock ratio `current / min`.
//! - [`is_low_stock`]: the coarser counting predicate `current <= min` used by
//!   dashboard totals.
//!
//! For `min > 0` the two agree: `is_low_stock` holds exactly when `classify`
//! returns [`StockStatus::Critical`] or [`StockStatus::Low`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult};

/// Display category derived from the stock ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StockStatus {
    /// ratio <= 0.5
    Critical,
    /// 0.5 < ratio <= 1.0
    Low,
    /// ratio > 1.0
    Good,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Critical, StockStatus::Low, StockStatus::Good];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Good => "good",
        }
    }

    /// Whether the status counts towards low-stock alerts.
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::Low)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown stock status '{s}'")))
    }
}

impl TryFrom<String> for StockStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Classify stock on hand against its minimum level.
///
/// Fails with `InvalidArgument` when `min_stock_level` is not positive or
/// `current_stock` is negative.
pub fn classify(current_stock: i64, min_stock_level: i64) -> DomainResult<StockStatus> {
    if min_stock_level <= 0 {
        return Err(DomainError::invalid_argument(format!(
            "min_stock_level must be positive (got {min_stock_level})"
        )));
    }
    if current_stock < 0 {
        return Err(DomainError::invalid_argument(format!(
            "current_stock cannot be negative (got {current_stock})"
        )));
    }

    // Compare the ratio without dividing: current / min <= 1/2 <=> 2 * current <= min.
    let current = i128::from(current_stock);
    let min = i128::from(min_stock_level);
    let status = if 2 * current <= min {
        StockStatus::Critical
    } else if current <= min {
        StockStatus::Low
    } else {
        StockStatus::Good
    };
    Ok(status)
}

/// Counting predicate for low-stock totals: `current_stock <= min_stock_level`.
pub fn is_low_stock(current_stock: i64, min_stock_level: i64) -> bool {
    current_stock <= min_stock_level
}
