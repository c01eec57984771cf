//! Backend-computed monthly aggregates

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate for one calendar month, computed entirely by the backend.
/// Read-only on this side; there is nothing to create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Calendar month 1-12, as the backend reports it
    pub month: u32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

/// A (month, year) period for which the backend holds data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableMonth {
    pub month: u32,
    pub year: i32,
}
