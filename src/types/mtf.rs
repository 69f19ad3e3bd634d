//! Margin Trading Facility result type.

use serde::{Deserialize, Serialize};

/// Broker-funded amount of a delivery purchase and the interest it accrues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MtfResult {
    /// `buy_value × (1 − margin% / 100)`.
    pub funded_amount: f64,
    /// Simple interest on `funded_amount`, prorated by holding days.
    pub interest: f64,
}
