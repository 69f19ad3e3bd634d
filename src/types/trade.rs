//! Trade description consumed by the charge calculator.

use serde::{Deserialize, Serialize};

use crate::error::{ChargesError, Result, ensure_positive};
use crate::types::enums::*;

/// One completed round trip: a buy leg and a sell leg of the same quantity.
///
/// Prices are per share in rupees. `dp_applicable` only matters for
/// [`Segment::DELIVERY`]; intraday trades never pay a DP charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInput {
    pub segment: Segment,
    pub exchange: Exchange,
    pub buy_price: f64,
    pub sell_price: f64,
    pub quantity: u64,
    #[serde(default = "dp_applicable_default")]
    pub dp_applicable: bool,
}

fn dp_applicable_default() -> bool {
    true
}

impl TradeInput {
    /// Create a trade with the DP charge applicable (the usual delivery case).
    pub fn new(
        segment: Segment,
        exchange: Exchange,
        buy_price: f64,
        sell_price: f64,
        quantity: u64,
    ) -> Self {
        Self {
            segment,
            exchange,
            buy_price,
            sell_price,
            quantity,
            dp_applicable: true,
        }
    }

    /// Set whether the depository participant fee applies to the sell leg.
    pub fn with_dp(mut self, dp_applicable: bool) -> Self {
        self.dp_applicable = dp_applicable;
        self
    }

    /// Value of the buy leg (`buy_price × quantity`).
    pub fn buy_value(&self) -> f64 {
        self.buy_price * self.quantity as f64
    }

    /// Value of the sell leg (`sell_price × quantity`).
    pub fn sell_value(&self) -> f64 {
        self.sell_price * self.quantity as f64
    }

    /// Check the caller preconditions: both prices finite and > 0, quantity ≥ 1.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("buy_price", self.buy_price)?;
        ensure_positive("sell_price", self.sell_price)?;
        if self.quantity == 0 {
            return Err(ChargesError::InvalidArgument("quantity must be at least 1".into()));
        }
        Ok(())
    }
}
