//! Charge breakdown returned by the equity charge calculator.

use serde::{Deserialize, Serialize};

/// Every fee levied on one round trip, plus gross and net P&L.
///
/// `total_charges` is the plain sum of the fee fields from `brokerage` through
/// `gst`; `net_pnl_after_charges` is `gross_pnl - total_charges`.
/// Nothing is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    pub buy_value: f64,
    pub sell_value: f64,
    /// `buy_value + sell_value`.
    pub turnover: f64,
    /// Capped brokerage on the buy leg plus the sell leg.
    pub brokerage: f64,
    pub exchange_txn: f64,
    pub sebi: f64,
    pub ipft: f64,
    pub stamp: f64,
    pub stt: f64,
    pub dp: f64,
    /// GST on `brokerage + exchange_txn + sebi` only.
    pub gst: f64,
    pub total_charges: f64,
    /// `sell_value - buy_value`; negative for a losing trade.
    pub gross_pnl: f64,
    pub net_pnl_after_charges: f64,
}

impl ChargeBreakdown {
    /// The fee components in contract-note order, labelled for display.
    pub fn components(&self) -> [(&'static str, f64); 8] {
        [
            ("Brokerage", self.brokerage),
            ("STT", self.stt),
            ("Stamp Duty", self.stamp),
            ("Exchange Txn Charges", self.exchange_txn),
            ("SEBI Charges", self.sebi),
            ("IPFT Charges", self.ipft),
            ("DP Charges", self.dp),
            ("GST", self.gst),
        ]
    }
}
