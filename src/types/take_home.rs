//! Take-home request and report types.

use serde::{Deserialize, Serialize};

use crate::constants::mtf;
use crate::types::charges::ChargeBreakdown;
use crate::types::enums::TaxRegime;
use crate::types::mtf::MtfResult;
use crate::types::tax::{TaxParams, TaxResult};
use crate::types::trade::TradeInput;

/// Everything needed to go from a trade to a take-home figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHomeRequest {
    pub trade: TradeInput,
    /// Own funds as a percentage of the buy value, `0..=100`.
    #[serde(default = "margin_percent_default")]
    pub margin_percent: f64,
    /// Days the MTF position is held.
    #[serde(default = "mtf_days_default")]
    pub mtf_days: u32,
    /// Whether MTF interest is deducted from the take-home figure.
    #[serde(default = "include_mtf_default")]
    pub include_mtf: bool,
    pub regime: TaxRegime,
    #[serde(default)]
    pub tax: TaxParams,
    /// Profit to tax; the trade's gross P&L when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realised_profit: Option<f64>,
}

fn margin_percent_default() -> f64 {
    mtf::MARGIN_PERCENT
}

fn mtf_days_default() -> u32 {
    mtf::HOLDING_DAYS
}

fn include_mtf_default() -> bool {
    true
}

/// Every intermediate figure of a take-home calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeHomeReport {
    pub charges: ChargeBreakdown,
    /// Zero when MTF was not included.
    pub mtf: MtfResult,
    /// `mtf.interest` when MTF was included, else `0.0`.
    pub mtf_interest_applied: f64,
    pub regime: TaxRegime,
    pub realised_profit: f64,
    pub tax: TaxResult,
    /// `realised_profit − (total_charges + total_tax)`.
    pub profit_after_charges_and_tax: f64,
    /// `profit_after_charges_and_tax − mtf_interest_applied`.
    pub take_home: f64,
}
