//! Margin Trading Facility: funded amount and interest cost.

use crate::calculator::PnlCalculator;
use crate::constants::DAYS_PER_YEAR;
use crate::error::{ChargesError, Result, ensure_non_negative};
use crate::types::charges::ChargeBreakdown;
use crate::types::mtf::MtfResult;
use crate::types::rates::RateTable;

/// Interest on the broker-funded part of a purchase held for `days`.
///
/// `margin_percent` is the trader's own contribution. Interest is simple,
/// at `rates.mtf_interest_rate` per annum prorated over a 365-day year,
/// with no compounding.
///
/// Fails with [`ChargesError::InvalidArgument`] when `buy_value` is negative
/// or not finite, `margin_percent` is outside `0..=100`, or `days` is zero.
pub fn compute_mtf_interest(
    buy_value: f64,
    margin_percent: f64,
    days: u32,
    rates: &RateTable,
) -> Result<MtfResult> {
    ensure_non_negative("buy_value", buy_value)?;
    if !(0.0..=100.0).contains(&margin_percent) {
        return Err(ChargesError::InvalidArgument(format!(
            "margin_percent must be within 0..=100, got {margin_percent}"
        )));
    }
    if days == 0 {
        return Err(ChargesError::InvalidArgument("holding days must be at least 1".into()));
    }

    let margin_fraction = margin_percent / 100.0;
    let funded_amount = buy_value * (1.0 - margin_fraction);
    let interest = funded_amount * rates.mtf_interest_rate * (f64::from(days) / DAYS_PER_YEAR);

    tracing::debug!(
        buy_value,
        margin_percent,
        days,
        funded_amount,
        interest,
        "computed MTF interest"
    );

    Ok(MtfResult {
        funded_amount,
        interest,
    })
}

/// Net P&L after charges, less MTF interest when `include_mtf` is set.
pub fn net_after_mtf(charges: &ChargeBreakdown, mtf: &MtfResult, include_mtf: bool) -> f64 {
    let interest = if include_mtf { mtf.interest } else { 0.0 };
    charges.net_pnl_after_charges - interest
}

impl PnlCalculator {
    /// MTF funded amount and interest using this calculator's annual rate.
    ///
    /// See [`compute_mtf_interest`].
    pub fn compute_mtf_interest(
        &self,
        buy_value: f64,
        margin_percent: f64,
        days: u32,
    ) -> Result<MtfResult> {
        compute_mtf_interest(buy_value, margin_percent, days, self.rates())
    }
}
