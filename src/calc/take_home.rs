//! Take-home composition.
//!
//! Tax is computed on the realised profit the trader reports (the trade's
//! gross P&L by default); charges, tax and MTF interest are then deducted:
//!
//! ```text
//! take_home = (realised_profit − (total_charges + tax)) − mtf_interest
//! ```
//!
//! Charges are never netted against the profit before taxing it.

use crate::calc::charges::compute_charges;
use crate::calc::mtf::compute_mtf_interest;
use crate::calc::tax::estimate_tax;
use crate::calculator::PnlCalculator;
use crate::error::{Result, ensure_finite, ensure_non_negative};
use crate::types::mtf::MtfResult;
use crate::types::rates::RateTable;
use crate::types::take_home::{TakeHomeReport, TakeHomeRequest};

/// Final take-home figure from already computed parts.
///
/// `realised_profit` may be negative; the deductions must be finite and
/// non-negative, otherwise [`ChargesError::InvalidArgument`](crate::ChargesError::InvalidArgument)
/// is returned.
pub fn compose_take_home(
    realised_profit: f64,
    total_charges: f64,
    tax: f64,
    mtf_interest: f64,
) -> Result<f64> {
    ensure_finite("realised_profit", realised_profit)?;
    ensure_finite("total_charges", total_charges)?;
    ensure_non_negative("tax", tax)?;
    ensure_non_negative("mtf_interest", mtf_interest)?;
    Ok(realised_profit - (total_charges + tax) - mtf_interest)
}

/// Run the full pipeline: charges, MTF interest, tax, then take home.
///
/// MTF inputs are only read when `include_mtf` is set; otherwise the report
/// carries a zero [`MtfResult`].
pub fn take_home(request: &TakeHomeRequest, rates: &RateTable) -> Result<TakeHomeReport> {
    let charges = compute_charges(&request.trade, rates)?;
    let mtf = if request.include_mtf {
        compute_mtf_interest(
            charges.buy_value,
            request.margin_percent,
            request.mtf_days,
            rates,
        )?
    } else {
        MtfResult {
            funded_amount: 0.0,
            interest: 0.0,
        }
    };
    let mtf_interest_applied = mtf.interest;

    let realised_profit = request.realised_profit.unwrap_or(charges.gross_pnl);
    ensure_finite("realised_profit", realised_profit)?;
    let tax = estimate_tax(realised_profit, request.regime, &request.tax)?;

    let profit_after_charges_and_tax = realised_profit - (charges.total_charges + tax.total_tax);
    let take_home = compose_take_home(
        realised_profit,
        charges.total_charges,
        tax.total_tax,
        mtf_interest_applied,
    )?;

    tracing::debug!(
        regime = ?request.regime,
        realised_profit,
        include_mtf = request.include_mtf,
        take_home,
        "composed take home"
    );

    Ok(TakeHomeReport {
        charges,
        mtf,
        mtf_interest_applied,
        regime: request.regime,
        realised_profit,
        tax,
        profit_after_charges_and_tax,
        take_home,
    })
}

impl PnlCalculator {
    /// Run the full take-home pipeline with this calculator's rates.
    ///
    /// See [`take_home`].
    pub fn take_home(&self, request: &TakeHomeRequest) -> Result<TakeHomeReport> {
        take_home(request, self.rates())
    }
}
