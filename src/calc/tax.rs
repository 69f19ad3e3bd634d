//! Tax estimate on a realised profit.
//!
//! This is an estimate for planning, not a filing computation: losses floor
//! the taxable amount at zero and are not carried forward.

use crate::calculator::PnlCalculator;
use crate::constants::tax::{LTCG_RATE, STCG_RATE};
use crate::error::{Result, ensure_finite};
use crate::types::enums::TaxRegime;
use crate::types::tax::{TaxParams, TaxResult};

/// Estimate the tax on `profit` under `regime`.
///
/// - [`TaxRegime::INTRADAY_SLAB`]: `max(profit, 0)` at `slab_rate_pct`.
/// - [`TaxRegime::STCG`]: `max(profit, 0)` at a fixed 15%.
/// - [`TaxRegime::LTCG`]: `max(profit − ltcg_exemption, 0)` at a fixed 10%.
///
/// Cess is `cess_pct` of the base tax; `extra_tax` is added as is, even when
/// the base tax is zero.
///
/// Fails with [`ChargesError::InvalidArgument`](crate::ChargesError::InvalidArgument)
/// when `profit` is not finite or a parameter is negative or not finite.
pub fn estimate_tax(profit: f64, regime: TaxRegime, params: &TaxParams) -> Result<TaxResult> {
    ensure_finite("profit", profit)?;
    params.validate()?;

    let (taxable_amount, base_tax) = match regime {
        TaxRegime::INTRADAY_SLAB => {
            let taxable = profit.max(0.0);
            (taxable, taxable * (params.slab_rate_pct / 100.0))
        }
        TaxRegime::STCG => {
            let taxable = profit.max(0.0);
            (taxable, taxable * STCG_RATE)
        }
        TaxRegime::LTCG => {
            let taxable = (profit - params.ltcg_exemption).max(0.0);
            (taxable, taxable * LTCG_RATE)
        }
    };

    let cess = base_tax * (params.cess_pct / 100.0);
    let total_tax = base_tax + cess + params.extra_tax;

    tracing::debug!(
        regime = ?regime,
        profit,
        taxable_amount,
        total_tax,
        "estimated tax"
    );

    Ok(TaxResult {
        taxable_amount,
        base_tax,
        cess,
        extra_tax: params.extra_tax,
        total_tax,
    })
}

impl PnlCalculator {
    /// Estimate the tax on `profit` under `regime`.
    ///
    /// See [`estimate_tax`].
    pub fn estimate_tax(
        &self,
        profit: f64,
        regime: TaxRegime,
        params: &TaxParams,
    ) -> Result<TaxResult> {
        estimate_tax(profit, regime, params)
    }
}
