//! Tax estimate parameters and result.

use serde::{Deserialize, Serialize};

use crate::constants::tax;
use crate::error::{Result, ensure_non_negative};

/// Caller-tunable inputs to the tax estimate.
///
/// The STCG and LTCG rates are statutory and not part of this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxParams {
    /// Slab rate for business income, in percent.
    pub slab_rate_pct: f64,
    /// Long-term gains exempt from tax, in rupees.
    pub ltcg_exemption: f64,
    /// Cess on base tax, in percent.
    pub cess_pct: f64,
    /// Flat surcharge added after cess, in rupees.
    pub extra_tax: f64,
}

impl Default for TaxParams {
    fn default() -> Self {
        Self {
            slab_rate_pct: tax::SLAB_RATE_PCT,
            ltcg_exemption: tax::LTCG_EXEMPTION,
            cess_pct: tax::CESS_PCT,
            extra_tax: tax::EXTRA_TAX,
        }
    }
}

impl TaxParams {
    /// Every parameter must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("slab_rate_pct", self.slab_rate_pct)?;
        ensure_non_negative("ltcg_exemption", self.ltcg_exemption)?;
        ensure_non_negative("cess_pct", self.cess_pct)?;
        ensure_non_negative("extra_tax", self.extra_tax)?;
        Ok(())
    }
}

/// Estimated tax on a realised profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    /// Profit the regime's rate is applied to; never negative.
    pub taxable_amount: f64,
    pub base_tax: f64,
    pub cess: f64,
    pub extra_tax: f64,
    /// `base_tax + cess + extra_tax`.
    pub total_tax: f64,
}
