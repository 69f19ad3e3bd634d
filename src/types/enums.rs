//! Shared enum types for trade and tax descriptions.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` so the JSON representation matches
//! the labels brokers print on contract notes, so we suppress the Rust naming
//! convention lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

use crate::constants::tax::LTCG_MIN_HOLDING_DAYS;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// Equity segment a round trip was traded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Bought and sold on the same trading day.
    INTRADAY,
    /// Taken into the demat account and sold on a later day.
    DELIVERY,
}

// ---------------------------------------------------------------------------
// Exchange
// ---------------------------------------------------------------------------

/// Exchange the trade executed on. Selects the transaction charge rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// National Stock Exchange.
    NSE,
    /// Bombay Stock Exchange.
    BSE,
}

// ---------------------------------------------------------------------------
// Tax Regime
// ---------------------------------------------------------------------------

/// Tax treatment applied to a realised profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Speculative business income, taxed at the caller's slab rate.
    INTRADAY_SLAB,
    /// Short-term capital gains at a flat 15%.
    STCG,
    /// Long-term capital gains at 10% above the annual exemption.
    LTCG,
}

impl TaxRegime {
    /// Every regime, in the order a selection list shows them.
    pub const ALL: [TaxRegime; 3] = [Self::INTRADAY_SLAB, Self::STCG, Self::LTCG];

    /// Human-readable label for selection lists and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::INTRADAY_SLAB => "Intraday (Business Income - slab)",
            Self::STCG => "Delivery STCG (15%)",
            Self::LTCG => "Delivery LTCG (10% above 1L)",
        }
    }

    /// Suggest the regime for a trade in `segment` held for `holding_days`.
    ///
    /// Intraday is always slab-taxed; delivery held for more than
    /// [`LTCG_MIN_HOLDING_DAYS`] is long term, anything shorter short term.
    pub fn for_holding(segment: Segment, holding_days: u32) -> Self {
        match segment {
            Segment::INTRADAY => Self::INTRADAY_SLAB,
            Segment::DELIVERY if holding_days > LTCG_MIN_HOLDING_DAYS => Self::LTCG,
            Segment::DELIVERY => Self::STCG,
        }
    }
}
