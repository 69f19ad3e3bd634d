//! Default constants for equity charge and tax calculations.
//!
//! Contains the built-in fee schedule used to seed
//! [`RateTable`](crate::types::rates::RateTable) and the defaults for the tax
//! estimate form. All rates are fractions (`0.001` = 0.1%) unless the name
//! ends in `_PCT`.

/// Number of days used to prorate annual interest.
pub const DAYS_PER_YEAR: f64 = 365.0;

// ---------------------------------------------------------------------------
// Fee schedule
// ---------------------------------------------------------------------------

/// Default fee schedule for NSE/BSE cash equity.
pub mod rates {
    /// Brokerage per order (0.1%).
    pub const BROKERAGE_RATE: f64 = 0.001;
    /// Maximum brokerage per order, in rupees.
    pub const BROKERAGE_CAP: f64 = 20.0;
    /// GST on brokerage, exchange and SEBI charges (18%).
    pub const GST_RATE: f64 = 0.18;
    /// Investor Protection Fund Trust fee per trade, in rupees.
    pub const IPFT_FIXED: f64 = 2.0;
    /// Depository participant fee on a delivery sell, in rupees.
    pub const DP_CHARGE: f64 = 15.93;

    /// STT on the intraday sell leg (0.025%).
    pub const STT_INTRADAY_SELL: f64 = 0.00025;
    /// STT on the delivery buy leg (0.1%).
    pub const STT_DELIVERY_BUY: f64 = 0.001;
    /// STT on the delivery sell leg (0.1%).
    pub const STT_DELIVERY_SELL: f64 = 0.001;

    /// Stamp duty on the intraday buy leg (0.003%).
    pub const STAMP_INTRADAY_BUY: f64 = 0.00003;
    /// Stamp duty on the delivery buy leg (0.015%).
    pub const STAMP_DELIVERY_BUY: f64 = 0.00015;

    /// NSE transaction charge on turnover (0.00297%).
    pub const EXCH_NSE: f64 = 0.0000297;
    /// BSE transaction charge on turnover (0.00375%).
    pub const EXCH_BSE: f64 = 0.0000375;

    /// SEBI turnover fee (0.0001%).
    pub const SEBI_CHARGE: f64 = 0.000001;

    /// MTF interest, per annum (14.95%).
    pub const MTF_INTEREST_RATE: f64 = 0.1495;
}

// ---------------------------------------------------------------------------
// MTF
// ---------------------------------------------------------------------------

/// Margin Trading Facility defaults for the take-home request.
pub mod mtf {
    /// Own funds as a percentage of the buy value.
    pub const MARGIN_PERCENT: f64 = 50.0;
    /// Days the funded position is held.
    pub const HOLDING_DAYS: u32 = 7;
}

// ---------------------------------------------------------------------------
// Tax
// ---------------------------------------------------------------------------

/// Tax estimate defaults and statutory rates.
pub mod tax {
    /// Default income-tax slab rate for business income, in percent.
    pub const SLAB_RATE_PCT: f64 = 30.0;
    /// Default annual LTCG exemption, in rupees.
    pub const LTCG_EXEMPTION: f64 = 100_000.0;
    /// Default health & education cess, in percent of base tax.
    pub const CESS_PCT: f64 = 4.0;
    /// Default extra tax / surcharge, in rupees.
    pub const EXTRA_TAX: f64 = 0.0;

    /// Short-term capital gains rate (fixed, 15%).
    pub const STCG_RATE: f64 = 0.15;
    /// Long-term capital gains rate above the exemption (fixed, 10%).
    pub const LTCG_RATE: f64 = 0.10;

    /// Holdings kept longer than this many days qualify as long term.
    pub const LTCG_MIN_HOLDING_DAYS: u32 = 365;
}
