//! Editable fee-rate table.
//!
//! A [`RateTable`] holds every constant the formulas read. It starts from the
//! built-in schedule in [`crate::constants::rates`] and can be overridden per
//! field, by [`RateKey`] or by the key's name, or loaded from a JSON document
//! using the same names:
//!
//! ```json
//! { "BROKERAGE_CAP": 0.0, "DP_CHARGE": 13.5 }
//! ```
//!
//! Keys missing from a document keep their defaults. Values are not
//! validated; a negative rate is accepted and logged at `warn`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::rates;
use crate::error::{ChargesError, Result};
use crate::types::enums::Exchange;

// ---------------------------------------------------------------------------
// Rate Key
// ---------------------------------------------------------------------------

/// Name of one constant in a [`RateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKey {
    BrokerageRate,
    BrokerageCap,
    GstRate,
    IpftFixed,
    DpCharge,
    SttIntradaySell,
    SttDeliveryBuy,
    SttDeliverySell,
    StampIntradayBuy,
    StampDeliveryBuy,
    ExchNse,
    ExchBse,
    SebiCharge,
    MtfInterestRate,
}

impl RateKey {
    /// Every key, in the order the fee schedule lists them.
    pub const ALL: [RateKey; 14] = [
        Self::BrokerageRate,
        Self::BrokerageCap,
        Self::GstRate,
        Self::IpftFixed,
        Self::DpCharge,
        Self::SttIntradaySell,
        Self::SttDeliveryBuy,
        Self::SttDeliverySell,
        Self::StampIntradayBuy,
        Self::StampDeliveryBuy,
        Self::ExchNse,
        Self::ExchBse,
        Self::SebiCharge,
        Self::MtfInterestRate,
    ];

    /// The key's name as used in JSON documents and overrides.
    pub fn name(self) -> &'static str {
        match self {
            Self::BrokerageRate => "BROKERAGE_RATE",
            Self::BrokerageCap => "BROKERAGE_CAP",
            Self::GstRate => "GST_RATE",
            Self::IpftFixed => "IPFT_FIXED",
            Self::DpCharge => "DP_CHARGE",
            Self::SttIntradaySell => "STT_INTRADAY_SELL",
            Self::SttDeliveryBuy => "STT_DELIVERY_BUY",
            Self::SttDeliverySell => "STT_DELIVERY_SELL",
            Self::StampIntradayBuy => "STAMP_INTRADAY_BUY",
            Self::StampDeliveryBuy => "STAMP_DELIVERY_BUY",
            Self::ExchNse => "EXCH_NSE",
            Self::ExchBse => "EXCH_BSE",
            Self::SebiCharge => "SEBI_CHARGE",
            Self::MtfInterestRate => "MTF_INTEREST_RATE",
        }
    }
}

impl fmt::Display for RateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RateKey {
    type Err = ChargesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ChargesError::UnknownRateKey(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Rate Table
// ---------------------------------------------------------------------------

/// Every rate, cap and fixed fee the charge formulas use.
///
/// Construct one per session and pass it by reference into each calculation;
/// the calculators never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default, deny_unknown_fields)]
pub struct RateTable {
    pub brokerage_rate: f64,
    pub brokerage_cap: f64,
    pub gst_rate: f64,
    pub ipft_fixed: f64,
    pub dp_charge: f64,
    pub stt_intraday_sell: f64,
    pub stt_delivery_buy: f64,
    pub stt_delivery_sell: f64,
    pub stamp_intraday_buy: f64,
    pub stamp_delivery_buy: f64,
    pub exch_nse: f64,
    pub exch_bse: f64,
    pub sebi_charge: f64,
    pub mtf_interest_rate: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            brokerage_rate: rates::BROKERAGE_RATE,
            brokerage_cap: rates::BROKERAGE_CAP,
            gst_rate: rates::GST_RATE,
            ipft_fixed: rates::IPFT_FIXED,
            dp_charge: rates::DP_CHARGE,
            stt_intraday_sell: rates::STT_INTRADAY_SELL,
            stt_delivery_buy: rates::STT_DELIVERY_BUY,
            stt_delivery_sell: rates::STT_DELIVERY_SELL,
            stamp_intraday_buy: rates::STAMP_INTRADAY_BUY,
            stamp_delivery_buy: rates::STAMP_DELIVERY_BUY,
            exch_nse: rates::EXCH_NSE,
            exch_bse: rates::EXCH_BSE,
            sebi_charge: rates::SEBI_CHARGE,
            mtf_interest_rate: rates::MTF_INTEREST_RATE,
        }
    }
}

impl RateTable {
    /// Read one constant.
    pub fn get(&self, key: RateKey) -> f64 {
        *self.slot(key)
    }

    /// Overwrite one constant.
    pub fn set(&mut self, key: RateKey, value: f64) {
        if value < 0.0 {
            tracing::warn!(key = %key, value, "negative rate override accepted");
        }
        *self.slot_mut(key) = value;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: RateKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Apply overrides given as `(name, value)` pairs.
    ///
    /// Stops at the first unknown name; earlier overrides stay applied.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (name, value) in overrides {
            let key: RateKey = name.parse()?;
            self.set(key, value);
        }
        Ok(())
    }

    /// Transaction charge rate for `exchange`.
    pub fn exchange_txn_rate(&self, exchange: Exchange) -> f64 {
        match exchange {
            Exchange::NSE => self.exch_nse,
            Exchange::BSE => self.exch_bse,
        }
    }

    /// Iterate over `(key, value)` for every constant.
    pub fn entries(&self) -> impl Iterator<Item = (RateKey, f64)> + '_ {
        RateKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Parse a JSON object of overrides on top of the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.warn_negative();
        Ok(table)
    }

    /// Load a JSON rate document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading rate table");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn warn_negative(&self) {
        for (key, value) in self.entries() {
            if value < 0.0 {
                tracing::warn!(key = %key, value, "rate table contains a negative value");
            }
        }
    }

    fn slot(&self, key: RateKey) -> &f64 {
        match key {
            RateKey::BrokerageRate => &self.brokerage_rate,
            RateKey::BrokerageCap => &self.brokerage_cap,
            RateKey::GstRate => &self.gst_rate,
            RateKey::IpftFixed => &self.ipft_fixed,
            RateKey::DpCharge => &self.dp_charge,
            RateKey::SttIntradaySell => &self.stt_intraday_sell,
            RateKey::SttDeliveryBuy => &self.stt_delivery_buy,
            RateKey::SttDeliverySell => &self.stt_delivery_sell,
            RateKey::StampIntradayBuy => &self.stamp_intraday_buy,
            RateKey::StampDeliveryBuy => &self.stamp_delivery_buy,
            RateKey::ExchNse => &self.exch_nse,
            RateKey::ExchBse => &self.exch_bse,
            RateKey::SebiCharge => &self.sebi_charge,
            RateKey::MtfInterestRate => &self.mtf_interest_rate,
        }
    }

    fn slot_mut(&mut self, key: RateKey) -> &mut f64 {
        match key {
            RateKey::BrokerageRate => &mut self.brokerage_rate,
            RateKey::BrokerageCap => &mut self.brokerage_cap,
            RateKey::GstRate => &mut self.gst_rate,
            RateKey::IpftFixed => &mut self.ipft_fixed,
            RateKey::DpCharge => &mut self.dp_charge,
            RateKey::SttIntradaySell => &mut self.stt_intraday_sell,
            RateKey::SttDeliveryBuy => &mut self.stt_delivery_buy,
            RateKey::SttDeliverySell => &mut self.stt_delivery_sell,
            RateKey::StampIntradayBuy => &mut self.stamp_intraday_buy,
            RateKey::StampDeliveryBuy => &mut self.stamp_delivery_buy,
            RateKey::ExchNse => &mut self.exch_nse,
            RateKey::ExchBse => &mut self.exch_bse,
            RateKey::SebiCharge => &mut self.sebi_charge,
            RateKey::MtfInterestRate => &mut self.mtf_interest_rate,
        }
    }
}
