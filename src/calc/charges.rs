//! Equity charges: brokerage, statutory levies, GST and P&L for one trade.

use crate::calculator::PnlCalculator;
use crate::error::Result;
use crate::types::charges::ChargeBreakdown;
use crate::types::enums::Segment;
use crate::types::rates::RateTable;
use crate::types::trade::TradeInput;

/// Brokerage on a single order: a flat percentage capped per order.
pub fn brokerage(order_value: f64, rates: &RateTable) -> f64 {
    (order_value * rates.brokerage_rate).min(rates.brokerage_cap)
}

/// Compute every charge on `trade` under `rates`.
///
/// Brokerage is capped per leg. STT is levied on the sell leg only for
/// intraday and on both legs for delivery; stamp duty is on the buy leg. The
/// DP fee applies to delivery sells when `dp_applicable` is set. GST is
/// levied on brokerage, exchange and SEBI charges only.
///
/// Returns [`ChargesError::InvalidArgument`](crate::ChargesError::InvalidArgument)
/// when a price is not positive or the quantity is zero.
pub fn compute_charges(trade: &TradeInput, rates: &RateTable) -> Result<ChargeBreakdown> {
    trade.validate()?;

    let buy_value = trade.buy_value();
    let sell_value = trade.sell_value();
    let turnover = buy_value + sell_value;

    let brokerage = brokerage(buy_value, rates) + brokerage(sell_value, rates);
    let exchange_txn = turnover * rates.exchange_txn_rate(trade.exchange);
    let sebi = turnover * rates.sebi_charge;
    let ipft = rates.ipft_fixed;

    let (stamp, stt) = match trade.segment {
        Segment::INTRADAY => (
            buy_value * rates.stamp_intraday_buy,
            sell_value * rates.stt_intraday_sell,
        ),
        Segment::DELIVERY => (
            buy_value * rates.stamp_delivery_buy,
            buy_value * rates.stt_delivery_buy + sell_value * rates.stt_delivery_sell,
        ),
    };

    let dp = match trade.segment {
        Segment::DELIVERY if trade.dp_applicable => rates.dp_charge,
        _ => 0.0,
    };

    let gst = (brokerage + exchange_txn + sebi) * rates.gst_rate;

    let total_charges = brokerage + exchange_txn + sebi + ipft + stamp + stt + dp + gst;
    let gross_pnl = sell_value - buy_value;
    let net_pnl_after_charges = gross_pnl - total_charges;

    tracing::debug!(
        segment = ?trade.segment,
        exchange = ?trade.exchange,
        turnover,
        total_charges,
        net_pnl_after_charges,
        "computed equity charges"
    );

    Ok(ChargeBreakdown {
        buy_value,
        sell_value,
        turnover,
        brokerage,
        exchange_txn,
        sebi,
        ipft,
        stamp,
        stt,
        dp,
        gst,
        total_charges,
        gross_pnl,
        net_pnl_after_charges,
    })
}

impl PnlCalculator {
    /// Compute every charge on `trade` using this calculator's rates.
    ///
    /// See [`compute_charges`].
    pub fn compute_charges(&self, trade: &TradeInput) -> Result<ChargeBreakdown> {
        compute_charges(trade, self.rates())
    }
}
