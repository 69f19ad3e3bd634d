//! Equity charge calculator tests.
//!
//! Covers the contract-note formulas for both segments and exchanges, the
//! identities the breakdown must satisfy, and precondition failures.

mod common;

use common::{EPS, assert_close, init_tracing};
use equity_charges::PnlCalculator;
use equity_charges::calc::{brokerage, compute_charges};
use equity_charges::error::ChargesError;
use equity_charges::types::*;

fn intraday_nse() -> TradeInput {
    TradeInput::new(Segment::INTRADAY, Exchange::NSE, 100.0, 101.0, 100)
}

fn sum_of_components(b: &ChargeBreakdown) -> f64 {
    b.brokerage + b.exchange_txn + b.sebi + b.ipft + b.stamp + b.stt + b.dp + b.gst
}

// ===================================================================
// Reference scenario
// ===================================================================

#[test]
fn test_intraday_nse_reference_trade() {
    init_tracing();
    let b = compute_charges(&intraday_nse(), &RateTable::default()).expect("valid trade");

    assert_close(b.buy_value, 10_000.0, EPS);
    assert_close(b.sell_value, 10_100.0, EPS);
    assert_close(b.turnover, 20_100.0, EPS);
    assert_close(b.brokerage, 20.1, EPS);
    assert_close(b.stt, 2.525, EPS);
    assert_close(b.stamp, 0.3, EPS);
    assert_close(b.exchange_txn, 0.59697, EPS);
    assert_close(b.sebi, 0.0201, EPS);
    assert_close(b.ipft, 2.0, EPS);
    assert_eq!(b.dp, 0.0);
    assert_close(b.gst, (20.1 + 0.59697 + 0.0201) * 0.18, EPS);
    assert_close(b.total_charges, 29.2711426, 1e-6);
    assert_close(b.gross_pnl, 100.0, EPS);
    assert_close(b.net_pnl_after_charges, 70.7288574, 1e-6);
}

#[test]
fn test_calculator_matches_free_function() {
    let calc = PnlCalculator::new();
    let via_calc = calc.compute_charges(&intraday_nse()).unwrap();
    let via_fn = compute_charges(&intraday_nse(), &RateTable::default()).unwrap();
    assert_eq!(via_calc, via_fn);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let rates = RateTable::default();
    let trade = TradeInput::new(Segment::DELIVERY, Exchange::BSE, 1234.55, 1190.05, 37);
    let first = compute_charges(&trade, &rates).unwrap();
    let second = compute_charges(&trade, &rates).unwrap();
    assert_eq!(first, second);
}

// ===================================================================
// Identities
// ===================================================================

#[test]
fn test_total_and_net_identities_hold_exactly() {
    let rates = RateTable::default();
    let trades = [
        intraday_nse(),
        TradeInput::new(Segment::INTRADAY, Exchange::BSE, 2500.0, 2450.0, 40),
        TradeInput::new(Segment::DELIVERY, Exchange::NSE, 15.35, 17.8, 10_000),
        TradeInput::new(Segment::DELIVERY, Exchange::BSE, 980.0, 1010.5, 3).with_dp(false),
    ];

    for trade in &trades {
        let b = compute_charges(trade, &rates).unwrap();
        assert_eq!(b.total_charges, sum_of_components(&b), "{trade:?}");
        assert_eq!(b.net_pnl_after_charges, b.gross_pnl - b.total_charges, "{trade:?}");
        assert_eq!(b.turnover, b.buy_value + b.sell_value, "{trade:?}");
    }
}

#[test]
fn test_components_list_every_fee_in_contract_note_order() {
    let b = compute_charges(
        &TradeInput::new(Segment::DELIVERY, Exchange::BSE, 250.0, 262.5, 80),
        &RateTable::default(),
    )
    .unwrap();

    let labels: Vec<_> = b.components().iter().map(|c| c.0).collect();
    assert_eq!(
        labels,
        [
            "Brokerage",
            "STT",
            "Stamp Duty",
            "Exchange Txn Charges",
            "SEBI Charges",
            "IPFT Charges",
            "DP Charges",
            "GST",
        ]
    );
    assert_eq!(b.components()[6].1, b.dp);

    let sum: f64 = b.components().iter().map(|c| c.1).sum();
    assert_close(sum, b.total_charges, EPS);
}

#[test]
fn test_gst_excludes_statutory_and_fixed_charges() {
    let rates = RateTable::default();
    let trade = TradeInput::new(Segment::DELIVERY, Exchange::NSE, 500.0, 520.0, 200);
    let b = compute_charges(&trade, &rates).unwrap();

    assert_eq!(b.gst, (b.brokerage + b.exchange_txn + b.sebi) * rates.gst_rate);

    // Raising STT, stamp, IPFT and DP must not move GST.
    let heavier = rates
        .with(RateKey::SttDeliveryBuy, 0.01)
        .with(RateKey::SttDeliverySell, 0.01)
        .with(RateKey::StampDeliveryBuy, 0.01)
        .with(RateKey::IpftFixed, 50.0)
        .with(RateKey::DpCharge, 100.0);
    let h = compute_charges(&trade, &heavier).unwrap();
    assert_eq!(h.gst, b.gst);
    assert!(h.total_charges > b.total_charges);
}

// ===================================================================
// Brokerage cap
// ===================================================================

#[test]
fn test_brokerage_is_capped_per_leg() {
    let rates = RateTable::default();
    assert_close(brokerage(10_000.0, &rates), 10.0, EPS);
    assert_eq!(brokerage(20_000.0, &rates), 20.0);
    assert_eq!(brokerage(5_000_000.0, &rates), 20.0);

    let big = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 2_000.0, 2_010.0, 1_000);
    let b = compute_charges(&big, &rates).unwrap();
    assert_eq!(b.brokerage, 40.0);
}

#[test]
fn test_cap_applies_independently_to_each_leg() {
    let rates = RateTable::default();
    // Buy leg 15,000 (uncapped 15.0), sell leg 30,000 (capped 20.0).
    let trade = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 150.0, 300.0, 100);
    let b = compute_charges(&trade, &rates).unwrap();
    assert_close(b.brokerage, 35.0, EPS);
}

#[test]
fn test_zero_cap_means_zero_brokerage() {
    let rates = RateTable::default().with(RateKey::BrokerageCap, 0.0);
    let b = compute_charges(&intraday_nse(), &rates).unwrap();
    assert_eq!(b.brokerage, 0.0);
}

// ===================================================================
// Segment-dependent fees
// ===================================================================

#[test]
fn test_intraday_never_pays_dp() {
    let rates = RateTable::default();
    for dp_applicable in [true, false] {
        let trade = intraday_nse().with_dp(dp_applicable);
        let b = compute_charges(&trade, &rates).unwrap();
        assert_eq!(b.dp, 0.0);
    }
}

#[test]
fn test_delivery_dp_follows_flag() {
    let rates = RateTable::default();
    let trade = TradeInput::new(Segment::DELIVERY, Exchange::NSE, 100.0, 101.0, 100);

    let with_dp = compute_charges(&trade, &rates).unwrap();
    assert_eq!(with_dp.dp, 15.93);

    let without_dp = compute_charges(&trade.with_dp(false), &rates).unwrap();
    assert_eq!(without_dp.dp, 0.0);
    assert_close(with_dp.total_charges - without_dp.total_charges, 15.93, EPS);
}

#[test]
fn test_delivery_stt_on_both_legs_and_stamp_on_buy() {
    let rates = RateTable::default();
    let trade = TradeInput::new(Segment::DELIVERY, Exchange::NSE, 100.0, 101.0, 100);
    let b = compute_charges(&trade, &rates).unwrap();

    assert_close(b.stt, 10_000.0 * 0.001 + 10_100.0 * 0.001, EPS);
    assert_close(b.stamp, 10_000.0 * 0.00015, EPS);
}

#[test]
fn test_intraday_stt_on_sell_leg_only() {
    let rates = RateTable::default().with(RateKey::SttIntradaySell, 0.0);
    let b = compute_charges(&intraday_nse(), &rates).unwrap();
    assert_eq!(b.stt, 0.0);
}

// ===================================================================
// Exchange selection
// ===================================================================

#[test]
fn test_bse_uses_bse_rate() {
    let rates = RateTable::default();
    let nse = compute_charges(&intraday_nse(), &rates).unwrap();

    let mut bse_trade = intraday_nse();
    bse_trade.exchange = Exchange::BSE;
    let bse = compute_charges(&bse_trade, &rates).unwrap();

    assert_close(nse.exchange_txn, 20_100.0 * 0.0000297, EPS);
    assert_close(bse.exchange_txn, 20_100.0 * 0.0000375, EPS);
    assert!(bse.total_charges > nse.total_charges);
}

// ===================================================================
// Losses
// ===================================================================

#[test]
fn test_losing_trade_has_negative_gross_and_larger_net_loss() {
    let trade = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 101.0, 100.0, 100);
    let b = compute_charges(&trade, &RateTable::default()).unwrap();
    assert_close(b.gross_pnl, -100.0, EPS);
    assert!(b.net_pnl_after_charges < b.gross_pnl);
}

// ===================================================================
// Preconditions
// ===================================================================

#[test]
fn test_zero_quantity_is_rejected() {
    let trade = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 100.0, 101.0, 0);
    let err = compute_charges(&trade, &RateTable::default()).unwrap_err();
    assert!(matches!(err, ChargesError::InvalidArgument(_)), "got {err:?}");
}

#[test]
fn test_non_positive_or_non_finite_prices_are_rejected() {
    let rates = RateTable::default();
    let bad = [
        (0.0, 101.0),
        (-5.0, 101.0),
        (100.0, 0.0),
        (f64::NAN, 101.0),
        (100.0, f64::INFINITY),
    ];
    for (buy, sell) in bad {
        let trade = TradeInput::new(Segment::DELIVERY, Exchange::NSE, buy, sell, 10);
        let err = compute_charges(&trade, &rates).unwrap_err();
        assert!(
            err.to_string().starts_with("Invalid argument"),
            "({buy}, {sell}) gave {err}"
        );
    }
}
