//! Charge, interest, tax and take-home calculations.
//!
//! Each sub-module exposes a pure function taking its inputs and a
//! [`RateTable`](crate::types::rates::RateTable) by reference, and adds the
//! same operation as a method on [`PnlCalculator`](crate::PnlCalculator)
//! via an `impl` block. Nothing here performs I/O or keeps state, so calling
//! any function twice with the same inputs yields bit-identical results.
//!
//! ## Usage
//!
//! ```
//! use equity_charges::PnlCalculator;
//! use equity_charges::types::{Exchange, Segment, TaxParams, TaxRegime, TradeInput};
//!
//! # fn main() -> equity_charges::Result<()> {
//! let calc = PnlCalculator::new();
//! let trade = TradeInput::new(Segment::DELIVERY, Exchange::NSE, 100.0, 110.0, 50);
//! let charges = calc.compute_charges(&trade)?;
//! let mtf = calc.compute_mtf_interest(charges.buy_value, 50.0, 7)?;
//! let tax = calc.estimate_tax(charges.gross_pnl, TaxRegime::STCG, &TaxParams::default())?;
//! let take_home = equity_charges::calc::take_home::compose_take_home(
//!     charges.gross_pnl,
//!     charges.total_charges,
//!     tax.total_tax,
//!     mtf.interest,
//! )?;
//! assert!(take_home < charges.gross_pnl);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Operation | Description |
//! |---|---|---|
//! | [`charges`] | `compute_charges` | Brokerage, STT, stamp, exchange, SEBI, IPFT, DP, GST |
//! | [`mtf`] | `compute_mtf_interest` | Funded amount and prorated interest |
//! | [`tax`] | `estimate_tax` | Slab / STCG / LTCG estimate with cess |
//! | [`take_home`] | `compose_take_home`, `take_home` | Final figure and full pipeline |
//! | [`holding`] | `holding_days` | Calendar holding period |

pub mod charges;
pub mod holding;
pub mod mtf;
pub mod take_home;
pub mod tax;

pub use charges::{brokerage, compute_charges};
pub use holding::holding_days;
pub use mtf::{compute_mtf_interest, net_after_mtf};
pub use take_home::{compose_take_home, take_home};
pub use tax::estimate_tax;
