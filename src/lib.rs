//! # equity-charges
//!
//! Brokerage, statutory charges, MTF interest and tax estimates for cash
//! equity trades on NSE and BSE.
//!
//! ## Quick Start
//!
//! ```
//! use equity_charges::PnlCalculator;
//! use equity_charges::types::{Exchange, Segment, TradeInput};
//!
//! # fn main() -> equity_charges::Result<()> {
//! let calc = PnlCalculator::new();
//! let trade = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 100.0, 101.0, 100);
//! let charges = calc.compute_charges(&trade)?;
//! println!("net P&L after charges: {:.2}", charges.net_pnl_after_charges);
//! # Ok(())
//! # }
//! ```
//!
//! Tax figures are estimates; rounding for display is left to the caller.

pub mod calc;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the session type at crate root for convenience.
pub use calculator::PnlCalculator;
/// Re-export the error type and Result alias.
pub use error::{ChargesError, Result};
