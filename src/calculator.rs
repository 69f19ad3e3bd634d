//! Session object holding a rate-table snapshot.
//!
//! The [`PnlCalculator`] struct is the main entry point for callers that run
//! several calculations against the same fee schedule. It owns one
//! [`RateTable`] and hands it by reference to the pure functions in
//! [`crate::calc`].
//!
//! Calculation methods are added to `PnlCalculator` via `impl` blocks in the
//! [`crate::calc`] module.

use crate::types::rates::RateTable;

/// Calculator bound to one fee schedule.
///
/// The rate table is never modified by a calculation, so a shared
/// `&PnlCalculator` always sees a complete, consistent set of rates.
/// Swapping rates requires `&mut self`.
///
/// # Example
///
/// ```
/// use equity_charges::PnlCalculator;
/// use equity_charges::types::{Exchange, Segment, TradeInput};
///
/// # fn main() -> equity_charges::Result<()> {
/// let calc = PnlCalculator::new();
/// let trade = TradeInput::new(Segment::INTRADAY, Exchange::NSE, 100.0, 101.0, 100);
/// let charges = calc.compute_charges(&trade)?;
/// assert_eq!(charges.gross_pnl, 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PnlCalculator {
    rates: RateTable,
}

impl PnlCalculator {
    /// Create a calculator using the built-in fee schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a caller-supplied fee schedule.
    pub fn with_rates(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Returns the fee schedule in use.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Replace the fee schedule (e.g. after the user edits a rate).
    pub fn set_rates(&mut self, rates: RateTable) {
        self.rates = rates;
    }
}
