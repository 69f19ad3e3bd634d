//! Input and result types for the charge calculators.
//!
//! All types are plain values: constructed per calculation, never mutated by
//! the calculators, and serializable so an adapter can exchange them as JSON.
//!
//! ## Organization
//!
//! - [`enums`]: Segment, exchange and tax regime
//! - [`trade`]: The trade being priced
//! - [`rates`]: Editable fee schedule and its key names
//! - [`charges`]: Per-trade charge breakdown
//! - [`mtf`]: MTF funded amount and interest
//! - [`tax`]: Tax parameters and estimate
//! - [`take_home`]: Full pipeline request and report
//!
//! The common types are re-exported at the module root.

pub mod charges;
pub mod enums;
pub mod mtf;
pub mod rates;
pub mod take_home;
pub mod tax;
pub mod trade;

pub use charges::ChargeBreakdown;
pub use enums::*;
pub use mtf::MtfResult;
pub use rates::{RateKey, RateTable};
pub use take_home::{TakeHomeReport, TakeHomeRequest};
pub use tax::{TaxParams, TaxResult};
pub use trade::TradeInput;
