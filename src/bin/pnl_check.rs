//! Binary to price a trade end to end from a JSON request and print the
//! take-home report as JSON.
//!
//! # Usage
//!
//! ```sh
//! export EQUITY_RATES_FILE="rates.json"   # optional, overrides the defaults
//! cargo run --bin pnl_check --features cli -- request.json
//! ```
//!
//! A minimal request:
//!
//! ```json
//! {
//!   "trade": {
//!     "segment": "DELIVERY", "exchange": "NSE",
//!     "buyPrice": 100.0, "sellPrice": 110.0, "quantity": 100
//!   },
//!   "marginPercent": 50.0,
//!   "mtfDays": 7,
//!   "regime": "STCG"
//! }
//! ```

use std::env;

use equity_charges::PnlCalculator;
use equity_charges::error::ChargesError;
use equity_charges::types::{RateTable, TakeHomeRequest};

fn main() -> equity_charges::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let request_path = env::args().nth(1).ok_or_else(|| {
        ChargesError::InvalidArgument("usage: pnl_check <request.json>".into())
    })?;

    let rates = match env::var("EQUITY_RATES_FILE") {
        Ok(path) if !path.is_empty() => {
            tracing::info!(%path, "using rate overrides");
            RateTable::from_json_file(&path)?
        }
        _ => RateTable::default(),
    };

    let request: TakeHomeRequest =
        serde_json::from_str(&std::fs::read_to_string(&request_path)?)?;

    let report = PnlCalculator::with_rates(rates).take_home(&request)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("Tax is an estimate; consult a tax professional before filing.");

    Ok(())
}
