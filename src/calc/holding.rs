//! Holding period helpers.

use chrono::NaiveDate;

use crate::error::{ChargesError, Result};

/// Calendar days between buying and selling, counted as at least one.
///
/// A same-day round trip is one day, which is also the minimum MTF holding
/// period. Fails when `sell_date` is before `buy_date`.
pub fn holding_days(buy_date: NaiveDate, sell_date: NaiveDate) -> Result<u32> {
    let days = (sell_date - buy_date).num_days();
    if days < 0 {
        return Err(ChargesError::InvalidArgument(format!(
            "sell date {sell_date} is before buy date {buy_date}"
        )));
    }
    u32::try_from(days.max(1)).map_err(|_| {
        ChargesError::InvalidArgument(format!("holding period of {days} days is out of range"))
    })
}
