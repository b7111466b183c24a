use crate::error::PaymentError;
use chrono::{Datelike, NaiveDate};

/// Formats a card expiry as `MM/YYYY`, rejecting dates before the month of
/// `today`. The current month itself is still valid.
pub fn build_expiry_date(month: u32, year: i32, today: NaiveDate) -> Result<String, PaymentError> {
    let (current_year, current_month) = (today.year(), today.month());

    if year < current_year || (year == current_year && month < current_month) {
        return Err(PaymentError::ExpiryInPast);
    }

    Ok(format!("{:02}/{}", month, year))
}
