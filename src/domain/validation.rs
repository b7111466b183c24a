use crate::domain::payment::CreatePaymentRequest;
use crate::error::PaymentError;

/// A request whose fields have all passed validation. Expiry is only
/// range-checked here; whether it lies in the past is decided by
/// [`crate::domain::expiry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub card_number: String,
    pub expiration_month: u32,
    pub expiration_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

/// Checks fields in body order and stops at the first failure.
pub fn validate_request(req: &CreatePaymentRequest) -> Result<ValidatedPayment, PaymentError> {
    let card_number = required(req.card_number.as_deref(), "card_number")?;
    digits_between(card_number, "card_number", 14, 19)?;

    let month = required(req.expiration_month, "expiration_month")?;
    if !(1..=12).contains(&month) {
        return Err(invalid("expiration_month must be between 1 and 12"));
    }

    let year = required(req.expiration_year, "expiration_year")?;
    let year = i32::try_from(year)
        .ok()
        .filter(|y| *y > 0)
        .ok_or_else(|| invalid("expiration_year must be a positive year"))?;

    let currency = required(req.currency.as_deref(), "currency")?;
    if !is_iso4217(currency) {
        return Err(invalid("currency must be a valid ISO-4217 code"));
    }

    let amount = required(req.amount, "amount")?;
    if amount <= 0 {
        return Err(invalid("amount must be a positive integer"));
    }

    let cvv = required(req.cvv.as_deref(), "cvv")?;
    digits_between(cvv, "cvv", 3, 4)?;

    Ok(ValidatedPayment {
        card_number: card_number.to_string(),
        expiration_month: month as u32,
        expiration_year: year,
        currency: currency.to_string(),
        amount,
        cvv: cvv.to_string(),
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, PaymentError> {
    value.ok_or_else(|| invalid(&format!("{field} is required")))
}

fn digits_between(value: &str, field: &str, min: usize, max: usize) -> Result<(), PaymentError> {
    if value.is_empty() {
        return Err(invalid(&format!("{field} is required")));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(&format!("{field} must contain only digits")));
    }
    if !(min..=max).contains(&value.len()) {
        return Err(invalid(&format!(
            "{field} must be between {min} and {max} digits long"
        )));
    }
    Ok(())
}

fn invalid(detail: &str) -> PaymentError {
    PaymentError::Validation(detail.to_string())
}

pub fn is_iso4217(code: &str) -> bool {
    code.len() == 3 && ISO_4217_CODES.binary_search(&code).is_ok()
}

// Active alphabetic codes, sorted.
const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD",
    "CAD", "CDF", "CHE", "CHF", "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP",
    "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP",
    "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS",
    "INR", "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW",
    "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD",
    "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV", "MYR", "MZN", "NAD", "NGN",
    "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR",
    "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP", "TRY",
    "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN", "UYI", "UYU", "UYW", "UZS", "VED", "VES",
    "VND", "VUV", "WST", "XAF", "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR", "XOF",
    "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];
