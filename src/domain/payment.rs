use serde::{Deserialize, Serialize};

/// Inbound body of `POST /payments`.
///
/// Every field is optional at the binding layer so that a missing field is
/// reported by validation with a readable detail instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreatePaymentRequest {
    pub card_number: Option<String>,
    pub expiration_month: Option<i64>,
    pub expiration_year: Option<i64>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    pub cvv: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
    /// Never stored; only shows up as the `message` of a 400 error body.
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Declined => "Declined",
            PaymentStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored payment record. The full card number never leaves this type;
/// callers only ever see a [`PaymentDetails`] projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: String,
    pub status: PaymentStatus,
    pub card_number: String,
    pub expiration_month: u32,
    pub expiration_year: i32,
    pub currency_code: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub id: String,
    pub status: PaymentStatus,
    pub last_four_card_digit: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency_code: String,
    pub amount: i64,
}

impl From<&Payment> for PaymentDetails {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.clone(),
            status: payment.status,
            last_four_card_digit: last_four(&payment.card_number),
            expiry_month: payment.expiration_month,
            expiry_year: payment.expiration_year,
            currency_code: payment.currency_code.clone(),
            amount: payment.amount,
        }
    }
}

fn last_four(card_number: &str) -> String {
    let skip = card_number.chars().count().saturating_sub(4);
    card_number.chars().skip(skip).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(card_number: &str) -> Payment {
        Payment {
            id: "abc".to_string(),
            status: PaymentStatus::Declined,
            card_number: card_number.to_string(),
            expiration_month: 4,
            expiration_year: 2099,
            currency_code: "GBP".to_string(),
            amount: 100,
        }
    }

    #[test]
    fn details_expose_only_last_four_digits() {
        let details = PaymentDetails::from(&payment("2222405343248877"));
        assert_eq!(details.last_four_card_digit, "8877");

        let body = serde_json::to_string(&details).unwrap();
        assert!(!body.contains("2222405343248877"));
        assert!(body.contains("\"status\":\"Declined\""));
        assert!(body.contains("\"currency_code\":\"GBP\""));
    }

    #[test]
    fn request_binds_with_missing_fields() {
        let req: CreatePaymentRequest =
            serde_json::from_str(r#"{"card_number":"2222405343248877","amount":100}"#).unwrap();
        assert_eq!(req.amount, Some(100));
        assert!(req.cvv.is_none());
        assert!(req.expiration_month.is_none());
    }

    #[test]
    fn request_rejects_string_amount() {
        let res = serde_json::from_str::<CreatePaymentRequest>(r#"{"amount":"100"}"#);
        assert!(res.is_err());
    }
}
