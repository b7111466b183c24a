use crate::domain::payment::PaymentStatus;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod http;
pub mod mock;

/// Payload sent to the acquiring bank's authorization endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl std::fmt::Debug for AuthorizationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let skip = self.card_number.chars().count().saturating_sub(4);
        let last_four: String = self.card_number.chars().skip(skip).collect();
        f.debug_struct("AuthorizationRequest")
            .field("card_number", &format!("****{last_four}"))
            .field("expiry_date", &self.expiry_date)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquiringBankResponse {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: String,
}

/// An acquiring bank that decides whether a card charge goes through.
///
/// `Ok` always carries a definitive decision (`Authorized` or `Declined`).
/// `Err` means no decision could be obtained and the payment must not be
/// recorded.
#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authorize(&self, request: AuthorizationRequest) -> Result<PaymentStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_card_data() {
        let req = AuthorizationRequest {
            card_number: "2222405343248877".to_string(),
            expiry_date: "04/2099".to_string(),
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".to_string(),
        };
        let out = format!("{req:?}");
        assert!(out.contains("****8877"));
        assert!(!out.contains("2222405343248877"));
        assert!(!out.contains("\"123\""));
    }

    #[test]
    fn response_tolerates_missing_authorization_code() {
        let resp: AcquiringBankResponse = serde_json::from_str(r#"{"authorized":false}"#).unwrap();
        assert!(!resp.authorized);
        assert!(resp.authorization_code.is_empty());
    }
}
