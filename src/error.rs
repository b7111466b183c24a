use crate::domain::payment::{ErrorBody, PaymentStatus};
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    /// Missing or malformed request field, or an unreadable body.
    #[error("{0}")]
    Validation(String),
    #[error("expiry date must be in the future")]
    ExpiryInPast,
    #[error("acquiring bank unavailable: {0}")]
    Bank(anyhow::Error),
    #[error("payment store unavailable: {0}")]
    Storage(anyhow::Error),
    #[error("payment {0} not found")]
    NotFound(String),
}

impl PaymentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Validation(_) | PaymentError::ExpiryInPast => StatusCode::BAD_REQUEST,
            PaymentError::Bank(_) | PaymentError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            PaymentError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, PaymentError::Validation(_) | PaymentError::ExpiryInPast)
    }

    pub fn body(&self) -> ErrorBody {
        let status = self.status_code();
        let message = if self.is_rejection() {
            PaymentStatus::Rejected.as_str().to_string()
        } else {
            status.canonical_reason().unwrap_or("Error").to_string()
        };
        let detail = match self {
            PaymentError::NotFound(_) => None,
            other => Some(other.to_string()),
        };

        ErrorBody {
            code: status.as_u16(),
            message,
            detail,
        }
    }
}
