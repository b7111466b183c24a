use crate::bank::{AcquiringBank, AuthorizationRequest};
use crate::domain::expiry::build_expiry_date;
use crate::domain::payment::{CreatePaymentRequest, Payment, PaymentDetails};
use crate::domain::validation::validate_request;
use crate::error::PaymentError;
use crate::repo::payments_repo::PaymentStore;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: Arc<dyn PaymentStore>,
    pub bank: Arc<dyn AcquiringBank>,
}

impl PaymentService {
    pub fn new(payments_repo: Arc<dyn PaymentStore>, bank: Arc<dyn AcquiringBank>) -> Self {
        Self {
            payments_repo,
            bank,
        }
    }

    pub async fn process(&self, req: CreatePaymentRequest) -> Result<PaymentDetails, PaymentError> {
        self.process_on(req, chrono::Utc::now().date_naive()).await
    }

    /// Runs the authorization workflow with expiry checked against `today`.
    ///
    /// Nothing is stored unless the bank returned a definitive decision.
    pub async fn process_on(
        &self,
        req: CreatePaymentRequest,
        today: NaiveDate,
    ) -> Result<PaymentDetails, PaymentError> {
        let payment_id = generate_payment_id();

        let valid = validate_request(&req).map_err(|e| rejected(&payment_id, e))?;
        let expiry_date = build_expiry_date(valid.expiration_month, valid.expiration_year, today)
            .map_err(|e| rejected(&payment_id, e))?;

        let status = self
            .bank
            .authorize(AuthorizationRequest {
                card_number: valid.card_number.clone(),
                expiry_date,
                currency: valid.currency.clone(),
                amount: valid.amount,
                cvv: valid.cvv,
            })
            .await
            .map_err(|e| {
                tracing::error!(%payment_id, bank = self.bank.name(), "authorization failed: {:#}", e);
                PaymentError::Bank(e)
            })?;

        let payment = Payment {
            id: payment_id,
            status,
            card_number: valid.card_number,
            expiration_month: valid.expiration_month,
            expiration_year: valid.expiration_year,
            currency_code: valid.currency,
            amount: valid.amount,
        };
        let details = PaymentDetails::from(&payment);

        self.payments_repo
            .insert(payment)
            .await
            .map_err(PaymentError::Storage)?;

        tracing::info!(payment_id = %details.id, status = %details.status, "payment created");
        Ok(details)
    }

    pub async fn get(&self, id: &str) -> Result<PaymentDetails, PaymentError> {
        let found = self
            .payments_repo
            .lookup(id)
            .await
            .map_err(PaymentError::Storage)?;

        found
            .as_ref()
            .map(PaymentDetails::from)
            .ok_or_else(|| PaymentError::NotFound(id.to_string()))
    }
}

/// 128 random bits as 32 lowercase hex characters.
fn generate_payment_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn rejected(payment_id: &str, e: PaymentError) -> PaymentError {
    tracing::warn!(%payment_id, "payment rejected: {}", e);
    e
}
