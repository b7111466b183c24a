use crate::bank::{AcquiringBank, AcquiringBankResponse, AuthorizationRequest};
use crate::domain::payment::PaymentStatus;
use anyhow::{bail, Context, Result};
use reqwest::StatusCode;

/// Acquiring bank reached over HTTP at `{base_url}/payments`.
#[derive(Clone)]
pub struct HttpAcquiringBank {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl HttpAcquiringBank {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AcquiringBank for HttpAcquiringBank {
    fn name(&self) -> &'static str {
        "acquiring_bank_http"
    }

    async fn authorize(&self, request: AuthorizationRequest) -> Result<PaymentStatus> {
        let url = format!("{}/payments", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .context("acquiring bank request failed")?;

        let status = resp.status();
        if status.is_server_error() {
            bail!("acquiring bank responded with {}", status);
        }
        if status != StatusCode::OK {
            tracing::warn!(bank_status = status.as_u16(), "acquiring bank refused payment");
            return Ok(PaymentStatus::Declined);
        }

        let body: AcquiringBankResponse = resp
            .json()
            .await
            .context("acquiring bank returned an unreadable body")?;

        Ok(if body.authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        })
    }
}
