use crate::domain::payment::Payment;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts `payment` under its id, replacing any record with the same id.
    async fn insert(&self, payment: Payment) -> Result<()>;

    async fn lookup(&self, id: &str) -> Result<Option<Payment>>;

    async fn count(&self) -> Result<usize>;
}

/// Process-local payment records. Writers take the lock exclusively,
/// lookups share it.
#[derive(Clone, Default)]
pub struct InMemoryPaymentsRepo {
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl InMemoryPaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PaymentStore for InMemoryPaymentsRepo {
    async fn insert(&self, payment: Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.payments.read().await.len())
    }
}
