use crate::bank::{AcquiringBank, AuthorizationRequest};
use crate::domain::payment::PaymentStatus;
use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    AlwaysAuthorize,
    AlwaysDecline,
    Unavailable,
}

/// In-process bank for tests. Counts how many authorizations it has been
/// asked for.
pub struct MockAcquiringBank {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockAcquiringBank {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AcquiringBank for MockAcquiringBank {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authorize(&self, _request: AuthorizationRequest) -> Result<PaymentStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::AlwaysAuthorize => Ok(PaymentStatus::Authorized),
            MockBehavior::AlwaysDecline => Ok(PaymentStatus::Declined),
            MockBehavior::Unavailable => Err(anyhow!("mock bank unavailable")),
        }
    }
}
