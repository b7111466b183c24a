pub mod bank;
pub mod config;
pub mod domain {
    pub mod expiry;
    pub mod payment;
    pub mod validation;
}
pub mod error;
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
    pub mod routes;
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}
