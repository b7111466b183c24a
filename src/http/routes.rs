use crate::http::handlers::payments;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(payments::ping))
        .route("/payments", post(payments::create_payment))
        .route("/payments/:id", get(payments::get_payment))
        .with_state(state)
}
