use crate::domain::payment::CreatePaymentRequest;
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn create_payment(
    State(state): State<AppState>,
    body: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let detail = binding_detail(&rejection);
            tracing::warn!("payment rejected: {}", detail);
            return error_response(PaymentError::Validation(detail.to_string()));
        }
    };

    match state.payment_service.process(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.get(&payment_id).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn ping() -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({"message": "pong"})),
    )
}

// serde's messages echo the offending value, which may be card data.
fn binding_detail(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "request body has a field of the wrong type",
        JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => "request body must be application/json",
        _ => "request body could not be read",
    }
}

fn error_response(e: PaymentError) -> Response {
    (e.status_code(), Json(e.body())).into_response()
}
