//! Subscription intake endpoint
//!
//! Validates an incoming subscription payment request, enriches it with the
//! fixed business constants, forwards it to the upstream subscription API
//! and relays the outcome to the caller. The pipeline is strictly linear:
//! validate → normalize → forward → respond, short-circuiting on the first
//! failure.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use middle_subscriptions::{
    decamelize_keys, format_error, normalize, validate, ErrorWrapper, SubscriptionRequest,
};

use crate::state::AppState;

const ENDPOINT: &str = "POST /subscriptions";
const INVALID_BODY: &str = "Invalid request body.";
const SUBSCRIBED: &str = "Subscribe READr successfully.";

/// Handle `POST /subscriptions`
pub async fn create_subscription(State(state): State<AppState>, body: Bytes) -> Response {
    // A body that does not parse into the request model is the same failure
    // as a missing required field: reject, log, never touch the upstream.
    let request: SubscriptionRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => {
            tracing::error!(
                endpoint = ENDPOINT,
                body = %String::from_utf8_lossy(&body),
                error = %error,
                "Request body is not a subscription request"
            );
            return (StatusCode::FORBIDDEN, INVALID_BODY).into_response();
        }
    };

    if let Err(error) = validate(&request) {
        tracing::error!(
            endpoint = ENDPOINT,
            body = %String::from_utf8_lossy(&body),
            error = %error,
            "Subscription request failed validation"
        );
        return (StatusCode::FORBIDDEN, INVALID_BODY).into_response();
    }

    let request = normalize(request);

    // Audit fields, captured before the request is consumed by serialization.
    let email = request.cardholder_email().unwrap_or("").to_string();
    let last_four = request.last_four_num().unwrap_or("").to_string();

    let outbound = match serde_json::to_value(&request) {
        Ok(value) => decamelize_keys(value),
        Err(error) => {
            tracing::error!(endpoint = ENDPOINT, error = %error, "Failed to serialize request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "internal serialization failure"})),
            )
                .into_response();
        }
    };

    match state.upstream.create_subscription(&outbound).await {
        Ok(response) if response.is_success() => {
            tracing::info!(
                email = %email,
                card = %format!("*-*-*-{last_four}"),
                "Subscription forwarded successfully"
            );
            (StatusCode::OK, SUBSCRIBED).into_response()
        }
        Ok(response) => {
            tracing::error!(
                endpoint = ENDPOINT,
                body = %outbound,
                status = response.status,
                "Upstream rejected subscription"
            );
            error_response(format_error(None, Some(&response)))
        }
        Err(error) => {
            tracing::error!(
                endpoint = ENDPOINT,
                body = %outbound,
                error = %error,
                "Upstream subscription call failed"
            );
            error_response(format_error(Some(&error), None))
        }
    }
}

fn error_response(wrapper: ErrorWrapper) -> Response {
    let status = StatusCode::from_u16(wrapper.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(wrapper.body)).into_response()
}
