//! Single transaction route.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};

use changemaker_core::{Breakdown, CashRegister, RegisterError};
use changemaker_shared::CurrencyCode;

use super::{OverrideParams, map_register_error};
use crate::AppState;

/// Creates the single transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", post(compute_change))
}

/// Request body for one transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Amount owed, decimal text (e.g. "2.13").
    pub owed: String,
    /// Amount paid, decimal text (e.g. "3.00").
    pub paid: String,
    /// Currency code, USD when omitted.
    #[serde(default)]
    pub currency: Option<String>,
    /// Runtime overrides.
    #[serde(flatten)]
    pub overrides: OverrideParams,
}

/// Response for one transaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Formatted result line.
    pub line: String,
    /// Change in minor units, after rounding.
    pub change_cents: u64,
    /// Whether randomized change was used.
    pub used_random: bool,
    /// Denominations and counts, largest first.
    pub breakdown: Breakdown,
}

/// POST `/transactions` - Compute change for one transaction.
async fn compute_change(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Response {
    let code = request.currency.as_deref().unwrap_or(CurrencyCode::DEFAULT);
    let overrides = match request.overrides.to_overrides() {
        Ok(overrides) => overrides,
        Err(response) => return response,
    };

    let outcome = state
        .loader
        .resolve(code, &overrides)
        .map_err(RegisterError::from)
        .and_then(|config| CashRegister::new(config).process(&request.owed, &request.paid));

    match outcome {
        Ok(line) => Json(TransactionResponse {
            line: line.to_string(),
            change_cents: line.change_cents,
            used_random: line.used_random(),
            breakdown: line.breakdown,
        })
        .into_response(),
        Err(e) => map_register_error(e),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{json_body, send};

    fn post(body: &serde_json::Value) -> Request<Body> {
        Request::post("/transactions")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_compute_change() {
        let response = send(post(&json!({"owed": "2.13", "paid": "3.00"}))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["line"], "2.13, 3.00, 0.87: 3 quarters, 1 dime, 2 pennies");
        assert_eq!(body["changeCents"], 87);
        assert_eq!(body["usedRandom"], false);
        assert_eq!(body["breakdown"][0]["denomination"]["name"], "quarter");
        assert_eq!(body["breakdown"][0]["count"], 3);
    }

    #[tokio::test]
    async fn test_compute_change_with_half_dollars() {
        let response = send(post(&json!({
            "owed": "1.25",
            "paid": "2.00",
            "currency": "usd",
            "halfDollars": true
        })))
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["line"], "1.25, 2.00, 0.75: 1 half dollar, 1 quarter");
    }

    #[tokio::test]
    async fn test_compute_change_insufficient_payment() {
        let response = send(post(&json!({"owed": "5.00", "paid": "1.00"}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
