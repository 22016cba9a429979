//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use changemaker_core::{ConfigOverrides, RegisterError};
use changemaker_shared::AppError;

use crate::AppState;

pub mod currencies;
pub mod health;
pub mod process;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(process::routes())
        .merge(transactions::routes())
        .merge(currencies::routes())
}

// ============================================================================
// Shared Request Types
// ============================================================================

/// Runtime overrides accepted by every processing endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideParams {
    /// Replaces the randomization divisor.
    #[serde(default)]
    pub divisor: Option<u32>,
    /// Withdraws pennies and rounds change to the nearest five.
    #[serde(default)]
    pub no_pennies: Option<bool>,
    /// Hands out half-dollar coins.
    #[serde(default)]
    pub half_dollars: Option<bool>,
}

impl OverrideParams {
    /// Converts to engine overrides, rejecting a zero divisor up front.
    fn to_overrides(&self) -> Result<ConfigOverrides, Response> {
        if self.divisor == Some(0) {
            return Err(app_error_response(&AppError::Validation(
                "divisor must be at least 1".to_string(),
            )));
        }
        Ok(ConfigOverrides::from(self))
    }
}

impl From<&OverrideParams> for ConfigOverrides {
    fn from(params: &OverrideParams) -> Self {
        Self {
            use_pennies: params.no_pennies.map(|no_pennies| !no_pennies),
            use_half_dollars: params.half_dollars,
            random_divisor: params.divisor,
        }
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps engine errors to HTTP responses.
fn map_register_error(e: RegisterError) -> Response {
    app_error_response(&AppError::from(e))
}

/// Renders an application error as `{error, message}`.
fn app_error_response(e: &AppError) -> Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %e, "Request failed");
    }
    (
        status,
        Json(json!({
            "error": e.error_code(),
            "message": e.to_string()
        })),
    )
        .into_response()
}
