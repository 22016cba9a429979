//! Transaction file processing route.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use changemaker_core::process_file;
use changemaker_core::register::RejectedLine;

use super::{OverrideParams, map_register_error};
use crate::AppState;

/// Creates the file processing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/process", post(process))
}

/// Response for a processed transaction file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    /// Currency the file was processed in.
    pub currency: String,
    /// Divisor that decided randomization.
    pub divisor: u32,
    /// Whether any line used randomized change.
    pub has_randomization: bool,
    /// Report header line.
    pub summary: String,
    /// One formatted line per transaction, in file order.
    pub results: Vec<String>,
    /// Lines that could not be processed.
    pub errors: Vec<RejectedLineResponse>,
}

/// A transaction line that could not be processed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLineResponse {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// The line as sent, trimmed.
    pub input: String,
    /// Why it was rejected.
    pub error: String,
}

impl From<&RejectedLine> for RejectedLineResponse {
    fn from(rejected: &RejectedLine) -> Self {
        Self {
            line_number: rejected.line_number,
            input: rejected.input.clone(),
            error: rejected.error.clone(),
        }
    }
}

/// POST `/process` - Process a transaction file sent as the request body.
async fn process(
    State(state): State<AppState>,
    Query(params): Query<OverrideParams>,
    body: String,
) -> Response {
    let overrides = match params.to_overrides() {
        Ok(overrides) => overrides,
        Err(response) => return response,
    };
    match process_file(&body, &state.loader, &overrides) {
        Ok(result) => Json(ProcessResponse {
            currency: result.currency.to_string(),
            divisor: result.divisor,
            has_randomization: result.has_random,
            summary: result.summary_line(),
            results: result.result_lines(),
            errors: result.rejected().map(RejectedLineResponse::from).collect(),
        })
        .into_response(),
        Err(e) => map_register_error(e),
    }
}
