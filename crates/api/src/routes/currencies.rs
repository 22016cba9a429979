//! Currency configuration routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use changemaker_core::{CurrencyConfig, Denomination, RegisterError};

use super::{OverrideParams, map_register_error};
use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies/{code}", get(get_currency))
}

/// Resolved configuration for a currency, overrides applied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    /// Currency code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Largest owed amount the sample generator produces, whole units.
    pub max_value: u64,
    /// Whether the smallest unit is in circulation.
    pub use_pennies: bool,
    /// Whether half dollars are handed out.
    pub use_half_dollars: bool,
    /// Divisor that triggers randomized change.
    pub random_divisor: u32,
    /// Every declared denomination, in document order.
    pub denominations: Vec<Denomination>,
    /// Payment denominations in minor units.
    pub payment_denominations: Vec<u64>,
    /// Other resolved denomination flags.
    pub flags: BTreeMap<String, bool>,
    /// Denominations handed out under this configuration, largest first.
    pub active_denominations: Vec<Denomination>,
}

impl From<CurrencyConfig> for CurrencyResponse {
    fn from(config: CurrencyConfig) -> Self {
        Self {
            active_denominations: config.active_denominations(),
            code: config.code.to_string(),
            name: config.name,
            max_value: config.max_value,
            use_pennies: config.use_pennies,
            use_half_dollars: config.use_half_dollars,
            random_divisor: config.random_divisor,
            denominations: config.denominations,
            payment_denominations: config.payment_denominations,
            flags: config.flags,
        }
    }
}

/// GET `/currencies/{code}` - Resolve a currency configuration.
async fn get_currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<OverrideParams>,
) -> Response {
    let overrides = match params.to_overrides() {
        Ok(overrides) => overrides,
        Err(response) => return response,
    };
    match state.loader.resolve(&code, &overrides) {
        Ok(config) => Json(CurrencyResponse::from(config)).into_response(),
        Err(e) => map_register_error(RegisterError::from(e)),
    }
}
