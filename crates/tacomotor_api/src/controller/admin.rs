//! Administrative endpoints.
//!
//! `/reset-tables` is unauthenticated; deployments must guard it externally.

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tacomotor_core::reset_tables;

const RESET_OK_MESSAGE: &str = "Tables reset successfully";
const RESET_FAILED_MESSAGE: &str = "Error resetting tables";

#[derive(Debug, Serialize)]
struct ResetResponse {
    message: &'static str,
    brands: usize,
    parts: usize,
}

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reset-tables", web::post().to(reset));
}

/// Truncates both catalog tables in one transaction.
///
/// `brands`/`parts` in the body count the records left after the reset
/// (the demo seed, or zero).
async fn reset(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let options = state.reset_options();
    // Failure details are logged by the core; callers get a fixed message.
    let summary = state
        .run(move |conn| reset_tables(conn, options))
        .await
        .map_err(|_| ApiError::Storage(RESET_FAILED_MESSAGE.to_string()))?;
    Ok(HttpResponse::Ok().json(ResetResponse {
        message: RESET_OK_MESSAGE,
        brands: summary.brands,
        parts: summary.parts,
    }))
}
