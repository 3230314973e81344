//! HTTP surface of the Taco Motor catalog.
//!
//! # Responsibility
//! - Map `/brands`, `/parts` and `/reset-tables` requests onto core services.
//! - Translate core errors into the status/JSON contract of the API.
//!
//! # Invariants
//! - Handlers hold no state besides the injected [`AppState`].
//! - Every failure leaves as a JSON `{ error, message }` body.

pub mod config;
mod controller;
pub mod error;
mod state;

use actix_web::web;
use error::ApiError;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiResult;
pub use state::AppState;

/// Registers every catalog route and the JSON body policy.
///
/// The caller provides `web::Data<AppState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(controller::configure_routes);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("invalid request body: {err}")).into()
    })
}
