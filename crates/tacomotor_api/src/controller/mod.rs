//! Route registration for every catalog endpoint.

mod admin;
mod brand;
mod part;

use actix_web::{web, HttpResponse};
use serde_json::json;

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .configure(admin::configure_routes)
        .configure(brand::configure_routes)
        .configure(part::configure_routes);
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "service": "taco-motor",
        "version": tacomotor_core::core_version(),
        "resources": [brand::ROUTER_PREFIX, part::ROUTER_PREFIX],
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
