//! Part endpoints under `/parts`.
//!
//! Parts carry a `brandId`; the referenced brand is neither checked nor
//! cascaded on delete.

use crate::error::ApiResult;
use crate::AppState;
use actix_web::{web, HttpResponse};
use rusqlite::Connection;
use tacomotor_core::{parse_record_id, NewPart, PartPatch, PartService, SqlitePartRepository};

pub(crate) const ROUTER_PREFIX: &str = "/parts";

/// Configure part routes
///
/// # Routes
/// - GET `/all`: list every part
/// - POST `/create` (alias `/add`): create a part, 201 with the record
/// - GET `/{id}`: fetch one part
/// - PATCH `/{id}`: partial update
/// - PUT `/{id}`: full replacement
/// - DELETE `/{id}`: hard delete, 204
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(ROUTER_PREFIX)
            .route("/all", web::get().to(list))
            .route("/create", web::post().to(create))
            .route("/add", web::post().to(create))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_by_id))
                    .route(web::patch().to(update))
                    .route(web::put().to(replace))
                    .route(web::delete().to(delete)),
            ),
    );
}

fn service(conn: &Connection) -> PartService<'_> {
    PartService::new(SqlitePartRepository::new(conn))
}

async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let parts = state.run(|conn| service(conn).list()).await?;
    Ok(HttpResponse::Ok().json(parts))
}

async fn create(state: web::Data<AppState>, body: web::Json<NewPart>) -> ApiResult<HttpResponse> {
    let draft = body.into_inner();
    let part = state.run(move |conn| service(conn).create(&draft)).await?;
    Ok(HttpResponse::Created().json(part))
}

async fn get_by_id(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let part = state.run(move |conn| service(conn).get(id)).await?;
    Ok(HttpResponse::Ok().json(part))
}

async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<PartPatch>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let patch = body.into_inner();
    let part = state
        .run(move |conn| service(conn).update(id, &patch))
        .await?;
    Ok(HttpResponse::Ok().json(part))
}

async fn replace(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<NewPart>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let draft = body.into_inner();
    let part = state
        .run(move |conn| service(conn).replace(id, &draft))
        .await?;
    Ok(HttpResponse::Ok().json(part))
}

async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    state.run(move |conn| service(conn).delete(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}
