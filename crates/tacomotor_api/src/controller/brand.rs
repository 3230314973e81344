//! Brand endpoints under `/brands`.

use crate::error::ApiResult;
use crate::AppState;
use actix_web::{web, HttpResponse};
use rusqlite::Connection;
use tacomotor_core::{parse_record_id, BrandPatch, BrandService, NewBrand, SqliteBrandRepository};

pub(crate) const ROUTER_PREFIX: &str = "/brands";

/// Configure brand routes
///
/// # Routes
/// - GET `/all`: list every brand
/// - POST `/create` (alias `/add`): create a brand, 201 with the record
/// - GET `/{id}`: fetch one brand
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

fn service(conn: &Connection) -> BrandService<'_> {
    BrandService::new(SqliteBrandRepository::new(conn))
}

async fn list(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let brands = state.run(|conn| service(conn).list()).await?;
    Ok(HttpResponse::Ok().json(brands))
}

async fn create(state: web::Data<AppState>, body: web::Json<NewBrand>) -> ApiResult<HttpResponse> {
    let draft = body.into_inner();
    let brand = state.run(move |conn| service(conn).create(&draft)).await?;
    Ok(HttpResponse::Created().json(brand))
}

async fn get_by_id(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let brand = state.run(move |conn| service(conn).get(id)).await?;
    Ok(HttpResponse::Ok().json(brand))
}

async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<BrandPatch>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let patch = body.into_inner();
    let brand = state
        .run(move |conn| service(conn).update(id, &patch))
        .await?;
    Ok(HttpResponse::Ok().json(brand))
}

async fn replace(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<NewBrand>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    let draft = body.into_inner();
    let brand = state
        .run(move |conn| service(conn).replace(id, &draft))
        .await?;
    Ok(HttpResponse::Ok().json(brand))
}

async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&id)?;
    state.run(move |conn| service(conn).delete(id)).await?;
    Ok(HttpResponse::NoContent().finish())
}
