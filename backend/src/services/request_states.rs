//! # Request State Service
//!
//! Routes under `/api/request-states` for the admin page that manages the
//! labels used on the triage board.
//!
//! *   **`GET /`**, **`POST /`**: list states by id, or create one. Names are
//!     unique (`409`); colours must be `#rrggbb` (`422`).
//! *   **`GET|PUT|DELETE /{id}`**: read, patch or delete a state. Deleting also
//!     detaches it from every intake request.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::{web, HttpResponse, Scope};
use common::model::{RequestState, RequestStatePatch};
use common::requests::OkResponse;

use crate::error::ApiResult;
use crate::store::{request_states, Db};

const API_PATH: &str = "/api/request-states";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list))
        .route("", post().to(create))
        .route("/{id}", get().to(read))
        .route("/{id}", put().to(update))
        .route("/{id}", delete().to(remove))
}

async fn list(db: web::Data<Db>) -> ApiResult<HttpResponse> {
    let states = db.run(|conn| request_states::list(conn)).await?;
    Ok(HttpResponse::Ok().json(states))
}

async fn create(db: web::Data<Db>, body: web::Json<RequestState>) -> ApiResult<HttpResponse> {
    let state = body.into_inner();
    let created = db.run(move |conn| request_states::create(conn, state)).await?;
    Ok(HttpResponse::Ok().json(created))
}

async fn read(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let state = db.run(move |conn| request_states::get(conn, id)).await?;
    Ok(HttpResponse::Ok().json(state))
}

async fn update(
    db: web::Data<Db>,
    id: web::Path<i64>,
    body: web::Json<RequestStatePatch>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let patch = body.into_inner();
    let state = db.run(move |conn| request_states::update(conn, id, patch)).await?;
    Ok(HttpResponse::Ok().json(state))
}

async fn remove(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    db.run(move |conn| request_states::delete(conn, id)).await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}
