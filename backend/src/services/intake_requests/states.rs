use actix_web::{web, HttpResponse};
use common::requests::OkResponse;

use crate::error::ApiResult;
use crate::store::{assignments, Db};

pub async fn list(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let request_id = id.into_inner();
    let states = db
        .run(move |conn| assignments::list_states(conn, request_id))
        .await?;
    Ok(HttpResponse::Ok().json(states))
}

pub async fn assign(db: web::Data<Db>, path: web::Path<(i64, i64)>) -> ApiResult<HttpResponse> {
    let (request_id, state_id) = path.into_inner();
    db.run(move |conn| assignments::assign(conn, request_id, state_id))
        .await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}

pub async fn unassign(db: web::Data<Db>, path: web::Path<(i64, i64)>) -> ApiResult<HttpResponse> {
    let (request_id, state_id) = path.into_inner();
    db.run(move |conn| assignments::unassign(conn, request_id, state_id))
        .await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}
