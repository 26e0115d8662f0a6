use actix_web::{web, HttpResponse};
use common::requests::OkResponse;

use crate::error::ApiResult;
use crate::store::{intake_requests, Db};

pub async fn list(db: web::Data<Db>) -> ApiResult<HttpResponse> {
    let requests = db.run(|conn| intake_requests::list(conn)).await?;
    Ok(HttpResponse::Ok().json(requests))
}

pub async fn one(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let request = db.run(move |conn| intake_requests::get(conn, id)).await?;
    Ok(HttpResponse::Ok().json(request))
}

pub async fn remove(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    db.run(move |conn| intake_requests::delete(conn, id)).await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}
