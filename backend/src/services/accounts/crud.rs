use actix_web::{web, HttpResponse};
use common::model::{Account, AccountPatch};
use common::requests::OkResponse;

use crate::error::ApiResult;
use crate::store::{accounts, Db};

pub async fn list(db: web::Data<Db>) -> ApiResult<HttpResponse> {
    let accounts = db.run(|conn| accounts::list(conn)).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

pub async fn create(db: web::Data<Db>, body: web::Json<Account>) -> ApiResult<HttpResponse> {
    let account = body.into_inner();
    let created = db.run(move |conn| accounts::create(conn, account)).await?;
    Ok(HttpResponse::Ok().json(created))
}

pub async fn get(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    let uid = uid.into_inner();
    let account = db.run(move |conn| accounts::get(conn, &uid)).await?;
    Ok(HttpResponse::Ok().json(account))
}

pub async fn update(
    db: web::Data<Db>,
    uid: web::Path<String>,
    body: web::Json<AccountPatch>,
) -> ApiResult<HttpResponse> {
    let uid = uid.into_inner();
    let patch = body.into_inner();
    let account = db.run(move |conn| accounts::update(conn, &uid, patch)).await?;
    Ok(HttpResponse::Ok().json(account))
}

pub async fn delete(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    let uid = uid.into_inner();
    db.run(move |conn| accounts::delete(conn, &uid)).await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}
