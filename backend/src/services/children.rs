//! # Account Child Services
//!
//! Use cases, updates, platforms and primary IT partners share one route
//! layout, mounted once per record type at `/api/<collection>`:
//!
//! *   **`GET /`**: list records, optionally narrowed with `?account_uid=`.
//! *   **`POST /`**: create a record; `404` when `account_uid` names no account.
//! *   **`GET|PUT|DELETE /{id}`**: read, patch or delete one record.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::{web, HttpResponse, Scope};
use common::patch::Merge;
use common::requests::{AccountFilter, OkResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiResult;
use crate::store::children::{self, ChildTable};
use crate::store::Db;

/// Bounds shared by every record type served here.
pub trait ChildResource:
    ChildTable + Merge<Patch: DeserializeOwned + Send + 'static> + Serialize + DeserializeOwned + Send + 'static
{
}

impl<T> ChildResource for T where
    T: ChildTable + Merge<Patch: DeserializeOwned + Send + 'static> + Serialize + DeserializeOwned + Send + 'static
{
}

pub fn configure_routes<T>() -> Scope
where
    T: ChildResource,
{
    scope(&format!("/api/{}", T::COLLECTION))
        .route("", get().to(list::<T>))
        .route("", post().to(create::<T>))
        .route("/{id}", get().to(read::<T>))
        .route("/{id}", put().to(update::<T>))
        .route("/{id}", delete().to(remove::<T>))
}

async fn list<T>(db: web::Data<Db>, filter: web::Query<AccountFilter>) -> ApiResult<HttpResponse>
where
    T: ChildResource,
{
    let account_uid = filter.into_inner().account_uid;
    let records = db
        .run(move |conn| children::list::<T>(conn, account_uid.as_deref()))
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

async fn create<T>(db: web::Data<Db>, body: web::Json<T>) -> ApiResult<HttpResponse>
where
    T: ChildResource,
{
    let record = body.into_inner();
    let created = db.run(move |conn| children::create(conn, record)).await?;
    Ok(HttpResponse::Ok().json(created))
}

async fn read<T>(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse>
where
    T: ChildResource,
{
    let id = id.into_inner();
    let record = db.run(move |conn| children::get::<T>(conn, id)).await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn update<T>(db: web::Data<Db>, id: web::Path<i64>, body: web::Json<T::Patch>) -> ApiResult<HttpResponse>
where
    T: ChildResource,
{
    let id = id.into_inner();
    let patch = body.into_inner();
    let record = db.run(move |conn| children::update::<T>(conn, id, patch)).await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn remove<T>(db: web::Data<Db>, id: web::Path<i64>) -> ApiResult<HttpResponse>
where
    T: ChildResource,
{
    let id = id.into_inner();
    db.run(move |conn| children::delete::<T>(conn, id)).await?;
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}
