//! Child listings for one account. An unknown `uid` lists nothing rather than
//! failing; only the IT partner lookup reports `404`, since it returns a single
//! record.

use actix_web::{web, HttpResponse};
use common::model::{Platform, PrimaryItPartner, Update, UseCase};

use crate::error::{ApiError, ApiResult};
use crate::store::children::{self, ChildTable};
use crate::store::Db;

async fn list_for<T>(db: web::Data<Db>, uid: String) -> ApiResult<HttpResponse>
where
    T: ChildTable + serde::Serialize + Send + 'static,
{
    let records = db.run(move |conn| children::list::<T>(conn, Some(&uid))).await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn use_cases(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    list_for::<UseCase>(db, uid.into_inner()).await
}

pub async fn updates(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    list_for::<Update>(db, uid.into_inner()).await
}

pub async fn platforms(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    list_for::<Platform>(db, uid.into_inner()).await
}

pub async fn primary_it_partner(db: web::Data<Db>, uid: web::Path<String>) -> ApiResult<HttpResponse> {
    let uid = uid.into_inner();
    let partner = db
        .run(move |conn| {
            children::first_for_account::<PrimaryItPartner>(conn, &uid)?
                .ok_or_else(|| ApiError::not_found(format!("Primary IT Partner for account {uid}")))
        })
        .await?;
    Ok(HttpResponse::Ok().json(partner))
}
