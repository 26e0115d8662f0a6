use actix_web::{web, HttpResponse};
use common::model::NewIntakeRequest;

use crate::error::ApiResult;
use crate::store::{intake_requests, Db};

/// Actix web handler for `POST /api/intake-requests`.
///
/// Returns the stored request, including its id and timestamps.
pub async fn process(db: web::Data<Db>, body: web::Json<NewIntakeRequest>) -> ApiResult<HttpResponse> {
    let submission = body.into_inner();
    let stored = db
        .run(move |conn| intake_requests::create(conn, submission))
        .await?;
    Ok(HttpResponse::Ok().json(stored))
}
