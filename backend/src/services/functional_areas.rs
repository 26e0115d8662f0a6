use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource};
use common::model::functional_area::FUNCTIONAL_AREAS;

/// `GET /api/functional-areas`: the categories offered by the intake form.
pub fn configure_routes() -> Resource {
    resource("/api/functional-areas").route(get().to(process))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(FUNCTIONAL_AREAS)
}
