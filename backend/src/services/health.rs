use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource};
use common::requests::HealthResponse;

pub const HEALTH_MESSAGE: &str = "CRM API is running";

/// `GET /api/health`
pub fn configure_routes() -> Resource {
    resource("/api/health").route(get().to(process))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}
