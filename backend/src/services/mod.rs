//! # HTTP Services
//!
//! Every JSON endpoint lives under `/api`. Each resource module exposes a
//! `configure_routes` returning its own `Scope` (or `Resource` for the single
//! path endpoints); [`configure`] mounts them all.
//!
//! Anything that is not an API path falls through to [`embedded::process`],
//! which serves the compiled frontend.

pub mod accounts;
pub mod children;
pub mod embedded;
pub mod functional_areas;
pub mod health;
pub mod intake_requests;
pub mod request_states;

#[cfg(test)]
mod tests;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::middleware::Condition;
use actix_web::{web, HttpResponse};
use common::model::{Platform, PrimaryItPartner, Update, UseCase};
use common::requests::ErrorBody;

/// Registers every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::configure_routes())
        .service(children::configure_routes::<UseCase>())
        .service(children::configure_routes::<Update>())
        .service(children::configure_routes::<Platform>())
        .service(children::configure_routes::<PrimaryItPartner>())
        .service(intake_requests::configure_routes())
        .service(request_states::configure_routes())
        .service(functional_areas::configure_routes())
        .service(health::configure_routes());
}

/// JSON extractor settings: a body size limit, and malformed bodies reported
/// as `422` with the usual `{"detail": ...}` shape.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = HttpResponse::UnprocessableEntity().json(ErrorBody {
                detail: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}

/// CORS policy for the API. Nothing is wrapped when no origins are
/// configured, so the embedded frontend stays the only caller; `*` opens the
/// API to any origin. Requests from other origins still reach the handlers
/// (the embedded frontend sends an `Origin` on its own POSTs) but get no
/// allow headers.
pub fn cors(allowed_origins: &[String]) -> Condition<Cors> {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .block_on_origin_mismatch(false)
        .max_age(3600);
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    };
    Condition::new(!allowed_origins.is_empty(), cors)
}
