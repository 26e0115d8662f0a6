//! # Intake Request Service Module
//!
//! Routes under `/api/intake-requests`.
//!
//! ## Sub-modules:
//! - `submit`: stores a new request from the intake form.
//! - `get`: lists, reads and deletes stored requests.
//! - `states`: the states attached to one request.

mod get;
mod states;
mod submit;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for intake request endpoints.
const API_PATH: &str = "/api/intake-requests";

/// Configures and returns the Actix `Scope` for intake request routes.
///
/// # Registered Routes:
///
/// *   **`POST /`**: `submit::process`. Body is the form submission with
///     `help_types` and `additional_details` as JSON text. Details of help types
///     that were not selected are dropped before storing.
/// *   **`GET /`**: `get::list`, newest first.
/// *   **`GET|DELETE /{id}`**: `get::one` and `get::remove`.
/// *   **`GET /{id}/states`**: `states::list`, empty for unknown ids.
/// *   **`POST|DELETE /{id}/states/{state_id}`**: `states::assign` and
///     `states::unassign`. Both are idempotent; assigning fails with `404` when
///     either id is unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(get::list))
        .route("/{id}", get().to(get::one))
        .route("/{id}", delete().to(get::remove))
        .route("/{id}/states", get().to(states::list))
        .route("/{id}/states/{state_id}", post().to(states::assign))
        .route("/{id}/states/{state_id}", delete().to(states::unassign))
}
