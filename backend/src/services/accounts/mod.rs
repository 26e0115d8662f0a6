//! # Account Service Module
//!
//! Routes under `/api/accounts`: CRUD on accounts keyed by `uid`, and the
//! per-account listings the details page loads.
//!
//! ## Sub-modules:
//! - `crud`: list, create, read, partial update and delete of accounts.
//! - `related`: use cases, updates, platforms and the primary IT partner of one account.

mod crud;
mod related;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all account endpoints.
const API_PATH: &str = "/api/accounts";

/// Configures and returns the Actix `Scope` for account routes.
///
/// # Registered Routes:
///
/// *   **`GET /`** and **`POST /`**: list all accounts in insertion order, or
///     create one from a full `Account` body (`409` when the `uid` is taken).
/// *   **`GET|PUT|DELETE /{uid}`**: read, patch or delete one account. `PUT`
///     takes a partial body; omitted fields keep their values and `null` clears
///     them. `DELETE` also removes the account's child records.
/// *   **`GET /{uid}/use-cases|updates|platforms`**: the account's child records.
/// *   **`GET /{uid}/primary-it-partner`**: the account's first IT partner, `404` when none.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(crud::list))
        .route("", post().to(crud::create))
        .route("/{uid}", get().to(crud::get))
        .route("/{uid}", put().to(crud::update))
        .route("/{uid}", delete().to(crud::delete))
        .route("/{uid}/use-cases", get().to(related::use_cases))
        .route("/{uid}/updates", get().to(related::updates))
        .route("/{uid}/platforms", get().to(related::platforms))
        .route("/{uid}/primary-it-partner", get().to(related::primary_it_partner))
}
