//! Client for the JSON API served by the backend.
//!
//! Every call resolves to `Result<T, ApiError>`. HTTP failures are sorted by
//! status: `404` becomes [`ApiError::NotFound`], `409`/`422`/`400` become
//! [`ApiError::ValidationFailed`] carrying the server's `detail`, anything else
//! (including network failures) is [`ApiError::Transport`].

use common::model::{
    Account, AccountChild, AccountPatch, IntakeRequest, NewIntakeRequest, PrimaryItPartner,
    RequestState, RequestStatePatch,
};
use common::requests::{ErrorBody, OkResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// API origin baked in at build time; empty means the page's own origin.
pub const API_BASE_URL: &str = match option_env!("CRM_API_BASE_URL") {
    Some(url) => url,
    None => "",
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationFailed(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn url(path: &str) -> String {
    join(API_BASE_URL, path)
}

fn classify(status: u16, detail: String) -> ApiError {
    match status {
        404 => ApiError::NotFound(detail),
        400 | 409 | 422 => ApiError::ValidationFailed(detail),
        _ => ApiError::Transport(format!("HTTP {status}: {detail}")),
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return Ok(response.json::<T>().await?);
    }
    let status = response.status();
    let status_text = response.status_text();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => status_text,
    };
    Err(classify(status, detail))
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    read(request.send().await?).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(request: RequestBuilder, body: &B) -> Result<T, ApiError> {
    read(request.json(body)?.send().await?).await
}

// Accounts

pub async fn list_accounts() -> Result<Vec<Account>, ApiError> {
    send(Request::get(&url("/api/accounts"))).await
}

pub async fn get_account(uid: &str) -> Result<Account, ApiError> {
    send(Request::get(&url(&format!("/api/accounts/{uid}")))).await
}

pub async fn create_account(account: &Account) -> Result<Account, ApiError> {
    send_json(Request::post(&url("/api/accounts")), account).await
}

pub async fn update_account(uid: &str, patch: &AccountPatch) -> Result<Account, ApiError> {
    send_json(Request::put(&url(&format!("/api/accounts/{uid}"))), patch).await
}

/// Child records of one account, e.g. `account_children::<UseCase>("ACC001")`.
pub async fn account_children<T: AccountChild + DeserializeOwned>(uid: &str) -> Result<Vec<T>, ApiError> {
    send(Request::get(&url(&format!("/api/accounts/{uid}/{}", T::COLLECTION)))).await
}

/// `None` when the account has no IT partner yet.
pub async fn primary_it_partner(uid: &str) -> Result<Option<PrimaryItPartner>, ApiError> {
    match send(Request::get(&url(&format!("/api/accounts/{uid}/primary-it-partner")))).await {
        Ok(partner) => Ok(Some(partner)),
        Err(ApiError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

// Use cases, updates, platforms, IT partners

pub async fn create_child<T: AccountChild + Serialize + DeserializeOwned>(record: &T) -> Result<T, ApiError> {
    send_json(Request::post(&url(&format!("/api/{}", T::COLLECTION))), record).await
}

pub async fn delete_child<T: AccountChild>(id: i64) -> Result<(), ApiError> {
    let _: OkResponse = send(Request::delete(&url(&format!("/api/{}/{id}", T::COLLECTION)))).await?;
    Ok(())
}

// Intake

pub async fn functional_areas() -> Result<Vec<String>, ApiError> {
    send(Request::get(&url("/api/functional-areas"))).await
}

pub async fn submit_request(request: &NewIntakeRequest) -> Result<IntakeRequest, ApiError> {
    send_json(Request::post(&url("/api/intake-requests")), request).await
}

pub async fn list_requests() -> Result<Vec<IntakeRequest>, ApiError> {
    send(Request::get(&url("/api/intake-requests"))).await
}

pub async fn states_of_request(request_id: i64) -> Result<Vec<RequestState>, ApiError> {
    send(Request::get(&url(&format!("/api/intake-requests/{request_id}/states")))).await
}

pub async fn assign_state(request_id: i64, state_id: i64) -> Result<(), ApiError> {
    let path = format!("/api/intake-requests/{request_id}/states/{state_id}");
    let _: OkResponse = send(Request::post(&url(&path))).await?;
    Ok(())
}

pub async fn unassign_state(request_id: i64, state_id: i64) -> Result<(), ApiError> {
    let path = format!("/api/intake-requests/{request_id}/states/{state_id}");
    let _: OkResponse = send(Request::delete(&url(&path))).await?;
    Ok(())
}

// Request states

pub async fn list_states() -> Result<Vec<RequestState>, ApiError> {
    send(Request::get(&url("/api/request-states"))).await
}

pub async fn create_state(state: &RequestState) -> Result<RequestState, ApiError> {
    send_json(Request::post(&url("/api/request-states")), state).await
}

pub async fn update_state(id: i64, patch: &RequestStatePatch) -> Result<RequestState, ApiError> {
    send_json(Request::put(&url(&format!("/api/request-states/{id}"))), patch).await
}

pub async fn delete_state(id: i64) -> Result<(), ApiError> {
    let _: OkResponse = send(Request::delete(&url(&format!("/api/request-states/{id}")))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_avoids_double_slash() {
        assert_eq!(join("", "/api/accounts"), "/api/accounts");
        assert_eq!(join("http://localhost:8080/", "/api/health"), "http://localhost:8080/api/health");
    }

    #[test]
    fn statuses_map_to_error_kinds() {
        assert_eq!(classify(404, "gone".into()), ApiError::NotFound("gone".into()));
        assert_eq!(classify(409, "taken".into()), ApiError::ValidationFailed("taken".into()));
        assert_eq!(classify(422, "bad".into()), ApiError::ValidationFailed("bad".into()));
        assert!(matches!(classify(500, "boom".into()), ApiError::Transport(_)));
    }
}
