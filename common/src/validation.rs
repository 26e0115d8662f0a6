//! Field checks shared by the forms and the API.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::{Account, NewIntakeRequest, RequestState};

static COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("color must be '#' followed by six hex digits, got '{0}'")]
    InvalidColor(String),
}

pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if !COLOR_RE.is_match(color) {
        return Err(ValidationError::InvalidColor(color.to_string()));
    }
    Ok(())
}

pub fn validate_account(account: &Account) -> Result<(), ValidationError> {
    require("uid", &account.uid)
}

pub fn validate_state(state: &RequestState) -> Result<(), ValidationError> {
    require("name", &state.name)?;
    validate_color(&state.color)
}

pub fn validate_submission(request: &NewIntakeRequest) -> Result<(), ValidationError> {
    require("title", &request.title)
}
