use serde::{Deserialize, Serialize};

/// Error body returned by every failing API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Body returned by the `DELETE` endpoints and state assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub message: String,
}

/// Query string accepted by the child-record list endpoints (`?account_uid=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountFilter {
    pub account_uid: Option<String>,
}
