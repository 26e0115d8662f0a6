use serde::{Deserialize, Serialize};

use crate::patch::{merge_nullable, merge_required, Merge};

/// Colour given to a new state when the form does not pick one.
pub const DEFAULT_STATE_COLOR: &str = "#3b82f6";

/// A named, coloured label that can be attached to intake requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestState {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_color() -> String {
    DEFAULT_STATE_COLOR.to_string()
}

impl RequestState {
    pub fn new(name: impl Into<String>, color: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            description: description.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestStatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl Merge for RequestState {
    type Patch = RequestStatePatch;

    fn merge(&mut self, patch: RequestStatePatch) {
        merge_required(&mut self.name, patch.name);
        merge_required(&mut self.color, patch.color);
        merge_nullable(&mut self.description, patch.description);
    }
}

/// States every fresh database starts with.
pub fn default_states() -> Vec<RequestState> {
    vec![
        RequestState::new("New", "#3b82f6", Some("Request has been submitted and is awaiting review")),
        RequestState::new("In Review", "#8b5cf6", Some("Request is being reviewed by the team")),
        RequestState::new("Assigned", "#0ea5e9", Some("Request has been assigned to a team member")),
        RequestState::new("In Progress", "#f59e0b", Some("Work on the request has started")),
        RequestState::new("Blocked", "#ef4444", Some("Request is blocked and cannot proceed")),
        RequestState::new("Completed", "#10b981", Some("Request has been successfully completed")),
        RequestState::new("Rejected", "#6b7280", Some("Request has been rejected")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults_when_omitted() {
        let state: RequestState = serde_json::from_str(r#"{"name":"Triaged"}"#).unwrap();
        assert_eq!(state.color, DEFAULT_STATE_COLOR);
        assert_eq!(state.description, None);
    }
}
