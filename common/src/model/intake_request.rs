use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::additional_details::AdditionalDetails;
use crate::model::help_type::{encode_help_types, parse_help_types, HelpType};

/// Body of `POST /api/intake-requests`, as the intake form submits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewIntakeRequest {
    pub title: String,
    pub description: Option<String>,
    pub has_it_partner: bool,
    pub dri_contact: Option<String>,
    pub submitted_for: Option<String>,
    pub functional_area: Option<String>,
    pub platform: Option<String>,
    /// JSON-array text of help type identifiers.
    pub help_types: String,
    /// JSON-object text; see [`AdditionalDetails`].
    pub additional_details: Option<String>,
}

impl NewIntakeRequest {
    pub fn help_types(&self) -> Vec<HelpType> {
        parse_help_types(&self.help_types)
    }

    /// Rewrites `help_types` and `additional_details` into canonical form:
    /// identifiers as a JSON array, and only the detail keys of selected types.
    pub fn normalized(mut self) -> Self {
        let help_types = self.help_types();
        let details = AdditionalDetails::decode(
            &help_types,
            self.additional_details.as_deref().unwrap_or_default(),
        );
        self.help_types = encode_help_types(&help_types);
        self.additional_details = Some(details.encode());
        self
    }
}

/// A stored help request. Immutable once created apart from its states.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeRequest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub has_it_partner: bool,
    pub dri_contact: Option<String>,
    pub submitted_for: Option<String>,
    pub functional_area: Option<String>,
    pub platform: Option<String>,
    pub help_types: String,
    pub additional_details: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl IntakeRequest {
    pub fn help_types(&self) -> Vec<HelpType> {
        parse_help_types(&self.help_types)
    }

    pub fn details(&self) -> AdditionalDetails {
        AdditionalDetails::decode(
            &self.help_types(),
            self.additional_details.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalization_keeps_selected_details_only() {
        let submission = NewIntakeRequest {
            title: "Need storage for claims extracts".into(),
            help_types: r#"["consultation","cloud_storage"]"#.into(),
            additional_details: Some(
                json!({
                    "use_case_details": "quarterly reporting",
                    "env_preferences": "[\"Snowflake\"]",
                    "other_language": "Scala"
                })
                .to_string(),
            ),
            ..Default::default()
        }
        .normalized();

        let stored: serde_json::Value =
            serde_json::from_str(submission.additional_details.as_deref().unwrap()).unwrap();
        let keys: Vec<&str> = stored.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"use_case_details"));
        assert!(keys.contains(&"describe_data"));
        assert!(!keys.contains(&"env_preferences"));
        assert!(!keys.contains(&"other_language"));
        assert_eq!(submission.help_types, r#"["consultation","cloud_storage"]"#);
    }

    #[test]
    fn missing_details_normalize_to_selected_defaults() {
        let submission = NewIntakeRequest {
            title: "Build a pipeline".into(),
            help_types: r#"["build"]"#.into(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(submission.additional_details.as_deref(), Some("{}"));
    }
}
