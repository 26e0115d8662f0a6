use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One option of the "What can we help you with" question.
///
/// Identifiers the application does not know are kept verbatim in `Other`
/// so that older rows still display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HelpType {
    Consultation,
    Build,
    NewEnvironment,
    Enhancement,
    CloudStorage,
    Other(String),
}

impl HelpType {
    pub const ALL: [HelpType; 5] = [
        HelpType::Consultation,
        HelpType::Build,
        HelpType::NewEnvironment,
        HelpType::Enhancement,
        HelpType::CloudStorage,
    ];

    pub fn id(&self) -> &str {
        match self {
            HelpType::Consultation => "consultation",
            HelpType::Build => "build",
            HelpType::NewEnvironment => "new_environment",
            HelpType::Enhancement => "enhancement",
            HelpType::CloudStorage => "cloud_storage",
            HelpType::Other(id) => id,
        }
    }

    /// Short label used on the triage board and by its search.
    pub fn label(&self) -> &str {
        match self {
            HelpType::Consultation => "Consultation/Questions",
            HelpType::Build => "Build Something",
            HelpType::NewEnvironment => "New Environment",
            HelpType::Enhancement => "Environment Enhancement",
            HelpType::CloudStorage => "Cloud Storage",
            HelpType::Other(id) => id,
        }
    }

    /// Card title on the intake form.
    pub fn title(&self) -> &str {
        match self {
            HelpType::CloudStorage => "Cloud Storage for Downstream Consumers",
            other => other.label(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            HelpType::Consultation => "Get expert advice and answers to your questions",
            HelpType::Build => "Create a new solution or application",
            HelpType::NewEnvironment => "Set up a new development or production environment",
            HelpType::Enhancement => "Improve or modify existing environments",
            HelpType::CloudStorage => "Set up data storage for downstream applications",
            HelpType::Other(_) => "",
        }
    }
}

impl From<String> for HelpType {
    fn from(id: String) -> Self {
        match id.as_str() {
            "consultation" => HelpType::Consultation,
            "build" => HelpType::Build,
            "new_environment" => HelpType::NewEnvironment,
            "enhancement" => HelpType::Enhancement,
            "cloud_storage" => HelpType::CloudStorage,
            _ => HelpType::Other(id),
        }
    }
}

impl From<HelpType> for String {
    fn from(help_type: HelpType) -> Self {
        match help_type {
            HelpType::Other(id) => id,
            known => known.id().to_string(),
        }
    }
}

/// Reads the serialized `help_types` column.
///
/// The canonical form is a JSON array of identifiers. Rows that hold plain
/// comma-separated text are split on commas instead.
pub fn parse_help_types(raw: &str) -> Vec<HelpType> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids.into_iter().map(HelpType::from).collect(),
        Err(_) => raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| HelpType::from(id.to_string()))
            .collect(),
    }
}

/// Serializes help types into the JSON-array text stored on the wire.
pub fn encode_help_types(help_types: &[HelpType]) -> String {
    Value::from(
        help_types
            .iter()
            .map(|help_type| help_type.id().to_string())
            .collect::<Vec<_>>(),
    )
    .to_string()
}

/// Comma-separated labels, as rendered on a triage card.
pub fn format_help_types(help_types: &[HelpType]) -> String {
    help_types
        .iter()
        .map(HelpType::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array() {
        let parsed = parse_help_types(r#"["consultation","cloud_storage"]"#);
        assert_eq!(parsed, vec![HelpType::Consultation, HelpType::CloudStorage]);
    }

    #[test]
    fn falls_back_to_comma_separated_text() {
        let parsed = parse_help_types("Platform Access,Training");
        assert_eq!(
            parsed,
            vec![
                HelpType::Other("Platform Access".into()),
                HelpType::Other("Training".into())
            ]
        );
        assert_eq!(format_help_types(&parsed), "Platform Access, Training");
    }

    #[test]
    fn empty_text_has_no_help_types() {
        assert!(parse_help_types("").is_empty());
        assert!(parse_help_types("[]").is_empty());
    }

    #[test]
    fn encodes_identifiers_not_labels() {
        let encoded = encode_help_types(&[HelpType::NewEnvironment, HelpType::Build]);
        assert_eq!(encoded, r#"["new_environment","build"]"#);
    }

    #[test]
    fn labels_for_triage() {
        let labels = format_help_types(&[HelpType::Consultation, HelpType::CloudStorage]);
        assert_eq!(labels, "Consultation/Questions, Cloud Storage");
    }
}
