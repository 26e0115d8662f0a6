//! Per-help-type follow-up answers of an intake request.
//!
//! In code the answers are one [`HelpDetails`] variant per selected help type.
//! On the wire they travel as a flat JSON object serialized to text, where list
//! answers are themselves JSON-array strings. [`AdditionalDetails::decode`]
//! only reads the keys of the help types that were selected, so re-encoding a
//! decoded value drops anything that belongs to an unselected type.

use serde_json::{Map, Value};

use crate::model::help_type::HelpType;

/// Platform option that unlocks the ASA resource questions of an enhancement.
pub const ASA: &str = "ASA";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationDetails {
    pub help_with: Vec<String>,
    pub use_case_details: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEnvironmentDetails {
    pub env_preferences: Vec<String>,
    pub languages: Vec<String>,
    pub other_language: String,
    pub primary_function: Vec<String>,
    pub integrations_text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsaResources {
    pub spark_pool: Vec<String>,
    pub dedicated_sql_pool: Vec<String>,
    pub shir: Vec<String>,
    pub manage_access: Vec<String>,
    pub other_resources: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhancementDetails {
    pub environment_name: String,
    pub platform_preferences: Vec<String>,
    pub integrations_description: String,
    /// Present only when `platform_preferences` contains [`ASA`].
    pub asa: Option<AsaResources>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudStorageDetails {
    pub describe_data: String,
    pub who_accessing: String,
    pub how_consumed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HelpDetails {
    Consultation(ConsultationDetails),
    NewEnvironment(NewEnvironmentDetails),
    Enhancement(EnhancementDetails),
    CloudStorage(CloudStorageDetails),
}

impl HelpDetails {
    pub fn help_type(&self) -> HelpType {
        match self {
            HelpDetails::Consultation(_) => HelpType::Consultation,
            HelpDetails::NewEnvironment(_) => HelpType::NewEnvironment,
            HelpDetails::Enhancement(_) => HelpType::Enhancement,
            HelpDetails::CloudStorage(_) => HelpType::CloudStorage,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalDetails(pub Vec<HelpDetails>);

impl AdditionalDetails {
    /// Decodes the serialized details of a request that selected `help_types`.
    /// Text that is not a JSON object decodes as if no answers were given.
    pub fn decode(help_types: &[HelpType], raw: &str) -> Self {
        let map = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self::from_map(help_types, &map)
    }

    pub fn from_map(help_types: &[HelpType], map: &Map<String, Value>) -> Self {
        let mut details: Vec<HelpDetails> = Vec::new();
        for help_type in help_types {
            if details.iter().any(|d| &d.help_type() == help_type) {
                continue;
            }
            let entry = match help_type {
                HelpType::Consultation => HelpDetails::Consultation(ConsultationDetails {
                    help_with: list(map, "consultation_help_with"),
                    use_case_details: text(map, "use_case_details"),
                }),
                HelpType::NewEnvironment => HelpDetails::NewEnvironment(NewEnvironmentDetails {
                    env_preferences: list(map, "env_preferences"),
                    languages: list(map, "languages"),
                    other_language: text(map, "other_language"),
                    primary_function: list(map, "primary_function"),
                    integrations_text: text(map, "integrations_text"),
                }),
                HelpType::Enhancement => {
                    let platform_preferences = list(map, "platform_preferences");
                    let asa = platform_preferences
                        .iter()
                        .any(|p| p == ASA)
                        .then(|| AsaResources {
                            spark_pool: list(map, "asa_spark_pool"),
                            dedicated_sql_pool: list(map, "asa_dedicated_sql_pool"),
                            shir: list(map, "asa_shir"),
                            manage_access: list(map, "asa_manage_access"),
                            other_resources: text(map, "asa_other_resources"),
                        });
                    HelpDetails::Enhancement(EnhancementDetails {
                        environment_name: text(map, "environment_name"),
                        platform_preferences,
                        integrations_description: text(map, "integrations_description"),
                        asa,
                    })
                }
                HelpType::CloudStorage => HelpDetails::CloudStorage(CloudStorageDetails {
                    describe_data: text(map, "describe_data"),
                    who_accessing: text(map, "who_accessing"),
                    how_consumed: text(map, "how_consumed"),
                }),
                HelpType::Build | HelpType::Other(_) => continue,
            };
            details.push(entry);
        }
        AdditionalDetails(details)
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for entry in &self.0 {
            match entry {
                HelpDetails::Consultation(d) => {
                    put_list(&mut map, "consultation_help_with", &d.help_with);
                    put_text(&mut map, "use_case_details", &d.use_case_details);
                }
                HelpDetails::NewEnvironment(d) => {
                    put_list(&mut map, "env_preferences", &d.env_preferences);
                    put_list(&mut map, "languages", &d.languages);
                    put_text(&mut map, "other_language", &d.other_language);
                    put_list(&mut map, "primary_function", &d.primary_function);
                    put_text(&mut map, "integrations_text", &d.integrations_text);
                }
                HelpDetails::Enhancement(d) => {
                    put_text(&mut map, "environment_name", &d.environment_name);
                    put_list(&mut map, "platform_preferences", &d.platform_preferences);
                    put_text(&mut map, "integrations_description", &d.integrations_description);
                    if let Some(asa) = &d.asa {
                        put_list(&mut map, "asa_spark_pool", &asa.spark_pool);
                        put_list(&mut map, "asa_dedicated_sql_pool", &asa.dedicated_sql_pool);
                        put_list(&mut map, "asa_shir", &asa.shir);
                        put_list(&mut map, "asa_manage_access", &asa.manage_access);
                        put_text(&mut map, "asa_other_resources", &asa.other_resources);
                    }
                }
                HelpDetails::CloudStorage(d) => {
                    put_text(&mut map, "describe_data", &d.describe_data);
                    put_text(&mut map, "who_accessing", &d.who_accessing);
                    put_text(&mut map, "how_consumed", &d.how_consumed);
                }
            }
        }
        map
    }

    pub fn encode(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }

    #[cfg(test)]
    fn get(&self, help_type: &HelpType) -> Option<&HelpDetails> {
        self.0.iter().find(|d| &d.help_type() == help_type)
    }
}

fn text(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// List answers arrive as JSON-array text; native arrays are accepted too.
fn list(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::String(s)) => serde_json::from_str::<Vec<String>>(s).unwrap_or_default(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn put_text(map: &mut Map<String, Value>, key: &str, value: &str) {
    map.insert(key.to_string(), Value::String(value.to_string()));
}

fn put_list(map: &mut Map<String, Value>, key: &str, values: &[String]) {
    let encoded = Value::from(values.to_vec()).to_string();
    map.insert(key.to_string(), Value::String(encoded));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unselected_help_type_keys_are_dropped() {
        let raw = json!({
            "consultation_help_with": "[\"Something else\"]",
            "use_case_details": "forecasting",
            "env_preferences": "[\"Databricks\"]",
            "languages": "[\"Python\"]",
            "describe_data": "claims extracts"
        })
        .to_string();

        let details =
            AdditionalDetails::decode(&[HelpType::Consultation, HelpType::CloudStorage], &raw);
        let map = details.to_map();

        assert!(map.contains_key("consultation_help_with"));
        assert!(map.contains_key("describe_data"));
        assert!(!map.contains_key("env_preferences"));
        assert!(!map.contains_key("languages"));
    }

    #[test]
    fn list_answers_round_trip_as_json_text() {
        let details = AdditionalDetails(vec![HelpDetails::Consultation(ConsultationDetails {
            help_with: vec!["Understanding my UDAP environment".into()],
            use_case_details: String::new(),
        })]);
        let map = details.to_map();
        assert_eq!(
            map.get("consultation_help_with"),
            Some(&Value::String("[\"Understanding my UDAP environment\"]".into()))
        );

        let decoded = AdditionalDetails::decode(&[HelpType::Consultation], &details.encode());
        assert_eq!(decoded, details);
    }

    #[test]
    fn native_arrays_are_accepted() {
        let raw = json!({"platform_preferences": ["Snowflake", "ASA"], "asa_shir": ["Scale"]});
        let details = AdditionalDetails::decode(&[HelpType::Enhancement], &raw.to_string());
        let Some(HelpDetails::Enhancement(enhancement)) = details.get(&HelpType::Enhancement) else {
            panic!("enhancement details missing");
        };
        assert_eq!(enhancement.platform_preferences, vec!["Snowflake", "ASA"]);
        assert_eq!(enhancement.asa.as_ref().map(|a| a.shir.clone()), Some(vec!["Scale".to_string()]));
    }

    #[test]
    fn asa_questions_only_kept_when_asa_selected() {
        let raw = json!({
            "environment_name": "prod-west",
            "platform_preferences": "[\"Databricks\"]",
            "asa_spark_pool": "[\"Create\"]"
        });
        let details = AdditionalDetails::decode(&[HelpType::Enhancement], &raw.to_string());
        let map = details.to_map();
        assert_eq!(map.get("environment_name"), Some(&Value::String("prod-west".into())));
        assert!(!map.contains_key("asa_spark_pool"));
    }

    #[test]
    fn build_and_unknown_types_carry_no_details() {
        let details = AdditionalDetails::decode(
            &[HelpType::Build, HelpType::Other("Training".into())],
            r#"{"describe_data":"x"}"#,
        );
        assert!(details.0.is_empty());
        assert_eq!(details.encode(), "{}");
    }

    #[test]
    fn garbage_text_decodes_empty() {
        let details = AdditionalDetails::decode(&[HelpType::CloudStorage], "not json");
        assert_eq!(
            details.get(&HelpType::CloudStorage),
            Some(&HelpDetails::CloudStorage(CloudStorageDetails::default()))
        );
    }
}
