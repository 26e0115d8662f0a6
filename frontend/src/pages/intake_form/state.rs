use common::display::non_empty;
use common::model::additional_details::{
    AdditionalDetails, AsaResources, CloudStorageDetails, ConsultationDetails, EnhancementDetails,
    HelpDetails, NewEnvironmentDetails, ASA,
};
use common::model::help_type::{encode_help_types, HelpType};
use common::model::NewIntakeRequest;
use yew::NodeRef;

/// Result shown in the top sheet after a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Submitted,
    Failed(String),
}

pub struct IntakeForm {
    pub title: String,
    pub description: String,
    pub dri_contact: String,
    pub submitted_for: String,
    pub functional_area: String,
    pub platform: String,
    pub has_it_partner: bool,

    /// Selected help types in the order they were ticked.
    pub help_types: Vec<HelpType>,
    pub consultation: ConsultationDetails,
    pub new_environment: NewEnvironmentDetails,
    pub enhancement: EnhancementDetails,
    /// Kept apart from `enhancement` so the answers survive toggling ASA off and on.
    pub asa: AsaResources,
    pub cloud_storage: CloudStorageDetails,

    pub functional_areas: Vec<String>,
    pub submitting: bool,
    pub help_type_error: Option<String>,
    pub outcome: Option<Outcome>,
    pub result_sheet: NodeRef,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            dri_contact: String::new(),
            submitted_for: String::new(),
            functional_area: String::new(),
            platform: String::new(),
            has_it_partner: false,
            help_types: Vec::new(),
            consultation: ConsultationDetails::default(),
            new_environment: NewEnvironmentDetails::default(),
            enhancement: EnhancementDetails::default(),
            asa: AsaResources::default(),
            cloud_storage: CloudStorageDetails::default(),
            functional_areas: Vec::new(),
            submitting: false,
            help_type_error: None,
            outcome: None,
            result_sheet: NodeRef::default(),
        }
    }

    /// Clears every answer but keeps the loaded functional areas and the sheet.
    pub fn reset(&mut self) {
        let functional_areas = std::mem::take(&mut self.functional_areas);
        let result_sheet = self.result_sheet.clone();
        *self = Self {
            functional_areas,
            result_sheet,
            ..Self::new()
        };
    }

    pub fn is_selected(&self, help_type: &HelpType) -> bool {
        self.help_types.contains(help_type)
    }

    pub fn asa_selected(&self) -> bool {
        self.enhancement.platform_preferences.iter().any(|p| p == ASA)
    }

    /// Answers of the selected help types only.
    pub fn details(&self) -> AdditionalDetails {
        let details = self
            .help_types
            .iter()
            .filter_map(|help_type| match help_type {
                HelpType::Consultation => Some(HelpDetails::Consultation(self.consultation.clone())),
                HelpType::NewEnvironment => Some(HelpDetails::NewEnvironment(self.new_environment.clone())),
                HelpType::Enhancement => Some(HelpDetails::Enhancement(EnhancementDetails {
                    asa: self.asa_selected().then(|| self.asa.clone()),
                    ..self.enhancement.clone()
                })),
                HelpType::CloudStorage => Some(HelpDetails::CloudStorage(self.cloud_storage.clone())),
                HelpType::Build | HelpType::Other(_) => None,
            })
            .collect();
        AdditionalDetails(details)
    }

    pub fn submission(&self) -> NewIntakeRequest {
        NewIntakeRequest {
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            has_it_partner: self.has_it_partner,
            dri_contact: non_empty(&self.dri_contact),
            submitted_for: non_empty(&self.submitted_for),
            functional_area: non_empty(&self.functional_area),
            platform: non_empty(&self.platform),
            help_types: encode_help_types(&self.help_types),
            additional_details: Some(self.details().encode()),
        }
    }
}

/// Adds `value` to `list` or removes it when already present.
pub fn toggle(list: &mut Vec<String>, value: &str) {
    match list.iter().position(|v| v == value) {
        Some(index) => {
            list.remove(index);
        }
        None => list.push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_follow_selected_help_types() {
        let mut form = IntakeForm::new();
        form.consultation.use_case_details = "forecasting".into();
        form.cloud_storage.describe_data = "claims".into();
        form.help_types = vec![HelpType::CloudStorage];

        let map = form.details().to_map();
        assert!(map.contains_key("describe_data"));
        assert!(!map.contains_key("use_case_details"));
    }

    #[test]
    fn asa_answers_only_sent_with_asa() {
        let mut form = IntakeForm::new();
        form.help_types = vec![HelpType::Enhancement];
        form.asa.spark_pool = vec!["Create".into()];
        assert!(!form.details().to_map().contains_key("asa_spark_pool"));

        toggle(&mut form.enhancement.platform_preferences, ASA);
        assert!(form.details().to_map().contains_key("asa_spark_pool"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Vec::new();
        toggle(&mut list, "SQL");
        toggle(&mut list, "Python");
        toggle(&mut list, "SQL");
        assert_eq!(list, vec!["Python".to_string()]);
    }

    #[test]
    fn submission_blanks_become_none() {
        let mut form = IntakeForm::new();
        form.title = "  Need a sandbox ".into();
        form.help_types = vec![HelpType::Build];
        let submission = form.submission();
        assert_eq!(submission.title, "Need a sandbox");
        assert_eq!(submission.dri_contact, None);
        assert_eq!(submission.help_types, r#"["build"]"#);
        assert_eq!(submission.additional_details.as_deref(), Some("{}"));
    }

    #[test]
    fn reset_keeps_functional_areas() {
        let mut form = IntakeForm::new();
        form.functional_areas = vec!["Finance".into()];
        form.title = "x".into();
        form.reset();
        assert!(form.title.is_empty());
        assert_eq!(form.functional_areas, vec!["Finance".to_string()]);
    }
}
