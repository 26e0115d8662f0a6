use common::model::help_type::HelpType;
use common::model::IntakeRequest;

use super::state::IntakeForm;
use crate::api::ApiError;

/// Writes one text answer into the form.
pub type TextSetter = fn(&mut IntakeForm, String);

/// Picks the multi-select answer a checkbox belongs to.
pub type ListField = fn(&mut IntakeForm) -> &mut Vec<String>;

pub enum Msg {
    AreasLoaded(Vec<String>),
    SetText(TextSetter, String),
    Toggle(ListField, &'static str),
    ToggleHelpType(HelpType),
    HasItPartner(bool),
    Submit,
    Submitted(Result<IntakeRequest, ApiError>),
    CloseResult,
    ReturnHome,
}
