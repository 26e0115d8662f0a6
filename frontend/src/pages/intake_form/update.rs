use common::routes::Route;
use common::validation::validate_submission;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{toggle, IntakeForm, Outcome};
use crate::api::{self, ApiError};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

const HELP_TYPE_REQUIRED: &str = r#"Please select at least one option for "What Can We Help You With""#;

pub fn update(form: &mut IntakeForm, ctx: &Context<IntakeForm>, msg: Msg) -> bool {
    match msg {
        Msg::AreasLoaded(areas) => form.functional_areas = areas,
        Msg::SetText(setter, value) => setter(form, value),
        Msg::Toggle(field, value) => toggle(field(form), value),
        Msg::ToggleHelpType(help_type) => {
            match form.help_types.iter().position(|h| *h == help_type) {
                Some(index) => {
                    form.help_types.remove(index);
                }
                None => form.help_types.push(help_type),
            }
            form.help_type_error = None;
        }
        Msg::HasItPartner(value) => form.has_it_partner = value,
        Msg::Submit => {
            if form.help_types.is_empty() {
                form.help_type_error = Some(HELP_TYPE_REQUIRED.to_string());
                return true;
            }
            let submission = form.submission();
            if let Err(e) = validate_submission(&submission) {
                form.outcome = Some(Outcome::Failed(e.to_string()));
                open_top_sheet(form.result_sheet.clone());
                return true;
            }
            form.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::submit_request(&submission).await;
                link.send_message(Msg::Submitted(result));
            });
        }
        Msg::Submitted(result) => {
            form.submitting = false;
            match result {
                Ok(_) => {
                    form.reset();
                    form.outcome = Some(Outcome::Submitted);
                }
                Err(e) => {
                    error!(format!("Error submitting request: {e}"));
                    let message = match e {
                        ApiError::ValidationFailed(detail) => detail,
                        _ => "Failed to submit request. Please try again.".to_string(),
                    };
                    form.outcome = Some(Outcome::Failed(message));
                }
            }
            open_top_sheet(form.result_sheet.clone());
        }
        Msg::CloseResult => {
            close_top_sheet(form.result_sheet.clone());
        }
        Msg::ReturnHome => {
            close_top_sheet(form.result_sheet.clone());
            ctx.props().on_navigate.emit(Route::Accounts);
        }
    }
    true
}
