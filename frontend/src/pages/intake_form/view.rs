//! Rendering of the intake form: request fields, help-type cards, one
//! follow-up section per selected help type, and the result sheet.

use common::model::help_type::HelpType;
use common::model::platform::KNOWN_PLATFORMS;
use yew::prelude::*;

use super::messages::{ListField, Msg, TextSetter};
use super::options::*;
use super::state::{IntakeForm, Outcome};
use crate::helpers::{input_value, select_value, textarea_value};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

type Link = yew::html::Scope<IntakeForm>;

pub fn view(form: &IntakeForm, ctx: &Context<IntakeForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div>
            <h1>{ "Submit a Request" }</h1>
            <p class="muted">{ "Tell us how we can help you with your platform needs" }</p>

            <div class="card">
                <h2>{ "How to Submit a Request" }</h2>
                <ol class="muted">
                    <li>{ "Fill out all required fields marked with an asterisk (*)" }</li>
                    <li>{ "Select one or more options for what type of help you need" }</li>
                    <li>{ "Answer the follow-up questions for each selected option" }</li>
                    <li>{ "Provide as much detail as possible in the description" }</li>
                    <li>{ "Submit the form and our team will review your request" }</li>
                </ol>
            </div>

            <form {onsubmit}>
                { request_details(form, link) }
                { help_type_cards(form, link) }
                if form.is_selected(&HelpType::Consultation) { { consultation(form, link) } }
                if form.is_selected(&HelpType::NewEnvironment) { { new_environment(form, link) } }
                if form.is_selected(&HelpType::Enhancement) { { enhancement(form, link) } }
                if form.is_selected(&HelpType::CloudStorage) { { cloud_storage(form, link) } }
                <button type="submit" disabled={form.submitting}>
                    { if form.submitting { "Submitting..." } else { "Submit Request" } }
                </button>
            </form>

            <YwMaterialTopSheet node_ref={form.result_sheet.clone()}>
                { result(form, link) }
            </YwMaterialTopSheet>
        </div>
    }
}

fn text_input(link: &Link, label: Html, placeholder: &'static str, value: &str, setter: TextSetter) -> Html {
    html! {
        <label>
            { label }
            <input type="text" placeholder={placeholder} value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::SetText(setter, input_value(e)))} />
        </label>
    }
}

fn text_area(link: &Link, label: &'static str, placeholder: &'static str, value: &str, setter: TextSetter) -> Html {
    html! {
        <label>
            { label }
            <textarea rows="3" placeholder={placeholder} value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::SetText(setter, textarea_value(e)))} />
        </label>
    }
}

fn checkboxes(link: &Link, label: &'static str, options: &[&'static str], selected: &[String], field: ListField) -> Html {
    html! {
        <fieldset>
            <legend>{ label }</legend>
            { for options.iter().map(|option| {
                let option: &'static str = *option;
                html! {
                    <label key={option}>
                        <input type="checkbox" checked={selected.iter().any(|s| s == option)}
                            onchange={link.callback(move |_: Event| Msg::Toggle(field, option))} />
                        { option }
                    </label>
                }
            }) }
        </fieldset>
    }
}

fn required(label: &'static str) -> Html {
    html! { <>{ label }<span class="required">{ " *" }</span></> }
}

fn request_details(form: &IntakeForm, link: &Link) -> Html {
    html! {
        <div class="card">
            <h2>{ "Request Details" }</h2>
            { text_input(link, required("Request Title"), "Brief summary of your request", &form.title, |f, v| f.title = v) }
            { text_area(link, "Description", "Provide detailed information about your request", &form.description, |f, v| f.description = v) }
            <div class="grid-2">
                { text_input(link, html! { "DRI Contact" }, "Name (email@company.com)", &form.dri_contact, |f, v| f.dri_contact = v) }
                { text_input(link, html! { "Submitted For" }, "Team or person name", &form.submitted_for, |f, v| f.submitted_for = v) }
                <label>
                    { required("Functional Area") }
                    <select required=true
                        onchange={link.callback(|e: Event| Msg::SetText(|f, v| f.functional_area = v, select_value(e)))}>
                        <option value="" selected={form.functional_area.is_empty()}>{ "Select functional area" }</option>
                        { for form.functional_areas.iter().map(|area| html! {
                            <option key={area.clone()} value={area.clone()} selected={*area == form.functional_area}>{ area.clone() }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Platform" }
                    <select onchange={link.callback(|e: Event| Msg::SetText(|f, v| f.platform = v, select_value(e)))}>
                        <option value="" selected={form.platform.is_empty()}>{ "Select platform" }</option>
                        { for KNOWN_PLATFORMS.iter().map(|platform| html! {
                            <option key={*platform} value={*platform} selected={form.platform == *platform}>{ *platform }</option>
                        }) }
                    </select>
                </label>
            </div>
            <fieldset>
                <legend>{ required("Do you have an IT Partner?") }</legend>
                <label>
                    <input type="radio" name="has_it_partner" checked={form.has_it_partner}
                        onchange={link.callback(|_: Event| Msg::HasItPartner(true))} />
                    { "Yes" }
                </label>
                <label>
                    <input type="radio" name="has_it_partner" checked={!form.has_it_partner}
                        onchange={link.callback(|_: Event| Msg::HasItPartner(false))} />
                    { "No" }
                </label>
            </fieldset>
        </div>
    }
}

fn help_type_cards(form: &IntakeForm, link: &Link) -> Html {
    html! {
        <div class="card">
            <h2>{ required("What Can We Help You With?") }</h2>
            <p class="muted">{ "Select all that apply" }</p>
            <div class="grid-2">
                { for HelpType::ALL.iter().map(|help_type| {
                    let selected = form.is_selected(help_type);
                    let onclick = {
                        let help_type = help_type.clone();
                        link.callback(move |_| Msg::ToggleHelpType(help_type.clone()))
                    };
                    html! {
                        <div key={help_type.id().to_string()} class={classes!("help-card", selected.then_some("selected"))} {onclick}>
                            <h3>
                                <i class="material-icons">{ if selected { "check_box" } else { "check_box_outline_blank" } }</i>
                                { help_type.title().to_string() }
                            </h3>
                            <p class="muted">{ help_type.description().to_string() }</p>
                        </div>
                    }
                }) }
            </div>
            if let Some(error) = &form.help_type_error {
                <p class="error">{ error.clone() }</p>
            }
        </div>
    }
}

fn consultation(form: &IntakeForm, link: &Link) -> Html {
    html! {
        <div class="card">
            <h2>{ "Consultation/Questions" }</h2>
            { checkboxes(link, "I need help with", &CONSULTATION_HELP_WITH, &form.consultation.help_with, |f| &mut f.consultation.help_with) }
            { text_area(link, "Use Case Details", "Describe your use case in detail...", &form.consultation.use_case_details, |f, v| f.consultation.use_case_details = v) }
        </div>
    }
}

fn new_environment(form: &IntakeForm, link: &Link) -> Html {
    let details = &form.new_environment;
    html! {
        <div class="card">
            <h2>{ "New Environment" }</h2>
            { checkboxes(link, "Environment Preferences", &PLATFORM_CHOICES, &details.env_preferences, |f| &mut f.new_environment.env_preferences) }
            { checkboxes(link, "Languages", &LANGUAGES, &details.languages, |f| &mut f.new_environment.languages) }
            { text_input(link, html! { "Other language" }, "Specify other language...", &details.other_language, |f, v| f.new_environment.other_language = v) }
            { checkboxes(link, "Primary Function", &PRIMARY_FUNCTIONS, &details.primary_function, |f| &mut f.new_environment.primary_function) }
            { text_area(link, "Integrations", "Describe integration needs...", &details.integrations_text, |f, v| f.new_environment.integrations_text = v) }
        </div>
    }
}

fn enhancement(form: &IntakeForm, link: &Link) -> Html {
    let details = &form.enhancement;
    let asa = &form.asa;
    html! {
        <div class="card">
            <h2>{ "Environment Enhancement" }</h2>
            { text_input(link, html! { "Environment Name" }, "Enter environment name...", &details.environment_name, |f, v| f.enhancement.environment_name = v) }
            { checkboxes(link, "Platform Preferences", &PLATFORM_CHOICES, &details.platform_preferences, |f| &mut f.enhancement.platform_preferences) }
            { text_area(link, "Integrations", "Describe integration needs...", &details.integrations_description, |f, v| f.enhancement.integrations_description = v) }
            if form.asa_selected() {
                <div class="card">
                    <h4>{ "ASA Resources" }</h4>
                    { checkboxes(link, "Spark Pool", &POOL_ACTIONS, &asa.spark_pool, |f| &mut f.asa.spark_pool) }
                    { checkboxes(link, "Dedicated SQL Pool", &POOL_ACTIONS, &asa.dedicated_sql_pool, |f| &mut f.asa.dedicated_sql_pool) }
                    { checkboxes(link, "SHIR", &SHIR_ACTIONS, &asa.shir, |f| &mut f.asa.shir) }
                    { checkboxes(link, "Manage Access To", &MANAGE_ACCESS, &asa.manage_access, |f| &mut f.asa.manage_access) }
                    { text_area(link, "Other Resources", "Describe other ASA resource needs...", &asa.other_resources, |f, v| f.asa.other_resources = v) }
                </div>
            }
        </div>
    }
}

fn cloud_storage(form: &IntakeForm, link: &Link) -> Html {
    let details = &form.cloud_storage;
    html! {
        <div class="card">
            <h2>{ "Cloud Storage for Downstream Consumers" }</h2>
            { text_area(link, "Describe your data", "Describe the data you need to store...", &details.describe_data, |f, v| f.cloud_storage.describe_data = v) }
            { text_area(link, "Who will be accessing your data", "Describe who needs access...", &details.who_accessing, |f, v| f.cloud_storage.who_accessing = v) }
            { text_area(link, "How will your data be consumed", "Describe how the data will be used...", &details.how_consumed, |f, v| f.cloud_storage.how_consumed = v) }
        </div>
    }
}

fn result(form: &IntakeForm, link: &Link) -> Html {
    match &form.outcome {
        Some(Outcome::Submitted) => html! {
            <div class="card">
                <i class="material-icons">{ "check_circle" }</i>
                <h3>{ "Request Submitted Successfully!" }</h3>
                <p class="muted">{ "Our team will review your request soon." }</p>
                <button onclick={link.callback(|_| Msg::ReturnHome)}>{ "Return to Home" }</button>
            </div>
        },
        Some(Outcome::Failed(message)) => html! {
            <div class="card">
                <i class="material-icons">{ "error" }</i>
                <h3>{ "Unable to Submit Request" }</h3>
                <p class="muted">{ message.clone() }</p>
                <button onclick={link.callback(|_| Msg::CloseResult)}>{ "OK" }</button>
            </div>
        },
        None => html! {},
    }
}
