//! `/admin/intake-triage`: every submitted request, newest first, with the
//! states it carries. States are added from the details sheet and removed
//! from the chips on each card.

use std::collections::HashMap;

use common::display::time_ago;
use common::model::help_type::format_help_types;
use common::model::{IntakeRequest, RequestState};
use common::routes::Route;
use common::search::filter_requests;
use gloo_console::error;
use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::NavProps;
use crate::api;
use crate::error_alert::{Alert, ErrorAlert};
use crate::helpers::{input_value, now, select_value, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};

pub enum Msg {
    Loaded(Vec<IntakeRequest>, Vec<RequestState>),
    StatesOf(i64, Vec<RequestState>),
    Search(String),
    View(i64),
    CloseDetails,
    Assign(i64, i64),
    Unassign(i64, i64),
    Changed(i64, Result<(), api::ApiError>),
    DismissError,
}

pub struct IntakeTriage {
    requests: Vec<IntakeRequest>,
    states: Vec<RequestState>,
    assigned: HashMap<i64, Vec<RequestState>>,
    search: String,
    selected: Option<i64>,
    loading: bool,
    details_sheet: NodeRef,
    alert: Alert,
}

fn load(ctx: &Context<IntakeTriage>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let requests = api::list_requests().await.unwrap_or_else(|e| {
            error!(format!("Error loading requests: {e}"));
            Vec::new()
        });
        let states = api::list_states().await.unwrap_or_else(|e| {
            error!(format!("Error loading states: {e}"));
            Vec::new()
        });
        let ids: Vec<i64> = requests.iter().map(|r| r.id).collect();
        link.send_message(Msg::Loaded(requests, states));
        for id in ids {
            load_states_of(&link, id).await;
        }
    });
}

async fn load_states_of(link: &yew::html::Scope<IntakeTriage>, request_id: i64) {
    match api::states_of_request(request_id).await {
        Ok(states) => link.send_message(Msg::StatesOf(request_id, states)),
        Err(e) => error!(format!("Error loading states of request {request_id}: {e}")),
    }
}

/// `consultation_help_with` -> `Consultation Help With`.
fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// List answers are stored as JSON-array text and shown comma separated.
fn display_value(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match serde_json::from_str::<Vec<String>>(&text) {
        Ok(items) => items.join(", "),
        Err(_) => text,
    }
}

impl IntakeTriage {
    fn chips(&self, ctx: &Context<Self>, request_id: i64) -> Html {
        let states = self.assigned.get(&request_id).map(Vec::as_slice).unwrap_or_default();
        html! {
            <div>
                { for states.iter().filter_map(|state| {
                    let state_id = state.id?;
                    Some(html! {
                        <span class="chip" key={state_id} style={format!("background: {}", state.color)}>
                            { state.name.clone() }
                            <button class="chip-remove" title="Remove state"
                                onclick={ctx.link().callback(move |_| Msg::Unassign(request_id, state_id))}>
                                { "×" }
                            </button>
                        </span>
                    })
                }) }
            </div>
        }
    }

    fn card(&self, ctx: &Context<Self>, request: &IntakeRequest) -> Html {
        let id = request.id;
        let dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        html! {
            <div class="card" key={id}>
                <h3>{ request.title.clone() }</h3>
                if let Some(description) = &request.description {
                    <p class="muted">{ description.clone() }</p>
                }
                <div class="grid-2">
                    <span>{ format!("Area: {}", dash(&request.functional_area)) }</span>
                    <span>{ format!("Platform: {}", dash(&request.platform)) }</span>
                    <span>{ format!("For: {}", dash(&request.submitted_for)) }</span>
                    <span>{ format!("DRI: {}", dash(&request.dri_contact)) }</span>
                </div>
                <p>
                    <strong>{ "Help Needed: " }</strong>
                    { format_help_types(&request.help_types()) }
                </p>
                if let Some(created_at) = request.created_at {
                    <small class="muted">{ format!("submitted {}", time_ago(created_at, now())) }</small>
                }
                { self.chips(ctx, id) }
                <button class="outline" onclick={ctx.link().callback(move |_| Msg::View(id))}>{ "View" }</button>
            </div>
        }
    }

    fn error_alert(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ErrorAlert alert={self.alert.clone()} on_dismiss={ctx.link().callback(|_| Msg::DismissError)} />
        }
    }

    fn details(&self, ctx: &Context<Self>) -> Html {
        let Some(request) = self.selected.and_then(|id| self.requests.iter().find(|r| r.id == id)) else {
            return html! {};
        };
        let id = request.id;
        let assigned = self.assigned.get(&id).map(Vec::as_slice).unwrap_or_default();
        let unassigned: Vec<&RequestState> = self
            .states
            .iter()
            .filter(|state| !assigned.iter().any(|a| a.id == state.id))
            .collect();
        let details = request.details().to_map();
        let help_needed = format_help_types(&request.help_types());
        let row = |label: &'static str, value: Option<&str>| {
            html! {
                <div>
                    <label class="muted">{ label }</label>
                    <p>{ value.filter(|v| !v.is_empty()).unwrap_or("-") }</p>
                </div>
            }
        };
        let on_pick = ctx.link().batch_callback(move |e: Event| {
            select_value(e).parse::<i64>().ok().map(|state_id| Msg::Assign(id, state_id))
        });

        html! {
            <div class="card">
                <div>
                    <h2>{ request.title.clone() }</h2>
                    <button class="outline" onclick={ctx.link().callback(|_| Msg::CloseDetails)}>
                        <i class="material-icons">{ "close" }</i>
                    </button>
                </div>
                { self.error_alert(ctx) }
                { row("Description", request.description.as_deref()) }
                <div class="grid-2">
                    { row("Functional Area", request.functional_area.as_deref()) }
                    { row("Platform", request.platform.as_deref()) }
                    { row("Submitted For", request.submitted_for.as_deref()) }
                    { row("DRI Contact", request.dri_contact.as_deref()) }
                    { row("Has IT Partner", Some(if request.has_it_partner { "Yes" } else { "No" })) }
                    { row("Help Needed", Some(help_needed.as_str())) }
                </div>
                if !details.is_empty() {
                    <h3>{ "Additional Details" }</h3>
                    { for details.iter().map(|(key, value)| html! {
                        <div key={key.clone()}>
                            <label class="muted">{ humanize_key(key) }</label>
                            <p>{ display_value(value) }</p>
                        </div>
                    }) }
                }
                <h3>{ "Current States" }</h3>
                if assigned.is_empty() {
                    <p class="muted">{ "No states assigned yet" }</p>
                } else {
                    { self.chips(ctx, id) }
                }
                <h3>{ "Add State" }</h3>
                if unassigned.is_empty() {
                    <p class="muted">{ "All states are assigned" }</p>
                } else {
                    <select onchange={on_pick}>
                        <option value="" selected=true>{ "Select a state" }</option>
                        { for unassigned.iter().filter_map(|state| {
                            let state_id = state.id?;
                            Some(html! {
                                <option key={state_id} value={state_id.to_string()}>{ state.name.clone() }</option>
                            })
                        }) }
                    </select>
                }
            </div>
        }
    }
}

impl Component for IntakeTriage {
    type Message = Msg;
    type Properties = NavProps;

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            requests: Vec::new(),
            states: Vec::new(),
            assigned: HashMap::new(),
            search: String::new(),
            selected: None,
            loading: true,
            details_sheet: NodeRef::default(),
            alert: Alert::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(requests, states) => {
                self.requests = requests;
                self.states = states;
                self.loading = false;
            }
            Msg::StatesOf(request_id, states) => {
                self.assigned.insert(request_id, states);
            }
            Msg::Search(term) => self.search = term,
            Msg::View(id) => {
                self.selected = Some(id);
                open_top_sheet(self.details_sheet.clone());
            }
            Msg::CloseDetails => {
                close_top_sheet(self.details_sheet.clone());
                return false;
            }
            Msg::Assign(request_id, state_id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::assign_state(request_id, state_id).await;
                    link.send_message(Msg::Changed(request_id, result));
                });
                return false;
            }
            Msg::Unassign(request_id, state_id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::unassign_state(request_id, state_id).await;
                    link.send_message(Msg::Changed(request_id, result));
                });
                return false;
            }
            Msg::Changed(request_id, result) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    load_states_of(&link, request_id).await;
                });
                match result {
                    Ok(()) => {
                        show_toast("Request states updated");
                        return false;
                    }
                    Err(e) => {
                        error!(format!("Error updating states of request {request_id}: {e}"));
                        self.alert.failed("Failed to update request state", &e);
                    }
                }
            }
            Msg::DismissError => self.alert.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let manage_states = {
            let on_navigate = ctx.props().on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(Route::AdminStates))
        };
        let visible = filter_requests(&self.requests, &self.search);

        html! {
            <div>
                <div>
                    <h1>{ "Intake Triage" }</h1>
                    <button onclick={manage_states}>{ "Manage States" }</button>
                </div>
                { self.error_alert(ctx) }
                <input
                    type="text"
                    placeholder="Search requests by title, area, platform, help type..."
                    value={self.search.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| Msg::Search(input_value(e)))}
                />
                if self.loading {
                    <p class="muted">{ "Loading requests..." }</p>
                } else if visible.is_empty() {
                    <p class="muted">
                        { if self.requests.is_empty() { "No requests submitted yet." } else { "No requests match your search." } }
                    </p>
                }
                { for visible.iter().map(|request| self.card(ctx, request)) }

                <YwMaterialTopSheet node_ref={self.details_sheet.clone()}>
                    { self.details(ctx) }
                </YwMaterialTopSheet>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_title_cased() {
        assert_eq!(humanize_key("consultation_help_with"), "Consultation Help With");
        assert_eq!(humanize_key("asa_shir"), "Asa Shir");
    }

    #[test]
    fn list_answers_are_joined() {
        assert_eq!(display_value(&Value::String(r#"["SQL","Python"]"#.into())), "SQL, Python");
        assert_eq!(display_value(&Value::String("prod-west".into())), "prod-west");
    }
}
