//! `/admin/states`: create, edit and delete the states requests can carry.

use common::display::non_empty;
use common::model::request_state::DEFAULT_STATE_COLOR;
use common::model::{RequestState, RequestStatePatch};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error_alert::{Alert, ErrorAlert};
use crate::helpers::{confirm, input_value, show_toast, textarea_value};

pub enum Msg {
    Loaded(Vec<RequestState>),
    Name(String),
    Color(String),
    Description(String),
    Edit(RequestState),
    Cancel,
    Save,
    Saved(Result<RequestState, api::ApiError>),
    Delete(i64),
    Deleted(Result<(), api::ApiError>),
    DismissError,
}

pub struct AdminStates {
    states: Vec<RequestState>,
    editing: Option<i64>,
    name: String,
    color: String,
    description: String,
    loading: bool,
    alert: Alert,
}

fn load(ctx: &Context<AdminStates>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let states = api::list_states().await.unwrap_or_else(|e| {
            error!(format!("Error loading states: {e}"));
            Vec::new()
        });
        link.send_message(Msg::Loaded(states));
    });
}

impl AdminStates {
    fn reset(&mut self) {
        self.editing = None;
        self.name.clear();
        self.color = DEFAULT_STATE_COLOR.to_string();
        self.description.clear();
    }

    fn save(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let editing = self.editing;
        let name = self.name.clone();
        let color = self.color.clone();
        let description = non_empty(&self.description);
        spawn_local(async move {
            let result = match editing {
                Some(id) => {
                    let patch = RequestStatePatch {
                        name: Some(name),
                        color: Some(color),
                        description: Some(description),
                    };
                    api::update_state(id, &patch).await
                }
                None => {
                    let state = RequestState {
                        id: None,
                        name,
                        color,
                        description,
                    };
                    api::create_state(&state).await
                }
            };
            link.send_message(Msg::Saved(result));
        });
    }
}

impl Component for AdminStates {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            states: Vec::new(),
            editing: None,
            name: String::new(),
            color: DEFAULT_STATE_COLOR.to_string(),
            description: String::new(),
            loading: true,
            alert: Alert::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(states) => {
                self.states = states;
                self.loading = false;
            }
            Msg::Name(name) => self.name = name,
            Msg::Color(color) => self.color = color,
            Msg::Description(description) => self.description = description,
            Msg::Edit(state) => {
                self.editing = state.id;
                self.name = state.name;
                self.color = state.color;
                self.description = state.description.unwrap_or_default();
            }
            Msg::Cancel => self.reset(),
            Msg::Save => {
                if self.name.trim().is_empty() {
                    self.alert.show("State name is required");
                    return true;
                }
                self.save(ctx);
            }
            Msg::Saved(Ok(_)) => {
                show_toast(if self.editing.is_some() { "State updated" } else { "State created" });
                self.alert.dismiss();
                self.reset();
                load(ctx);
            }
            Msg::Saved(Err(e)) => {
                error!(format!("Error saving state: {e}"));
                self.alert.failed("Failed to save state", &e);
            }
            Msg::Delete(id) => {
                if !confirm("Are you sure you want to delete this state? This will remove it from all requests.") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(api::delete_state(id).await));
                });
            }
            Msg::Deleted(Ok(())) => {
                show_toast("State deleted");
                load(ctx);
            }
            Msg::Deleted(Err(e)) => {
                error!(format!("Error deleting state: {e}"));
                self.alert.failed("Failed to delete state", &e);
            }
            Msg::DismissError => self.alert.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Save
        });

        html! {
            <div>
                <h1>{ "Manage Request States" }</h1>
                <ErrorAlert alert={self.alert.clone()} on_dismiss={link.callback(|_| Msg::DismissError)} />
                <form class="card" {onsubmit}>
                    <h2>{ if self.editing.is_some() { "Edit State" } else { "Create New State" } }</h2>
                    <label>
                        { "State Name" }
                        <input type="text" placeholder="e.g., In Progress, Completed, On Hold" value={self.name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Name(input_value(e)))} />
                    </label>
                    <label>
                        { "Color" }
                        <input type="color" value={self.color.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Color(input_value(e)))} />
                        <span class="chip" style={format!("background: {}", self.color)}>{ self.color.clone() }</span>
                    </label>
                    <label>
                        { "Description (Optional)" }
                        <textarea rows="3" placeholder="Brief description of this state" value={self.description.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Description(textarea_value(e)))} />
                    </label>
                    <div>
                        <button type="submit">{ if self.editing.is_some() { "Update State" } else { "Create State" } }</button>
                        if self.editing.is_some() {
                            <button type="button" class="outline" onclick={link.callback(|_| Msg::Cancel)}>{ "Cancel" }</button>
                        }
                    </div>
                </form>

                <div class="card">
                    <h2>{ "Existing States" }</h2>
                    if self.loading {
                        <p class="muted">{ "Loading states..." }</p>
                    } else if self.states.is_empty() {
                        <p class="muted">{ "No states created yet." }</p>
                    }
                    { for self.states.iter().map(|state| {
                        let edit = {
                            let state = state.clone();
                            link.callback(move |_| Msg::Edit(state.clone()))
                        };
                        let delete = state.id.map(|id| link.callback(move |_| Msg::Delete(id)));
                        html! {
                            <div class="card" key={state.id.unwrap_or_default()}>
                                <span class="chip" style={format!("background: {}", state.color)}>{ state.name.clone() }</span>
                                if let Some(description) = &state.description {
                                    <p class="muted">{ description.clone() }</p>
                                }
                                <button class="outline" onclick={edit}><i class="material-icons">{ "edit" }</i></button>
                                if let Some(delete) = delete {
                                    <button class="outline" onclick={delete}><i class="material-icons">{ "delete" }</i></button>
                                }
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
