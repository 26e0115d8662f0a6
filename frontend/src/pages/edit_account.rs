use chrono::NaiveDate;
use common::display::{non_empty, or_empty};
use common::model::account::{BusinessOrIt, CenterwellOrInsurance, Health};
use common::model::{Account, AccountPatch};
use common::routes::Route;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error_alert::{Alert, ErrorAlert};
use crate::helpers::{input_value, select_value, show_toast, textarea_value};

#[derive(Properties, PartialEq, Clone)]
pub struct EditAccountProps {
    pub uid: String,
    pub on_navigate: Callback<Route>,
}

type Setter = fn(&mut Account, String);

pub enum Msg {
    Loaded(Option<Account>),
    Set(Setter, String),
    Submit,
    Saved(Result<Account, api::ApiError>),
    DismissError,
}

/// `/accounts/{uid}/edit`: every account field in one form. Saving sends the
/// whole record as a patch, so a cleared field is stored as null.
pub struct EditAccount {
    form: Option<Account>,
    loading: bool,
    saving: bool,
    alert: Alert,
}

/// Keeps the raw text while typing; blank fields become `None`.
fn text(value: String) -> Option<String> {
    non_empty(&value).map(|_| value)
}

fn date(value: String) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok()
}

fn load(ctx: &Context<EditAccount>) {
    let link = ctx.link().clone();
    let uid = ctx.props().uid.clone();
    spawn_local(async move {
        match api::get_account(&uid).await {
            Ok(account) => link.send_message(Msg::Loaded(Some(account))),
            Err(e) => {
                error!(format!("Error loading account: {e}"));
                link.send_message(Msg::Loaded(None));
            }
        }
    });
}

impl Component for EditAccount {
    type Message = Msg;
    type Properties = EditAccountProps;

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            form: None,
            loading: true,
            saving: false,
            alert: Alert::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().uid != old_props.uid {
            self.form = None;
            self.loading = true;
            load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(account) => {
                self.form = account;
                self.loading = false;
            }
            Msg::Set(setter, value) => {
                if let Some(form) = self.form.as_mut() {
                    setter(form, value);
                }
            }
            Msg::Submit => {
                let Some(form) = self.form.clone() else {
                    return false;
                };
                self.saving = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let uid = form.uid.clone();
                    let result = api::update_account(&uid, &AccountPatch::from(form)).await;
                    link.send_message(Msg::Saved(result));
                });
            }
            Msg::Saved(Ok(account)) => {
                self.saving = false;
                show_toast("Account updated");
                ctx.props().on_navigate.emit(Route::AccountDetails(account.uid));
            }
            Msg::Saved(Err(e)) => {
                self.saving = false;
                error!(format!("Error updating account: {e}"));
                self.alert.failed("Failed to update account", &e);
            }
            Msg::DismissError => self.alert.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(form) = &self.form else {
            let text = if self.loading { "Loading..." } else { "Account not found" };
            return html! { <p class="muted">{ text }</p> };
        };
        let link = ctx.link();
        let input = |label: &'static str, value: String, setter: Setter| {
            html! {
                <label>
                    { label }
                    <input type="text" value={value}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(setter, input_value(e)))} />
                </label>
            }
        };
        let date_input = |label: &'static str, value: Option<NaiveDate>, setter: Setter| {
            html! {
                <label>
                    { label }
                    <input type="date" value={value.map(|d| d.to_string()).unwrap_or_default()}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(setter, input_value(e)))} />
                </label>
            }
        };
        let textarea = |label: &'static str, value: String, setter: Setter| {
            html! {
                <label>
                    { label }
                    <textarea rows="3" value={value}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(setter, textarea_value(e)))} />
                </label>
            }
        };
        let select = |label: &'static str, value: &Option<String>, options: &[&'static str], setter: Setter| {
            let current = or_empty(value);
            html! {
                <label>
                    { label }
                    <select onchange={link.callback(move |e: Event| Msg::Set(setter, select_value(e)))}>
                        <option value="" selected={current.is_empty()}>{ "-" }</option>
                        { for options.iter().map(|option| html! {
                            <option value={*option} selected={current == *option}>{ *option }</option>
                        }) }
                    </select>
                </label>
            }
        };
        let health: Vec<&'static str> = Health::ALL.iter().map(Health::as_str).collect();
        let business_or_it: Vec<&'static str> = BusinessOrIt::ALL.iter().map(BusinessOrIt::as_str).collect();
        let centerwell: Vec<&'static str> =
            CenterwellOrInsurance::ALL.iter().map(CenterwellOrInsurance::as_str).collect();
        let on_navigate = ctx.props().on_navigate.clone();
        let uid = form.uid.clone();
        let cancel = Callback::from(move |_| on_navigate.emit(Route::AccountDetails(uid.clone())));
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div>
                <h1>{ "Edit Account" }</h1>
                <ErrorAlert alert={self.alert.clone()} on_dismiss={link.callback(|_| Msg::DismissError)} />
                <form class="card" {onsubmit}>
                    <div class="grid-2">
                        <label>
                            { "UID" }
                            <input type="text" value={form.uid.clone()} disabled=true />
                        </label>
                        { input("Team", or_empty(&form.team), |a, v| a.team = text(v)) }
                        { input("Business/IT Area", or_empty(&form.business_it_area), |a, v| a.business_it_area = text(v)) }
                        { input("VP", or_empty(&form.vp), |a, v| a.vp = text(v)) }
                        { input("Team Admin", or_empty(&form.team_admin), |a, v| a.team_admin = text(v)) }
                        { input("CSM", or_empty(&form.csm), |a, v| a.csm = text(v)) }
                        { select("Health", &form.health, &health[..], |a, v| a.health = text(v)) }
                        { input("Health Reason", or_empty(&form.health_reason), |a, v| a.health_reason = text(v)) }
                        { select("Business or IT", &form.business_or_it, &business_or_it[..], |a, v| a.business_or_it = text(v)) }
                        { select("Centerwell or Insurance", &form.centerwell_or_insurance, &centerwell[..], |a, v| a.centerwell_or_insurance = text(v)) }
                        { input("North Star Domain", or_empty(&form.north_star_domain), |a, v| a.north_star_domain = text(v)) }
                        { input("Use Case", or_empty(&form.use_case), |a, v| a.use_case = text(v)) }
                        { select("Use Case Status", &form.use_case_status, &["Planning", "In Progress", "Completed"], |a, v| a.use_case_status = text(v)) }
                        { select("Databricks", &form.databricks, &["y", "n"], |a, v| a.databricks = text(v)) }
                        { date_input("Month Onboarded (Databricks)", form.month_onboarded_db, |a, v| a.month_onboarded_db = date(v)) }
                        { select("Snowflake", &form.snowflake, &["y", "n"], |a, v| a.snowflake = text(v)) }
                        { date_input("Month Onboarded (Snowflake)", form.month_onboarded_sf, |a, v| a.month_onboarded_sf = date(v)) }
                        { input("Git Repo", or_empty(&form.git_repo), |a, v| a.git_repo = text(v)) }
                        { input("Unique Identifier", or_empty(&form.unique_identifier), |a, v| a.unique_identifier = text(v)) }
                        { input("Associated ADO Items", or_empty(&form.associated_ado_items), |a, v| a.associated_ado_items = text(v)) }
                        { input("Team Artifacts", or_empty(&form.team_artifacts), |a, v| a.team_artifacts = text(v)) }
                        { input("AD Groups", or_empty(&form.ad_groups), |a, v| a.ad_groups = text(v)) }
                    </div>
                    { textarea("Current Tech Stack", or_empty(&form.current_tech_stack), |a, v| a.current_tech_stack = text(v)) }
                    { textarea("Notes", or_empty(&form.notes), |a, v| a.notes = text(v)) }
                    <div>
                        <button type="button" class="outline" onclick={cancel}>{ "Cancel" }</button>
                        <button type="submit" disabled={self.saving}>
                            { if self.saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}
