//! `/admin`: data entry against one selected account.
//!
//! Every form posts independently. Success is a toast; a failure stays in an
//! alert above the forms until dismissed. Fields are cleared after a
//! successful post except for the health form, which keeps showing what was
//! saved.

use chrono::NaiveDate;
use common::display::non_empty;
use common::model::account::Health;
use common::model::platform::KNOWN_PLATFORMS;
use common::model::{Account, AccountPatch, Platform, PrimaryItPartner, Update, UseCase};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error_alert::{Alert, ErrorAlert};
use crate::helpers::{input_value, select_value, show_toast, textarea_value};

const ONBOARDING_STATUSES: [&str; 4] = ["Not Started", "Planning", "In Progress", "Completed"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Form {
    Health,
    UseCase,
    Update,
    Platform,
    Partner,
    NewAccount,
}

impl Form {
    fn success(self) -> &'static str {
        match self {
            Form::Health => "Account updated successfully",
            Form::UseCase => "Use case added successfully",
            Form::Update => "Update added successfully",
            Form::Platform => "Platform added successfully",
            Form::Partner => "IT partner added successfully",
            Form::NewAccount => "Account created successfully",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            Form::Health => "Failed to update account",
            Form::UseCase => "Failed to add use case",
            Form::Update => "Failed to add update",
            Form::Platform => "Failed to add platform",
            Form::Partner => "Failed to add IT partner",
            Form::NewAccount => "Failed to create account",
        }
    }
}

#[derive(Default, Clone)]
pub struct Fields {
    csm: String,
    health: String,
    health_reason: String,
    use_case: UseCase,
    update: Update,
    platform: Platform,
    partner: String,
    new_account: Account,
}

type Setter = fn(&mut Fields, String);

pub enum Msg {
    AccountsLoaded(Vec<Account>),
    Select(String),
    Set(Setter, String),
    Submit(Form),
    Done(Form, Result<(), api::ApiError>),
    DismissError,
}

pub struct Admin {
    accounts: Vec<Account>,
    selected: String,
    fields: Fields,
    alert: Alert,
}

fn opt(value: String) -> Option<String> {
    non_empty(&value).map(|_| value)
}

fn load_accounts(ctx: &Context<Admin>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let accounts = api::list_accounts().await.unwrap_or_else(|e| {
            error!(format!("Error loading accounts: {e}"));
            Vec::new()
        });
        link.send_message(Msg::AccountsLoaded(accounts));
    });
}

impl Admin {
    fn select(&mut self, uid: String) {
        if let Some(account) = self.accounts.iter().find(|a| a.uid == uid) {
            self.fields.csm = account.csm.clone().unwrap_or_default();
            self.fields.health = account.health.clone().unwrap_or_default();
            self.fields.health_reason = account.health_reason.clone().unwrap_or_default();
        }
        self.selected = uid;
    }

    fn submit(&mut self, ctx: &Context<Self>, form: Form) {
        let uid = self.selected.clone();
        if uid.is_empty() && form != Form::NewAccount {
            self.alert.show("Select an account first");
            return;
        }
        let fields = self.fields.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = match form {
                Form::Health => {
                    let patch = AccountPatch {
                        csm: Some(opt(fields.csm)),
                        health: Some(opt(fields.health)),
                        health_reason: Some(opt(fields.health_reason)),
                        ..Default::default()
                    };
                    api::update_account(&uid, &patch).await.map(drop)
                }
                Form::UseCase => {
                    let record = UseCase { account_uid: uid, ..fields.use_case };
                    api::create_child(&record).await.map(drop)
                }
                Form::Update => {
                    let record = Update { account_uid: uid, ..fields.update };
                    api::create_child(&record).await.map(drop)
                }
                Form::Platform => {
                    let record = Platform { account_uid: uid, ..fields.platform };
                    api::create_child(&record).await.map(drop)
                }
                Form::Partner => {
                    let record = PrimaryItPartner {
                        id: None,
                        account_uid: uid,
                        primary_it_partner: opt(fields.partner),
                    };
                    api::create_child(&record).await.map(drop)
                }
                Form::NewAccount => api::create_account(&fields.new_account).await.map(drop),
            };
            link.send_message(Msg::Done(form, result));
        });
    }

    fn reset(&mut self, form: Form) {
        match form {
            Form::Health => {}
            Form::UseCase => self.fields.use_case = UseCase::default(),
            Form::Update => self.fields.update = Update::default(),
            Form::Platform => self.fields.platform = Platform::default(),
            Form::Partner => self.fields.partner.clear(),
            Form::NewAccount => self.fields.new_account = Account::default(),
        }
    }
}

impl Component for Admin {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        load_accounts(ctx);
        Self {
            accounts: Vec::new(),
            selected: String::new(),
            fields: Fields::default(),
            alert: Alert::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AccountsLoaded(accounts) => {
                self.accounts = accounts;
                let selected = self.selected.clone();
                self.select(selected);
            }
            Msg::Select(uid) => self.select(uid),
            Msg::Set(setter, value) => setter(&mut self.fields, value),
            Msg::Submit(form) => self.submit(ctx, form),
            Msg::Done(form, Ok(())) => {
                show_toast(form.success());
                self.alert.dismiss();
                self.reset(form);
                if matches!(form, Form::Health | Form::NewAccount) {
                    load_accounts(ctx);
                }
            }
            Msg::Done(form, Err(e)) => {
                error!(format!("{}: {e}", form.failure()));
                self.alert.failed(form.failure(), &e);
            }
            Msg::DismissError => self.alert.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let fields = &self.fields;
        let text = |label: &'static str, placeholder: &'static str, value: &str, setter: Setter| {
            html! {
                <label>
                    { label }
                    <input type="text" placeholder={placeholder} value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(setter, input_value(e)))} />
                </label>
            }
        };
        let area = |label: &'static str, placeholder: &'static str, value: &str, setter: Setter| {
            html! {
                <label>
                    { label }
                    <textarea rows="3" placeholder={placeholder} value={value.to_string()}
                        oninput={link.callback(move |e: InputEvent| Msg::Set(setter, textarea_value(e)))} />
                </label>
            }
        };
        let select = |label: &'static str, blank: &'static str, value: &str, options: &[&'static str], setter: Setter| {
            html! {
                <label>
                    { label }
                    <select onchange={link.callback(move |e: Event| Msg::Set(setter, select_value(e)))}>
                        <option value="" selected={value.is_empty()}>{ blank }</option>
                        { for options.iter().map(|option| html! {
                            <option value={*option} selected={value == *option}>{ *option }</option>
                        }) }
                    </select>
                </label>
            }
        };
        let submit = |form: Form| {
            link.callback(move |e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit(form)
            })
        };
        let health: Vec<&'static str> = Health::ALL.iter().map(Health::as_str).collect();
        let show = |value: &Option<String>| value.clone().unwrap_or_default();

        html! {
            <div>
                <h1>{ "Admin Panel" }</h1>
                <ErrorAlert alert={self.alert.clone()} on_dismiss={link.callback(|_| Msg::DismissError)} />
                <label>
                    { "Select Account" }
                    <select onchange={link.callback(|e: Event| Msg::Select(select_value(e)))}>
                        <option value="" selected={self.selected.is_empty()}>{ "Select an account" }</option>
                        { for self.accounts.iter().map(|account| html! {
                            <option key={account.uid.clone()} value={account.uid.clone()} selected={account.uid == self.selected}>
                                { format!("{} ({})", account.team.as_deref().unwrap_or("-"), account.uid) }
                            </option>
                        }) }
                    </select>
                </label>

                if !self.selected.is_empty() {
                    <form class="card" onsubmit={submit(Form::Health)}>
                        <h2>{ "Update Account Health" }</h2>
                        <div class="grid-2">
                            { text("CSM", "Enter CSM name", &fields.csm, |f, v| f.csm = v) }
                            { select("Health", "Select Health", &fields.health, &health[..], |f, v| f.health = v) }
                        </div>
                        { area("Health Reason", "Enter health reason", &fields.health_reason, |f, v| f.health_reason = v) }
                        <button type="submit">{ "Update Account" }</button>
                    </form>

                    <form class="card" onsubmit={submit(Form::UseCase)}>
                        <h2>{ "Add Use Case" }</h2>
                        <div class="grid-2">
                            { text("Problem", "Enter problem statement", &show(&fields.use_case.problem), |f, v| f.use_case.problem = opt(v)) }
                            { text("Solution", "Enter solution", &show(&fields.use_case.solution), |f, v| f.use_case.solution = opt(v)) }
                            { text("Value", "Enter value proposition", &show(&fields.use_case.value), |f, v| f.use_case.value = opt(v)) }
                            { text("Leader", "Enter leader name", &show(&fields.use_case.leader), |f, v| f.use_case.leader = opt(v)) }
                            { text("Status", "Enter status", &show(&fields.use_case.status), |f, v| f.use_case.status = opt(v)) }
                            { text("Platform", "Enter platform", &show(&fields.use_case.platform), |f, v| f.use_case.platform = opt(v)) }
                        </div>
                        <button type="submit">{ "Add Use Case" }</button>
                    </form>

                    <form class="card" onsubmit={submit(Form::Update)}>
                        <h2>{ "Add Update" }</h2>
                        { area("Description", "Enter update description", &show(&fields.update.description), |f, v| f.update.description = opt(v)) }
                        <div class="grid-2">
                            { text("Author", "Enter author name", &show(&fields.update.author), |f, v| f.update.author = opt(v)) }
                            { text("Platform", "Enter platform", &show(&fields.update.platform), |f, v| f.update.platform = opt(v)) }
                            <label>
                                { "Date" }
                                <input type="date" value={fields.update.date.map(|d| d.to_string()).unwrap_or_default()}
                                    oninput={link.callback(|e: InputEvent| Msg::Set(
                                        |f, v| f.update.date = NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok(),
                                        input_value(e),
                                    ))} />
                            </label>
                        </div>
                        <button type="submit">{ "Add Update" }</button>
                    </form>

                    <form class="card" onsubmit={submit(Form::Platform)}>
                        <h2>{ "Add Platform" }</h2>
                        <div class="grid-2">
                            { select("Platform Name", "Select Platform", &show(&fields.platform.platform_name), KNOWN_PLATFORMS, |f, v| f.platform.platform_name = opt(v)) }
                            { select("Onboarding Status", "Select Status", &show(&fields.platform.onboarding_status), &ONBOARDING_STATUSES, |f, v| f.platform.onboarding_status = opt(v)) }
                        </div>
                        <button type="submit">{ "Add Platform" }</button>
                    </form>

                    <form class="card" onsubmit={submit(Form::Partner)}>
                        <h2>{ "Add IT Partner" }</h2>
                        { text("Primary IT Partner", "Enter IT partner name", &fields.partner, |f, v| f.partner = v) }
                        <button type="submit">{ "Add IT Partner" }</button>
                    </form>
                }

                <form class="card" onsubmit={submit(Form::NewAccount)}>
                    <h2>{ "Create Account" }</h2>
                    <div class="grid-2">
                        { text("UID", "e.g. ACC004", &fields.new_account.uid, |f, v| f.new_account.uid = v) }
                        { text("Team", "Enter team name", &show(&fields.new_account.team), |f, v| f.new_account.team = opt(v)) }
                        { text("Business/IT Area", "Enter area", &show(&fields.new_account.business_it_area), |f, v| f.new_account.business_it_area = opt(v)) }
                        { text("VP", "Enter VP name", &show(&fields.new_account.vp), |f, v| f.new_account.vp = opt(v)) }
                        { text("Team Admin", "Enter team admin", &show(&fields.new_account.team_admin), |f, v| f.new_account.team_admin = opt(v)) }
                    </div>
                    <button type="submit">{ "Create Account" }</button>
                </form>
            </div>
        }
    }
}
