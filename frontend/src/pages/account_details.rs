//! `/accounts/{uid}`: one account with its platforms, use cases, updates and
//! primary IT partner. Use cases, updates and platforms can be deleted here.

use common::model::{Account, AccountChild, Platform, PrimaryItPartner, Update, UseCase};
use common::routes::Route;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::error_alert::{Alert, ErrorAlert};
use crate::helpers::{confirm, show_toast};

#[derive(Properties, PartialEq, Clone)]
pub struct AccountDetailsProps {
    pub uid: String,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Option<Loaded>),
    Partner(Option<PrimaryItPartner>),
    DeleteUseCase(i64),
    DeleteUpdate(i64),
    DeletePlatform(i64),
    Deleted(&'static str, Result<(), api::ApiError>),
    DismissError,
}

pub struct Loaded {
    account: Account,
    use_cases: Vec<UseCase>,
    updates: Vec<Update>,
    platforms: Vec<Platform>,
}

pub struct AccountDetails {
    data: Option<Loaded>,
    partner: Option<PrimaryItPartner>,
    loading: bool,
    alert: Alert,
}

async fn fetch(uid: &str) -> Result<Loaded, api::ApiError> {
    Ok(Loaded {
        account: api::get_account(uid).await?,
        use_cases: api::account_children(uid).await?,
        updates: api::account_children(uid).await?,
        platforms: api::account_children(uid).await?,
    })
}

fn load(ctx: &Context<AccountDetails>) {
    let link = ctx.link().clone();
    let uid = ctx.props().uid.clone();
    spawn_local(async move {
        match fetch(&uid).await {
            Ok(data) => link.send_message(Msg::Loaded(Some(data))),
            Err(e) => {
                error!(format!("Error loading account data: {e}"));
                link.send_message(Msg::Loaded(None));
            }
        }
        match api::primary_it_partner(&uid).await {
            Ok(partner) => {
                if partner.is_none() {
                    log!("No primary IT partner found");
                }
                link.send_message(Msg::Partner(partner));
            }
            Err(e) => error!(format!("Error loading primary IT partner: {e}")),
        }
    });
}

fn delete<T: AccountChild + 'static>(ctx: &Context<AccountDetails>, id: i64) {
    if !confirm(&format!("Delete this {}?", T::LABEL.to_lowercase())) {
        return;
    }
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::delete_child::<T>(id).await;
        link.send_message(Msg::Deleted(T::LABEL, result));
    });
}

impl Component for AccountDetails {
    type Message = Msg;
    type Properties = AccountDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        load(ctx);
        Self {
            data: None,
            partner: None,
            loading: true,
            alert: Alert::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().uid != old_props.uid {
            self.loading = true;
            self.partner = None;
            self.alert.dismiss();
            load(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(data) => {
                self.data = data;
                self.loading = false;
            }
            Msg::Partner(partner) => self.partner = partner,
            Msg::DeleteUseCase(id) => delete::<UseCase>(ctx, id),
            Msg::DeleteUpdate(id) => delete::<Update>(ctx, id),
            Msg::DeletePlatform(id) => delete::<Platform>(ctx, id),
            Msg::Deleted(label, Ok(())) => {
                show_toast(&format!("{label} deleted"));
                load(ctx);
            }
            Msg::Deleted(label, Err(e)) => {
                error!(format!("Error deleting {label}: {e}"));
                let action = format!("Failed to delete {}", label.to_lowercase());
                self.alert.failed(&action, &e);
            }
            Msg::DismissError => self.alert.dismiss(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="muted">{ "Loading account details..." }</p> };
        }
        let Some(data) = &self.data else {
            return html! { <p class="muted">{ "Account not found" }</p> };
        };
        let account = &data.account;
        let props = ctx.props();
        let back = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(Route::Accounts))
        };
        let edit = {
            let on_navigate = props.on_navigate.clone();
            let uid = props.uid.clone();
            Callback::from(move |_| on_navigate.emit(Route::EditAccount(uid.clone())))
        };
        let partner = self
            .partner
            .as_ref()
            .and_then(|p| p.primary_it_partner.as_deref());

        html! {
            <div>
                <div>
                    <button class="outline" onclick={back}><i class="material-icons">{ "arrow_back" }</i></button>
                    <h1>{ account.team.clone().unwrap_or_else(|| account.uid.clone()) }</h1>
                    <button onclick={edit}>{ "Edit Account" }</button>
                </div>
                <ErrorAlert alert={self.alert.clone()} on_dismiss={ctx.link().callback(|_| Msg::DismissError)} />

                <div class="card">
                    <h2>{ "Account Information" }</h2>
                    <div class="grid-2">
                        { field("UID", Some(account.uid.as_str())) }
                        { field("Team", account.team.as_deref()) }
                        { field("Business/IT Area", account.business_it_area.as_deref()) }
                        { field("VP", account.vp.as_deref()) }
                        { field("Team Admin", account.team_admin.as_deref()) }
                        { field("Primary IT Partner", partner) }
                        { field("CSM", account.csm.as_deref()) }
                        <div>
                            <label class="muted">{ "Health" }</label>
                            <p><span class="chip" style={format!("background: {}", health_color(account.health.as_deref()))}>
                                { account.health.as_deref().unwrap_or("-") }
                            </span></p>
                        </div>
                        { field("Health Reason", account.health_reason.as_deref()) }
                        { field("Business or IT", account.business_or_it.as_deref()) }
                        { field("Centerwell or Insurance", account.centerwell_or_insurance.as_deref()) }
                        { field("Current Tech Stack", account.current_tech_stack.as_deref()) }
                        { field("Notes", account.notes.as_deref()) }
                    </div>
                </div>

                <div class="card">
                    <h2>{ "Platforms" }</h2>
                    if data.platforms.is_empty() {
                        <p class="muted">{ "No platforms configured" }</p>
                    }
                    { for data.platforms.iter().map(|platform| html! {
                        <div class="card" key={platform.id.unwrap_or_default()}>
                            <strong>{ platform.platform_name.clone().unwrap_or_default() }</strong>
                            <span class="muted">{ format!(" {}", platform.onboarding_status.clone().unwrap_or_default()) }</span>
                            { delete_button(ctx, platform.id, Msg::DeletePlatform) }
                        </div>
                    }) }
                </div>

                <div class="card">
                    <h2>{ "Use Cases" }</h2>
                    if data.use_cases.is_empty() {
                        <p class="muted">{ "No use cases defined" }</p>
                    }
                    { for data.use_cases.iter().map(|use_case| html! {
                        <div class="card" key={use_case.id.unwrap_or_default()}>
                            <h4>{ use_case.problem.clone().unwrap_or_default() }</h4>
                            <p class="muted">{ use_case.solution.clone().unwrap_or_default() }</p>
                            <small class="muted">
                                { format!(
                                    "Status: {} | Platform: {} | Leader: {}",
                                    use_case.status.as_deref().unwrap_or("-"),
                                    use_case.platform.as_deref().unwrap_or("-"),
                                    use_case.leader.as_deref().unwrap_or("-"),
                                ) }
                            </small>
                            { delete_button(ctx, use_case.id, Msg::DeleteUseCase) }
                        </div>
                    }) }
                </div>

                <div class="card">
                    <h2>{ "Recent Updates" }</h2>
                    if data.updates.is_empty() {
                        <p class="muted">{ "No updates available" }</p>
                    }
                    { for data.updates.iter().map(|update| html! {
                        <div class="card" key={update.id.unwrap_or_default()}>
                            <p>{ update.description.clone().unwrap_or_default() }</p>
                            <small class="muted">
                                { format!(
                                    "By: {} | {}",
                                    update.author.as_deref().unwrap_or("-"),
                                    update.date.map(|d| d.format("%b %-d, %Y").to_string()).unwrap_or_else(|| "-".into()),
                                ) }
                            </small>
                            { delete_button(ctx, update.id, Msg::DeleteUpdate) }
                        </div>
                    }) }
                </div>
            </div>
        }
    }
}

fn field(label: &'static str, value: Option<&str>) -> Html {
    html! {
        <div>
            <label class="muted">{ label }</label>
            <p>{ value.filter(|v| !v.is_empty()).unwrap_or("-") }</p>
        </div>
    }
}

fn health_color(health: Option<&str>) -> &'static str {
    match health {
        Some("Green") => "#10b981",
        Some("Yellow") => "#f59e0b",
        Some("Red") => "#ef4444",
        _ => "#6b7280",
    }
}

fn delete_button(ctx: &Context<AccountDetails>, id: Option<i64>, msg: fn(i64) -> Msg) -> Html {
    match id {
        Some(id) => html! {
            <button class="outline" title="Delete" onclick={ctx.link().callback(move |_| msg(id))}>
                <i class="material-icons">{ "delete" }</i>
            </button>
        },
        None => html! {},
    }
}
