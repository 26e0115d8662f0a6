use common::model::Account;
use common::routes::Route;
use common::search::filter_accounts;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::NavProps;
use crate::api;
use crate::helpers::input_value;

pub enum Msg {
    Loaded(Vec<Account>),
    Search(String),
}

/// `/`: every account with a case-insensitive search over team, area, VP and admin.
pub struct AllAccounts {
    accounts: Vec<Account>,
    search: String,
    loading: bool,
}

impl Component for AllAccounts {
    type Message = Msg;
    type Properties = NavProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let accounts = api::list_accounts().await.unwrap_or_else(|e| {
                error!(format!("Error loading accounts: {e}"));
                Vec::new()
            });
            link.send_message(Msg::Loaded(accounts));
        });
        Self {
            accounts: Vec::new(),
            search: String::new(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(accounts) => {
                self.accounts = accounts;
                self.loading = false;
            }
            Msg::Search(term) => self.search = term,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="muted">{ "Loading accounts..." }</p> };
        }
        let visible = filter_accounts(&self.accounts, &self.search);
        let dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

        html! {
            <div>
                <h1>{ "All Accounts" }</h1>
                <input
                    type="text"
                    placeholder="Search accounts by team, area, VP, or admin..."
                    value={self.search.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| Msg::Search(input_value(e)))}
                />
                <table>
                    <thead>
                        <tr>
                            <th>{ "Team" }</th>
                            <th>{ "Business/IT Area" }</th>
                            <th>{ "VP" }</th>
                            <th>{ "Admin" }</th>
                            <th>{ "Action" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.iter().map(|account| {
                            let on_navigate = ctx.props().on_navigate.clone();
                            let uid = account.uid.clone();
                            html! {
                                <tr key={account.uid.clone()}>
                                    <td>{ dash(&account.team) }</td>
                                    <td>{ dash(&account.business_it_area) }</td>
                                    <td>{ dash(&account.vp) }</td>
                                    <td>{ dash(&account.team_admin) }</td>
                                    <td>
                                        <button onclick={Callback::from(move |_| on_navigate.emit(Route::AccountDetails(uid.clone())))}>
                                            { "View" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                if visible.is_empty() {
                    <p class="muted">{ "No accounts found" }</p>
                }
            </div>
        }
    }
}
