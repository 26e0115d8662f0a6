//! Root component: the layout shell, client-side routing and the theme toggle.
//!
//! The current route is derived from `location.pathname`. Pages ask to move
//! through the `on_navigate` callback, which pushes a history entry; the
//! browser's back/forward buttons arrive as `popstate` events.

use std::rc::Rc;

use common::routes::Route;
use common::theme::{save_theme, PreferenceStore, Theme};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::pages::{
    account_details::AccountDetails, accounts::AllAccounts, admin::Admin, admin_states::AdminStates,
    edit_account::EditAccount, intake_form::IntakeForm, intake_triage::IntakeTriage, not_found::NotFound,
};

#[derive(Properties, Clone)]
pub struct AppProps {
    /// Theme read from `preferences` before the first render.
    pub theme: Theme,
    pub preferences: Rc<dyn PreferenceStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && Rc::ptr_eq(&self.preferences, &other.preferences)
    }
}

pub enum Msg {
    Navigate(Route),
    LocationChanged,
    ToggleTheme,
}

pub struct App {
    route: Route,
    theme: Theme,
    popstate: Option<Closure<dyn FnMut()>>,
}

fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::parse(&path)
}

fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        root.set_class_name(theme.as_str());
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let theme = ctx.props().theme;
        apply_theme(theme);

        let link = ctx.link().clone();
        let listener = Closure::<dyn FnMut()>::new(move || link.send_message(Msg::LocationChanged));
        let popstate = match web_sys::window() {
            Some(window) => window
                .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                .is_ok()
                .then_some(listener),
            None => None,
        };

        Self {
            route: current_route(),
            theme,
            popstate,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                    if history
                        .push_state_with_url(&JsValue::NULL, "", Some(&route.path()))
                        .is_err()
                    {
                        gloo_console::warn!("Could not push history entry");
                    }
                }
                self.route = route;
                true
            }
            Msg::LocationChanged => {
                self.route = current_route();
                true
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                save_theme(ctx.props().preferences.as_ref(), self.theme);
                apply_theme(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let navigate = link.callback(Msg::Navigate);
        let nav_link = |label: &'static str, route: Route| {
            let onclick = link.callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Navigate(route.clone())
            });
            html! { <a href="#" {onclick}>{ label }</a> }
        };
        let theme_icon = match self.theme {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        };

        html! {
            <>
                <nav class="top-nav">
                    <div>
                        <a class="brand" href="/" onclick={link.callback(|e: MouseEvent| {
                            e.prevent_default();
                            Msg::Navigate(Route::Accounts)
                        })}>{ "IT Platform CRM" }</a>
                        { nav_link("Accounts", Route::Accounts) }
                        { nav_link("Submit Request", Route::IntakeForm) }
                        { nav_link("Intake Triage", Route::IntakeTriage) }
                        { nav_link("Admin", Route::Admin) }
                    </div>
                    <button class="outline" title="Toggle theme" onclick={link.callback(|_| Msg::ToggleTheme)}>
                        <i class="material-icons">{ theme_icon }</i>
                    </button>
                </nav>
                <main>
                    { self.page(navigate) }
                </main>
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(window)) = (self.popstate.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl App {
    fn page(&self, on_navigate: Callback<Route>) -> Html {
        match &self.route {
            Route::Accounts => html! { <AllAccounts {on_navigate} /> },
            Route::AccountDetails(uid) => html! { <AccountDetails uid={uid.clone()} {on_navigate} /> },
            Route::EditAccount(uid) => html! { <EditAccount uid={uid.clone()} {on_navigate} /> },
            Route::Admin => html! { <Admin /> },
            Route::IntakeForm => html! { <IntakeForm {on_navigate} /> },
            Route::IntakeTriage => html! { <IntakeTriage {on_navigate} /> },
            Route::AdminStates => html! { <AdminStates /> },
            Route::NotFound => html! { <NotFound {on_navigate} /> },
        }
    }
}
