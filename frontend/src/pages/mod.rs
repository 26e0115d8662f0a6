//! One component per route. Each page fetches its own data when shown and
//! again after any change it makes; nothing is cached between pages.

pub mod account_details;
pub mod accounts;
pub mod admin;
pub mod admin_states;
pub mod edit_account;
pub mod intake_form;
pub mod intake_triage;
pub mod not_found;

use common::routes::Route;
use yew::prelude::*;

/// Props of pages that can move elsewhere.
#[derive(Properties, PartialEq, Clone)]
pub struct NavProps {
    pub on_navigate: Callback<Route>,
}
