use std::rc::Rc;

use common::theme::load_theme;

use crate::app::{App, AppProps};
use crate::storage::LocalStorage;

mod api;
mod app;
mod error_alert;
mod helpers;
mod pages;
mod storage;
mod tops_sheet;

fn main() {
    let preferences = Rc::new(LocalStorage);
    let theme = load_theme(preferences.as_ref());
    yew::Renderer::<App>::with_props(AppProps { theme, preferences }).render();
}
