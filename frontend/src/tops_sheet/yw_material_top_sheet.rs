//! Sliding panel used for the intake result dialog and the triage details.
//!
//! The sheet is always mounted; `open_top_sheet`/`close_top_sheet` toggle the
//! `show` class that slides it into view.

use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// Adds or removes `show` after a short delay so the CSS transition runs
/// even when the sheet was rendered in the same frame.
fn toggle_after_delay(top_sheet_ref: &NodeRef, show: bool) {
    let (Some(sheet), Some(window)) = (top_sheet_ref.cast::<web_sys::HtmlElement>(), web_sys::window()) else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        let class_list = sheet.class_name();
        let mut classes: Vec<&str> = class_list.split_whitespace().filter(|c| *c != "show").collect();
        if show {
            classes.push("show");
        }
        sheet.set_class_name(&classes.join(" "));
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 50)
        .is_err()
    {
        gloo_console::warn!("Could not schedule top sheet transition");
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_after_delay(&top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_after_delay(&top_sheet_ref, false);
}
