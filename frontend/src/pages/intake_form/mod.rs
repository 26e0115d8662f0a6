//! `/intake`: the request submission form.
//!
//! `state` holds the form, `update` applies messages and `view` renders. The
//! functional areas are fetched once on creation.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod options;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::IntakeForm;

use crate::api;
use crate::pages::NavProps;

impl Component for IntakeForm {
    type Message = Msg;
    type Properties = NavProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let areas = api::functional_areas().await.unwrap_or_else(|e| {
                error!(format!("Error loading functional areas: {e}"));
                Vec::new()
            });
            link.send_message(Msg::AreasLoaded(areas));
        });
        IntakeForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
