use common::routes::Route;
use yew::prelude::*;

use super::NavProps;

#[function_component(NotFound)]
pub fn not_found(props: &NavProps) -> Html {
    let on_navigate = props.on_navigate.clone();
    let go_home = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(Route::Accounts);
    });
    html! {
        <div class="card">
            <h1>{ "Page not found" }</h1>
            <p class="muted">{ "The page you are looking for does not exist." }</p>
            <a href="/" onclick={go_home}>{ "Back to accounts" }</a>
        </div>
    }
}
