//! Inline alert for failed saves and deletes.
//!
//! Unlike a toast, the alert stays on the page until the user dismisses it
//! or a later failure replaces it.

use yew::prelude::*;

use crate::api::ApiError;

/// The failure a page is currently showing, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alert(Option<String>);

impl Alert {
    pub fn show(&mut self, message: impl Into<String>) {
        self.0 = Some(message.into());
    }

    /// Shows the failure of `action`, e.g. `"Failed to save state"`.
    pub fn failed(&mut self, action: &str, err: &ApiError) {
        self.show(failure_message(action, err));
    }

    pub fn dismiss(&mut self) {
        self.0 = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Details the API rejected a request with are shown to the user; transport
/// failures only ask for a retry.
pub fn failure_message(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::ValidationFailed(detail) | ApiError::NotFound(detail) => format!("{action}: {detail}"),
        ApiError::Transport(_) => format!("{action}. Please try again."),
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub alert: Alert,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let Some(message) = props.alert.message() else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.clone();
    html! {
        <div class="alert" role="alert">
            <i class="material-icons">{ "error" }</i>
            <span>{ message.to_string() }</span>
            <button type="button" class="outline" onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                { "Dismiss" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_stays_until_dismissed() {
        let mut alert = Alert::default();
        alert.failed("Failed to save state", &ApiError::Transport("timeout".into()));
        assert_eq!(alert.message(), Some("Failed to save state. Please try again."));

        alert.dismiss();
        assert_eq!(alert.message(), None);
    }

    #[test]
    fn later_failure_replaces_earlier_one() {
        let mut alert = Alert::default();
        alert.show("State name is required");
        alert.failed(
            "Failed to delete state",
            &ApiError::NotFound("Request state 7 not found".into()),
        );
        assert_eq!(
            alert.message(),
            Some("Failed to delete state: Request state 7 not found")
        );
    }

    #[test]
    fn api_rejections_keep_their_detail() {
        let err = ApiError::ValidationFailed("Request state 'New' already exists".into());
        assert_eq!(
            failure_message("Failed to save state", &err),
            "Failed to save state: Request state 'New' already exists"
        );
    }
}
