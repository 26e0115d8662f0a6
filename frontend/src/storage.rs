use common::theme::PreferenceStore;
use gloo_console::warn;
use web_sys::Storage;

/// Preferences kept in the browser's `localStorage`.
pub struct LocalStorage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let saved = local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok());
        if !saved {
            warn!(format!("Could not persist preference '{key}'"));
        }
    }
}
