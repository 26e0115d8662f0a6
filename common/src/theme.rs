//! Light/dark preference and the storage seam it is persisted through.

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Key/value storage for user preferences. The browser build backs this with
/// `localStorage`.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str);
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    Theme::parse(store.load(THEME_KEY).as_deref())
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.save(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryStore::default();
        let theme = load_theme(&store).toggled();
        save_theme(&store, theme);
        assert_eq!(store.load(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn unknown_value_reads_as_light() {
        assert_eq!(Theme::parse(Some("sepia")), Theme::Light);
    }
}
