//! Client-side path table.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Accounts,
    AccountDetails(String),
    EditAccount(String),
    Admin,
    IntakeForm,
    IntakeTriage,
    AdminStates,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Accounts,
            ["accounts", uid] => Route::AccountDetails(uid.to_string()),
            ["accounts", uid, "edit"] => Route::EditAccount(uid.to_string()),
            ["admin"] => Route::Admin,
            ["admin", "intake-triage"] => Route::IntakeTriage,
            ["admin", "states"] => Route::AdminStates,
            ["intake"] => Route::IntakeForm,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Accounts => "/".to_string(),
            Route::AccountDetails(uid) => format!("/accounts/{uid}"),
            Route::EditAccount(uid) => format!("/accounts/{uid}/edit"),
            Route::Admin => "/admin".to_string(),
            Route::IntakeForm => "/intake".to_string(),
            Route::IntakeTriage => "/admin/intake-triage".to_string(),
            Route::AdminStates => "/admin/states".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Accounts);
        assert_eq!(Route::parse("/accounts/ACC001"), Route::AccountDetails("ACC001".into()));
        assert_eq!(Route::parse("/accounts/ACC001/edit/"), Route::EditAccount("ACC001".into()));
        assert_eq!(Route::parse("/admin/intake-triage"), Route::IntakeTriage);
        assert_eq!(Route::parse("/admin/states"), Route::AdminStates);
        assert_eq!(Route::parse("/intake"), Route::IntakeForm);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/accounts"), Route::NotFound);
        assert_eq!(Route::parse("/admin/other"), Route::NotFound);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Accounts,
            Route::AccountDetails("ACC002".into()),
            Route::EditAccount("ACC002".into()),
            Route::Admin,
            Route::IntakeForm,
            Route::IntakeTriage,
            Route::AdminStates,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
