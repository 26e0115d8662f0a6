//! Case-insensitive substring filters behind the search boxes.

use crate::model::help_type::format_help_types;
use crate::model::{Account, IntakeRequest};

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Matches on team, business/IT area, VP and team admin. An empty term matches everything.
pub fn account_matches(account: &Account, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains(account.team.as_deref(), &needle)
        || contains(account.business_it_area.as_deref(), &needle)
        || contains(account.vp.as_deref(), &needle)
        || contains(account.team_admin.as_deref(), &needle)
}

/// Matches on the request's text fields and on its help-type labels.
pub fn request_matches(request: &IntakeRequest, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let labels = format_help_types(&request.help_types());
    contains(Some(&request.title), &needle)
        || contains(request.description.as_deref(), &needle)
        || contains(request.functional_area.as_deref(), &needle)
        || contains(request.platform.as_deref(), &needle)
        || contains(request.submitted_for.as_deref(), &needle)
        || contains(request.dri_contact.as_deref(), &needle)
        || contains(Some(&labels), &needle)
}

pub fn filter_accounts<'a>(accounts: &'a [Account], term: &str) -> Vec<&'a Account> {
    accounts.iter().filter(|a| account_matches(a, term)).collect()
}

pub fn filter_requests<'a>(requests: &'a [IntakeRequest], term: &str) -> Vec<&'a IntakeRequest> {
    requests.iter().filter(|r| request_matches(r, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(uid: &str, team: &str, vp: &str) -> Account {
        Account {
            uid: uid.into(),
            team: Some(team.into()),
            vp: Some(vp.into()),
            ..Default::default()
        }
    }

    #[test]
    fn account_search_is_case_insensitive() {
        let accounts = vec![
            account("ACC001", "Data Analytics Team", "Sarah Johnson"),
            account("ACC002", "Marketing Automation", "Robert Davis"),
        ];
        let hits = filter_accounts(&accounts, "ROBERT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].uid, "ACC002");
        assert_eq!(filter_accounts(&accounts, "").len(), 2);
    }

    #[test]
    fn account_search_ignores_unsearched_fields() {
        let mut acc = account("ACC003", "Finance Reporting", "Emily Taylor");
        acc.notes = Some("fabric".into());
        assert!(!account_matches(&acc, "fabric"));
    }

    #[test]
    fn request_search_covers_help_type_labels() {
        let request = IntakeRequest {
            id: 1,
            title: "Power BI Dashboard Consultation".into(),
            help_types: r#"["enhancement"]"#.into(),
            platform: Some("Power Platform".into()),
            ..Default::default()
        };
        assert!(request_matches(&request, "environment enhancement"));
        assert!(request_matches(&request, "power platform"));
        assert!(!request_matches(&request, "snowflake"));
    }
}
