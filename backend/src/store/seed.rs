//! Startup data: the default request states on every fresh database, and an
//! optional set of sample accounts for demos.

use chrono::NaiveDate;
use common::model::request_state::default_states;
use common::model::{Account, NewIntakeRequest, Platform, PrimaryItPartner, Update, UseCase};
use log::info;
use rusqlite::Connection;
use serde_json::json;

use crate::error::ApiResult;
use crate::store::{accounts, assignments, children, intake_requests, request_states};

fn count(conn: &Connection, table: &str) -> ApiResult<i64> {
    Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?)
}

/// Inserts the default states when `request_states` is empty. Returns how many were added.
pub fn default_request_states(conn: &mut Connection) -> ApiResult<usize> {
    if count(conn, "request_states")? > 0 {
        return Ok(0);
    }
    let tx = conn.transaction()?;
    let states = default_states();
    for state in &states {
        request_states::create(&tx, state.clone())?;
    }
    tx.commit()?;
    info!("Seeded {} default request states", states.len());
    Ok(states.len())
}

/// Inserts the sample accounts and intake requests when there are no accounts yet.
/// Returns whether anything was written.
pub fn sample_data(conn: &mut Connection) -> ApiResult<bool> {
    if count(conn, "accounts")? > 0 {
        return Ok(false);
    }
    let tx = conn.transaction()?;
    for account in sample_accounts() {
        accounts::create(&tx, account)?;
    }
    for use_case in sample_use_cases() {
        children::create(&tx, use_case)?;
    }
    for update in sample_updates() {
        children::create(&tx, update)?;
    }
    for platform in sample_platforms() {
        children::create(&tx, platform)?;
    }
    for partner in sample_partners() {
        children::create(&tx, partner)?;
    }

    let states = request_states::list(&tx)?;
    for (submission, state_name) in sample_intake_requests() {
        let request = intake_requests::create(&tx, submission)?;
        if let Some(state_id) = states.iter().find(|s| s.name == state_name).and_then(|s| s.id) {
            assignments::assign(&tx, request.id, state_id)?;
        }
    }
    tx.commit()?;
    info!("Seeded sample accounts and intake requests");
    Ok(true)
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            uid: "ACC001".into(),
            team: text("Data Analytics Team"),
            business_it_area: text("Business Intelligence"),
            vp: text("Sarah Johnson"),
            team_admin: text("Mike Chen"),
            use_case: text("Customer Analytics Dashboard"),
            use_case_status: text("In Progress"),
            databricks: text("y"),
            month_onboarded_db: date(2024, 3, 15),
            snowflake: text("y"),
            month_onboarded_sf: date(2024, 2, 10),
            north_star_domain: text("Customer Insights"),
            business_or_it: text("Business"),
            centerwell_or_insurance: text("Insurance"),
            git_repo: text("https://github.com/company/analytics-dashboard"),
            unique_identifier: text("DA-2024-001"),
            associated_ado_items: text("https://dev.azure.com/items/12345"),
            team_artifacts: text("https://confluence.company.com/analytics"),
            current_tech_stack: text("Python, Databricks, Snowflake, Power BI"),
            ad_groups: text("DA-Analytics-Users, DA-Analytics-Admins"),
            notes: text("Team is progressing well with Databricks migration"),
            csm: text("Jennifer Williams"),
            health: text("Green"),
            health_reason: text("On track with all deliverables"),
        },
        Account {
            uid: "ACC002".into(),
            team: text("Marketing Automation"),
            business_it_area: text("Marketing Technology"),
            vp: text("Robert Davis"),
            team_admin: text("Lisa Anderson"),
            use_case: text("Campaign Performance Analysis"),
            use_case_status: text("Completed"),
            databricks: text("n"),
            month_onboarded_db: None,
            snowflake: text("y"),
            month_onboarded_sf: date(2024, 1, 20),
            north_star_domain: text("Marketing ROI"),
            business_or_it: text("Business"),
            centerwell_or_insurance: text("Centerwell"),
            git_repo: text("https://github.com/company/marketing-analytics"),
            unique_identifier: text("MA-2024-002"),
            associated_ado_items: text("https://dev.azure.com/items/12346"),
            team_artifacts: text("https://confluence.company.com/marketing"),
            current_tech_stack: text("Snowflake, Power Platform, SQL Server"),
            ad_groups: text("MA-Users, MA-Admins"),
            notes: text("Successfully migrated to Snowflake"),
            csm: text("David Brown"),
            health: text("Green"),
            health_reason: text("All systems operational"),
        },
        Account {
            uid: "ACC003".into(),
            team: text("Finance Reporting"),
            business_it_area: text("Financial Analytics"),
            vp: text("Emily Taylor"),
            team_admin: text("James Wilson"),
            use_case: text("Financial Forecasting Model"),
            use_case_status: text("Planning"),
            databricks: text("y"),
            month_onboarded_db: date(2024, 4, 1),
            snowflake: text("n"),
            month_onboarded_sf: None,
            north_star_domain: text("Financial Planning"),
            business_or_it: text("IT"),
            centerwell_or_insurance: text("Insurance"),
            git_repo: text("https://github.com/company/finance-forecasting"),
            unique_identifier: text("FR-2024-003"),
            associated_ado_items: text("https://dev.azure.com/items/12347"),
            team_artifacts: text("https://confluence.company.com/finance"),
            current_tech_stack: text("Databricks, Fabric, Excel"),
            ad_groups: text("FR-Users, FR-Power-Users"),
            notes: text("Evaluating Fabric integration options"),
            csm: text("Amanda Martinez"),
            health: text("Yellow"),
            health_reason: text("Waiting on budget approval for Fabric license"),
        },
    ]
}

fn sample_use_cases() -> Vec<UseCase> {
    [
        (
            "ACC001",
            "Lack of real-time customer insights",
            "Build unified analytics platform with Databricks",
            "$2M annual savings, 50% faster insights",
            "Mike Chen",
            "In Progress",
            "Tier 2",
            "Databricks",
        ),
        (
            "ACC001",
            "Siloed data across multiple systems",
            "Centralize data in Snowflake data warehouse",
            "Single source of truth for customer data",
            "Mike Chen",
            "Completed",
            "Tier 1",
            "Snowflake",
        ),
        (
            "ACC002",
            "Manual campaign reporting process",
            "Automated reporting with Snowflake and Power BI",
            "80% reduction in reporting time",
            "Lisa Anderson",
            "Completed",
            "Tier 1",
            "Snowflake",
        ),
        (
            "ACC003",
            "Inaccurate financial forecasts",
            "ML-powered forecasting on Databricks",
            "30% improvement in forecast accuracy",
            "James Wilson",
            "Planning",
            "Tier 3",
            "Databricks",
        ),
    ]
    .into_iter()
    .map(
        |(account_uid, problem, solution, value, leader, status, tier, platform)| UseCase {
            id: None,
            account_uid: account_uid.into(),
            problem: text(problem),
            solution: text(solution),
            value: text(value),
            leader: text(leader),
            status: text(status),
            enablement_tier: text(tier),
            platform: text(platform),
        },
    )
    .collect()
}

fn sample_updates() -> Vec<Update> {
    [
        ("ACC001", "Completed Phase 1 of Databricks migration", "Mike Chen", "Databricks", date(2024, 3, 20)),
        ("ACC001", "Snowflake data pipeline fully operational", "Sarah Johnson", "Snowflake", date(2024, 3, 1)),
        ("ACC002", "Campaign dashboard deployed to production", "Lisa Anderson", "Power Platform", date(2024, 2, 15)),
        ("ACC003", "Databricks workspace setup completed", "James Wilson", "Databricks", date(2024, 4, 5)),
    ]
    .into_iter()
    .map(|(account_uid, description, author, platform, date)| Update {
        id: None,
        account_uid: account_uid.into(),
        description: text(description),
        author: text(author),
        platform: text(platform),
        date,
    })
    .collect()
}

fn sample_platforms() -> Vec<Platform> {
    [
        ("ACC001", "Databricks", "In Progress"),
        ("ACC001", "Snowflake", "Completed"),
        ("ACC001", "Power Platform", "Not Started"),
        ("ACC002", "Snowflake", "Completed"),
        ("ACC002", "Power Platform", "Completed"),
        ("ACC003", "Databricks", "In Progress"),
        ("ACC003", "Fabric", "Planning"),
    ]
    .into_iter()
    .map(|(account_uid, name, status)| Platform {
        id: None,
        account_uid: account_uid.into(),
        platform_name: text(name),
        onboarding_status: text(status),
    })
    .collect()
}

fn sample_partners() -> Vec<PrimaryItPartner> {
    [("ACC001", "John Smith"), ("ACC002", "Alice Cooper"), ("ACC003", "Bob Martinez")]
        .into_iter()
        .map(|(account_uid, partner)| PrimaryItPartner {
            id: None,
            account_uid: account_uid.into(),
            primary_it_partner: text(partner),
        })
        .collect()
}

/// Each submission paired with the name of the state it starts in.
fn sample_intake_requests() -> Vec<(NewIntakeRequest, &'static str)> {
    vec![
        (
            NewIntakeRequest {
                title: "Sandbox for claims fraud models".into(),
                description: text("Data science team needs an isolated workspace to prototype fraud scoring."),
                has_it_partner: false,
                dri_contact: text("Priya Patel"),
                submitted_for: text("Claims Analytics"),
                functional_area: text("Claims"),
                platform: text("Databricks"),
                help_types: r#"["consultation","new_environment"]"#.into(),
                additional_details: Some(
                    json!({
                        "consultation_help_with": "[\"Architecture review\"]",
                        "use_case_details": "Score incoming claims nightly",
                        "env_preferences": "[\"Databricks\"]",
                        "languages": "[\"Python\",\"SQL\"]",
                        "primary_function": "[\"Data Science\"]"
                    })
                    .to_string(),
                ),
            },
            "New",
        ),
        (
            NewIntakeRequest {
                title: "Share pharmacy extracts with vendor".into(),
                description: text("Monthly pharmacy utilisation extracts need a governed drop zone."),
                has_it_partner: true,
                dri_contact: text("Marcus Lee"),
                submitted_for: text("Pharmacy Operations"),
                functional_area: text("Pharmacy"),
                platform: text("Snowflake"),
                help_types: r#"["cloud_storage"]"#.into(),
                additional_details: Some(
                    json!({
                        "describe_data": "De-identified pharmacy claims",
                        "who_accessing": "External analytics vendor",
                        "how_consumed": "SFTP pickup"
                    })
                    .to_string(),
                ),
            },
            "In Review",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Db;

    #[test]
    fn default_states_seed_once() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            assert_eq!(default_request_states(conn)?, 7);
            assert_eq!(default_request_states(conn)?, 0);
            let names: Vec<String> = request_states::list(conn)?.into_iter().map(|s| s.name).collect();
            assert_eq!(
                names,
                vec!["New", "In Review", "Assigned", "In Progress", "Blocked", "Completed", "Rejected"]
            );
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn sample_data_links_children_and_states() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            default_request_states(conn)?;
            assert!(sample_data(conn)?);
            assert!(!sample_data(conn)?);

            assert_eq!(accounts::list(conn)?.len(), 3);
            let platforms: Vec<Platform> = children::list(conn, Some("ACC001"))?;
            assert_eq!(platforms.len(), 3);
            let partner: Option<PrimaryItPartner> = children::first_for_account(conn, "ACC002")?;
            assert_eq!(partner.and_then(|p| p.primary_it_partner).as_deref(), Some("Alice Cooper"));

            let requests = intake_requests::list(conn)?;
            assert_eq!(requests.len(), 2);
            for request in requests {
                assert_eq!(assignments::list_states(conn, request.id)?.len(), 1);
            }
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn existing_accounts_suppress_samples() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            accounts::create(conn, Account { uid: "MINE".into(), ..Default::default() })?;
            assert!(!sample_data(conn)?);
            assert_eq!(accounts::list(conn)?.len(), 1);
            Ok(())
        })
        .unwrap();
    }
}
