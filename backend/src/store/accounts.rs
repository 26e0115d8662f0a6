use common::model::{Account, AccountPatch};
use common::patch::Merge;
use common::validation::validate_account;
use log::info;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::error::{ApiError, ApiResult};

/// Every column of `accounts`, `uid` first.
const COLUMNS: &[&str] = &[
    "uid",
    "team",
    "business_it_area",
    "vp",
    "team_admin",
    "use_case",
    "use_case_status",
    "databricks",
    "month_onboarded_db",
    "snowflake",
    "month_onboarded_sf",
    "north_star_domain",
    "business_or_it",
    "centerwell_or_insurance",
    "git_repo",
    "unique_identifier",
    "associated_ado_items",
    "team_artifacts",
    "current_tech_stack",
    "ad_groups",
    "notes",
    "csm",
    "health",
    "health_reason",
];

/// Child tables removed together with their account.
const CHILD_TABLES: &[&str] = &["use_cases", "updates", "platforms", "primary_it_partners"];

fn from_row(row: &Row) -> rusqlite::Result<Account> {
    Ok(Account {
        uid: row.get("uid")?,
        team: row.get("team")?,
        business_it_area: row.get("business_it_area")?,
        vp: row.get("vp")?,
        team_admin: row.get("team_admin")?,
        use_case: row.get("use_case")?,
        use_case_status: row.get("use_case_status")?,
        databricks: row.get("databricks")?,
        month_onboarded_db: row.get("month_onboarded_db")?,
        snowflake: row.get("snowflake")?,
        month_onboarded_sf: row.get("month_onboarded_sf")?,
        north_star_domain: row.get("north_star_domain")?,
        business_or_it: row.get("business_or_it")?,
        centerwell_or_insurance: row.get("centerwell_or_insurance")?,
        git_repo: row.get("git_repo")?,
        unique_identifier: row.get("unique_identifier")?,
        associated_ado_items: row.get("associated_ado_items")?,
        team_artifacts: row.get("team_artifacts")?,
        current_tech_stack: row.get("current_tech_stack")?,
        ad_groups: row.get("ad_groups")?,
        notes: row.get("notes")?,
        csm: row.get("csm")?,
        health: row.get("health")?,
        health_reason: row.get("health_reason")?,
    })
}

/// Column values in `COLUMNS` order.
fn values(account: &Account) -> Vec<&dyn ToSql> {
    let values: [&dyn ToSql; 24] = [
        &account.uid,
        &account.team,
        &account.business_it_area,
        &account.vp,
        &account.team_admin,
        &account.use_case,
        &account.use_case_status,
        &account.databricks,
        &account.month_onboarded_db,
        &account.snowflake,
        &account.month_onboarded_sf,
        &account.north_star_domain,
        &account.business_or_it,
        &account.centerwell_or_insurance,
        &account.git_repo,
        &account.unique_identifier,
        &account.associated_ado_items,
        &account.team_artifacts,
        &account.current_tech_stack,
        &account.ad_groups,
        &account.notes,
        &account.csm,
        &account.health,
        &account.health_reason,
    ];
    values.to_vec()
}

fn select_sql() -> String {
    format!("SELECT {} FROM accounts", COLUMNS.join(", "))
}

pub fn exists(conn: &Connection, uid: &str) -> ApiResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM accounts WHERE uid = ?1", params![uid], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Fails with `NotFound` unless an account with `uid` exists.
pub fn ensure_exists(conn: &Connection, uid: &str) -> ApiResult<()> {
    if !exists(conn, uid)? {
        return Err(ApiError::not_found(format!("Account {uid}")));
    }
    Ok(())
}

pub fn create(conn: &Connection, account: Account) -> ApiResult<Account> {
    validate_account(&account)?;
    if exists(conn, &account.uid)? {
        return Err(ApiError::Conflict(format!("Account {} already exists", account.uid)));
    }

    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO accounts ({}) VALUES ({})",
        COLUMNS.join(", "),
        placeholders.join(", ")
    );
    conn.execute(&sql, params_from_iter(values(&account)))?;
    info!("Created account {}", account.uid);
    Ok(account)
}

pub fn get(conn: &Connection, uid: &str) -> ApiResult<Account> {
    let sql = format!("{} WHERE uid = ?1", select_sql());
    conn.query_row(&sql, params![uid], from_row)
        .optional()?
        .ok_or_else(|| ApiError::not_found(format!("Account {uid}")))
}

pub fn list(conn: &Connection) -> ApiResult<Vec<Account>> {
    let sql = format!("{} ORDER BY rowid", select_sql());
    let mut stmt = conn.prepare(&sql)?;
    let accounts = stmt
        .query_map([], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(accounts)
}

pub fn update(conn: &Connection, uid: &str, patch: AccountPatch) -> ApiResult<Account> {
    let mut account = get(conn, uid)?;
    account.merge(patch);

    // Skip `uid`; it is the key and never changes.
    let assignments: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect();
    let sql = format!("UPDATE accounts SET {} WHERE uid = ?1", assignments.join(", "));
    conn.execute(&sql, params_from_iter(values(&account)))?;
    info!("Updated account {uid}");
    Ok(account)
}

/// Deletes the account together with its use cases, updates, platforms and IT partners.
pub fn delete(conn: &mut Connection, uid: &str) -> ApiResult<()> {
    let tx = conn.transaction()?;
    for table in CHILD_TABLES {
        tx.execute(&format!("DELETE FROM {table} WHERE account_uid = ?1"), params![uid])?;
    }
    let removed = tx.execute("DELETE FROM accounts WHERE uid = ?1", params![uid])?;
    if removed == 0 {
        return Err(ApiError::not_found(format!("Account {uid}")));
    }
    tx.commit()?;
    info!("Deleted account {uid} and its child records");
    Ok(())
}
