//! Records owned by an account: use cases, updates, platforms and primary IT
//! partners. They share one set of CRUD operations, parameterised by
//! [`ChildTable`].

use common::model::{AccountChild, Platform, PrimaryItPartner, Update, UseCase};
use common::patch::Merge;
use log::{debug, info};
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::error::{ApiError, ApiResult};
use crate::store::accounts;

pub trait ChildTable: AccountChild + Merge + Sized {
    const TABLE: &'static str;
    /// Columns after `id`; `account_uid` always comes first.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    /// Values in `COLUMNS` order.
    fn values(&self) -> Vec<&dyn ToSql>;

    fn set_id(&mut self, id: i64);
}

impl ChildTable for UseCase {
    const TABLE: &'static str = "use_cases";
    const COLUMNS: &'static [&'static str] = &[
        "account_uid",
        "problem",
        "solution",
        "value",
        "leader",
        "status",
        "enablement_tier",
        "platform",
    ];

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(UseCase {
            id: row.get("id")?,
            account_uid: row.get("account_uid")?,
            problem: row.get("problem")?,
            solution: row.get("solution")?,
            value: row.get("value")?,
            leader: row.get("leader")?,
            status: row.get("status")?,
            enablement_tier: row.get("enablement_tier")?,
            platform: row.get("platform")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 8] = [
            &self.account_uid,
            &self.problem,
            &self.solution,
            &self.value,
            &self.leader,
            &self.status,
            &self.enablement_tier,
            &self.platform,
        ];
        values.to_vec()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl ChildTable for Update {
    const TABLE: &'static str = "updates";
    const COLUMNS: &'static [&'static str] = &["account_uid", "description", "author", "platform", "date"];

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Update {
            id: row.get("id")?,
            account_uid: row.get("account_uid")?,
            description: row.get("description")?,
            author: row.get("author")?,
            platform: row.get("platform")?,
            date: row.get("date")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 5] = [
            &self.account_uid,
            &self.description,
            &self.author,
            &self.platform,
            &self.date,
        ];
        values.to_vec()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl ChildTable for Platform {
    const TABLE: &'static str = "platforms";
    const COLUMNS: &'static [&'static str] = &["account_uid", "platform_name", "onboarding_status"];

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Platform {
            id: row.get("id")?,
            account_uid: row.get("account_uid")?,
            platform_name: row.get("platform_name")?,
            onboarding_status: row.get("onboarding_status")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 3] = [&self.account_uid, &self.platform_name, &self.onboarding_status];
        values.to_vec()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl ChildTable for PrimaryItPartner {
    const TABLE: &'static str = "primary_it_partners";
    const COLUMNS: &'static [&'static str] = &["account_uid", "primary_it_partner"];

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PrimaryItPartner {
            id: row.get("id")?,
            account_uid: row.get("account_uid")?,
            primary_it_partner: row.get("primary_it_partner")?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        let values: [&dyn ToSql; 2] = [&self.account_uid, &self.primary_it_partner];
        values.to_vec()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

fn select_sql<T: ChildTable>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

fn not_found<T: ChildTable>(id: i64) -> ApiError {
    ApiError::not_found(format!("{} {id}", T::LABEL))
}

/// Inserts `record` under a fresh id. Any id the caller supplied is ignored.
pub fn create<T: ChildTable>(conn: &Connection, mut record: T) -> ApiResult<T> {
    accounts::ensure_exists(conn, record.account_uid())?;

    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    );
    conn.execute(&sql, params_from_iter(record.values()))?;
    let id = conn.last_insert_rowid();
    record.set_id(id);
    info!("Created {} {id} for account {}", T::LABEL, record.account_uid());
    Ok(record)
}

pub fn get<T: ChildTable>(conn: &Connection, id: i64) -> ApiResult<T> {
    let sql = format!("{} WHERE id = ?1", select_sql::<T>());
    conn.query_row(&sql, params![id], T::from_row)
        .optional()?
        .ok_or_else(|| not_found::<T>(id))
}

/// Lists records in id order, restricted to one account when `account_uid` is given.
/// An unknown account yields an empty list.
pub fn list<T: ChildTable>(conn: &Connection, account_uid: Option<&str>) -> ApiResult<Vec<T>> {
    let sql = format!(
        "{} WHERE (?1 IS NULL OR account_uid = ?1) ORDER BY id",
        select_sql::<T>()
    );
    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map(params![account_uid], T::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// First record of the account, if any.
pub fn first_for_account<T: ChildTable>(conn: &Connection, account_uid: &str) -> ApiResult<Option<T>> {
    let sql = format!("{} WHERE account_uid = ?1 ORDER BY id LIMIT 1", select_sql::<T>());
    let record = conn
        .query_row(&sql, params![account_uid], T::from_row)
        .optional()?;
    if record.is_none() {
        debug!("No {} for account {account_uid}", T::LABEL);
    }
    Ok(record)
}

pub fn update<T: ChildTable>(conn: &Connection, id: i64, patch: T::Patch) -> ApiResult<T> {
    let mut record = get::<T>(conn, id)?;
    let previous_owner = record.account_uid().to_string();
    record.merge(patch);
    if record.account_uid() != previous_owner {
        accounts::ensure_exists(conn, record.account_uid())?;
    }

    let assignments: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect();
    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        T::TABLE,
        assignments.join(", "),
        T::COLUMNS.len() + 1
    );
    let mut values = record.values();
    values.push(&id);
    conn.execute(&sql, params_from_iter(values))?;
    info!("Updated {} {id}", T::LABEL);
    Ok(record)
}

pub fn delete<T: ChildTable>(conn: &Connection, id: i64) -> ApiResult<()> {
    let removed = conn.execute(&format!("DELETE FROM {} WHERE id = ?1", T::TABLE), params![id])?;
    if removed == 0 {
        return Err(not_found::<T>(id));
    }
    info!("Deleted {} {id}", T::LABEL);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Db;
    use chrono::NaiveDate;
    use common::model::{Account, UpdatePatch, UseCasePatch};

    fn db_with_accounts(uids: &[&str]) -> Db {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            for uid in uids {
                accounts::create(conn, Account { uid: uid.to_string(), ..Default::default() })?;
            }
            Ok(())
        })
        .unwrap();
        db
    }

    fn use_case(account_uid: &str, problem: &str) -> UseCase {
        UseCase {
            account_uid: account_uid.into(),
            problem: Some(problem.into()),
            solution: Some("Build unified analytics platform with Databricks".into()),
            status: Some("In Progress".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_assigns_fresh_ids() {
        let db = db_with_accounts(&["ACC001"]);
        db.with(|conn| {
            let mut supplied = use_case("ACC001", "Siloed data");
            supplied.id = Some(999);
            let first = create(conn, supplied)?;
            let second = create(conn, use_case("ACC001", "Manual reporting"))?;
            assert_ne!(first.id, Some(999));
            assert_ne!(first.id, second.id);
            assert_eq!(get::<UseCase>(conn, first.id.unwrap())?, first);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn create_requires_owner() {
        let db = db_with_accounts(&[]);
        let result = db.with(|conn| create(conn, use_case("GHOST", "Orphan")));
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[test]
    fn list_filters_by_account() {
        let db = db_with_accounts(&["ACC001", "ACC002"]);
        db.with(|conn| {
            create(conn, use_case("ACC001", "a"))?;
            create(conn, use_case("ACC002", "b"))?;
            create(conn, use_case("ACC001", "c"))?;

            let all: Vec<UseCase> = list(conn, None)?;
            assert_eq!(all.len(), 3);

            let problems: Vec<String> = list::<UseCase>(conn, Some("ACC001"))?
                .into_iter()
                .filter_map(|u| u.problem)
                .collect();
            assert_eq!(problems, vec!["a", "c"]);

            assert!(list::<UseCase>(conn, Some("UNKNOWN"))?.is_empty());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn update_merges_patch() {
        let db = db_with_accounts(&["ACC001"]);
        db.with(|conn| {
            let created = create(conn, use_case("ACC001", "Lack of real-time insights"))?;
            let id = created.id.unwrap();
            let patch = UseCasePatch {
                status: Some(Some("Completed".into())),
                ..Default::default()
            };
            update::<UseCase>(conn, id, patch)?;

            let read: UseCase = get(conn, id)?;
            assert_eq!(read.status.as_deref(), Some("Completed"));
            assert_eq!(read.problem, created.problem);
            assert_eq!(read.solution, created.solution);
            assert_eq!(read.account_uid, "ACC001");
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn reparenting_to_unknown_account_fails() {
        let db = db_with_accounts(&["ACC001"]);
        db.with(|conn| {
            let created = create(conn, use_case("ACC001", "x"))?;
            let patch = UseCasePatch {
                account_uid: Some("GHOST".into()),
                ..Default::default()
            };
            assert!(matches!(
                update::<UseCase>(conn, created.id.unwrap(), patch),
                Err(ApiError::NotFound(_))
            ));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn update_dates_round_trip() {
        let db = db_with_accounts(&["ACC003"]);
        db.with(|conn| {
            let created = create(
                conn,
                Update {
                    account_uid: "ACC003".into(),
                    description: Some("Databricks workspace setup completed".into()),
                    date: NaiveDate::from_ymd_opt(2024, 4, 5),
                    ..Default::default()
                },
            )?;
            let id = created.id.unwrap();
            update::<Update>(conn, id, UpdatePatch { date: Some(None), ..Default::default() })?;
            let read: Update = get(conn, id)?;
            assert_eq!(read.date, None);
            assert_eq!(read.description, created.description);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn delete_is_not_repeatable() {
        let db = db_with_accounts(&["ACC002"]);
        db.with(|conn| {
            let platform = create(
                conn,
                Platform {
                    account_uid: "ACC002".into(),
                    platform_name: Some("Snowflake".into()),
                    onboarding_status: Some("Completed".into()),
                    ..Default::default()
                },
            )?;
            let id = platform.id.unwrap();
            delete::<Platform>(conn, id)?;
            assert!(matches!(delete::<Platform>(conn, id), Err(ApiError::NotFound(_))));
            assert!(matches!(get::<Platform>(conn, id), Err(ApiError::NotFound(_))));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn first_partner_for_account() {
        let db = db_with_accounts(&["ACC001", "ACC002"]);
        db.with(|conn| {
            create(
                conn,
                PrimaryItPartner {
                    account_uid: "ACC001".into(),
                    primary_it_partner: Some("John Smith".into()),
                    ..Default::default()
                },
            )?;
            let partner: Option<PrimaryItPartner> = first_for_account(conn, "ACC001")?;
            assert_eq!(partner.and_then(|p| p.primary_it_partner).as_deref(), Some("John Smith"));
            assert!(first_for_account::<PrimaryItPartner>(conn, "ACC002")?.is_none());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn deleting_account_removes_children() {
        let db = db_with_accounts(&["ACC001"]);
        db.with(|conn| {
            create(conn, use_case("ACC001", "x"))?;
            create(
                conn,
                Platform { account_uid: "ACC001".into(), ..Default::default() },
            )?;
            accounts::delete(conn, "ACC001")?;
            assert!(list::<UseCase>(conn, None)?.is_empty());
            assert!(list::<Platform>(conn, None)?.is_empty());
            Ok(())
        })
        .unwrap();
    }
}
