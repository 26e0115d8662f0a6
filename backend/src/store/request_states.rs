use common::model::{RequestState, RequestStatePatch};
use common::patch::Merge;
use common::validation::validate_state;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{ApiError, ApiResult};

const SELECT: &str = "SELECT id, name, color, description FROM request_states";

fn from_row(row: &Row) -> rusqlite::Result<RequestState> {
    Ok(RequestState {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        description: row.get("description")?,
    })
}

fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Request state {id}"))
}

pub fn exists(conn: &Connection, id: i64) -> ApiResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM request_states WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Rejects `name` when another state (other than `except`) already uses it.
fn ensure_unique_name(conn: &Connection, name: &str, except: Option<i64>) -> ApiResult<()> {
    let taken: Option<i64> = conn
        .query_row(
            "SELECT id FROM request_states WHERE name = ?1 AND (?2 IS NULL OR id <> ?2)",
            params![name, except],
            |row| row.get(0),
        )
        .optional()?;
    if taken.is_some() {
        return Err(ApiError::Conflict(format!("Request state '{name}' already exists")));
    }
    Ok(())
}

pub fn create(conn: &Connection, mut state: RequestState) -> ApiResult<RequestState> {
    validate_state(&state)?;
    ensure_unique_name(conn, &state.name, None)?;

    conn.execute(
        "INSERT INTO request_states (name, color, description) VALUES (?1, ?2, ?3)",
        params![state.name, state.color, state.description],
    )?;
    state.id = Some(conn.last_insert_rowid());
    info!("Created request state '{}'", state.name);
    Ok(state)
}

pub fn get(conn: &Connection, id: i64) -> ApiResult<RequestState> {
    conn.query_row(&format!("{SELECT} WHERE id = ?1"), params![id], from_row)
        .optional()?
        .ok_or_else(|| not_found(id))
}

pub fn list(conn: &Connection) -> ApiResult<Vec<RequestState>> {
    let mut stmt = conn.prepare(&format!("{SELECT} ORDER BY id"))?;
    let states = stmt
        .query_map([], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(states)
}

pub fn update(conn: &Connection, id: i64, patch: RequestStatePatch) -> ApiResult<RequestState> {
    let mut state = get(conn, id)?;
    state.merge(patch);
    validate_state(&state)?;
    ensure_unique_name(conn, &state.name, Some(id))?;

    conn.execute(
        "UPDATE request_states SET name = ?1, color = ?2, description = ?3 WHERE id = ?4",
        params![state.name, state.color, state.description, id],
    )?;
    info!("Updated request state {id}");
    Ok(state)
}

/// Removes the state and every assignment of it, atomically.
pub fn delete(conn: &mut Connection, id: i64) -> ApiResult<()> {
    let tx = conn.transaction()?;
    let unassigned = tx.execute(
        "DELETE FROM request_state_assignments WHERE state_id = ?1",
        params![id],
    )?;
    let removed = tx.execute("DELETE FROM request_states WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(not_found(id));
    }
    tx.commit()?;
    info!("Deleted request state {id} ({unassigned} assignment(s) removed)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Db;
    use common::validation::ValidationError;

    #[test]
    fn create_assigns_id_and_reads_back() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let created = create(conn, RequestState::new("Triaged", "#10b981", Some("Looked at")))?;
            let id = created.id.expect("id assigned");
            assert_eq!(get(conn, id)?, created);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn names_are_unique() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            create(conn, RequestState::new("Blocked", "#ef4444", None))?;
            let dup = create(conn, RequestState::new("Blocked", "#000000", None));
            assert!(matches!(dup, Err(ApiError::Conflict(_))));

            let other = create(conn, RequestState::new("Waiting", "#f59e0b", None))?;
            let rename = RequestStatePatch {
                name: Some("Blocked".into()),
                ..Default::default()
            };
            assert!(matches!(
                update(conn, other.id.unwrap(), rename),
                Err(ApiError::Conflict(_))
            ));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn invalid_color_is_rejected() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let result = create(conn, RequestState::new("Odd", "blue", None));
            assert!(matches!(
                result,
                Err(ApiError::Validation(ValidationError::InvalidColor(_)))
            ));

            let state = create(conn, RequestState::new("Fine", "#123456", None))?;
            let patch = RequestStatePatch {
                color: Some("#12345".into()),
                ..Default::default()
            };
            assert!(matches!(
                update(conn, state.id.unwrap(), patch),
                Err(ApiError::Validation(_))
            ));
            assert_eq!(get(conn, state.id.unwrap())?.color, "#123456");
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn update_keeps_omitted_fields() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let state = create(conn, RequestState::new("Review", "#8b5cf6", Some("Under review")))?;
            let id = state.id.unwrap();
            update(conn, id, RequestStatePatch { color: Some("#0ea5e9".into()), ..Default::default() })?;

            let read = get(conn, id)?;
            assert_eq!(read.name, "Review");
            assert_eq!(read.color, "#0ea5e9");
            assert_eq!(read.description.as_deref(), Some("Under review"));

            update(conn, id, RequestStatePatch { description: Some(None), ..Default::default() })?;
            assert_eq!(get(conn, id)?.description, None);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn second_delete_is_not_found() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let state = create(conn, RequestState::new("Gone", "#6b7280", None))?;
            let id = state.id.unwrap();
            delete(conn, id)?;
            assert!(matches!(delete(conn, id), Err(ApiError::NotFound(_))));
            assert!(!exists(conn, id)?);
            Ok(())
        })
        .unwrap();
    }
}
