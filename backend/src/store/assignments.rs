//! The set of `(request, state)` pairs behind the triage board.
//!
//! The composite primary key on `request_state_assignments` gives the relation
//! set semantics, so assigning twice is a no-op rather than a duplicate row.
//! Listing joins the live `request_states` rows; a renamed or recoloured state
//! shows up with its current values everywhere it is assigned.

use common::model::RequestState;
use log::{debug, info};
use rusqlite::{params, Connection};

use crate::error::{ApiError, ApiResult};
use crate::store::{intake_requests, request_states};

/// States attached to `request_id`, in the order they were assigned.
/// Unknown requests have no states.
pub fn list_states(conn: &Connection, request_id: i64) -> ApiResult<Vec<RequestState>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name, s.color, s.description \
         FROM request_state_assignments a \
         JOIN request_states s ON s.id = a.state_id \
         WHERE a.request_id = ?1 \
         ORDER BY a.rowid",
    )?;
    let states = stmt
        .query_map(params![request_id], |row| {
            Ok(RequestState {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
                description: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(states)
}

pub fn assign(conn: &Connection, request_id: i64, state_id: i64) -> ApiResult<()> {
    if !intake_requests::exists(conn, request_id)? {
        return Err(ApiError::not_found(format!("Intake request {request_id}")));
    }
    if !request_states::exists(conn, state_id)? {
        return Err(ApiError::not_found(format!("Request state {state_id}")));
    }

    let inserted = conn.execute(
        "INSERT OR IGNORE INTO request_state_assignments (request_id, state_id) VALUES (?1, ?2)",
        params![request_id, state_id],
    )?;
    if inserted == 0 {
        debug!("State {state_id} already assigned to request {request_id}");
    } else {
        info!("Assigned state {state_id} to request {request_id}");
    }
    Ok(())
}

/// Removes the pair if present. Missing pairs and unknown ids are not errors.
pub fn unassign(conn: &Connection, request_id: i64, state_id: i64) -> ApiResult<()> {
    let removed = conn.execute(
        "DELETE FROM request_state_assignments WHERE request_id = ?1 AND state_id = ?2",
        params![request_id, state_id],
    )?;
    if removed > 0 {
        info!("Unassigned state {state_id} from request {request_id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Db;
    use common::model::{NewIntakeRequest, RequestStatePatch};

    fn new_request(conn: &Connection, title: &str) -> ApiResult<i64> {
        let request = intake_requests::create(
            conn,
            NewIntakeRequest {
                title: title.into(),
                help_types: r#"["build"]"#.into(),
                ..Default::default()
            },
        )?;
        Ok(request.id)
    }

    fn new_state(conn: &Connection, name: &str, color: &str) -> ApiResult<i64> {
        let state = request_states::create(conn, RequestState::new(name, color, None))?;
        state.id.ok_or_else(|| ApiError::not_found(name))
    }

    fn state_ids(conn: &Connection, request_id: i64) -> Vec<i64> {
        list_states(conn, request_id)
            .unwrap()
            .into_iter()
            .filter_map(|s| s.id)
            .collect()
    }

    #[test]
    fn assigned_state_appears_once() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let state = new_state(conn, "Blocked", "#ef4444")?;
            assign(conn, request, state)?;
            assert_eq!(state_ids(conn, request), vec![state]);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn assign_is_idempotent() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let state = new_state(conn, "New", "#3b82f6")?;
            assign(conn, request, state)?;
            let once = list_states(conn, request)?;
            assign(conn, request, state)?;
            assert_eq!(list_states(conn, request)?, once);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn unassigning_absent_pair_is_harmless() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let kept = new_state(conn, "In Review", "#8b5cf6")?;
            let never = new_state(conn, "Rejected", "#6b7280")?;
            assign(conn, request, kept)?;

            unassign(conn, request, never)?;
            unassign(conn, 9_999, never)?;
            assert_eq!(state_ids(conn, request), vec![kept]);

            unassign(conn, request, kept)?;
            assert!(state_ids(conn, request).is_empty());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn assign_checks_both_ids() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let state = new_state(conn, "New", "#3b82f6")?;
            assert!(matches!(assign(conn, 9_999, state), Err(ApiError::NotFound(_))));
            assert!(matches!(assign(conn, request, 9_999), Err(ApiError::NotFound(_))));
            assert!(state_ids(conn, request).is_empty());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn unknown_request_lists_nothing() {
        let db = Db::open_in_memory().unwrap();
        let states = db.with(|conn| list_states(conn, 12_345)).unwrap();
        assert!(states.is_empty());
    }

    #[test]
    fn states_keep_assignment_order() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let a = new_state(conn, "A", "#000001")?;
            let b = new_state(conn, "B", "#000002")?;
            let c = new_state(conn, "C", "#000003")?;
            for state in [c, a, b] {
                assign(conn, request, state)?;
            }
            assert_eq!(state_ids(conn, request), vec![c, a, b]);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn deleting_state_clears_it_everywhere() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let r1 = new_request(conn, "one")?;
            let r2 = new_request(conn, "two")?;
            let doomed = new_state(conn, "Obsolete", "#111111")?;
            let other = new_state(conn, "Kept", "#222222")?;
            for request in [r1, r2] {
                assign(conn, request, doomed)?;
                assign(conn, request, other)?;
            }

            request_states::delete(conn, doomed)?;
            assert_eq!(state_ids(conn, r1), vec![other]);
            assert_eq!(state_ids(conn, r2), vec![other]);

            let orphans: i64 = conn.query_row(
                "SELECT COUNT(*) FROM request_state_assignments WHERE state_id = ?1",
                params![doomed],
                |row| row.get(0),
            )?;
            assert_eq!(orphans, 0);
            assert!(matches!(
                request_states::delete(conn, doomed),
                Err(ApiError::NotFound(_))
            ));
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn deleting_request_drops_its_assignments() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            let request = new_request(conn, "r")?;
            let state = new_state(conn, "New", "#3b82f6")?;
            assign(conn, request, state)?;
            intake_requests::delete(conn, request)?;
            assert!(list_states(conn, request)?.is_empty());
            assert!(request_states::exists(conn, state)?);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn listing_reflects_live_state_data() {
        let db = Db::open_in_memory().unwrap();
        db.with(|conn| {
            for n in 1..=42 {
                new_request(conn, &format!("request {n}"))?;
            }
            let state = new_state(conn, "Pending Approval", "#3b82f6")?;
            assign(conn, 42, state)?;

            let listed = list_states(conn, 42)?;
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].name, "Pending Approval");
            assert_eq!(listed[0].color, "#3b82f6");

            let patch = RequestStatePatch {
                name: Some("Approved".into()),
                color: Some("#10b981".into()),
                ..Default::default()
            };
            request_states::update(conn, state, patch)?;
            let listed = list_states(conn, 42)?;
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].name, "Approved");
            assert_eq!(listed[0].color, "#10b981");
            Ok(())
        })
        .unwrap();
    }
}
