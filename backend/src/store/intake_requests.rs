//! Intake requests are written once by the submission form and afterwards only
//! change through their state assignments.

use chrono::Utc;
use common::model::{IntakeRequest, NewIntakeRequest};
use common::validation::validate_submission;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{ApiError, ApiResult};

const SELECT: &str = "SELECT id, title, description, has_it_partner, dri_contact, submitted_for, \
    functional_area, platform, help_types, additional_details, created_at, updated_at \
    FROM intake_requests";

fn from_row(row: &Row) -> rusqlite::Result<IntakeRequest> {
    Ok(IntakeRequest {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        has_it_partner: row.get("has_it_partner")?,
        dri_contact: row.get("dri_contact")?,
        submitted_for: row.get("submitted_for")?,
        functional_area: row.get("functional_area")?,
        platform: row.get("platform")?,
        help_types: row.get("help_types")?,
        additional_details: row.get("additional_details")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Intake request {id}"))
}

pub fn exists(conn: &Connection, id: i64) -> ApiResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM intake_requests WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Stores a submission. Help types and details are normalised first so the
/// stored details only carry keys of the selected help types.
pub fn create(conn: &Connection, submission: NewIntakeRequest) -> ApiResult<IntakeRequest> {
    validate_submission(&submission)?;
    let submission = submission.normalized();
    let now = Utc::now();

    conn.execute(
        "INSERT INTO intake_requests (title, description, has_it_partner, dri_contact, submitted_for, \
         functional_area, platform, help_types, additional_details, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            submission.title,
            submission.description,
            submission.has_it_partner,
            submission.dri_contact,
            submission.submitted_for,
            submission.functional_area,
            submission.platform,
            submission.help_types,
            submission.additional_details,
            now,
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!("Stored intake request {id}: {}", submission.title);

    Ok(IntakeRequest {
        id,
        title: submission.title,
        description: submission.description,
        has_it_partner: submission.has_it_partner,
        dri_contact: submission.dri_contact,
        submitted_for: submission.submitted_for,
        functional_area: submission.functional_area,
        platform: submission.platform,
        help_types: submission.help_types,
        additional_details: submission.additional_details,
        created_at: Some(now),
        updated_at: Some(now),
    })
}

pub fn get(conn: &Connection, id: i64) -> ApiResult<IntakeRequest> {
    conn.query_row(&format!("{SELECT} WHERE id = ?1"), params![id], from_row)
        .optional()?
        .ok_or_else(|| not_found(id))
}

/// Newest submissions first.
pub fn list(conn: &Connection) -> ApiResult<Vec<IntakeRequest>> {
    let mut stmt = conn.prepare(&format!("{SELECT} ORDER BY id DESC"))?;
    let requests = stmt
        .query_map([], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(requests)
}

pub fn delete(conn: &mut Connection, id: i64) -> ApiResult<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "DELETE FROM request_state_assignments WHERE request_id = ?1",
        params![id],
    )?;
    let removed = tx.execute("DELETE FROM intake_requests WHERE id = ?1", params![id])?;
    if removed == 0 {
        return Err(not_found(id));
    }
    tx.commit()?;
    info!("Deleted intake request {id}");
    Ok(())
}
