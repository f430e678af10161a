//! Row model for the `submissions` table.

use premiere_core::submission::Submission;
use premiere_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `submissions` table.
///
/// Converted into the domain [`Submission`] at the repository boundary
/// so the rest of the system never depends on sqlx.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub postal_code: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub created_at: Timestamp,
}

impl From<SubmissionRow> for Submission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            postal_code: row.postal_code,
            city: row.city,
            region: row.region,
            lat: row.lat,
            lon: row.lon,
            created_at: row.created_at,
        }
    }
}
