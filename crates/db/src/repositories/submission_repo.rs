//! Repository for the `submissions` table.

use premiere_core::submission::{NewSubmission, Submission};
use sqlx::PgPool;

use crate::models::submission::SubmissionRow;

/// Column list for `submissions` queries.
const SUBMISSION_COLUMNS: &str =
    "id, name, email, postal_code, city, region, lat, lon, created_at";

/// Read/write operations for signup submissions.
///
/// All writes are inserts; rows are never updated in place. `id` and
/// `created_at` are assigned by PostgreSQL inside the insert, so
/// concurrent creates cannot race on either.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a validated, geo-resolved signup and return the persisted
    /// record with its server-assigned id and timestamp.
    pub async fn create(pool: &PgPool, new: &NewSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (name, email, postal_code, city, region, lat, lon) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SUBMISSION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SubmissionRow>(&query)
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.postal_code)
            .bind(&new.city)
            .bind(&new.region)
            .bind(new.lat)
            .bind(new.lon)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// List all submissions newest-first (`created_at` descending, id
    /// descending as the tiebreak).
    pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, SubmissionRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Total number of submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
            .fetch_one(pool)
            .await
    }

    /// Administrative bulk reset: delete every submission. Returns the
    /// number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
