//! Administrative handlers: bulk reset and CSV export.
//!
//! These sit behind the admin route tree and are never reachable from
//! the public signup form.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use premiere_core::export;
use premiere_core::submission::Submission;
use premiere_db::SubmissionRepo;
use premiere_events::SignupEvent;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/reset
///
/// Destructive bulk delete of every submission. Clears the store and
/// the live board, then broadcasts a reset event so connected clients
/// drop their local views too. Returns the number of rows removed.
pub async fn reset_all(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let deleted = SubmissionRepo::delete_all(&state.pool).await?;

    state.live_board.clear().await;
    state.event_bus.publish(SignupEvent::Reset);

    tracing::warn!(deleted, "All submissions reset by administrator");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": deleted }),
    }))
}

/// Upper bound on total enrichment work per export request. Keeps an
/// export with many unresolvable rows well inside the request timeout;
/// rows not reached in time export with blank place fields.
const ENRICH_BUDGET: Duration = Duration::from_secs(10);

/// Query parameters for the CSV export.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Re-resolve missing places via the relaxed batch resolver before
    /// formatting. Read-only: stored rows are never modified.
    pub enrich: Option<bool>,
}

/// GET /api/v1/admin/signups/export
///
/// Download the full submission list as CSV. With `?enrich=true`, rows
/// whose city is missing are run through the relaxed resolver first;
/// rows it cannot resolve keep their blank place fields. An empty
/// store answers 204 with no body.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> AppResult<Response> {
    let mut submissions = SubmissionRepo::list(&state.pool).await?;

    if params.enrich.unwrap_or(false) {
        // Rows enriched before the budget elapses keep their values.
        let enrich = enrich_missing_places(&state, &mut submissions);
        if tokio::time::timeout(ENRICH_BUDGET, enrich).await.is_err() {
            tracing::warn!("Export enrichment stopped at its time budget");
        }
    }

    let csv = export::to_csv(&submissions);
    if csv.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"signups.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Fill in missing place fields on the in-memory copies using the
/// relaxed resolver. Misses are left blank rather than failing the
/// export.
async fn enrich_missing_places(state: &AppState, submissions: &mut [Submission]) {
    for submission in submissions.iter_mut() {
        let missing = submission
            .city
            .as_deref()
            .is_none_or(|c| c.trim().is_empty());
        if !missing {
            continue;
        }

        if let Some(place) = state.geocode.resolve_relaxed(&submission.postal_code).await {
            tracing::debug!(
                id = submission.id,
                city = %place.city,
                "Enriched missing place for export"
            );
            submission.city = Some(place.city);
            submission.region = Some(place.region);
            submission.lat = place.lat;
            submission.lon = place.lon;
        }
    }
}
