//! Handlers for the `/signups` resource: the signup pipeline itself
//! plus the raw listing that backs the map and "latest signups" views.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use premiere_core::signup::{self, RawSignupForm};
use premiere_core::submission::{NewSubmission, Submission};
use premiere_db::SubmissionRepo;
use premiere_events::SignupEvent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/signups
///
/// The full pipeline: validate → resolve → persist → merge → fan out.
///
/// Each stage short-circuits with its own error class: validation
/// failures answer 400 before any network call, an unresolvable postal
/// code answers 422, a failed insert answers 500. On success the
/// persisted record (server-assigned `id` and `created_at` included)
/// is merged into the live board and published on the event bus; the
/// WebSocket echo of the same record is deduplicated by id.
pub async fn create_signup(
    State(state): State<AppState>,
    Json(form): Json<RawSignupForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Submission>>)> {
    let validated = signup::validate(&form)?;

    let place = state.geocode.resolve(&validated.postal_code).await?;

    let new = NewSubmission {
        name: validated.name,
        email: validated.email,
        postal_code: validated.postal_code,
        city: Some(place.city),
        region: Some(place.region),
        lat: place.lat,
        lon: place.lon,
    };
    let submission = SubmissionRepo::create(&state.pool, &new).await?;

    // Optimistic merge before the fanout echo arrives.
    state.live_board.merge(submission.clone()).await;
    state.event_bus.publish(SignupEvent::Created(submission.clone()));

    tracing::info!(
        id = submission.id,
        city = submission.city.as_deref().unwrap_or(""),
        "Signup created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/signups
///
/// List all submissions newest-first, straight from the store.
pub async fn list_signups(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let submissions = SubmissionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: submissions }))
}
