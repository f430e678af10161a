pub mod admin;
pub mod health;
pub mod leaderboard;
pub mod signup;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                          WebSocket live feed
///
/// /signups                     list (GET), create (POST)
///
/// /leaderboard                 ranked city aggregates (GET)
///
/// /admin/reset                 destructive bulk reset (POST)
/// /admin/signups/export        CSV download (GET, ?enrich=true)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket live feed.
        .route("/ws", get(ws::ws_handler))
        // Signup pipeline and raw listing.
        .nest("/signups", signup::router())
        // City leaderboard.
        .nest("/leaderboard", leaderboard::router())
        // Administrative controls, not linked from the public form.
        .nest("/admin", admin::router())
}
