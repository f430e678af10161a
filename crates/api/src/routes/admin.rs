//! Route definitions for the administrative controls.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /reset           -> reset_all
/// GET  /signups/export  -> export_csv (?enrich=true)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reset", post(admin::reset_all))
        .route("/signups/export", get(admin::export_csv))
}
