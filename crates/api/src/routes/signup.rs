//! Route definitions for the `/signups` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::signup;
use crate::state::AppState;

/// Routes mounted at `/signups`.
///
/// ```text
/// GET  /  -> list_signups
/// POST /  -> create_signup
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(signup::list_signups).post(signup::create_signup))
}
