//! Routes used by the feedback submission workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{feedback, reference};
use crate::state::AppState;

/// Public routes merged at the `/api` root.
///
/// ```text
/// GET    /divisions         -> list_divisions
/// GET    /venues            -> list_venues
/// POST   /submit-feedback   -> submit_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/divisions", get(reference::list_divisions))
        .route("/venues", get(reference::list_venues))
        .route("/submit-feedback", post(feedback::submit_feedback))
}
