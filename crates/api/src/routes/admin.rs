//! Admin route definitions, mounted at `/admin`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{feedback_session, reference};
use crate::state::AppState;

/// ```text
/// GET    /divisions                  -> admin_list_divisions
/// POST   /divisions                  -> create_division
/// GET    /divisions/{id}             -> get_division
/// PUT    /divisions/{id}             -> rename_division
/// DELETE /divisions/{id}             -> delete_division
///
/// GET    /venues                     -> admin_list_venues
/// POST   /venues                     -> create_venue
/// GET    /venues/{id}                -> get_venue
/// PUT    /venues/{id}                -> rename_venue
/// DELETE /venues/{id}                -> delete_venue
///
/// GET    /feedback-sessions          -> list_sessions
/// GET    /feedback-sessions/{id}     -> get_session
/// PUT    /feedback-sessions/{id}     -> update_session
/// DELETE /feedback-sessions/{id}     -> delete_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/divisions",
            get(reference::admin_list_divisions).post(reference::create_division),
        )
        .route(
            "/divisions/{id}",
            get(reference::get_division)
                .put(reference::rename_division)
                .delete(reference::delete_division),
        )
        .route(
            "/venues",
            get(reference::admin_list_venues).post(reference::create_venue),
        )
        .route(
            "/venues/{id}",
            get(reference::get_venue)
                .put(reference::rename_venue)
                .delete(reference::delete_venue),
        )
        .route("/feedback-sessions", get(feedback_session::list_sessions))
        .route(
            "/feedback-sessions/{id}",
            get(feedback_session::get_session)
                .put(feedback_session::update_session)
                .delete(feedback_session::delete_session),
        )
}
