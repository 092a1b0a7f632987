pub mod admin;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /divisions                                list divisions (form options)
/// /venues                                   list venues (form options)
/// /submit-feedback                          commit a reviewed session (POST)
///
/// /admin/divisions                          list, create
/// /admin/divisions/{id}                     get, rename, delete
/// /admin/venues                             list, create
/// /admin/venues/{id}                        get, rename, delete
/// /admin/feedback-sessions                  list
/// /admin/feedback-sessions/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public submission workflow.
        .merge(feedback::router())
        // Lookup table and session management.
        .nest("/admin", admin::router())
}
