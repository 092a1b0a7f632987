use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use feedback_db::models::reference::ReferenceKind;
use feedback_db::repositories::ReferenceRepo;
use serde::Serialize;

use crate::state::AppState;

/// Whether testers can currently submit feedback.
///
/// The form needs at least one division and one venue to choose from, so
/// the lookup tables are counted rather than just pinging the database.
#[derive(Debug, Serialize)]
pub struct FeedbackReadiness {
    /// `ok`, `degraded` (a lookup list is empty) or `unavailable`.
    pub status: &'static str,
    pub accepting_feedback: bool,
    pub divisions: Option<i64>,
    pub venues: Option<i64>,
}

/// GET /health
///
/// 200 while the lookup tables can be read, 503 otherwise.
async fn feedback_readiness(State(state): State<AppState>) -> (StatusCode, Json<FeedbackReadiness>) {
    let counts = futures::future::try_join(
        ReferenceRepo::count(&state.pool, ReferenceKind::Division),
        ReferenceRepo::count(&state.pool, ReferenceKind::Venue),
    )
    .await;

    match counts {
        Ok((divisions, venues)) => {
            let accepting_feedback = divisions > 0 && venues > 0;
            let status = if accepting_feedback { "ok" } else { "degraded" };
            (
                StatusCode::OK,
                Json(FeedbackReadiness {
                    status,
                    accepting_feedback,
                    divisions: Some(divisions),
                    venues: Some(venues),
                }),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Lookup tables unreadable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(FeedbackReadiness {
                    status: "unavailable",
                    accepting_feedback: false,
                    divisions: None,
                    venues: None,
                }),
            )
        }
    }
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(feedback_readiness))
}
