//! Admin handlers for committed feedback sessions.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use feedback_core::error::CoreError;
use feedback_core::submission::FeedbackSubmission;
use feedback_core::types::DbId;
use feedback_db::models::feedback_session::FeedbackSessionDetail;
use feedback_db::repositories::FeedbackSessionRepo;
use feedback_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::feedback::check_submission;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "FeedbackSession";

/// GET /api/admin/feedback-sessions
///
/// All sessions, newest first, with division/venue names and response counts.
pub async fn list_sessions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sessions = FeedbackSessionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /api/admin/feedback-sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = load_detail(&state.pool, id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/admin/feedback-sessions/{id}
///
/// Replace the session fields and its response list. Responses with an `id`
/// are updated in place, responses without one are inserted, and stored
/// responses missing from the body are removed. Aggregates are recomputed.
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FeedbackSubmission>,
) -> AppResult<impl IntoResponse> {
    let scores = check_submission(&state.pool, &input).await?;

    if FeedbackSessionRepo::find_summary_by_id(&state.pool, id)
        .await?
        .is_none()
    {
        return Err(not_found(id));
    }

    let owned: HashSet<DbId> = FeedbackSessionRepo::list_responses(&state.pool, id)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();
    let mut seen = HashSet::new();
    for response_id in input.responses.iter().filter_map(|r| r.id) {
        if !owned.contains(&response_id) {
            return Err(AppError::BadRequest(format!(
                "Response {response_id} does not belong to feedback session {id}"
            )));
        }
        if !seen.insert(response_id) {
            return Err(AppError::BadRequest(format!(
                "Response {response_id} appears more than once"
            )));
        }
    }

    FeedbackSessionRepo::update(&state.pool, id, &input, &scores)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        session_id = id,
        responses = input.responses.len(),
        total_score = scores.total,
        "Feedback session updated",
    );

    let detail = load_detail(&state.pool, id).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/admin/feedback-sessions/{id}
///
/// Responses are removed with the session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FeedbackSessionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(session_id = id, "Feedback session deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn load_detail(pool: &DbPool, id: DbId) -> AppResult<FeedbackSessionDetail> {
    let session = FeedbackSessionRepo::find_summary_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let responses = FeedbackSessionRepo::list_responses(pool, id).await?;
    Ok(FeedbackSessionDetail { session, responses })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
