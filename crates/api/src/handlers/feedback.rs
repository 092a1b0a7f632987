//! Handler for committing a reviewed feedback session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use feedback_core::error::CoreError;
use feedback_core::submission::{FeedbackSubmission, ScoreSummary};
use feedback_core::types::DbId;
use feedback_db::models::reference::ReferenceKind;
use feedback_db::repositories::{FeedbackSessionRepo, ReferenceRepo};
use feedback_db::DbPool;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Message returned with every successful submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Feedback submitted successfully";

/// Payload of a successful `POST /api/submit-feedback`.
#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    pub session_id: DbId,
    pub message: &'static str,
}

/// POST /api/submit-feedback
///
/// Persist one session with all of its responses. The body is the review
/// snapshot produced by the confirmation step.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(input): Json<FeedbackSubmission>,
) -> AppResult<impl IntoResponse> {
    let scores = check_submission(&state.pool, &input).await?;
    let session = FeedbackSessionRepo::create(&state.pool, &input, &scores).await?;

    tracing::info!(
        session_id = session.id,
        division_id = session.division_id,
        venue_id = session.venue_id,
        responses = input.responses.len(),
        total_score = session.total_score,
        "Feedback session created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmitFeedbackResponse {
                session_id: session.id,
                message: SUBMIT_SUCCESS_MESSAGE,
            },
        }),
    ))
}

/// Validate a submission and compute its session aggregates.
///
/// Field rules come from the `Validate` derive; the referenced division and
/// venue must exist.
pub(crate) async fn check_submission(
    pool: &DbPool,
    input: &FeedbackSubmission,
) -> AppResult<ScoreSummary> {
    input.validate()?;

    for (kind, id) in [
        (ReferenceKind::Division, input.division_id),
        (ReferenceKind::Venue, input.venue_id),
    ] {
        if !ReferenceRepo::exists(pool, kind, id).await? {
            return Err(AppError::BadRequest(format!(
                "{} {id} does not exist",
                kind.entity()
            )));
        }
    }

    input.score_summary().ok_or(AppError::Core(CoreError::Validation(
        "responses: at least one response is required".into(),
    )))
}
