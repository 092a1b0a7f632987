//! Feedback session and response rows.

use feedback_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `feedback_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackSession {
    pub id: DbId,
    pub tester_name: String,
    pub division_id: DbId,
    pub venue_id: DbId,
    pub session_datetime: Timestamp,
    pub accuracy_score: f64,
    pub relevancy_score: f64,
    pub performance_score: f64,
    pub total_score: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A session joined with its division/venue names and response count,
/// as shown in the admin list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackSessionSummary {
    pub id: DbId,
    pub tester_name: String,
    pub division_id: DbId,
    pub division_name: String,
    pub venue_id: DbId,
    pub venue_name: String,
    pub session_datetime: Timestamp,
    pub accuracy_score: f64,
    pub relevancy_score: f64,
    pub performance_score: f64,
    pub total_score: f64,
    pub response_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `feedback_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedbackResponse {
    pub id: DbId,
    pub session_id: DbId,
    /// 0-based order within the session.
    pub position: i32,
    pub question: String,
    pub chatbot_answer: String,
    pub accuracy_score: i16,
    pub relevancy_score: i16,
    pub performance_score: i16,
    pub additional_comments: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Session summary plus its ordered responses (admin detail view).
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackSessionDetail {
    #[serde(flatten)]
    pub session: FeedbackSessionSummary,
    pub responses: Vec<FeedbackResponse>,
}
