//! Repository for `feedback_sessions` and their `feedback_responses`.
//!
//! A session and its responses are always written together inside one
//! transaction, so a session row never exists without its responses.

use feedback_core::submission::{FeedbackSubmission, ScoreSummary, SubmittedResponse};
use feedback_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::feedback_session::{FeedbackResponse, FeedbackSession, FeedbackSessionSummary};

/// Column list for `feedback_sessions` queries.
const SESSION_COLUMNS: &str = "\
    id, tester_name, division_id, venue_id, session_datetime, \
    accuracy_score, relevancy_score, performance_score, total_score, \
    created_at, updated_at";

/// Column list for `feedback_responses` queries.
const RESPONSE_COLUMNS: &str = "\
    id, session_id, position, question, chatbot_answer, \
    accuracy_score, relevancy_score, performance_score, additional_comments, \
    created_at, updated_at";

/// Joined select used by the admin list and detail views.
const SUMMARY_SELECT: &str = "\
    SELECT fs.id, fs.tester_name, \
           fs.division_id, d.name AS division_name, \
           fs.venue_id, v.name AS venue_name, \
           fs.session_datetime, fs.accuracy_score, fs.relevancy_score, \
           fs.performance_score, fs.total_score, \
           (SELECT COUNT(*) FROM feedback_responses fr WHERE fr.session_id = fs.id) \
               AS response_count, \
           fs.created_at, fs.updated_at \
    FROM feedback_sessions fs \
    JOIN divisions d ON d.id = fs.division_id \
    JOIN venues v ON v.id = fs.venue_id";

/// Provides persistence for committed feedback sessions.
pub struct FeedbackSessionRepo;

impl FeedbackSessionRepo {
    /// Persist a new session and all of its responses in one transaction.
    ///
    /// Response order is taken from the submission order.
    pub async fn create(
        pool: &PgPool,
        input: &FeedbackSubmission,
        scores: &ScoreSummary,
    ) -> Result<FeedbackSession, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO feedback_sessions
                (tester_name, division_id, venue_id, session_datetime,
                 accuracy_score, relevancy_score, performance_score, total_score)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {SESSION_COLUMNS}"
        );
        let session = sqlx::query_as::<_, FeedbackSession>(&query)
            .bind(input.tester_name.trim())
            .bind(input.division_id)
            .bind(input.venue_id)
            .bind(input.session_datetime)
            .bind(scores.accuracy)
            .bind(scores.relevancy)
            .bind(scores.performance)
            .bind(scores.total)
            .fetch_one(&mut *tx)
            .await?;

        for (position, response) in input.responses.iter().enumerate() {
            insert_response(&mut tx, session.id, position as i32, response).await?;
        }

        tx.commit().await?;
        tracing::debug!(
            session_id = session.id,
            responses = input.responses.len(),
            "Feedback session rows written",
        );
        Ok(session)
    }

    /// List all sessions, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FeedbackSessionSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY fs.created_at DESC, fs.id DESC");
        sqlx::query_as::<_, FeedbackSessionSummary>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FeedbackSessionSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE fs.id = $1");
        sqlx::query_as::<_, FeedbackSessionSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Responses of a session in display order.
    pub async fn list_responses(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<FeedbackResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {RESPONSE_COLUMNS} FROM feedback_responses
             WHERE session_id = $1
             ORDER BY position, id"
        );
        sqlx::query_as::<_, FeedbackResponse>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a session's fields and response list.
    ///
    /// Responses carrying an `id` update that row in place; responses
    /// without one are inserted; stored responses absent from the input are
    /// deleted. Positions follow the input order. Returns `None` if the
    /// session does not exist. Callers must ensure every given response `id`
    /// belongs to this session.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FeedbackSubmission,
        scores: &ScoreSummary,
    ) -> Result<Option<FeedbackSession>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE feedback_sessions SET
                tester_name = $2, division_id = $3, venue_id = $4, session_datetime = $5,
                accuracy_score = $6, relevancy_score = $7, performance_score = $8,
                total_score = $9
             WHERE id = $1
             RETURNING {SESSION_COLUMNS}"
        );
        let Some(session) = sqlx::query_as::<_, FeedbackSession>(&query)
            .bind(id)
            .bind(input.tester_name.trim())
            .bind(input.division_id)
            .bind(input.venue_id)
            .bind(input.session_datetime)
            .bind(scores.accuracy)
            .bind(scores.relevancy)
            .bind(scores.performance)
            .bind(scores.total)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let kept: Vec<DbId> = input.responses.iter().filter_map(|r| r.id).collect();
        sqlx::query("DELETE FROM feedback_responses WHERE session_id = $1 AND id <> ALL($2)")
            .bind(id)
            .bind(&kept)
            .execute(&mut *tx)
            .await?;

        for (position, response) in input.responses.iter().enumerate() {
            let position = position as i32;
            match response.id {
                Some(response_id) => {
                    sqlx::query(
                        "UPDATE feedback_responses SET
                            position = $3, question = $4, chatbot_answer = $5,
                            accuracy_score = $6, relevancy_score = $7,
                            performance_score = $8, additional_comments = $9
                         WHERE id = $1 AND session_id = $2",
                    )
                    .bind(response_id)
                    .bind(id)
                    .bind(position)
                    .bind(&response.question)
                    .bind(&response.chatbot_answer)
                    .bind(response.accuracy_score)
                    .bind(response.relevancy_score)
                    .bind(response.performance_score)
                    .bind(&response.additional_comments)
                    .execute(&mut *tx)
                    .await?;
                }
                None => insert_response(&mut tx, id, position, response).await?,
            }
        }

        tx.commit().await?;
        Ok(Some(session))
    }

    /// Delete a session. Its responses go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn insert_response(
    tx: &mut Transaction<'_, Postgres>,
    session_id: DbId,
    position: i32,
    response: &SubmittedResponse,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO feedback_responses
            (session_id, position, question, chatbot_answer,
             accuracy_score, relevancy_score, performance_score, additional_comments)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(session_id)
    .bind(position)
    .bind(&response.question)
    .bind(&response.chatbot_answer)
    .bind(response.accuracy_score)
    .bind(response.relevancy_score)
    .bind(response.performance_score)
    .bind(&response.additional_comments)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
