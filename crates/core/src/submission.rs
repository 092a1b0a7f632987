//! Server-side submission payloads and session score aggregation.
//!
//! The confirmation page posts the review snapshot as JSON; the API accepts
//! it as a [`FeedbackSubmission`] and validates it again before persisting,
//! since the payload may not come from our client at all.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// A complete feedback session as submitted (and as updated by admins).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackSubmission {
    #[validate(custom(function = "not_blank"))]
    pub tester_name: String,
    pub division_id: DbId,
    pub venue_id: DbId,
    pub session_datetime: Timestamp,
    #[validate(length(min = 1, max = 10), nested)]
    pub responses: Vec<SubmittedResponse>,
}

/// One response inside a [`FeedbackSubmission`]. Bounds mirror
/// `response_set::MAX_RESPONSES` and `score::MAX_SCORE`.
///
/// `id` is only meaningful on admin updates: present means "update that
/// row", absent means "insert a new one".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmittedResponse {
    #[serde(default)]
    pub id: Option<DbId>,
    #[validate(custom(function = "not_blank"))]
    pub question: String,
    #[validate(custom(function = "not_blank"))]
    pub chatbot_answer: String,
    #[validate(range(min = 1, max = 5))]
    pub accuracy_score: i16,
    #[validate(range(min = 1, max = 5))]
    pub relevancy_score: i16,
    #[validate(range(min = 1, max = 5))]
    pub performance_score: i16,
    #[serde(default)]
    pub additional_comments: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    Ok(())
}

impl FeedbackSubmission {
    pub fn score_summary(&self) -> Option<ScoreSummary> {
        ScoreSummary::from_triples(
            self.responses
                .iter()
                .map(|r| (r.accuracy_score, r.relevancy_score, r.performance_score)),
        )
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Session-level averages stored alongside each feedback session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub accuracy: f64,
    pub relevancy: f64,
    pub performance: f64,
    /// Mean of the three per-dimension means.
    pub total: f64,
}

impl ScoreSummary {
    /// Average `(accuracy, relevancy, performance)` triples.
    ///
    /// Returns `None` for an empty input.
    pub fn from_triples(scores: impl IntoIterator<Item = (i16, i16, i16)>) -> Option<Self> {
        let mut count = 0u32;
        let (mut acc, mut rel, mut perf) = (0.0, 0.0, 0.0);
        for (a, r, p) in scores {
            count += 1;
            acc += f64::from(a);
            rel += f64::from(r);
            perf += f64::from(p);
        }
        if count == 0 {
            return None;
        }
        let n = f64::from(count);
        let (accuracy, relevancy, performance) = (acc / n, rel / n, perf / n);
        Some(Self {
            accuracy,
            relevancy,
            performance,
            total: (accuracy + relevancy + performance) / 3.0,
        })
    }
}
