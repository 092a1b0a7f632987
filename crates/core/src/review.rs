//! Read-only reconstruction of a draft on the confirmation page.

use serde::{Deserialize, Serialize};

use crate::response_set::ResponseSet;
use crate::submission::ScoreSummary;
use crate::types::DbId;

/// A decoded draft as shown for review and sent on confirm.
///
/// `session_datetime` is the text produced when the draft was encoded. It is
/// displayed verbatim and forwarded verbatim; the server parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    pub tester_name: String,
    pub division_id: DbId,
    pub venue_id: DbId,
    pub session_datetime: String,
    pub responses: ResponseSet,
}

impl ReviewSnapshot {
    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    /// Averages the server will store for this submission.
    pub fn score_summary(&self) -> Option<ScoreSummary> {
        ScoreSummary::from_triples(self.responses.iter().map(|r| {
            (
                i16::from(r.accuracy_score.value()),
                i16::from(r.relevancy_score.value()),
                i16::from(r.performance_score.value()),
            )
        }))
    }

    /// Plain-text echo of every field, one line each.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Tester Name: {}", self.tester_name),
            format!("Division ID: {}", self.division_id),
            format!("Venue ID: {}", self.venue_id),
            format!("Session Date/Time: {}", self.session_datetime),
            "Responses:".to_string(),
        ];
        for (number, r) in self.responses.numbered() {
            lines.push(format!("Question {number}: {}", r.question));
            lines.push(format!("Answer: {}", r.chatbot_answer));
            lines.push(format!("Accuracy Score: {}", r.accuracy_score));
            lines.push(format!("Relevancy Score: {}", r.relevancy_score));
            lines.push(format!("Performance Score: {}", r.performance_score));
            lines.push(format!("Additional Comments: {}", r.additional_comments));
        }
        lines
    }
}
