//! Hand-off of a draft from the submission page to the confirmation page.
//!
//! The draft travels as JSON in a single navigation parameter. The
//! confirmation side decodes it into a [`ReviewSnapshot`]; the session time
//! arrives as the RFC 3339 text it was serialized to and stays text.

use crate::draft::FeedbackDraft;
use crate::review::ReviewSnapshot;

/// Query parameter carrying the encoded draft.
pub const TRANSFER_PARAM: &str = "formData";

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Failed to encode draft: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Malformed transfer payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize a draft into the transfer payload.
pub fn encode(draft: &FeedbackDraft) -> Result<String, TransferError> {
    serde_json::to_string(draft).map_err(TransferError::Encode)
}

/// Rebuild a review snapshot from a transfer payload.
///
/// Any structural problem (bad JSON, unselected division, empty or oversized
/// response list, out-of-range score) is a decode error.
pub fn decode(payload: &str) -> Result<ReviewSnapshot, TransferError> {
    serde_json::from_str(payload).map_err(TransferError::Decode)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::response_set::ResponseField;
    use crate::score::Score;
    use crate::types::Timestamp;

    fn at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2024, 6, 1, 14, 5, 9).unwrap()
    }

    fn draft() -> FeedbackDraft {
        let mut draft = FeedbackDraft::new(at());
        draft.set_tester_name("Lee");
        draft.select_division(Some(4));
        draft.select_venue(Some(9));
        draft.update_response(0, ResponseField::Question("Where is gate B?".into()));
        draft.update_response(0, ResponseField::ChatbotAnswer("Level 2".into()));
        draft.add_response();
        draft.update_response(1, ResponseField::Question("Wifi \"password\"?".into()));
        draft.update_response(1, ResponseField::ChatbotAnswer("Ask the desk & wait".into()));
        draft.update_response(1, ResponseField::AccuracyScore(Score::new(1).unwrap()));
        draft.update_response(1, ResponseField::AdditionalComments("unhelpful".into()));
        draft
    }

    #[test]
    fn round_trip_keeps_everything_but_the_date_type() {
        let draft = draft();
        let snapshot = decode(&encode(&draft).unwrap()).unwrap();

        assert_eq!(snapshot.tester_name, draft.tester_name);
        assert_eq!(Some(snapshot.division_id), draft.division_id);
        assert_eq!(Some(snapshot.venue_id), draft.venue_id);
        assert_eq!(snapshot.responses, draft.responses);

        let expected_time = serde_json::to_value(at()).unwrap();
        assert_eq!(snapshot.session_datetime, expected_time.as_str().unwrap());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(TransferError::Decode(_))));
        assert!(matches!(decode("{}"), Err(TransferError::Decode(_))));
    }

    #[test]
    fn decode_rejects_unselected_division() {
        let mut draft = draft();
        draft.select_division(None);
        let payload = encode(&draft).unwrap();
        assert!(decode(&payload).is_err());
    }

    #[test]
    fn decode_rejects_out_of_range_score() {
        let payload = r#"{
            "tester_name": "x", "division_id": 1, "venue_id": 1,
            "session_datetime": "2024-01-01T00:00:00Z",
            "responses": [{"question": "q", "chatbot_answer": "a",
                "accuracy_score": 7, "relevancy_score": 3, "performance_score": 3}]
        }"#;
        assert!(decode(payload).is_err());
    }

    #[test]
    fn ten_long_questions_stay_under_url_limits() {
        let mut draft = draft();
        while draft.add_response() {}
        let long = "x".repeat(300);
        for i in 0..draft.responses.len() {
            draft.update_response(i, ResponseField::Question(long.clone()));
            draft.update_response(i, ResponseField::ChatbotAnswer(long.clone()));
        }
        assert!(encode(&draft).unwrap().len() < 16 * 1024);
    }
}
