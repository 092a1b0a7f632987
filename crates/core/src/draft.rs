//! The in-progress feedback submission held by the submission page.

use std::fmt;

use serde::Serialize;

use crate::reference::ReferenceData;
use crate::response_set::{ResponseField, ResponseSet};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Mutable feedback draft.
///
/// Division and venue start unselected; the session time starts at the
/// creation instant but can be cleared by the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackDraft {
    pub tester_name: String,
    pub division_id: Option<DbId>,
    pub venue_id: Option<DbId>,
    pub session_datetime: Option<Timestamp>,
    pub responses: ResponseSet,
}

impl FeedbackDraft {
    /// A fresh draft with one default response and the session time set to `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            tester_name: String::new(),
            division_id: None,
            venue_id: None,
            session_datetime: Some(now),
            responses: ResponseSet::new(),
        }
    }

    pub fn set_tester_name(&mut self, name: impl Into<String>) {
        self.tester_name = name.into();
    }

    pub fn select_division(&mut self, id: Option<DbId>) {
        self.division_id = id;
    }

    pub fn select_venue(&mut self, id: Option<DbId>) {
        self.venue_id = id;
    }

    pub fn set_session_datetime(&mut self, at: Option<Timestamp>) {
        self.session_datetime = at;
    }

    pub fn add_response(&mut self) -> bool {
        self.responses.add()
    }

    pub fn remove_response(&mut self, index: usize) -> bool {
        self.responses.remove(index)
    }

    pub fn update_response(&mut self, index: usize, change: ResponseField) -> bool {
        self.responses.update_field(index, change)
    }

    /// Check required fields in form order and the division/venue selection
    /// against the loaded lists. Reports the first problem only.
    pub fn validate(&self, reference: &ReferenceData) -> Result<(), DraftError> {
        if self.tester_name.trim().is_empty() {
            return Err(DraftError::Missing(MissingField::TesterName));
        }
        let division_id = self
            .division_id
            .ok_or(DraftError::Missing(MissingField::Division))?;
        if !reference.has_division(division_id) {
            return Err(DraftError::UnknownDivision(division_id));
        }
        let venue_id = self
            .venue_id
            .ok_or(DraftError::Missing(MissingField::Venue))?;
        if !reference.has_venue(venue_id) {
            return Err(DraftError::UnknownVenue(venue_id));
        }
        if self.session_datetime.is_none() {
            return Err(DraftError::Missing(MissingField::SessionDateTime));
        }
        for (index, entry) in self.responses.iter().enumerate() {
            if !entry.has_question() {
                return Err(DraftError::Missing(MissingField::Question(index)));
            }
            if !entry.has_answer() {
                return Err(DraftError::Missing(MissingField::ChatbotAnswer(index)));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validation outcome
// ---------------------------------------------------------------------------

/// A required form field left empty. Response indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    TesterName,
    Division,
    Venue,
    SessionDateTime,
    Question(usize),
    ChatbotAnswer(usize),
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TesterName => f.write_str("Tester Name"),
            Self::Division => f.write_str("Division"),
            Self::Venue => f.write_str("Venue"),
            Self::SessionDateTime => f.write_str("Session Date/Time"),
            Self::Question(i) => write!(f, "Question {}: Question", i + 1),
            Self::ChatbotAnswer(i) => write!(f, "Question {}: Chatbot Answer", i + 1),
        }
    }
}

/// Why a draft cannot proceed to review.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(MissingField),

    #[error("Division {0} is not one of the available divisions")]
    UnknownDivision(DbId),

    #[error("Venue {0} is not one of the available venues")]
    UnknownVenue(DbId),
}
