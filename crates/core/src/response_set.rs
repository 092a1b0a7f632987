//! The per-question sub-forms of a feedback draft.
//!
//! A [`ResponseSet`] always holds between [`MIN_RESPONSES`] and
//! [`MAX_RESPONSES`] entries. Every mutation that would break that bound is a
//! no-op, so callers never need their own length checks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::score::Score;

/// A draft always keeps at least one question.
pub const MIN_RESPONSES: usize = 1;

/// Upper bound on questions per feedback session.
pub const MAX_RESPONSES: usize = 10;

// ---------------------------------------------------------------------------
// Response entry
// ---------------------------------------------------------------------------

/// One question/answer/score block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub question: String,
    pub chatbot_answer: String,
    pub accuracy_score: Score,
    pub relevancy_score: Score,
    pub performance_score: Score,
    #[serde(default)]
    pub additional_comments: String,
}

/// A single-field change to a [`ResponseEntry`], carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseField {
    Question(String),
    ChatbotAnswer(String),
    AccuracyScore(Score),
    RelevancyScore(Score),
    PerformanceScore(Score),
    AdditionalComments(String),
}

impl ResponseEntry {
    /// Build a new entry equal to `self` except for the one changed field.
    pub fn with(&self, change: ResponseField) -> Self {
        let mut next = self.clone();
        match change {
            ResponseField::Question(v) => next.question = v,
            ResponseField::ChatbotAnswer(v) => next.chatbot_answer = v,
            ResponseField::AccuracyScore(v) => next.accuracy_score = v,
            ResponseField::RelevancyScore(v) => next.relevancy_score = v,
            ResponseField::PerformanceScore(v) => next.performance_score = v,
            ResponseField::AdditionalComments(v) => next.additional_comments = v,
        }
        next
    }

    pub fn has_question(&self) -> bool {
        !self.question.trim().is_empty()
    }

    pub fn has_answer(&self) -> bool {
        !self.chatbot_answer.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Response set
// ---------------------------------------------------------------------------

/// Ordered, bounded list of response entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ResponseEntry>", into = "Vec<ResponseEntry>")]
pub struct ResponseSet(Vec<ResponseEntry>);

impl ResponseSet {
    /// A set holding a single default entry.
    pub fn new() -> Self {
        Self(vec![ResponseEntry::default()])
    }

    /// Wrap existing entries, rejecting a count outside the bound.
    pub fn from_entries(entries: Vec<ResponseEntry>) -> Result<Self, CoreError> {
        if !(MIN_RESPONSES..=MAX_RESPONSES).contains(&entries.len()) {
            return Err(CoreError::Validation(format!(
                "A feedback session needs between {MIN_RESPONSES} and {MAX_RESPONSES} responses, got {}",
                entries.len()
            )));
        }
        Ok(Self(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ResponseEntry] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&ResponseEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResponseEntry> {
        self.0.iter()
    }

    /// Entries paired with their 1-based display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &ResponseEntry)> {
        self.0.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn can_add(&self) -> bool {
        self.0.len() < MAX_RESPONSES
    }

    pub fn can_remove(&self) -> bool {
        self.0.len() > MIN_RESPONSES
    }

    /// Append a default entry. Returns `false` (and does nothing) at the bound.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.0.push(ResponseEntry::default());
        true
    }

    /// Remove the entry at `index`.
    ///
    /// Returns `false` without touching the set when only one entry is left
    /// or `index` is out of range. Later entries shift up one display slot.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.0.len() {
            return false;
        }
        self.0.remove(index);
        true
    }

    /// Replace one field of the entry at `index`.
    ///
    /// Returns `false` when `index` is out of range; no entry is touched.
    pub fn update_field(&mut self, index: usize, change: ResponseField) -> bool {
        let Some(current) = self.0.get(index) else {
            return false;
        };
        let next = current.with(change);
        self.0[index] = next;
        true
    }
}

impl Default for ResponseSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<ResponseEntry>> for ResponseSet {
    type Error = CoreError;

    fn try_from(entries: Vec<ResponseEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<ResponseSet> for Vec<ResponseEntry> {
    fn from(set: ResponseSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a ResponseEntry;
    type IntoIter = std::slice::Iter<'a, ResponseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: i64) -> Score {
        Score::new(v).unwrap()
    }

    fn filled(question: &str) -> ResponseEntry {
        ResponseEntry {
            question: question.to_string(),
            chatbot_answer: format!("answer to {question}"),
            ..ResponseEntry::default()
        }
    }

    // -- construction --

    #[test]
    fn new_set_has_one_default_entry() {
        let set = ResponseSet::new();
        assert_eq!(set.len(), 1);
        let entry = set.get(0).unwrap();
        assert_eq!(entry.accuracy_score.value(), 3);
        assert_eq!(entry.relevancy_score.value(), 3);
        assert_eq!(entry.performance_score.value(), 3);
        assert!(entry.question.is_empty());
        assert!(entry.additional_comments.is_empty());
    }

    #[test]
    fn from_entries_enforces_bounds() {
        assert!(ResponseSet::from_entries(vec![]).is_err());
        assert!(ResponseSet::from_entries(vec![ResponseEntry::default(); 11]).is_err());
        assert_eq!(
            ResponseSet::from_entries(vec![ResponseEntry::default(); 10])
                .unwrap()
                .len(),
            10
        );
    }

    #[test]
    fn deserialize_rejects_empty_list() {
        assert!(serde_json::from_str::<ResponseSet>("[]").is_err());
    }

    // -- add --

    #[test]
    fn add_grows_until_bound_then_stops() {
        let mut set = ResponseSet::new();
        for expected in 2..=MAX_RESPONSES {
            assert!(set.add());
            assert_eq!(set.len(), expected);
        }
        assert!(!set.can_add());
        assert!(!set.add());
        assert!(!set.add());
        assert_eq!(set.len(), MAX_RESPONSES);
    }

    // -- remove --

    #[test]
    fn remove_last_entry_is_refused() {
        let mut set = ResponseSet::new();
        assert!(!set.remove(0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_shifts_later_entries_up() {
        let mut set =
            ResponseSet::from_entries(vec![filled("a"), filled("b"), filled("c")]).unwrap();

        assert!(set.remove(1));

        let numbered: Vec<_> = set
            .numbered()
            .map(|(n, e)| (n, e.question.as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "a"), (2, "c")]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut set = ResponseSet::from_entries(vec![filled("a"), filled("b")]).unwrap();
        assert!(!set.remove(5));
        assert_eq!(set.len(), 2);
    }

    // -- update_field --

    #[test]
    fn update_field_touches_only_target() {
        let mut set =
            ResponseSet::from_entries(vec![filled("a"), filled("b"), filled("c")]).unwrap();
        let before = set.clone();

        assert!(set.update_field(1, ResponseField::RelevancyScore(score(5))));

        assert_eq!(set.get(0), before.get(0));
        assert_eq!(set.get(2), before.get(2));

        let changed = set.get(1).unwrap();
        let original = before.get(1).unwrap();
        assert_eq!(changed.relevancy_score.value(), 5);
        assert_eq!(
            *changed,
            ResponseEntry {
                relevancy_score: score(5),
                ..original.clone()
            }
        );
    }

    #[test]
    fn update_field_each_variant() {
        let entry = ResponseEntry::default()
            .with(ResponseField::Question("q".into()))
            .with(ResponseField::ChatbotAnswer("a".into()))
            .with(ResponseField::AccuracyScore(score(1)))
            .with(ResponseField::PerformanceScore(score(4)))
            .with(ResponseField::AdditionalComments("slow".into()));

        assert_eq!(entry.question, "q");
        assert_eq!(entry.chatbot_answer, "a");
        assert_eq!(entry.accuracy_score.value(), 1);
        assert_eq!(entry.relevancy_score.value(), 3);
        assert_eq!(entry.performance_score.value(), 4);
        assert_eq!(entry.additional_comments, "slow");
    }

    #[test]
    fn update_field_out_of_range_is_noop() {
        let mut set = ResponseSet::new();
        let before = set.clone();
        assert!(!set.update_field(3, ResponseField::Question("lost".into())));
        assert_eq!(set, before);
    }

    #[test]
    fn whitespace_question_counts_as_missing() {
        let entry = ResponseEntry::default().with(ResponseField::Question("   ".into()));
        assert!(!entry.has_question());
    }
}
