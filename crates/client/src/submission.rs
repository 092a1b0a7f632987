//! Controller for the submission form page.
//!
//! The page is a [`StepState`]: `Loading` until both lookup lists arrive,
//! `Ready` with the lists and the draft, or `Error` if loading failed. Edits
//! go straight to the draft; nothing is sent to the server from this page.

use feedback_core::draft::{DraftError, FeedbackDraft};
use feedback_core::reference::ReferenceData;
use feedback_core::response_set::ResponseField;
use feedback_core::step::StepState;
use feedback_core::types::{DbId, Timestamp};
use reqwest::Url;

use crate::api::FeedbackApi;
use crate::error::ClientError;
use crate::loader::load_reference_data;
use crate::navigation::Navigator;
use crate::notification::Notification;

/// Shown when either lookup list fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading data. Please refresh the page.";

/// Everything the form needs once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionForm {
    pub reference: ReferenceData,
    pub draft: FeedbackDraft,
}

/// Identifies one visit to the page. Results tagged with an older visit are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit(u64);

/// Why the form could not move on to review.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("The form is not ready yet")]
    NotReady,

    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

#[derive(Debug)]
pub struct SubmissionPage {
    state: StepState<SubmissionForm>,
    notification: Option<Notification>,
    visit: u64,
}

impl Default for SubmissionPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionPage {
    pub fn new() -> Self {
        Self {
            state: StepState::Loading,
            notification: None,
            visit: 0,
        }
    }

    /// Enter the page: reset to `Loading` and start a new visit.
    pub fn enter(&mut self) -> Visit {
        self.visit += 1;
        self.state = StepState::Loading;
        self.notification = None;
        Visit(self.visit)
    }

    /// Leave the page. Loads still in flight will be ignored.
    pub fn leave(&mut self) {
        self.visit += 1;
    }

    pub fn is_active(&self, visit: Visit) -> bool {
        visit.0 == self.visit
    }

    /// Apply the outcome of a reference load started by `visit`.
    ///
    /// A fresh draft is created at `now` on success. Returns `false` if the
    /// visit is stale and the result was discarded.
    pub fn finish_loading(
        &mut self,
        visit: Visit,
        result: Result<ReferenceData, ClientError>,
        now: Timestamp,
    ) -> bool {
        if !self.is_active(visit) {
            tracing::debug!("Discarding reference data for an inactive page");
            return false;
        }
        match result {
            Ok(reference) => {
                self.state = StepState::Ready(SubmissionForm {
                    reference,
                    draft: FeedbackDraft::new(now),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Submission form could not load reference data");
                self.state = StepState::Error(LOAD_ERROR_MESSAGE.to_string());
                self.notification = Some(Notification::error(LOAD_ERROR_MESSAGE));
            }
        }
        true
    }

    /// Enter the page and load reference data in one step.
    pub async fn load(&mut self, api: &dyn FeedbackApi, now: Timestamp) {
        let visit = self.enter();
        let result = load_reference_data(api).await;
        self.finish_loading(visit, result, now);
    }

    pub fn state(&self) -> &StepState<SubmissionForm> {
        &self.state
    }

    pub fn form(&self) -> Option<&SubmissionForm> {
        self.state.ready()
    }

    pub fn draft(&self) -> Option<&FeedbackDraft> {
        self.form().map(|f| &f.draft)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // ---- edits (ignored until the form is ready) ----

    pub fn set_tester_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.set_tester_name(name);
        }
    }

    pub fn select_division(&mut self, id: Option<DbId>) {
        if let Some(draft) = self.draft_mut() {
            draft.select_division(id);
        }
    }

    pub fn select_venue(&mut self, id: Option<DbId>) {
        if let Some(draft) = self.draft_mut() {
            draft.select_venue(id);
        }
    }

    pub fn set_session_datetime(&mut self, at: Option<Timestamp>) {
        if let Some(draft) = self.draft_mut() {
            draft.set_session_datetime(at);
        }
    }

    pub fn add_question(&mut self) -> bool {
        self.draft_mut().is_some_and(|d| d.add_response())
    }

    pub fn remove_question(&mut self, index: usize) -> bool {
        self.draft_mut().is_some_and(|d| d.remove_response(index))
    }

    pub fn update_question(&mut self, index: usize, change: ResponseField) -> bool {
        self.draft_mut().is_some_and(|d| d.update_response(index, change))
    }

    /// Validate the draft and move to the confirmation page.
    ///
    /// On success the confirmation URL is pushed onto `nav` and returned. On
    /// a validation failure nothing navigates and the first missing field is
    /// reported, both in the error and as a notification.
    pub fn submit(&mut self, nav: &mut Navigator) -> Result<Url, SubmitError> {
        let form = self.state.ready().ok_or(SubmitError::NotReady)?;
        if let Err(e) = form.draft.validate(&form.reference) {
            self.notification = Some(Notification::error(e.to_string()));
            return Err(e.into());
        }

        let url = nav.confirmation_url(&form.draft)?;
        tracing::debug!(
            responses = form.draft.responses.len(),
            "Draft handed to confirmation",
        );
        nav.push(url.clone());
        self.leave();
        Ok(url)
    }

    fn draft_mut(&mut self) -> Option<&mut FeedbackDraft> {
        self.state.ready_mut().map(|f| &mut f.draft)
    }
}
