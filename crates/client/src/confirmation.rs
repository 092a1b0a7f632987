//! Controller for the confirmation page.
//!
//! The page rebuilds a [`ReviewSnapshot`] from its URL and shows it
//! read-only. Confirming sends the snapshot once; editing goes back in
//! history. A missing or undecodable payload leaves the page `Loading`
//! with nothing to confirm.

use feedback_core::review::ReviewSnapshot;
use feedback_core::step::StepState;
use feedback_core::transfer;
use feedback_core::types::DbId;
use reqwest::Url;

use crate::api::{FeedbackApi, SubmitReceipt};
use crate::navigation::{transfer_payload, Navigator, Route};
use crate::notification::Notification;

/// Shown when a commit fails without a server-supplied message.
pub const COMMIT_FALLBACK_MESSAGE: &str = "Error submitting feedback";

/// Shown after a commit when the reply carried no message of its own.
pub const COMMIT_SUCCESS_MESSAGE: &str = "Feedback submitted successfully";

/// Rendered while there is no snapshot to show.
pub const LOADING_TEXT: &str = "Loading...";

/// Result of pressing "Confirm Submission".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Accepted with a 2xx reply; the navigator is now on the landing page.
    Committed(SubmitReceipt),
    /// The server refused or could not be reached. The snapshot is kept so
    /// the tester can retry.
    Failed(String),
    /// This page already committed its snapshot. Carries the session id
    /// when the server reported one.
    AlreadyCommitted(Option<DbId>),
    /// No snapshot was decoded; nothing was sent.
    NothingToSubmit,
}

#[derive(Debug)]
pub struct ConfirmationPage {
    state: StepState<ReviewSnapshot>,
    notification: Option<Notification>,
    committed: Option<SubmitReceipt>,
}

impl ConfirmationPage {
    /// Build the page from the URL it was opened with.
    pub fn from_url(url: &Url) -> Self {
        let state = match transfer_payload(url) {
            None => {
                tracing::debug!("Confirmation opened without a transfer payload");
                StepState::Loading
            }
            Some(payload) => match transfer::decode(&payload) {
                Ok(snapshot) => StepState::Ready(snapshot),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring undecodable transfer payload");
                    StepState::Loading
                }
            },
        };
        Self {
            state,
            notification: None,
            committed: None,
        }
    }

    pub fn state(&self) -> &StepState<ReviewSnapshot> {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&ReviewSnapshot> {
        self.state.ready()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Lines of text the page displays.
    pub fn render(&self) -> Vec<String> {
        match self.state.ready() {
            Some(snapshot) => snapshot.summary_lines(),
            None => vec![LOADING_TEXT.to_string()],
        }
    }

    /// Send the snapshot to the server.
    ///
    /// Any 2xx reply is a success, and the navigator moves to [`Route::Home`]. On failure the
    /// server's `error` message (or [`COMMIT_FALLBACK_MESSAGE`]) is shown and
    /// the page stays as it was.
    pub async fn confirm(&mut self, api: &dyn FeedbackApi, nav: &mut Navigator) -> ConfirmOutcome {
        if let Some(receipt) = &self.committed {
            return ConfirmOutcome::AlreadyCommitted(receipt.session_id);
        }
        let Some(snapshot) = self.state.ready() else {
            return ConfirmOutcome::NothingToSubmit;
        };

        match api.submit_feedback(snapshot).await {
            Ok(receipt) => {
                tracing::info!(
                    session_id = ?receipt.session_id,
                    responses = snapshot.response_count(),
                    "Feedback committed",
                );
                let message = receipt.message.as_deref().unwrap_or(COMMIT_SUCCESS_MESSAGE);
                self.notification = Some(Notification::success(message));
                self.committed = Some(receipt.clone());
                nav.go(Route::Home);
                ConfirmOutcome::Committed(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Feedback commit failed");
                let message = e
                    .server_message()
                    .unwrap_or(COMMIT_FALLBACK_MESSAGE)
                    .to_string();
                self.notification = Some(Notification::error(message.clone()));
                ConfirmOutcome::Failed(message)
            }
        }
    }

    /// "Edit Submission": step back in history and return where that lands.
    ///
    /// The form shows whatever the history preserved; the snapshot is not
    /// sent back.
    pub fn edit(&self, nav: &mut Navigator) -> Url {
        nav.back().clone()
    }
}
