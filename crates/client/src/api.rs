//! HTTP access to the feedback API.
//!
//! Pages talk to the service through [`FeedbackApi`] so tests can swap in an
//! in-memory implementation; [`HttpFeedbackApi`] is the real one, built on
//! [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use feedback_core::reference::ReferenceEntry;
use feedback_core::review::ReviewSnapshot;
use feedback_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// What the server said about an accepted submission.
///
/// Any 2xx reply counts as accepted. Both fields are filled only when the
/// body carries them, either inside the `data` envelope or at the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmitReceipt {
    pub session_id: Option<DbId>,
    pub message: Option<String>,
}

impl SubmitReceipt {
    /// Read a receipt from a 2xx body. Bodies of any other shape yield an
    /// empty receipt.
    pub fn from_body(body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<Envelope<SubmitReceipt>>(body) {
            return envelope.data;
        }
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Operations the workflow needs from the feedback service.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// `GET /divisions`
    async fn list_divisions(&self) -> Result<Vec<ReferenceEntry>, ClientError>;

    /// `GET /venues`
    async fn list_venues(&self) -> Result<Vec<ReferenceEntry>, ClientError>;

    /// `POST /submit-feedback` with the full snapshot as the body.
    ///
    /// Succeeds for every 2xx status, whatever the body holds.
    async fn submit_feedback(&self, snapshot: &ReviewSnapshot) -> Result<SubmitReceipt, ClientError>;
}

/// `{ "data": T }` success envelope.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// `{ "error": "..." }` failure body. Other fields are ignored.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the feedback API.
pub struct HttpFeedbackApi {
    client: reqwest::Client,
    api_url: String,
}

impl HttpFeedbackApi {
    /// Build a client with the configured request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// * `api_url` - Base URL including the `/api` prefix, e.g.
    ///   `http://host:5000/api`.
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    // ---- private helpers ----

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}{path}", self.api_url))
            .send()
            .await?;

        Self::parse_data(response).await
    }

    /// Ensure the response has a success status code. On failure, the
    /// body's `error` field (if it parses) becomes the error message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Unwrap the `data` envelope of a successful JSON response.
    async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<Envelope<T>>().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn list_divisions(&self) -> Result<Vec<ReferenceEntry>, ClientError> {
        self.get_data("/divisions").await
    }

    async fn list_venues(&self) -> Result<Vec<ReferenceEntry>, ClientError> {
        self.get_data("/venues").await
    }

    async fn submit_feedback(&self, snapshot: &ReviewSnapshot) -> Result<SubmitReceipt, ClientError> {
        let response = self
            .client
            .post(format!("{}/submit-feedback", self.api_url))
            .json(snapshot)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await.unwrap_or_default();
        let receipt = SubmitReceipt::from_body(&body);
        if receipt.session_id.is_none() {
            tracing::debug!("Submission accepted without a session id in the reply");
        }
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_tolerates_extra_and_missing_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"duplicate session","code":"CONFLICT"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("duplicate session"));

        let body: ErrorBody = serde_json::from_str(r#"{"code":"INTERNAL_ERROR"}"#).unwrap();
        assert!(body.error.is_none());
    }

    #[test]
    fn envelope_unwraps_reference_list() {
        let envelope: Envelope<Vec<ReferenceEntry>> =
            serde_json::from_str(r#"{"data":[{"id":1,"name":"Retail"}]}"#).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].name, "Retail");
    }

    #[test]
    fn receipt_read_from_envelope_bare_or_foreign_body() {
        let receipt = SubmitReceipt::from_body(
            r#"{"data":{"session_id":9,"message":"Feedback submitted successfully"}}"#,
        );
        assert_eq!(receipt.session_id, Some(9));
        assert_eq!(receipt.message.as_deref(), Some("Feedback submitted successfully"));

        let receipt = SubmitReceipt::from_body(r#"{"message":"Saved","session_id":5}"#);
        assert_eq!(receipt.session_id, Some(5));
        assert_eq!(receipt.message.as_deref(), Some("Saved"));

        assert_eq!(SubmitReceipt::from_body(""), SubmitReceipt::default());
        assert_eq!(SubmitReceipt::from_body("OK"), SubmitReceipt::default());
        assert_eq!(SubmitReceipt::from_body(r#"{"ok":true}"#), SubmitReceipt::default());
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let api = HttpFeedbackApi::with_client(reqwest::Client::new(), "http://h:5000/api/".into());
        assert_eq!(api.api_url, "http://h:5000/api");
    }
}
