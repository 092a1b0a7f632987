use feedback_core::transfer::TransferError;

/// Errors from the client side of the workflow.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Feedback API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        /// The `error` field of the response body, when the body had one.
        message: Option<String>,
    },

    /// A draft could not be encoded into, or decoded from, a page URL.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// A configured or constructed URL did not parse.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// The message the server supplied with an error response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_from_api_errors() {
        let err = ClientError::Api {
            status: 500,
            message: Some("duplicate session".into()),
        };
        assert_eq!(err.server_message(), Some("duplicate session"));
        assert_eq!(
            err.to_string(),
            "Feedback API error (500): duplicate session"
        );

        let err = ClientError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.server_message(), None);

        let err = ClientError::InvalidUrl {
            url: "::".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn empty_server_message_is_ignored() {
        let err = ClientError::Api {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);
    }
}
