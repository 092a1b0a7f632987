/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the feedback API, including the `/api` prefix.
    pub api_url: String,
    /// Base URL of the tester-facing app; page routes are resolved against it.
    pub app_url: String,
    /// Per-request HTTP timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// | Env Var                       | Default                     |
    /// |-------------------------------|-----------------------------|
    /// | `FEEDBACK_API_URL`            | `http://localhost:5000/api` |
    /// | `FEEDBACK_APP_URL`            | `http://localhost:3000`     |
    /// | `FEEDBACK_REQUEST_TIMEOUT_MS` | `5000`                      |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("FEEDBACK_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".into())
            .trim_end_matches('/')
            .to_string();

        let app_url = std::env::var("FEEDBACK_APP_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        let request_timeout_ms: u64 = std::env::var("FEEDBACK_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("FEEDBACK_REQUEST_TIMEOUT_MS must be a valid u64");

        Self {
            api_url,
            app_url,
            request_timeout_ms,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".into(),
            app_url: "http://localhost:3000".into(),
            request_timeout_ms: 5000,
        }
    }
}
