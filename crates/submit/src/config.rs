/// Submission configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production. Binaries are expected to call
/// `dotenvy::dotenv()` before loading.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    /// Base URL of the signup service (default: `http://localhost:4000`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub request_timeout_secs: u64,
}

impl SubmitConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `SIGNUP_BASE_URL`     | `http://localhost:4000` |
    /// | `SIGNUP_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SIGNUP_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".into());

        let request_timeout_secs: u64 = std::env::var("SIGNUP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("SIGNUP_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}
