use std::path::PathBuf;

/// Process-wide importer configuration, resolved once at startup and passed
/// explicitly to every component. Business logic never reads the environment
/// directly.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the remote catalog API, no trailing slash expected.
    pub server_url: String,
    /// Bearer token for the Authorization header. Optional at load time;
    /// the formulas import never sends it, so it is only required when an
    /// auth-bearing import actually runs.
    pub auth_token: Option<String>,
    pub csv_path: PathBuf,
    pub request_timeout_secs: u64,
    pub max_concurrent_rows: usize,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_url", &self.server_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[redacted]"))
            .field("csv_path", &self.csv_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_concurrent_rows", &self.max_concurrent_rows)
            .field("log_level", &self.log_level)
            .finish()
    }
}
