/// Browser User-Agent presented on image fetches. Several marketplace image
/// hosts reject requests carrying a default library agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Runtime configuration for the PRISM batch pipeline.
///
/// Every field has a default; see [`crate::config::load_app_config`] for the
/// `PRISM_*` environment variables that override them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Whole-request timeout for one image fetch.
    pub http_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Additional fetch attempts after the first failure. `0` disables
    /// retries, matching the reference behavior.
    pub max_retries: u32,
    /// Base delay for exponential backoff: `base * 2^attempt` seconds.
    pub retry_backoff_base_secs: u64,
    /// Maximum in-flight image fetches during a batch run.
    pub image_concurrency: usize,
}
