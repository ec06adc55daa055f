use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hostaway: HostawayConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct HostawayConfig {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for HostawayConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            api_secret: String::new(),
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

impl std::fmt::Debug for HostawayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostawayConfig")
            .field("account_id", &self.account_id)
            .field("api_secret", &redact(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Listings to report on, in output order.
    #[serde(default)]
    pub listing_ids: Vec<String>,
    /// Months reported after the current one.
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            listing_ids: Vec::new(),
            months_ahead: default_months_ahead(),
        }
    }
}

/// Downstream publishing target. Read from the environment but not yet
/// consumed: the report is only printed for now.
#[derive(Clone, Deserialize, Serialize, Default)]
pub struct SinkConfig {
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkConfig")
            .field("database_id", &self.database_id)
            .field("api_key", &self.api_key.as_deref().map(redact))
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "<redacted>" }
}

fn default_base_url() -> String {
    "https://api.hostaway.com/v1".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    300
}

fn default_months_ahead() -> u32 {
    6
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}
