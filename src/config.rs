use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Root of the activities API; `/activities` is resolved against it.
    pub base_url: String,
    /// How long a notification stays visible.
    pub notification_ttl: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            request_timeout: None,
        }
    }
}
