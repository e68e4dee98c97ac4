//! Liveness watchdog config. The watchdog only runs when a webhook key is configured.

use std::env;
use std::time::Duration;

const DEFAULT_CHECK_INTERVAL_SECS: u64 = 10;
const DEFAULT_ALERT_MESSAGE: &str = "gptbot is dead!";

#[derive(Debug, Clone)]
pub struct WatchdogConfig {
    /// WECHAT_WORK_SEND_KEY; None (or empty) disables the watchdog
    pub send_key: Option<String>,
    /// LIVENESS_CHECK_INTERVAL_SECS
    pub check_interval_secs: u64,
    /// LIVENESS_ALERT_MESSAGE
    pub alert_message: String,
}

impl WatchdogConfig {
    pub fn from_env() -> Self {
        let send_key = env::var("WECHAT_WORK_SEND_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let check_interval_secs = env::var("LIVENESS_CHECK_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CHECK_INTERVAL_SECS);
        let alert_message = env::var("LIVENESS_ALERT_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_ALERT_MESSAGE.to_string());
        Self {
            send_key,
            check_interval_secs,
            alert_message,
        }
    }

    pub fn enabled(&self) -> bool {
        self.send_key.is_some()
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}
