//! Liveness watchdog: polls the transport and raises one alert when it stops responding.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use wecom_notify::Notifier;

/// Answers whether the bot is still connected.
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    async fn is_alive(&self) -> bool;
}

/// Polls `probe` every `interval`. The first time it reports dead, sends `alert_message` through
/// `notifier` once and returns. Notification failures are logged only.
#[instrument(skip(probe, notifier, alert_message))]
pub async fn run_watchdog(
    probe: Arc<dyn LivenessProbe>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    alert_message: String,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // First tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        if probe.is_alive().await {
            debug!("step: liveness check passed");
            continue;
        }

        warn!("Bot is no longer alive, sending alert");
        match notifier.send_plain_text(&alert_message).await {
            Ok(()) => info!("Liveness alert sent"),
            Err(e) => error!(error = %e, "Failed to send liveness alert"),
        }
        return;
    }
}
