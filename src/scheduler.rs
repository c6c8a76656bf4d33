//! Automatic day rollover for habits.
//!
//! The collections never reset themselves; this task calls
//! [`Habits::reset_daily`] once every UTC midnight when enabled in the config.

use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use log::{error, info};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::collections::Habits;

/// Spawns the reset loop on the current tokio runtime. The loop exits
/// when `cancel` is triggered.
pub fn spawn_daily_reset(habits: Habits, cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("daily reset scheduler started");
        loop {
            let wait = until_next_midnight(Utc::now());
            info!("next daily reset in {}s", wait.as_secs());
            tokio::select! {
                _ = tokio::time::sleep(wait) => run_reset(&habits),
                _ = cancel.cancelled() => {
                    info!("daily reset scheduler shutting down");
                    return;
                }
            };
        }
    })
}

/// Resets habits once. Failures are logged and the scheduler keeps going.
pub fn run_reset(habits: &Habits) -> bool {
    match habits.reset_daily() {
        Ok(count) => {
            info!("scheduled daily reset cleared {} habit(s)", count);
            true
        }
        Err(e) => {
            error!("scheduled daily reset failed: {}", e);
            false
        }
    }
}

/// Time left until the next UTC midnight. Never zero, so a reset that fires
/// exactly at midnight does not immediately fire again.
pub fn until_next_midnight(now: DateTime<Utc>) -> Duration {
    let next_midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive));

    match next_midnight {
        Some(next) => (next - now)
            .to_std()
            .unwrap_or(Duration::from_secs(1))
            .max(Duration::from_secs(1)),
        None => ChronoDuration::days(1)
            .to_std()
            .unwrap_or(Duration::from_secs(86_400)),
    }
}
