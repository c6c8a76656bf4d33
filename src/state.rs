use std::sync::Arc;

use crate::auth::{Authenticator, TokenKeys};
use crate::collections::{DailyLogs, Habits, Tasks};
use crate::config::Config;
use crate::error::AppError;
use crate::store::InMemoryCredentialStore;

/// Shared application state handed to every handler through `web::Data`.
///
/// Cloning is cheap; all clones share the same underlying collections.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub habits: Habits,
    pub tasks: Tasks,
    pub logs: DailyLogs,
}

impl AppState {
    pub fn new(
        authenticator: Authenticator,
        habits: Habits,
        tasks: Tasks,
        logs: DailyLogs,
    ) -> Self {
        Self {
            authenticator,
            habits,
            tasks,
            logs,
        }
    }

    /// Empty in-memory stores with the configured secret, token lifetime and bcrypt cost.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let authenticator = Authenticator::new(
            Arc::new(InMemoryCredentialStore::new()),
            TokenKeys::new(&config.jwt_secret, config.token_ttl_days)?,
            config.bcrypt_cost,
        );
        Ok(Self::new(
            authenticator,
            Habits::in_memory(),
            Tasks::in_memory(),
            DailyLogs::in_memory(),
        ))
    }
}
