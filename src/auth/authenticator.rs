use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenKeys;
use crate::auth::AuthResponse;
use crate::error::AppError;
use crate::models::{PublicUser, User};
use crate::store::CredentialStore;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Registers users, checks their credentials and issues and verifies
/// session tokens.
///
/// bcrypt runs on tokio's blocking pool so a hash never stalls a worker.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn CredentialStore>,
    keys: TokenKeys,
    bcrypt_cost: u32,
}

fn require_fields(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AppError::ValidationError("All fields required".into()));
    }
    Ok(())
}

impl Authenticator {
    pub fn new(users: Arc<dyn CredentialStore>, keys: TokenKeys, bcrypt_cost: u32) -> Self {
        Self {
            users,
            keys,
            bcrypt_cost,
        }
    }

    /// Creates a user. The email is trimmed and otherwise stored as given.
    pub async fn register(&self, email: &str, password: &str) -> Result<PublicUser, AppError> {
        require_fields(email, password)?;
        let email = email.trim();

        // Cheap early exit; the store re-checks under its lock on insert.
        if self.users.find_by_email(email)?.is_some() {
            return Err(AppError::Conflict("User already exists".into()));
        }

        let password = password.to_owned();
        let cost = self.bcrypt_cost;
        let password_hash =
            tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;

        let user = self.users.insert(User::new(email, password_hash))?;
        info!("registered user {}", user.id);
        Ok(PublicUser::from(&user))
    }

    /// Checks the credentials and issues a token.
    ///
    /// An unknown email and a wrong password fail with the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        require_fields(email, password)?;

        let user = match self.users.find_by_email(email.trim())? {
            Some(user) => user,
            None => {
                warn!("login failed: unknown email");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
            }
        };

        let password = password.to_owned();
        let password_hash = user.password_hash.clone();
        let matches =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await??;
        if !matches {
            warn!("login failed for user {}: wrong password", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let token = self.keys.generate_token(user.id)?;
        info!("user {} logged in", user.id);
        Ok(AuthResponse {
            token,
            user: PublicUser::from(&user),
        })
    }

    /// Returns the user id carried by a valid, unexpired token. Every guarded
    /// route goes through here via `AuthMiddleware`.
    pub fn verify_token(&self, token: &str) -> Result<Uuid, AppError> {
        Ok(self.keys.verify_token(token)?.sub)
    }
}
