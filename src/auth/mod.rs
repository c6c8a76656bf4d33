pub mod authenticator;
pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{validate_not_blank, PublicUser};

pub use authenticator::Authenticator;
pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenKeys};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address. Only presence is checked.
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub password: String,
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub email: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub password: String,
}

/// Response after a successful login: the session token and the public
/// part of the user record.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT for session authentication.
    pub token: String,
    pub user: PublicUser,
}

/// A plain acknowledgement, e.g. after registering or resetting habits.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
