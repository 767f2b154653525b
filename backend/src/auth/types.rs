//! Authentication Request Types

use serde::Deserialize;
use validator::Validate;

/// Login credentials.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Account password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
