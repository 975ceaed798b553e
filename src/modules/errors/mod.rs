use thiserror::Error;

/// Failure taxonomy returned by every flow and gate operation.
///
/// The routing layer maps these to protocol status codes. Authentication
/// and authorization failures share the same displayed text so callers
/// cannot distinguish "unknown email" from "wrong password" or an expired
/// token from a forged one.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("Bad request: {0}")]
    Validation(String),

    /// Password rejected by the configured policy
    #[error("Password does not satisfy the password policy")]
    PolicyViolation,

    /// Email already registered
    #[error("Resource already exists")]
    Duplicate,

    /// Bad credentials or an invalid/expired token
    #[error("Access denied")]
    AuthenticationFailed,

    /// Valid identity, insufficient role or account state
    #[error("Access denied")]
    AuthorizationFailed,

    #[error("Resource not found")]
    NotFound,

    /// Unexpected collaborator failure. The detail is kept for
    /// server-side logging only and never shown through Display.
    #[error("Internal server error")]
    Internal(String),
}

impl AuthError {
    /// Detail string for server-side logging. Safe messages are the
    /// Display form; Internal exposes the underlying collaborator error.
    pub fn log_detail(&self) -> String {
        match self {
            AuthError::Internal(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}
