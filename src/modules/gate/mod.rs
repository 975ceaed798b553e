use crate::modules::config::AuthConfig;
use crate::modules::encryption::CredentialCipher;
use crate::modules::errors::AuthError;
use crate::modules::store::UserStore;
use crate::modules::tokens::{AccessClaims, ResetClaims, TokenIssuer};

/// Middleware-style authorization checks for protected routes.
///
/// A missing or unverifiable token rejects the request; a valid token
/// attaches its claims. When a role is required it is checked against the
/// store's *current* role, never the role embedded in the token. Every
/// rejection is the same uniform failure.
pub struct AuthorizationGate {
    issuer: TokenIssuer,
    cipher: CredentialCipher,
}

impl AuthorizationGate {
    pub fn new(config: &AuthConfig) -> Result<Self, String> {
        Ok(Self {
            issuer: TokenIssuer::new(
                &config.signing_secret,
                config.access_token_limit_minutes,
                config.reset_token_limit_hours,
            ),
            cipher: CredentialCipher::new(&config.cipher_key, &config.cipher_iv)?,
        })
    }

    /// Validate the bearer token from the auth header, if any
    pub fn authenticate(&self, token: Option<&str>) -> Result<AccessClaims, AuthError> {
        let token = token.ok_or(AuthError::AuthenticationFailed)?;
        self.issuer
            .verify(token)
            .ok_or(AuthError::AuthenticationFailed)
    }

    /// Check that the authenticated identity currently holds `role`.
    ///
    /// The role is re-read from the store so a role change after token
    /// issuance takes effect immediately.
    pub fn require_role<S: UserStore>(
        &self,
        claims: &AccessClaims,
        role: &str,
        store: &S,
    ) -> Result<(), AuthError> {
        let identity = store
            .get_by_id(claims.id)
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::AuthorizationFailed)?;

        if identity.role != role {
            return Err(AuthError::AuthorizationFailed);
        }
        Ok(())
    }

    /// Validate an encrypted reset token: decrypt the envelope, then
    /// verify the signed claim inside. Any stage failing yields the same
    /// rejection.
    pub fn authenticate_reset(&self, token: Option<&str>) -> Result<ResetClaims, AuthError> {
        let token = token.ok_or(AuthError::AuthenticationFailed)?;
        let unwrapped = self
            .cipher
            .decrypt(token)
            .map_err(|_| AuthError::AuthenticationFailed)?;
        self.issuer
            .verify_reset(&unwrapped)
            .ok_or(AuthError::AuthenticationFailed)
    }
}
