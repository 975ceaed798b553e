use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::modules::utils::time::{minutes_to_hours, unix_timestamp_now};

/// Claims carried by a bearer token. Immutable once signed; there is no
/// server-side revocation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    pub id: i64,
    pub role: String,
    pub email: String,
    pub exp: u64,
}

/// Claims wrapped inside an encrypted password-reset envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetClaims {
    pub email: String,
    pub exp: u64,
}

/// Issues and verifies HS256-signed time-limited tokens.
///
/// The signing secret is a process-wide static value; there is no key
/// rotation. Verification failures are uniform: bad signature, expiry and
/// malformed input all yield `None` so callers cannot probe for the
/// reason.
pub struct TokenIssuer {
    secret: String,
    access_limit_minutes: u64,
    reset_limit_hours: u64,
}

impl TokenIssuer {
    pub fn new(secret: &str, access_limit_minutes: u64, reset_limit_hours: u64) -> Self {
        Self {
            secret: secret.to_string(),
            access_limit_minutes,
            reset_limit_hours,
        }
    }

    /// Sign a bearer token for the given identity claims.
    ///
    /// The configured limit is stored in minutes but applied in whole
    /// hours, so sub-60-minute configurations truncate to a zero
    /// lifetime. See [`minutes_to_hours`].
    pub fn issue(&self, id: i64, role: &str, email: &str) -> Result<String, String> {
        let hours = minutes_to_hours(self.access_limit_minutes);
        let claims = AccessClaims {
            id,
            role: role.to_string(),
            email: email.to_string(),
            exp: unix_timestamp_now() + hours * 3600,
        };
        self.sign(&claims)
    }

    /// Decode and verify a bearer token, returning its claims only when
    /// the signature checks out and the expiry has not passed
    pub fn verify(&self, token: &str) -> Option<AccessClaims> {
        self.decode_claims::<AccessClaims>(token)
    }

    /// Sign a short-lived reset claim for the given email
    pub fn issue_reset(&self, email: &str) -> Result<String, String> {
        let claims = ResetClaims {
            email: email.to_string(),
            exp: unix_timestamp_now() + self.reset_limit_hours * 3600,
        };
        self.sign(&claims)
    }

    /// Verify a reset claim produced by [`issue_reset`](Self::issue_reset)
    pub fn verify_reset(&self, token: &str) -> Option<ResetClaims> {
        self.decode_claims::<ResetClaims>(token)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, String> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| format!("Failed to sign token: {}", e))
    }

    fn decode_claims<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Option<T> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<T>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }
}
