use serde::{Deserialize, Serialize};

/// A user record as owned by the external store.
///
/// The core never persists this directly; it only computes values for the
/// store to write. `password_hash` is present only on full lookups and is
/// stripped before anything is returned to the routing layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Identity {
    /// Copy of this identity with the password hash stripped
    pub fn sanitized(&self) -> Self {
        Self {
            password_hash: None,
            ..self.clone()
        }
    }
}

/// The one active OTP for an identity. A new send-OTP request overwrites
/// the previous record; there is no queue.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OtpRecord {
    pub id: i64,
    pub code: String,
    pub expiry: u64,
}

/// Which template the email sender should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Otp,
    Reset,
}

/// Contract for the external user-record store.
///
/// The store is the single source of truth; uniqueness constraints and
/// consistency are its responsibility. Lookup methods return `None` for
/// missing records and `Err` only for unexpected collaborator failures.
pub trait UserStore {
    /// Lookup by email. Includes the password hash; login verifies
    /// against it and every flow sanitizes before returning outward
    fn get_by_email(&self, email: &str) -> Result<Option<Identity>, String>;

    /// Lookup by id, sanitized
    fn get_by_id(&self, id: i64) -> Result<Option<Identity>, String>;

    /// Lookup by id including the password hash
    fn get_full_by_id(&self, id: i64) -> Result<Option<Identity>, String>;

    /// Create a record, returning the new id
    fn create(
        &mut self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: &str,
        source: &str,
    ) -> Result<Option<i64>, String>;

    fn update_password_hash(&mut self, id: i64, password_hash: &str) -> Result<bool, String>;

    /// Overwrite the identity's OTP and expiry, clearing the verified flag
    fn update_otp(&mut self, id: i64, code: &str, expiry: u64) -> Result<bool, String>;

    /// Current OTP record for the identity behind this email, if any
    fn get_otp(&self, email: &str) -> Result<Option<OtpRecord>, String>;

    fn set_verified(&mut self, id: i64, verified: bool) -> Result<bool, String>;
}

/// Contract for the external email-delivery sender. Fire-and-forget: a
/// `false` return is logged by the caller but never rolls back the flow.
pub trait EmailSender {
    fn send(&self, to_address: &str, payload: &str, kind: EmailKind) -> bool;
}
