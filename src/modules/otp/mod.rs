use rand::rngs::OsRng;
use rand::Rng;

use crate::modules::store::UserStore;
use crate::modules::utils::time::unix_timestamp_now;

/// Generates and confirms short-lived numeric one-time codes.
///
/// Codes are stored in plaintext by the collaborator and compared by
/// exact value. Confirmation sets the identity's verified flag but does
/// not delete the record; the code stays valid until a new one is issued
/// or the expiry passes. A consumed-flag at the store is the safer
/// redesign if single-use becomes a hard requirement.
pub struct OtpManager {
    expiry_minutes: u64,
}

impl OtpManager {
    pub fn new(expiry_minutes: u64) -> Self {
        Self { expiry_minutes }
    }

    /// Generate a 4-digit one-time code from the OS entropy source
    pub fn generate_four_digit(&self) -> String {
        OsRng.gen_range(1_000..10_000).to_string()
    }

    /// Generate a 6-digit one-time code from the OS entropy source
    pub fn generate_six_digit(&self) -> String {
        OsRng.gen_range(100_000..1_000_000).to_string()
    }

    /// Expiry timestamp for a code issued now
    pub fn expiry_at(&self) -> u64 {
        unix_timestamp_now() + self.expiry_minutes * 60
    }

    /// Persist a freshly issued code through the store. Overwrites any
    /// previous code and clears the verified flag.
    pub fn record_issued<S: UserStore>(
        &self,
        store: &mut S,
        id: i64,
        code: &str,
    ) -> Result<bool, String> {
        store.update_otp(id, code, self.expiry_at())
    }

    /// Confirm a submitted code against the stored record.
    ///
    /// Returns `Ok(false)` uniformly for a missing record, an expired
    /// code or a mismatch; the caller cannot tell which. On success the
    /// identity's verified flag is set through the store.
    pub fn confirm<S: UserStore>(
        &self,
        store: &mut S,
        email: &str,
        submitted: &str,
    ) -> Result<bool, String> {
        let record = match store.get_otp(email)? {
            Some(record) => record,
            None => return Ok(false),
        };

        if record.code != submitted || unix_timestamp_now() >= record.expiry {
            return Ok(false);
        }

        store.set_verified(record.id, true)?;
        Ok(true)
    }
}
