use pbkdf2::pbkdf2;
use rand::rngs::OsRng;
use rand::Rng;

use crate::{HmacSha256, PBKDF2_ITERATIONS};

/// Function to generate a random salt for PBKDF2
pub fn generate_random_salt() -> Vec<u8> {
    let mut rng = OsRng;
    (0..16).map(|_| rng.gen()).collect()
}

/// Function to derive a 32-byte key from the password using PBKDF2
pub fn derive_key_from_password(password: &str, salt: &[u8]) -> Vec<u8> {
    let mut key = vec![0u8; 32];
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Hash a password for storage as `salt$hash`, both hex encoded.
/// The salt is random per record, so equal passwords hash differently.
pub fn hash_password(password: &str) -> String {
    let salt = generate_random_salt();
    let key = derive_key_from_password(password, &salt);
    format!("{}${}", hex::encode(salt), hex::encode(key))
}

/// Verify a password against a stored `salt$hash` value.
/// Any malformed stored value simply fails verification.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(2, '$');
    let (salt_hex, hash_hex) = match (parts.next(), parts.next()) {
        (Some(salt), Some(hash)) => (salt, hash),
        _ => return false,
    };

    let salt = match hex::decode(salt_hex) {
        Ok(salt) => salt,
        Err(_) => return false,
    };
    let expected = match hex::decode(hash_hex) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    derive_key_from_password(password, &salt) == expected
}
