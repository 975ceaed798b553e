mod cipher;
pub mod keys;

pub use cipher::CredentialCipher;
pub use keys::{hash_password, verify_password};
