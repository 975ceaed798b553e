// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    config,
    email,
    encryption,
    errors,
    flows,
    gate,
    otp,
    policy,
    store,
    tokens,
    utils,
};

// Re-export commonly used types
pub use modules::config::AuthConfig;
pub use modules::errors::AuthError;
pub use modules::flows::CredentialFlow;
pub use modules::gate::AuthorizationGate;
pub use modules::store::{EmailKind, EmailSender, Identity, OtpRecord, UserStore};
pub use modules::tokens::{AccessClaims, ResetClaims, TokenIssuer};

// Constants
pub const DEFAULT_ACCESS_TOKEN_LIMIT_MINUTES: u64 = 60;
pub const DEFAULT_OTP_EXPIRY_MINUTES: u64 = 10;
pub const DEFAULT_RESET_TOKEN_LIMIT_HOURS: u64 = 1;
pub const PBKDF2_ITERATIONS: u32 = 100_000;

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
pub type Aes256Cfb = block_modes::Cfb<aes::Aes256, block_modes::block_padding::Pkcs7>;
