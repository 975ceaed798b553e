use base64::{engine::general_purpose::STANDARD as base64, Engine as _};
use std::env;

use crate::modules::policy::PasswordRules;
use crate::{
    DEFAULT_ACCESS_TOKEN_LIMIT_MINUTES, DEFAULT_OTP_EXPIRY_MINUTES, DEFAULT_RESET_TOKEN_LIMIT_HOURS,
};

/// SMTP delivery settings for the email sender
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

/// Immutable process configuration for the authentication core.
///
/// Loaded once at startup and passed by reference to each component at
/// construction. Components never read ambient environment state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing bearer and reset tokens
    pub signing_secret: String,
    /// AES-256 key for the credential cipher (32 bytes)
    pub cipher_key: Vec<u8>,
    /// Static IV for the credential cipher (16 bytes)
    pub cipher_iv: Vec<u8>,
    pub access_token_limit_minutes: u64,
    pub otp_expiry_minutes: u64,
    pub reset_token_limit_hours: u64,
    /// Base URL the reset token is appended to as a query parameter
    pub reset_url_base: String,
    pub password_strictness: bool,
    pub password_rules: PasswordRules,
    pub smtp: Option<SmtpConfig>,
}

impl AuthConfig {
    /// Create a configuration with the given secrets and default limits
    pub fn new(signing_secret: String, cipher_key: Vec<u8>, cipher_iv: Vec<u8>) -> Self {
        Self {
            signing_secret,
            cipher_key,
            cipher_iv,
            access_token_limit_minutes: DEFAULT_ACCESS_TOKEN_LIMIT_MINUTES,
            otp_expiry_minutes: DEFAULT_OTP_EXPIRY_MINUTES,
            reset_token_limit_hours: DEFAULT_RESET_TOKEN_LIMIT_HOURS,
            reset_url_base: "http://localhost:5173/resetpassword".to_string(),
            password_strictness: false,
            password_rules: PasswordRules {
                min_length: Some(8),
                max_length: Some(20),
                require_uppercase: Some(true),
                require_lowercase: Some(true),
                require_digits: Some(true),
                require_symbols: Some(true),
                disallowed_patterns: vec!["admin".to_string()],
            },
            smtp: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `SECRET_ACCESS_TOKEN`, `ENCRYPTION_KEY` and `ENCRYPTION_IV` are
    /// required; key and IV are base64-encoded and must decode to 32 and
    /// 16 bytes. Everything else falls back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let signing_secret = env::var("SECRET_ACCESS_TOKEN")
            .map_err(|_| "SECRET_ACCESS_TOKEN is not set".to_string())?;

        let cipher_key = decode_key_material("ENCRYPTION_KEY", 32)?;
        let cipher_iv = decode_key_material("ENCRYPTION_IV", 16)?;

        let mut config = Self::new(signing_secret, cipher_key, cipher_iv);

        if let Some(minutes) = parse_env("ACCESS_TOKEN_LIMIT_MIN")? {
            config.access_token_limit_minutes = minutes;
        }
        if let Some(minutes) = parse_env("OTP_EXPIRY_DURATION_IN_MINS")? {
            config.otp_expiry_minutes = minutes;
        }
        if let Some(hours) = parse_env("RESET_PASSWORD_TOKEN_LIMIT_IN_HOUR")? {
            config.reset_token_limit_hours = hours;
        }
        if let Ok(base) = env::var("RESET_PASSWORD_URL") {
            config.reset_url_base = base;
        }
        if let Ok(flag) = env::var("ENABLE_PASSWORD_STRICTNESS_CHECK") {
            config.password_strictness = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        config.smtp = load_smtp_config();

        Ok(config)
    }
}

/// Decode a required base64 environment variable and check its length
fn decode_key_material(name: &str, expected_len: usize) -> Result<Vec<u8>, String> {
    let encoded = env::var(name).map_err(|_| format!("{} is not set", name))?;
    let decoded = base64
        .decode(encoded.trim())
        .map_err(|e| format!("{} is not valid base64: {}", name, e))?;
    if decoded.len() != expected_len {
        return Err(format!(
            "{} must decode to {} bytes, got {}",
            name,
            expected_len,
            decoded.len()
        ));
    }
    Ok(decoded)
}

/// Parse an optional numeric environment variable
fn parse_env(name: &str) -> Result<Option<u64>, String> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| format!("{} must be a positive integer", name)),
        Err(_) => Ok(None),
    }
}

/// SMTP settings are optional; flows degrade to logging a send failure
fn load_smtp_config() -> Option<SmtpConfig> {
    let host = env::var("SMTP_HOST").ok()?;
    let username = env::var("SMTP_USERNAME").ok()?;
    let password = env::var("SMTP_PASSWORD").ok()?;
    let port = env::var("SMTP_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(587);
    let from_address = env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());

    Some(SmtpConfig {
        host,
        port,
        username,
        password,
        from_address,
    })
}
