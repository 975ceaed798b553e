use serde::{Deserialize, Serialize};

/// Special characters accepted as symbols by the policy
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Configurable password policy rules.
///
/// Unset fields fall back to defaults at evaluation time, so a partially
/// populated configuration never fails to load.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PasswordRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub require_uppercase: Option<bool>,
    pub require_lowercase: Option<bool>,
    pub require_digits: Option<bool>,
    pub require_symbols: Option<bool>,
    /// Case-insensitive substrings that must not appear in the password
    pub disallowed_patterns: Vec<String>,
}

impl PasswordRules {
    fn min_length(&self) -> usize {
        self.min_length.unwrap_or(8)
    }

    fn max_length(&self) -> usize {
        self.max_length.unwrap_or(100)
    }
}

/// Function to validate a password against the configured policy.
///
/// An empty password is always rejected. When `strict` is off the policy
/// is bypassed entirely and any non-empty password passes. Otherwise all
/// configured rules must hold.
pub fn validate_password(password: &str, rules: &PasswordRules, strict: bool) -> bool {
    if password.is_empty() {
        return false;
    }
    if !strict {
        return true;
    }

    if password.len() < rules.min_length() || password.len() > rules.max_length() {
        return false;
    }
    if rules.require_uppercase.unwrap_or(true) && !password.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if rules.require_lowercase.unwrap_or(true) && !password.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    if rules.require_digits.unwrap_or(true) && !password.chars().any(|c| c.is_numeric()) {
        return false;
    }
    if rules.require_symbols.unwrap_or(true) && !password.chars().any(|c| SYMBOLS.contains(c)) {
        return false;
    }

    let lowered = password.to_lowercase();
    if rules
        .disallowed_patterns
        .iter()
        .any(|p| lowered.contains(&p.to_lowercase()))
    {
        return false;
    }

    true
}
