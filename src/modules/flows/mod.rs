use log::warn;

use crate::modules::config::AuthConfig;
use crate::modules::encryption::{hash_password, verify_password, CredentialCipher};
use crate::modules::errors::AuthError;
use crate::modules::otp::OtpManager;
use crate::modules::policy::validate_password;
use crate::modules::store::{EmailKind, EmailSender, Identity, UserStore};
use crate::modules::tokens::{ResetClaims, TokenIssuer};
use crate::modules::utils::logging::log_auth_event;
use crate::modules::utils::validation::is_valid_email;

/// Role assigned when registration does not specify one
pub const DEFAULT_ROLE: &str = "user";
/// Signup source recorded when the request does not specify one
pub const DEFAULT_SOURCE: &str = "web";

/// Input for the registration flow
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub source: Option<String>,
}

/// Orchestrates the credential lifecycle over the collaborator contracts.
///
/// Each flow is a linear sequence of guarded steps; the first failing
/// step maps to exactly one [`AuthError`] kind and returns immediately.
/// There are no retries here: retrying store or email calls belongs to
/// the collaborators, not the auth logic.
pub struct CredentialFlow<'a, S: UserStore, E: EmailSender> {
    config: &'a AuthConfig,
    issuer: TokenIssuer,
    cipher: CredentialCipher,
    otp: OtpManager,
    store: &'a mut S,
    email: &'a E,
}

impl<'a, S: UserStore, E: EmailSender> CredentialFlow<'a, S, E> {
    pub fn new(config: &'a AuthConfig, store: &'a mut S, email: &'a E) -> Result<Self, String> {
        Ok(Self {
            config,
            issuer: TokenIssuer::new(
                &config.signing_secret,
                config.access_token_limit_minutes,
                config.reset_token_limit_hours,
            ),
            cipher: CredentialCipher::new(&config.cipher_key, &config.cipher_iv)?,
            otp: OtpManager::new(config.otp_expiry_minutes),
            store,
            email,
        })
    }

    /// Register a new account and return the sanitized identity
    pub fn register(&mut self, request: &RegisterRequest) -> Result<Identity, AuthError> {
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AuthError::Validation(
                "username, email and password are required".to_string(),
            ));
        }
        if !is_valid_email(&request.email) {
            return Err(AuthError::Validation("email is malformed".to_string()));
        }

        if !validate_password(
            &request.password,
            &self.config.password_rules,
            self.config.password_strictness,
        ) {
            return Err(AuthError::PolicyViolation);
        }

        // Check if the email is already registered
        if self
            .store
            .get_by_email(&request.email)
            .map_err(AuthError::Internal)?
            .is_some()
        {
            return Err(AuthError::Duplicate);
        }

        let password_hash = hash_password(&request.password);
        let role = request.role.as_deref().unwrap_or(DEFAULT_ROLE);
        let source = request.source.as_deref().unwrap_or(DEFAULT_SOURCE);

        let id = self
            .store
            .create(&request.username, &request.email, &password_hash, role, source)
            .map_err(AuthError::Internal)?
            .ok_or_else(|| AuthError::Internal("user record creation failed".to_string()))?;

        let identity = self
            .store
            .get_by_id(id)
            .map_err(AuthError::Internal)?
            .ok_or_else(|| AuthError::Internal("created record not readable".to_string()))?;

        log_auth_event("register", &request.email, true, None);
        Ok(identity.sanitized())
    }

    /// Authenticate by email and password, minting a bearer token
    pub fn login(&mut self, email: &str, password: &str) -> Result<(Identity, String), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let identity = match self.store.get_by_email(email).map_err(AuthError::Internal)? {
            Some(identity) => identity,
            None => {
                log_auth_event("login", email, false, Some("unknown email"));
                return Err(AuthError::AuthenticationFailed);
            }
        };

        let stored_hash = identity.password_hash.as_deref().unwrap_or("");
        if !verify_password(password, stored_hash) {
            log_auth_event("login", email, false, Some("password mismatch"));
            return Err(AuthError::AuthenticationFailed);
        }

        let token = self
            .issuer
            .issue(identity.id, &identity.role, &identity.email)
            .map_err(AuthError::Internal)?;

        log_auth_event("login", email, true, None);
        Ok((identity.sanitized(), token))
    }

    /// Change a password after verifying the old one.
    ///
    /// The new password is not run through the policy on this path; only
    /// the create and reset flows enforce it.
    pub fn change_password(
        &mut self,
        id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if old_password.is_empty() || new_password.is_empty() {
            return Err(AuthError::Validation(
                "old and new passwords are required".to_string(),
            ));
        }

        let identity = self
            .store
            .get_full_by_id(id)
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::AuthenticationFailed)?;

        let stored_hash = identity.password_hash.as_deref().unwrap_or("");
        if !verify_password(old_password, stored_hash) {
            log_auth_event("change_password", &identity.email, false, None);
            return Err(AuthError::AuthenticationFailed);
        }

        let password_hash = hash_password(new_password);
        if !self
            .store
            .update_password_hash(id, &password_hash)
            .map_err(AuthError::Internal)?
        {
            return Err(AuthError::Internal("password update failed".to_string()));
        }

        log_auth_event("change_password", &identity.email, true, None);
        Ok(())
    }

    /// Issue and deliver a one-time code for multi-factor confirmation
    pub fn send_otp(&mut self, email: &str) -> Result<(), AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::Validation("email is malformed".to_string()));
        }

        let identity = self
            .store
            .get_by_email(email)
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::NotFound)?;

        let code = self.otp.generate_six_digit();
        if !self
            .otp
            .record_issued(self.store, identity.id, &code)
            .map_err(AuthError::Internal)?
        {
            return Err(AuthError::Internal("otp persistence failed".to_string()));
        }

        // Fire-and-forget: a delivery failure does not undo the stored code
        if !self.email.send(&identity.email, &code, EmailKind::Otp) {
            warn!("OTP email delivery reported failure");
        }

        log_auth_event("send_otp", email, true, None);
        Ok(())
    }

    /// Confirm a previously issued one-time code
    pub fn confirm_otp(&mut self, email: &str, code: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || code.trim().is_empty() {
            return Err(AuthError::Validation("email and code are required".to_string()));
        }

        if !self
            .otp
            .confirm(self.store, email, code)
            .map_err(AuthError::Internal)?
        {
            log_auth_event("confirm_otp", email, false, None);
            return Err(AuthError::AuthenticationFailed);
        }

        log_auth_event("confirm_otp", email, true, None);
        Ok(())
    }

    /// Mail an encrypted password-reset link for the given account
    pub fn send_reset_link(&mut self, email: &str) -> Result<(), AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::Validation("email is malformed".to_string()));
        }

        let identity = self
            .store
            .get_by_email(email)
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::NotFound)?;

        let signed = self.issuer.issue_reset(email).map_err(AuthError::Internal)?;
        let envelope = self.cipher.encrypt(&signed).map_err(AuthError::Internal)?;
        let link = format!("{}?token={}", self.config.reset_url_base, envelope);

        if !self.email.send(&identity.email, &link, EmailKind::Reset) {
            warn!("Reset email delivery reported failure");
        }

        log_auth_event("send_reset_link", email, true, None);
        Ok(())
    }

    /// Set a new password for the account named by a verified reset claim.
    ///
    /// The claim comes from the gate's reset path. The change is only
    /// permitted while the account is still in the unconfirmed state
    /// (neither verified nor active); anything else is rejected.
    pub fn reset_password(
        &mut self,
        claims: &ResetClaims,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if new_password.is_empty() || claims.email.trim().is_empty() {
            return Err(AuthError::Validation(
                "token and new password are required".to_string(),
            ));
        }

        if !validate_password(
            new_password,
            &self.config.password_rules,
            self.config.password_strictness,
        ) {
            return Err(AuthError::PolicyViolation);
        }

        let identity = self
            .store
            .get_by_email(&claims.email)
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::NotFound)?;

        if identity.is_verified || identity.is_active {
            log_auth_event("reset_password", &claims.email, false, Some("account state"));
            return Err(AuthError::AuthorizationFailed);
        }

        let password_hash = hash_password(new_password);
        if !self
            .store
            .update_password_hash(identity.id, &password_hash)
            .map_err(AuthError::Internal)?
        {
            return Err(AuthError::Internal("password update failed".to_string()));
        }

        log_auth_event("reset_password", &claims.email, true, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gate::AuthorizationGate;
    use crate::modules::store::OtpRecord;
    use crate::modules::tokens::TokenIssuer;
    use crate::modules::utils::time::unix_timestamp_now;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory user store mirroring the collaborator contract
    struct MemoryStore {
        users: HashMap<i64, Identity>,
        otps: HashMap<i64, OtpRecord>,
        next_id: i64,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                users: HashMap::new(),
                otps: HashMap::new(),
                next_id: 1,
            }
        }
    }

    impl UserStore for MemoryStore {
        fn get_by_email(&self, email: &str) -> Result<Option<Identity>, String> {
            Ok(self.users.values().find(|u| u.email == email).cloned())
        }
        fn get_by_id(&self, id: i64) -> Result<Option<Identity>, String> {
            Ok(self.users.get(&id).map(|u| u.sanitized()))
        }
        fn get_full_by_id(&self, id: i64) -> Result<Option<Identity>, String> {
            Ok(self.users.get(&id).cloned())
        }
        fn create(
            &mut self,
            username: &str,
            email: &str,
            password_hash: &str,
            role: &str,
            _source: &str,
        ) -> Result<Option<i64>, String> {
            let id = self.next_id;
            self.next_id += 1;
            let now = unix_timestamp_now();
            self.users.insert(
                id,
                Identity {
                    id,
                    username: username.to_string(),
                    email: email.to_string(),
                    password_hash: Some(password_hash.to_string()),
                    role: role.to_string(),
                    is_active: false,
                    is_verified: false,
                    created_at: now,
                    updated_at: now,
                },
            );
            Ok(Some(id))
        }
        fn update_password_hash(&mut self, id: i64, password_hash: &str) -> Result<bool, String> {
            match self.users.get_mut(&id) {
                Some(user) => {
                    user.password_hash = Some(password_hash.to_string());
                    user.updated_at = unix_timestamp_now();
                    Ok(true)
                }
                None => Ok(false),
            }
        }
        fn update_otp(&mut self, id: i64, code: &str, expiry: u64) -> Result<bool, String> {
            if !self.users.contains_key(&id) {
                return Ok(false);
            }
            self.otps.insert(
                id,
                OtpRecord {
                    id,
                    code: code.to_string(),
                    expiry,
                },
            );
            if let Some(user) = self.users.get_mut(&id) {
                user.is_verified = false;
            }
            Ok(true)
        }
        fn get_otp(&self, email: &str) -> Result<Option<OtpRecord>, String> {
            let user = self.users.values().find(|u| u.email == email);
            Ok(user.and_then(|u| self.otps.get(&u.id).cloned()))
        }
        fn set_verified(&mut self, id: i64, verified: bool) -> Result<bool, String> {
            match self.users.get_mut(&id) {
                Some(user) => {
                    user.is_verified = verified;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    /// Email sender that records every payload instead of delivering
    struct RecordingMailer {
        sent: RefCell<Vec<(String, String, EmailKind)>>,
        succeed: bool,
    }

    impl RecordingMailer {
        fn new() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                succeed: true,
            }
        }

        fn failing() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                succeed: false,
            }
        }

        fn last_payload(&self) -> Option<String> {
            self.sent.borrow().last().map(|(_, payload, _)| payload.clone())
        }
    }

    impl EmailSender for RecordingMailer {
        fn send(&self, to_address: &str, payload: &str, kind: EmailKind) -> bool {
            self.sent
                .borrow_mut()
                .push((to_address.to_string(), payload.to_string(), kind));
            self.succeed
        }
    }

    fn strict_config() -> AuthConfig {
        let mut config =
            AuthConfig::new("flow-test-secret".to_string(), vec![5u8; 32], vec![9u8; 16]);
        config.password_strictness = true;
        config
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: None,
            source: None,
        }
    }

    #[test]
    fn test_register_success_with_policy_on() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        let identity = flow
            .register(&register_request("a@x.com", "Str0ng!Pass"))
            .unwrap();

        assert_eq!(identity.username, "alice");
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role, DEFAULT_ROLE);
        // Sanitized: no hash in the returned identity
        assert!(identity.password_hash.is_none());

        // Stored hash verifies against the plaintext but never contains it
        let stored = store.get_full_by_id(identity.id).unwrap().unwrap();
        let hash = stored.password_hash.unwrap();
        assert!(crate::modules::encryption::verify_password("Str0ng!Pass", &hash));
        assert!(!hash.contains("Str0ng!Pass"));
    }

    #[test]
    fn test_register_rejects_weak_password_when_strict() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        assert!(matches!(
            flow.register(&register_request("a@x.com", "weak")),
            Err(AuthError::PolicyViolation)
        ));
    }

    #[test]
    fn test_register_accepts_any_nonempty_password_when_lenient() {
        let mut config = strict_config();
        config.password_strictness = false;
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        assert!(flow.register(&register_request("a@x.com", "weak")).is_ok());
    }

    #[test]
    fn test_register_missing_fields() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        let mut request = register_request("a@x.com", "Str0ng!Pass");
        request.username = String::new();
        assert!(matches!(
            flow.register(&request),
            Err(AuthError::Validation(_))
        ));

        assert!(matches!(
            flow.register(&register_request("not-an-email", "Str0ng!Pass")),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_register_duplicate_email() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        assert!(matches!(
            flow.register(&register_request("a@x.com", "Str0ng!Pass")),
            Err(AuthError::Duplicate)
        ));
    }

    #[test]
    fn test_login_returns_verifiable_token() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        let registered = flow
            .register(&register_request("a@x.com", "Str0ng!Pass"))
            .unwrap();
        let (identity, token) = flow.login("a@x.com", "Str0ng!Pass").unwrap();

        assert!(identity.password_hash.is_none());

        let issuer = TokenIssuer::new(&config.signing_secret, 60, 1);
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.id, registered.id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, DEFAULT_ROLE);
    }

    #[test]
    fn test_login_wrong_password_is_uniform_failure() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();

        let wrong_password = flow.login("a@x.com", "Wr0ng!Pass").unwrap_err();
        let unknown_email = flow.login("b@x.com", "Str0ng!Pass").unwrap_err();

        assert!(matches!(wrong_password, AuthError::AuthenticationFailed));
        assert!(matches!(unknown_email, AuthError::AuthenticationFailed));
        // The caller-visible message is identical for both
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn test_change_password() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        let identity = flow
            .register(&register_request("a@x.com", "Str0ng!Pass"))
            .unwrap();

        // Wrong old password
        assert!(matches!(
            flow.change_password(identity.id, "Wr0ng!Pass", "N3w!Password"),
            Err(AuthError::AuthenticationFailed)
        ));

        // Unknown id
        assert!(matches!(
            flow.change_password(999, "Str0ng!Pass", "N3w!Password"),
            Err(AuthError::AuthenticationFailed)
        ));

        flow.change_password(identity.id, "Str0ng!Pass", "N3w!Password").unwrap();
        assert!(flow.login("a@x.com", "N3w!Password").is_ok());
        assert!(flow.login("a@x.com", "Str0ng!Pass").is_err());
    }

    #[test]
    fn test_change_password_skips_policy() {
        // This path intentionally does not re-run the password policy
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        let identity = flow
            .register(&register_request("a@x.com", "Str0ng!Pass"))
            .unwrap();
        assert!(flow.change_password(identity.id, "Str0ng!Pass", "weak").is_ok());
    }

    #[test]
    fn test_send_and_confirm_otp() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        flow.send_otp("a@x.com").unwrap();

        let code = mailer.last_payload().unwrap();
        assert_eq!(code.len(), 6);

        // Wrong code is a uniform failure
        assert!(matches!(
            flow.confirm_otp("a@x.com", "000000"),
            Err(AuthError::AuthenticationFailed)
        ));

        flow.confirm_otp("a@x.com", &code).unwrap();
        assert!(store.get_by_id(1).unwrap().unwrap().is_verified);
    }

    #[test]
    fn test_confirm_otp_without_prior_send() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        assert!(matches!(
            flow.confirm_otp("a@x.com", "123456"),
            Err(AuthError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_send_otp_unknown_email() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        assert!(matches!(
            flow.send_otp("ghost@x.com"),
            Err(AuthError::NotFound)
        ));
        assert!(mailer.sent.borrow().is_empty());
    }

    #[test]
    fn test_new_otp_overwrites_previous() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();

        flow.send_otp("a@x.com").unwrap();
        let first = mailer.last_payload().unwrap();
        flow.send_otp("a@x.com").unwrap();
        let second = mailer.last_payload().unwrap();

        if first != second {
            assert!(matches!(
                flow.confirm_otp("a@x.com", &first),
                Err(AuthError::AuthenticationFailed)
            ));
        }
        flow.confirm_otp("a@x.com", &second).unwrap();
    }

    #[test]
    fn test_email_failure_does_not_fail_send_otp() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::failing();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        // Delivery reports failure, but the flow and stored code stand
        flow.send_otp("a@x.com").unwrap();
        let code = mailer.last_payload().unwrap();
        flow.confirm_otp("a@x.com", &code).unwrap();
    }

    #[test]
    fn test_reset_link_roundtrip() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        flow.send_reset_link("a@x.com").unwrap();

        let link = mailer.last_payload().unwrap();
        assert!(link.starts_with(&config.reset_url_base));

        // The routing layer would extract the token and run the gate
        let token = link.split("?token=").nth(1).unwrap();
        let gate = AuthorizationGate::new(&config).unwrap();
        let claims = gate.authenticate_reset(Some(token)).unwrap();
        assert_eq!(claims.email, "a@x.com");

        // Freshly registered accounts are neither verified nor active,
        // so the reset is permitted
        flow.reset_password(&claims, "N3w!Password").unwrap();
        assert!(flow.login("a@x.com", "N3w!Password").is_ok());
    }

    #[test]
    fn test_reset_rejected_once_account_confirmed() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();

        let claims = ResetClaims {
            email: "a@x.com".to_string(),
            exp: unix_timestamp_now() + 3600,
        };

        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();
        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();
        drop(flow);

        // Mark the account verified, as OTP confirmation would
        store.set_verified(1, true).unwrap();

        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();
        assert!(matches!(
            flow.reset_password(&claims, "N3w!Password"),
            Err(AuthError::AuthorizationFailed)
        ));
    }

    #[test]
    fn test_reset_password_enforces_policy() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        flow.register(&register_request("a@x.com", "Str0ng!Pass")).unwrap();

        let claims = ResetClaims {
            email: "a@x.com".to_string(),
            exp: unix_timestamp_now() + 3600,
        };
        assert!(matches!(
            flow.reset_password(&claims, "weak"),
            Err(AuthError::PolicyViolation)
        ));
    }

    #[test]
    fn test_send_reset_link_unknown_email() {
        let config = strict_config();
        let mut store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let mut flow = CredentialFlow::new(&config, &mut store, &mailer).unwrap();

        assert!(matches!(
            flow.send_reset_link("ghost@x.com"),
            Err(AuthError::NotFound)
        ));
    }
}
