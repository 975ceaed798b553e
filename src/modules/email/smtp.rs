use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::transport::smtp::PoolConfig;
use lettre::{Message, SmtpTransport, Transport};
use log::{error, info};

use super::templates::{subject_for, render_body};
use crate::modules::config::SmtpConfig;
use crate::modules::store::{EmailKind, EmailSender};
use crate::modules::utils::logging::format_sensitive;

/// SMTP implementation of the email-delivery collaborator.
///
/// Fire-and-forget: delivery failure is logged and reported as `false`,
/// and the calling flow never rolls back its prior side effects because
/// of it.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Function to send one message using the configured credentials
    fn deliver(&self, to_email: &str, subject: &str, body: &str) -> Result<(), String> {
        // Create email message
        let email = Message::builder()
            .from(
                format!("Account Security <{}>", self.config.from_address)
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| format!("Invalid to address: {}", e))?)
            .subject(subject)
            .header(lettre::message::header::ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("Failed to create email: {}", e))?;

        // Configure TLS parameters
        let tls_parameters = TlsParameters::builder(self.config.host.clone())
            .build()
            .map_err(|e| format!("Failed to build TLS parameters: {}", e))?;

        // Set up SMTP transport with explicit TLS configuration
        let mailer = SmtpTransport::relay(&self.config.host)
            .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .port(self.config.port)
            .tls(Tls::Required(tls_parameters))
            .pool_config(PoolConfig::new().max_size(1))
            .timeout(Some(std::time::Duration::from_secs(10)))
            .build();

        mailer
            .send(&email)
            .map(|_| ())
            .map_err(|e| format!("Failed to send email: {}", e))
    }
}

impl EmailSender for SmtpMailer {
    fn send(&self, to_address: &str, payload: &str, kind: EmailKind) -> bool {
        let body = render_body(payload, kind);
        match self.deliver(to_address, subject_for(kind), &body) {
            Ok(()) => {
                info!(
                    "Email sent: kind={:?}, to={}",
                    kind,
                    format_sensitive(to_address)
                );
                true
            }
            Err(e) => {
                error!(
                    "Email delivery failed: kind={:?}, to={}, error={}",
                    kind,
                    format_sensitive(to_address),
                    e
                );
                false
            }
        }
    }
}
