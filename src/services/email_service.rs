//! Contact-form email delivery over async SMTP.
//!
//! Delivery is fire-and-forget from the backend's point of view: the
//! contact endpoint reports the outcome to the submitter and nothing is
//! queued or retried. When SMTP credentials are not configured the mailer
//! is disabled and sending reports a configuration failure instead.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::config::Config;
use crate::error::AppError;
use crate::models::contact::ContactFormRequest;

/// Async SMTP mailer for contact-form submissions.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: String,
    recipient: String,
}

impl Mailer {
    /// Build the mailer from configuration.
    ///
    /// Requires `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD` and
    /// `CONTACT_RECIPIENT`; when any is missing the mailer comes up
    /// disabled and a warning is logged. The relay uses STARTTLS on the
    /// configured port.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let (Some(host), Some(username), Some(password), Some(recipient)) = (
            config.smtp_host.as_ref(),
            config.smtp_username.as_ref(),
            config.smtp_password.as_ref(),
            config.contact_recipient.as_ref(),
        ) else {
            tracing::warn!("SMTP not fully configured; contact-form delivery disabled");
            return Ok(Self::disabled());
        };

        let credentials = Credentials::new(username.clone(), password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|err| AppError::Email(format!("Invalid SMTP relay {host}: {err}")))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        let sender = config
            .contact_sender
            .clone()
            .unwrap_or_else(|| username.clone());

        Ok(Self {
            transport: Some(transport),
            sender,
            recipient: recipient.clone(),
        })
    }

    /// A mailer with no transport; every send reports failure.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            sender: String::new(),
            recipient: String::new(),
        }
    }

    /// Send a contact-form submission to the configured recipient.
    ///
    /// # Errors
    ///
    /// `Email` when the mailer is disabled, an address does not parse, the
    /// message cannot be built, or the relay rejects it.
    pub async fn send_contact_form(&self, form: &ContactFormRequest) -> Result<(), AppError> {
        let Some(transport) = &self.transport else {
            return Err(AppError::Email("Email is not configured".to_string()));
        };

        let sender: Mailbox = self
            .sender
            .parse()
            .map_err(|err| AppError::Email(format!("Invalid sender address: {err}")))?;

        let recipient: Mailbox = self
            .recipient
            .parse()
            .map_err(|err| AppError::Email(format!("Invalid recipient address: {err}")))?;

        let message = form
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("No message");

        let body = format!(
            "Name: {}\nCompany: {}\nEmail: {}\nPhone: {}\nMessage: {}\n",
            form.name, form.company, form.email, form.phone, message
        );

        let email = Message::builder()
            .from(sender)
            .to(recipient)
            .subject(format!("New Early Access: {}", form.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|err| AppError::Email(format!("Failed to build message: {err}")))?;

        transport
            .send(email)
            .await
            .map_err(|err| AppError::Email(err.to_string()))?;

        tracing::info!(from = %form.email, "Contact-form email delivered");

        Ok(())
    }
}
