// Thin SMTP-over-TLS client used to deliver owner and visitor notifications.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub mod error;

pub use error::MailerError;

/// Default implicit-TLS submission port.
pub const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Debug, Clone)]
pub struct MailerOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Display name used in the From header
    pub from_name: String,
    pub from_address: String,
}

#[derive(Clone)]
pub struct MailerService {
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for MailerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerService")
            .field("sender", &self.sender.to_string())
            .finish_non_exhaustive()
    }
}

impl MailerService {
    /// Build the service. No connection is opened until the first send.
    pub fn new(options: MailerOptions) -> Result<Self, MailerError> {
        let sender = sender_mailbox(&options.from_name, &options.from_address)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&options.host)?
            .port(options.port)
            .credentials(Credentials::new(options.username, options.password))
            .build();

        Ok(Self { sender, transport })
    }

    /// The mailbox every message is sent from.
    pub fn sender(&self) -> &Mailbox {
        &self.sender
    }

    /// Assemble an HTML message without sending it.
    pub fn build_message(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<Message, MailerError> {
        let to: Mailbox = recipient.trim().parse()?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())?;

        Ok(message)
    }

    pub async fn send_html(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), MailerError> {
        let message = self.build_message(recipient, subject, html)?;

        let response = self.transport.send(message).await?;
        tracing::debug!(
            recipient = %recipient,
            code = %response.code(),
            "SMTP server accepted message"
        );

        Ok(())
    }
}

fn sender_mailbox(name: &str, address: &str) -> Result<Mailbox, MailerError> {
    let address: Address = address.trim().parse()?;
    let name = name.trim();
    let name = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };
    Ok(Mailbox::new(name, address))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> MailerOptions {
        MailerOptions {
            host: "smtp.example.com".to_string(),
            port: DEFAULT_SMTP_PORT,
            username: "owner@example.com".to_string(),
            password: "app-password".to_string(),
            from_name: "Jane Doe".to_string(),
            from_address: "owner@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sender_carries_display_name() {
        let service = MailerService::new(options()).unwrap();
        assert_eq!(service.sender().name.as_deref(), Some("Jane Doe"));
        assert_eq!(service.sender().email.to_string(), "owner@example.com");
    }

    #[tokio::test]
    async fn test_build_message_is_html() {
        let service = MailerService::new(options()).unwrap();
        let message = service
            .build_message("visitor@example.org", "Hello", "<p>Hi</p>")
            .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Hello"));
        assert!(raw.contains("To: visitor@example.org"));
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("<p>Hi</p>"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected() {
        let service = MailerService::new(options()).unwrap();
        let result = service.build_message("not-an-address", "Hello", "<p>Hi</p>");
        assert!(matches!(result, Err(MailerError::InvalidAddress(_))));
    }

    #[test]
    fn test_invalid_sender_address() {
        let mut opts = options();
        opts.from_address = "nope".to_string();
        assert!(matches!(
            MailerService::new(opts),
            Err(MailerError::InvalidAddress(_))
        ));
    }
}
