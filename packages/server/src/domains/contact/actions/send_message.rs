//! Send message action

use tracing::info;

use crate::common::html::escape;
use crate::kernel::{OutboundEmail, ServerDeps};

/// Contact form fields. Missing fields are treated as empty.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Forward a contact-form message to the owner.
///
/// Returns whether the email was delivered; failures are logged, never
/// returned.
pub async fn send_message(contact: &ContactMessage, deps: &ServerDeps) -> bool {
    let email = contact_email(&deps.site.owner_email, contact);
    let delivered = deps.deliver(email).await;
    info!(from = %contact.email, delivered, "Contact message processed");
    delivered
}

fn contact_email(owner_email: &str, contact: &ContactMessage) -> OutboundEmail {
    let html = format!(
        r#"
    <h3>You have a new message!</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Message:</strong></p>
    <p>{message}</p>
    "#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        message = escape(&contact.message),
    );

    OutboundEmail {
        to: owner_email.to_string(),
        subject: format!("New Message from {} via Portfolio", contact.name),
        html,
    }
}
