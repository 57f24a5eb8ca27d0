//! Contact domain - forwards portfolio contact-form messages to the owner

pub mod actions;

pub use actions::{send_message, ContactMessage};
