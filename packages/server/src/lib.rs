// Portfolio Access Gate - API Core
//
// Gatekeeps a personal portfolio behind an email-approval workflow:
// a visitor requests access, the owner approves via an emailed link,
// and the visitor receives a unique viewing token.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
