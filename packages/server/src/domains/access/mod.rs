//! Access domain - gatekeeps the portfolio behind owner approval
//!
//! Flow:
//!   visitor submits email → pending request, owner emailed an approval link
//!   owner clicks link     → request approved, visitor emailed a token link
//!   visitor opens link    → token checked against the ledger
//!
//! Requests live in a `BaseAccessLedger`; nothing is ever deleted.

pub mod actions;
pub mod emails;
pub mod errors;
pub mod models;

pub use actions::{approve_request, authorize_viewer, request_access};
pub use errors::{AccessError, LedgerError};
pub use models::{AccessGrant, AccessRequest, AccessStatus, LedgerStats};
