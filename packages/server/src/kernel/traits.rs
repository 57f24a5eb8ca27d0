// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "approve a request and notify the visitor") lives in
// domain actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMailer, BaseAccessLedger)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::AccessRequestId;
use crate::domains::access::errors::LedgerError;
use crate::domains::access::models::{AccessGrant, AccessRequest, LedgerStats};

// =============================================================================
// Access Ledger Trait (Infrastructure - request/status/token table)
// =============================================================================

/// Storage for access requests and the tokens issued on approval.
///
/// Implementations must never issue the same request id or token twice, and
/// a failed `approve` must leave the ledger unchanged.
#[async_trait]
pub trait BaseAccessLedger: Send + Sync {
    /// Store a new pending request for `visitor_email` under a fresh id.
    async fn create_request(&self, visitor_email: &str) -> Result<AccessRequest, LedgerError>;

    /// Approve a pending request, issuing a fresh token.
    async fn approve(&self, id: &AccessRequestId) -> Result<AccessGrant, LedgerError>;

    /// True iff `token` belongs to an approved request.
    ///
    /// Takes the raw string from the URL; anything malformed is just invalid.
    async fn is_valid_token(&self, token: &str) -> Result<bool, LedgerError>;

    async fn find(&self, id: &AccessRequestId) -> Result<Option<AccessRequest>, LedgerError>;

    async fn stats(&self) -> Result<LedgerStats, LedgerError>;
}

// =============================================================================
// Mailer Trait (Infrastructure - outbound email)
// =============================================================================

/// A fully rendered outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send a single HTML email
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<()>;
}
