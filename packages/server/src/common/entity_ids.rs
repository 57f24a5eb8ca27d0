//! Typed ID definitions for the access ledger.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{AccessRequestId, AccessToken};
//!
//! let request_id = AccessRequestId::generate();
//! let token = AccessToken::generate();
//!
//! // This would be a compile error:
//! // let wrong: AccessToken = request_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for a visitor's access request.
pub struct AccessRequestEntity;

/// Marker type for the credential issued on approval.
pub struct AccessTokenEntity;

// ============================================================================
// ID type aliases
// ============================================================================

/// Identifier embedded in the owner's approval link.
pub type AccessRequestId = Id<AccessRequestEntity>;

/// Opaque viewing credential embedded in the visitor's portfolio link.
pub type AccessToken = Id<AccessTokenEntity>;
