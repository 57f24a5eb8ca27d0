use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{AccessRequestId, AccessToken};

/// A visitor's request to view the portfolio.
///
/// The access token lives inside [`AccessStatus::Approved`], so a token can
/// only exist on an approved request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: AccessRequestId,
    pub visitor_email: String,
    #[serde(flatten)]
    pub status: AccessStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AccessStatus {
    Pending,
    Approved {
        access_token: AccessToken,
        approved_at: DateTime<Utc>,
    },
}

impl AccessRequest {
    /// New pending request.
    pub fn pending(id: AccessRequestId, visitor_email: impl Into<String>) -> Self {
        Self {
            id,
            visitor_email: visitor_email.into(),
            status: AccessStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, AccessStatus::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.status, AccessStatus::Approved { .. })
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        match &self.status {
            AccessStatus::Pending => None,
            AccessStatus::Approved { access_token, .. } => Some(access_token),
        }
    }

    /// Transition pending -> approved. Returns `false` (and changes nothing)
    /// if the request was already approved.
    pub fn approve(&mut self, access_token: AccessToken) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.status = AccessStatus::Approved {
            access_token,
            approved_at: Utc::now(),
        };
        true
    }
}

/// Result of a successful approval: everything needed to notify the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub request_id: AccessRequestId,
    pub visitor_email: String,
    pub token: AccessToken,
}

/// Counts reported by `/health`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub pending: usize,
    pub approved: usize,
}
