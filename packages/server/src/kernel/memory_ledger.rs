//! In-memory access ledger.
//!
//! Process-lifetime only: everything is lost on restart. A database-backed
//! ledger can replace it by implementing [`BaseAccessLedger`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::common::{AccessRequestId, AccessToken};
use crate::domains::access::errors::LedgerError;
use crate::domains::access::models::{AccessGrant, AccessRequest, LedgerStats};
use crate::kernel::BaseAccessLedger;

#[derive(Default)]
struct LedgerInner {
    requests: HashMap<AccessRequestId, AccessRequest>,
    /// token -> owning request
    tokens: HashMap<AccessToken, AccessRequestId>,
}

/// Thread-safe, cloneable in-memory ledger.
///
/// A single lock covers both maps so the token index can never disagree with
/// the request table.
#[derive(Clone, Default)]
pub struct InMemoryAccessLedger {
    inner: Arc<RwLock<LedgerInner>>,
}

impl InMemoryAccessLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseAccessLedger for InMemoryAccessLedger {
    async fn create_request(&self, visitor_email: &str) -> Result<AccessRequest, LedgerError> {
        let mut inner = self.inner.write().await;

        let mut id = AccessRequestId::generate();
        while inner.requests.contains_key(&id) {
            id = AccessRequestId::generate();
        }

        let request = AccessRequest::pending(id, visitor_email);
        inner.requests.insert(id, request.clone());
        debug!(request_id = %id, "Stored pending access request");

        Ok(request)
    }

    async fn approve(&self, id: &AccessRequestId) -> Result<AccessGrant, LedgerError> {
        let mut inner = self.inner.write().await;

        match inner.requests.get(id) {
            None => return Err(LedgerError::NotFound),
            Some(request) if !request.is_pending() => return Err(LedgerError::AlreadyHandled),
            Some(_) => {}
        }

        let mut token = AccessToken::generate();
        while inner.tokens.contains_key(&token) {
            token = AccessToken::generate();
        }

        let request = inner
            .requests
            .get_mut(id)
            .ok_or(LedgerError::NotFound)?;
        request.approve(token);
        let grant = AccessGrant {
            request_id: *id,
            visitor_email: request.visitor_email.clone(),
            token,
        };
        inner.tokens.insert(token, *id);

        Ok(grant)
    }

    async fn is_valid_token(&self, token: &str) -> Result<bool, LedgerError> {
        let Ok(token) = AccessToken::parse(token) else {
            return Ok(false);
        };

        let inner = self.inner.read().await;
        let valid = inner
            .tokens
            .get(&token)
            .and_then(|id| inner.requests.get(id))
            .is_some_and(|request| request.access_token() == Some(&token));

        Ok(valid)
    }

    async fn find(&self, id: &AccessRequestId) -> Result<Option<AccessRequest>, LedgerError> {
        Ok(self.inner.read().await.requests.get(id).cloned())
    }

    async fn stats(&self) -> Result<LedgerStats, LedgerError> {
        let inner = self.inner.read().await;
        let approved = inner.tokens.len();
        Ok(LedgerStats {
            pending: inner.requests.len() - approved,
            approved,
        })
    }
}
