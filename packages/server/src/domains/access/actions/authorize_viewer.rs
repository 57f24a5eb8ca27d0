use tracing::warn;

use crate::domains::access::errors::AccessError;
use crate::kernel::ServerDeps;

/// Check a portfolio token. Every rejection is the same `Forbidden`.
pub async fn authorize_viewer(token: &str, deps: &ServerDeps) -> Result<(), AccessError> {
    if deps.ledger.is_valid_token(token).await? {
        Ok(())
    } else {
        warn!("Portfolio view rejected: invalid token");
        Err(AccessError::Forbidden)
    }
}
