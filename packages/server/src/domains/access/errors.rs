use thiserror::Error;

/// Failures reported by an access ledger implementation.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Access request not found")]
    NotFound,

    #[error("Access request already handled")]
    AlreadyHandled,

    #[error("Ledger storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Errors surfaced by access actions to the HTTP layer.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Email is required")]
    MissingEmail,

    /// Unknown, malformed, or already-approved request id.
    #[error("Invalid or expired approval link")]
    NotFound,

    /// Deliberately carries nothing about the offered token.
    #[error("Access forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LedgerError> for AccessError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound | LedgerError::AlreadyHandled => AccessError::NotFound,
            LedgerError::Storage(e) => AccessError::Internal(e),
        }
    }
}
