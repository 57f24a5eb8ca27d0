pub mod access_request;

pub use access_request::{AccessGrant, AccessRequest, AccessStatus, LedgerStats};
