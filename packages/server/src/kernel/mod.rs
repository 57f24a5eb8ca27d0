//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_ledger;
pub mod test_dependencies;
pub mod traits;

pub use deps::{MailerAdapter, ServerDeps, SiteProfile};
pub use memory_ledger::InMemoryAccessLedger;
pub use test_dependencies::{MockMailer, TestDependencies};
pub use traits::*;
