// HTTP routes
pub mod access;
pub mod contact;
pub mod health;
pub mod portfolio;

pub use access::*;
pub use contact::*;
pub use health::*;
pub use portfolio::*;
