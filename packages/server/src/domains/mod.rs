// Business domains
pub mod access;
pub mod contact;
