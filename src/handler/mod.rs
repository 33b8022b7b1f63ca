//! Request handler module
//!
//! Responsible for request routing dispatch: method validation, mount
//! lookup and access logging around the mix handlers.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
