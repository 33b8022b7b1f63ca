//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the mix logic:
//! conditional requests, MIME inference and status-specific response builders.

pub mod cache;
pub mod conditional;
pub mod mime;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use conditional::serve_content;
pub use request::RequestContext;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_options_response, with_headers, with_headers_except,
};
