//! Mix server
//!
//! Serves several static files, located by glob patterns, as one HTTP
//! response: contents are concatenated with a newline after each file and
//! served with `Last-Modified` / `ETag` validators so clients can revalidate
//! with conditional GETs.
//!
//! The [`mix`] module is usable on its own; the remaining modules wire it
//! into a small hyper server driven by a TOML configuration.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod mix;
pub mod server;
