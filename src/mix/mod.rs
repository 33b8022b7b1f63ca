//! File mixing
//!
//! Bundles the files matched by a set of glob patterns into one HTTP
//! response: patterns are resolved once into an ordered, duplicate-free
//! file list, and each request concatenates the current file contents.

pub mod buffer;
pub mod error;
pub mod glob;
pub mod handler;
pub mod serve;

pub use buffer::SizableBuffer;
pub use error::{FileOp, MixError};
pub use self::glob::resolve;
pub use handler::{MixHandler, X_MIX_FILES, X_MIX_PATTERNS};
pub use serve::{concat_files, serve_files, MixPayload};
