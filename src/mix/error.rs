//! Error types for pattern resolution and file concatenation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File operation that failed while building a mix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Stat,
    Open,
    Read,
}

impl FileOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stat => "stat",
            Self::Open => "open",
            Self::Read => "read",
        }
    }
}

#[derive(Debug, Error)]
pub enum MixError {
    /// A glob pattern is malformed. Raised once, when the patterns are resolved.
    #[error("syntax error in pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A resolved file could not be stat'ed, opened or read at request time.
    #[error("{} {}: {source}", op.as_str(), path.display())]
    Io {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MixError {
    pub(crate) fn io(op: FileOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Whether the error was raised while resolving patterns
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern { .. })
    }
}
