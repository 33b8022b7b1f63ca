//! Concatenating responder
//!
//! Reads every file of a resolved list in order, appends one newline after
//! each, tracks the newest modification time and serves the result through
//! the conditional-content responder.

use super::buffer::SizableBuffer;
use super::error::{FileOp, MixError};
use crate::http::{self, RequestContext};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::Response;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Concatenated file contents plus the newest modification time among them
#[derive(Debug)]
pub struct MixPayload {
    pub data: Vec<u8>,
    pub latest_modification: SystemTime,
}

/// Serve all `files` as one response
///
/// Content-Type (unless preset) is inferred from the last segment of the
/// request path, so `/assets/all.js` is served as JavaScript whatever the
/// sources are called.
pub async fn serve_files(
    ctx: &RequestContext<'_>,
    files: &[PathBuf],
    preset: &HeaderMap,
) -> Response<Full<Bytes>> {
    match concat_files(files).await {
        Ok(payload) => http::serve_content(
            ctx,
            base_name(ctx.path),
            payload.latest_modification,
            SizableBuffer::new(payload.data),
            preset,
        ),
        Err(e) => {
            logger::log_error(&format!("Failed to mix files for {}: {e}", ctx.path));
            http::with_headers(http::build_500_response(&e.to_string()), preset)
        }
    }
}

/// Read `files` in order into one buffer, a newline after each file
///
/// The first failure aborts; bytes gathered so far are dropped with it.
pub async fn concat_files(files: &[PathBuf]) -> Result<MixPayload, MixError> {
    let mut data = Vec::new();
    let mut latest_modification = UNIX_EPOCH;

    for path in files {
        let modified = fs::metadata(path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| MixError::io(FileOp::Stat, path, e))?;
        latest_modification = latest_modification.max(modified);

        append_file(path, &mut data).await?;
        data.push(b'\n');
    }

    Ok(MixPayload {
        data,
        latest_modification,
    })
}

/// The file handle lives only for the duration of this call
async fn append_file(path: &Path, data: &mut Vec<u8>) -> Result<(), MixError> {
    let mut file = fs::File::open(path)
        .await
        .map_err(|e| MixError::io(FileOp::Open, path, e))?;
    file.read_to_end(data)
        .await
        .map_err(|e| MixError::io(FileOp::Read, path, e))?;
    Ok(())
}

/// Last element of a URL path, trailing slashes ignored
///
/// An empty path yields `.` and a path of only slashes yields `/`.
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
