//! Mix handler
//!
//! Resolves its patterns once, at construction, and serves the resulting
//! file list on every request. A pattern error is kept and returned to
//! every request instead of ever consulting the (empty) file list.

use super::error::MixError;
use super::{glob, serve};
use crate::http::{self, RequestContext};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::Response;
use std::path::PathBuf;

pub const X_MIX_PATTERNS: &str = "x-mix-patterns";
pub const X_MIX_FILES: &str = "x-mix-files";

#[derive(Debug)]
pub struct MixHandler {
    patterns: Vec<String>,
    files: Vec<PathBuf>,
    error: Option<MixError>,
    headers: HeaderMap,
}

impl MixHandler {
    /// Build a handler for the given files or patterns
    ///
    /// By default every response carries:
    /// - `X-Mix-Patterns` - comma separated list of patterns
    /// - `X-Mix-Files` - comma separated list of matching files
    ///
    /// Use [`MixHandler::clear_headers`] to drop them.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns: Vec<String> = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        let (files, error) = match glob::resolve(&patterns) {
            Ok(files) => (files, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        let mut handler = Self {
            patterns,
            files,
            error,
            headers: HeaderMap::new(),
        };

        let patterns = handler.patterns.join(", ");
        let files = handler
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        handler.set_diagnostic(X_MIX_PATTERNS, &patterns);
        handler.set_diagnostic(X_MIX_FILES, &files);
        handler
    }

    fn set_diagnostic(&mut self, name: &'static str, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(HeaderName::from_static(name), value);
            }
            Err(e) => logger::log_warning(&format!("Omitting {name} header: {e}")),
        }
    }

    /// Remove all preset response headers, including the `X-Mix` ones
    pub fn clear_headers(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    /// Headers added to every response this handler produces
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Resolution error recorded at construction, if any
    pub const fn error(&self) -> Option<&MixError> {
        self.error.as_ref()
    }

    /// Serve one request
    pub async fn serve(&self, ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
        if let Some(err) = &self.error {
            return http::with_headers(http::build_500_response(&err.to_string()), &self.headers);
        }
        serve::serve_files(ctx, &self.files, &self.headers).await
    }
}
