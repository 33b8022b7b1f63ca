//! Request context
//!
//! The subset of an incoming request that the serving layer looks at.

use hyper::header::{HeaderName, IF_MODIFIED_SINCE, IF_NONE_MATCH};
use hyper::{Method, Request};

/// Request context encapsulating information needed for request processing
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<B>(req: &'a Request<B>) -> Self {
        let header = |name: HeaderName| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };

        Self {
            method: req.method(),
            path: req.uri().path(),
            is_head: req.method() == Method::HEAD,
            if_none_match: header(IF_NONE_MATCH),
            if_modified_since: header(IF_MODIFIED_SINCE),
        }
    }

    /// Conditional headers are only honoured for safe reads
    pub fn is_conditional_method(&self) -> bool {
        matches!(*self.method, Method::GET | Method::HEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() {
        let req = Request::builder()
            .method(Method::HEAD)
            .uri("/assets/all.js?v=2")
            .header("If-None-Match", "\"abc\"")
            .header("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT")
            .body(())
            .unwrap();

        let ctx = RequestContext::from_request(&req);
        assert_eq!(ctx.path, "/assets/all.js");
        assert!(ctx.is_head);
        assert!(ctx.is_conditional_method());
        assert_eq!(ctx.if_none_match.as_deref(), Some("\"abc\""));
        assert_eq!(
            ctx.if_modified_since.as_deref(),
            Some("Sun, 06 Nov 1994 08:49:37 GMT")
        );
    }

    #[test]
    fn test_post_is_not_conditional() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(())
            .unwrap();
        let ctx = RequestContext::from_request(&req);
        assert!(!ctx.is_head);
        assert!(!ctx.is_conditional_method());
        assert!(ctx.if_none_match.is_none());
    }
}
