//! Conditional content serving
//!
//! Serves a seekable body with cache validators, answering `304 Not Modified`
//! when the client's copy is still fresh. The body length is learned by
//! seeking to the end, so the source only needs to support that one seek.

use super::request::RequestContext;
use super::{cache, mime, response};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::Response;
use std::io::{self, Read, Seek, SeekFrom};
use std::time::SystemTime;

/// Serve `content` under the logical file name `name`
///
/// * `modified` - last modification time; the Unix epoch means unknown
/// * `preset` - headers to add to whatever response is produced. A preset
///   `Content-Type` replaces the one inferred from `name`; a `304` never
///   carries `Content-Type` or `Content-Length`.
pub fn serve_content<R: Read + Seek>(
    ctx: &RequestContext<'_>,
    name: &str,
    modified: SystemTime,
    content: R,
    preset: &HeaderMap,
) -> Response<Full<Bytes>> {
    let data = match read_sized(content) {
        Ok(data) => data,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to read content for '{name}': {e}"));
            return response::with_headers(response::build_500_response(&e.to_string()), preset);
        }
    };

    let etag = cache::generate_etag(&data);
    let last_modified = cache::format_last_modified(modified);

    if ctx.is_conditional_method() && is_fresh(ctx, &etag, modified) {
        return response::with_headers_except(
            response::build_304_response(&etag, last_modified.as_deref()),
            preset,
            &[CONTENT_TYPE, CONTENT_LENGTH],
        );
    }

    let content_type = preset
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(mime::content_type_for(name)));

    let content_length = data.len();
    let body = if ctx.is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    let mut builder = Response::builder()
        .status(200)
        .header(CONTENT_TYPE, content_type)
        .header("Content-Length", content_length)
        .header("ETag", &etag);
    if let Some(last_modified) = &last_modified {
        builder = builder.header("Last-Modified", last_modified);
    }

    let resp = builder.body(Full::new(body)).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("Failed to build 200 response: {e}"));
        Response::new(Full::new(Bytes::new()))
    });
    response::with_headers(resp, preset)
}

/// `If-None-Match` takes precedence; `If-Modified-Since` is only consulted
/// when the client sent no entity tags.
fn is_fresh(ctx: &RequestContext<'_>, etag: &str, modified: SystemTime) -> bool {
    if ctx.if_none_match.is_some() {
        return cache::check_etag_match(ctx.if_none_match.as_deref(), etag);
    }
    cache::check_not_modified_since(ctx.if_modified_since.as_deref(), modified)
}

/// Size the source by seeking to its end, then read it from the start
fn read_sized<R: Read + Seek>(mut content: R) -> io::Result<Vec<u8>> {
    let size = content.seek(SeekFrom::End(0))?;
    content.seek(SeekFrom::Start(0))?;

    let mut data = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    content.read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body;
    use hyper::{Method, Request};
    use std::io::Cursor;
    use std::time::{Duration, UNIX_EPOCH};

    const MODIFIED_SECS: u64 = 784_111_777;

    fn modified() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(MODIFIED_SECS)
    }

    fn request(method: Method, headers: &[(&str, &str)]) -> Request<()> {
        let mut builder = Request::builder().method(method).uri("/assets/all.js");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap()
    }

    fn serve(req: &Request<()>, preset: &HeaderMap) -> Response<Full<Bytes>> {
        let ctx = RequestContext::from_request(req);
        serve_content(
            &ctx,
            "all.js",
            modified(),
            Cursor::new(b"one\ntwo\n".to_vec()),
            preset,
        )
    }

    #[test]
    fn test_full_response() {
        let resp = serve(&request(Method::GET, &[]), &HeaderMap::new());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
        assert_eq!(resp.headers()["Content-Length"], "8");
        assert_eq!(resp.headers()["Last-Modified"], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert!(resp.headers().contains_key("ETag"));
        assert_eq!(resp.body().size_hint().exact(), Some(8));
    }

    #[test]
    fn test_head_has_headers_but_no_body() {
        let resp = serve(&request(Method::HEAD, &[]), &HeaderMap::new());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "8");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_if_modified_since_not_modified() {
        let req = request(
            Method::GET,
            &[("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT")],
        );
        let resp = serve(&req, &HeaderMap::new());
        assert_eq!(resp.status(), 304);
        assert!(resp.headers().get("Content-Length").is_none());
    }

    #[test]
    fn test_if_modified_since_stale() {
        let req = request(
            Method::GET,
            &[("If-Modified-Since", "Sat, 05 Nov 1994 08:49:37 GMT")],
        );
        assert_eq!(serve(&req, &HeaderMap::new()).status(), 200);
    }

    #[test]
    fn test_if_none_match_wins_over_date() {
        let etag = cache::generate_etag(b"one\ntwo\n");
        let req = request(Method::GET, &[("If-None-Match", etag.as_str())]);
        assert_eq!(serve(&req, &HeaderMap::new()).status(), 304);

        let req = request(
            Method::GET,
            &[
                ("If-None-Match", "\"stale\""),
                ("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT"),
            ],
        );
        assert_eq!(serve(&req, &HeaderMap::new()).status(), 200);
    }

    #[test]
    fn test_conditionals_ignored_for_post() {
        let req = request(
            Method::POST,
            &[("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT")],
        );
        assert_eq!(serve(&req, &HeaderMap::new()).status(), 200);
    }

    #[test]
    fn test_preset_content_type_wins() {
        let mut preset = HeaderMap::new();
        preset.insert(CONTENT_TYPE, HeaderValue::from_static("text/x-custom"));
        preset.insert("X-Mix-Patterns", HeaderValue::from_static("*.js"));

        let resp = serve(&request(Method::GET, &[]), &preset);
        assert_eq!(resp.headers()["Content-Type"], "text/x-custom");
        assert_eq!(resp.headers()["X-Mix-Patterns"], "*.js");
    }

    #[test]
    fn test_not_modified_drops_preset_entity_headers() {
        let mut preset = HeaderMap::new();
        preset.insert(CONTENT_TYPE, HeaderValue::from_static("text/x-custom"));
        preset.insert(CONTENT_LENGTH, HeaderValue::from_static("8"));
        preset.insert("X-Mix-Patterns", HeaderValue::from_static("*.js"));

        let req = request(
            Method::GET,
            &[("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT")],
        );
        let resp = serve(&req, &preset);
        assert_eq!(resp.status(), 304);
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert!(resp.headers().get(CONTENT_LENGTH).is_none());
        assert_eq!(resp.headers()["X-Mix-Patterns"], "*.js");
    }

    #[test]
    fn test_unknown_modification_time() {
        let req = request(
            Method::GET,
            &[("If-Modified-Since", "Sun, 06 Nov 1994 08:49:37 GMT")],
        );
        let ctx = RequestContext::from_request(&req);
        let resp = serve_content(&ctx, "all.js", UNIX_EPOCH, Cursor::new(Vec::new()), &HeaderMap::new());
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().get("Last-Modified").is_none());
        assert_eq!(resp.headers()["Content-Length"], "0");
    }
}
