//! Async request/response entry point.
//!
//! Mirrors the `fetch(request) -> response` calling convention: the host
//! hands over a request value carrying the full URL and method, and gets a
//! plain response descriptor back.
//!
//! The URL is reduced to its path component before routing, so a request
//! for `http://host:8080/health` and one for `/health` match the same way.

use crate::dispatch::{self, Request, Response};
use hyper::Uri;

/// A request as the async hosting convention delivers it.
///
/// `url` may be a full URL including scheme, host and port, or just a path.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub method: String,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
        }
    }
}

/// Async entry point: normalize the URL to a path and dispatch.
pub async fn fetch(request: &FetchRequest) -> Response {
    let path = normalize_path(&request.url);
    dispatch::handle(&Request::new(path, request.method.as_str()))
}

/// Reduce a URL to its path component for routing.
///
/// A bare authority (`http://host:8080`) has the empty path and routes as
/// `/`. Query strings are not part of the route. Input that does not parse
/// as a URI falls back to `/`, matching the gateway's missing-key default.
fn normalize_path(url: &str) -> String {
    url.parse::<Uri>()
        .map_or_else(|_| "/".to_string(), |uri| uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<T>(future: impl std::future::Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("http://localhost:8080/health"), "/health");
        assert_eq!(normalize_path("http://localhost:8080/"), "/");
        assert_eq!(normalize_path("http://localhost:8080"), "/");
        assert_eq!(normalize_path("/health?verbose=1"), "/health");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_fetch_health_from_full_url() {
        let resp = block_on(fetch(&FetchRequest::new(
            "http://localhost:8080/health",
            "GET",
        )));
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );

        let body: serde_json::Value = serde_json::from_str(&resp.body).expect("valid JSON body");
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn test_fetch_root_from_bare_authority() {
        let resp = block_on(fetch(&FetchRequest::new("http://localhost:8080", "GET")));
        assert_eq!(resp.status, 200);

        let body: serde_json::Value = serde_json::from_str(&resp.body).expect("valid JSON body");
        assert!(body["endpoints"].is_array());
    }

    // A path segment that happens to spell a port number is an ordinary
    // path, not the root route.
    #[test]
    fn test_port_lookalike_path_is_not_root() {
        let resp = block_on(fetch(&FetchRequest::new("http://localhost/8080", "GET")));
        assert_eq!(resp.status, 404);

        let body: serde_json::Value = serde_json::from_str(&resp.body).expect("valid JSON body");
        assert_eq!(body["path"], "/8080");
    }

    // Suffix lookalikes must not match: only the exact path routes.
    #[test]
    fn test_suffix_match_is_not_used() {
        let resp = block_on(fetch(&FetchRequest::new(
            "http://localhost:8080/api/health",
            "GET",
        )));
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_fetch_echoes_method() {
        let resp = block_on(fetch(&FetchRequest::new("/missing", "PATCH")));
        assert_eq!(resp.status, 404);

        let body: serde_json::Value = serde_json::from_str(&resp.body).expect("valid JSON body");
        assert_eq!(body["method"], "PATCH");
    }
}
