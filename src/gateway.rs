//! Synchronous gateway entry point.
//!
//! Mirrors the environ/start_response calling convention: the host passes
//! an environment mapping and a callback that starts the response, and the
//! body comes back as byte-encoded chunks.

use crate::dispatch::{self, Request};
use hyper::StatusCode;
use std::collections::HashMap;

/// Environment key holding the request path.
pub const PATH_INFO: &str = "PATH_INFO";
/// Environment key holding the request method.
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

/// Gateway entry point.
///
/// Reads `PATH_INFO` (default `/`) and `REQUEST_METHOD` (default `GET`)
/// from `environ`, invokes `start_response` exactly once with the status
/// line and ordered header pairs (`Content-Type` plus a `Content-Length`
/// equal to the exact byte length of the body), and returns the body
/// chunks.
pub fn application<F>(environ: &HashMap<String, String>, start_response: F) -> Vec<Vec<u8>>
where
    F: FnOnce(&str, &[(String, String)]),
{
    let path = environ.get(PATH_INFO).map_or("/", String::as_str);
    let method = environ.get(REQUEST_METHOD).map_or("GET", String::as_str);

    let response = dispatch::handle(&Request::new(path, method));

    let mut headers: Vec<(String, String)> = response
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let body = response.body.into_bytes();
    headers.push(("Content-Length".to_string(), body.len().to_string()));

    start_response(&status_line(response.status), &headers);
    vec![body]
}

/// Format a status code as a `"<code> <reason>"` line, e.g. `200 OK`.
fn status_line(status: u16) -> String {
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");
    format!("{status} {reason}")
}
