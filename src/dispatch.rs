//! Request dispatch: the three fixed routes and their JSON payloads.
//!
//! `handle` is a pure function of the request plus the wall clock. Hosting
//! adapters convert their native argument shapes into [`Request`] and the
//! returned [`Response`] back out; no routing logic lives anywhere else.

use chrono::{SecondsFormat, Utc};
use serde_json::json;
use std::collections::HashMap;

/// Implementation identifier reported in the health payload.
pub const SERVER_IDENT: &str = "michelin-rust";

/// Human-readable server name reported in the info payload.
pub const SERVER_NAME: &str = "Michelin Rust Server";

const REASON: &str = "Avoiding TypeScript io_uring bug";

/// An incoming request, reduced to the two fields routing needs.
///
/// The method is informational only: it is never used for branching, just
/// echoed back in the not-found payload.
#[derive(Debug, Clone)]
pub struct Request {
    pub path: String,
    pub method: String,
}

impl Request {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

/// A produced response: status code, headers and serialized JSON body.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Response {
    fn json(status: u16, body: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status,
            headers,
            body: body.to_string(),
        }
    }
}

/// Route a request to one of the three fixed outcomes.
///
/// Path matching is exact: `/health` and `/` are the only routes, anything
/// else is a 404 that echoes the request back.
pub fn handle(request: &Request) -> Response {
    match request.path.as_str() {
        "/health" => Response::json(
            200,
            &json!({
                "status": "ok",
                "server": SERVER_IDENT,
                "timestamp": utc_timestamp(),
                "note": "Using Rust to avoid io_uring bug",
            }),
        ),
        "/" => Response::json(
            200,
            &json!({
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "language": "Rust",
                "reason": REASON,
                "endpoints": [
                    {"path": "/health", "method": "GET", "description": "Health check"},
                    {"path": "/", "method": "GET", "description": "Server info"},
                ],
            }),
        ),
        _ => Response::json(
            404,
            &json!({
                "error": "Not Found",
                "path": request.path,
                "method": request.method,
            }),
        ),
    }
}

/// Current UTC time as ISO-8601 with microsecond precision and a trailing `Z`.
fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
