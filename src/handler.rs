//! Hyper service adapter used by the server binary.
//!
//! Converts each `hyper::Request` into the dispatcher's request shape and
//! the returned descriptor back into a `hyper::Response`. HEAD requests get
//! an empty body but keep the Content-Length of the full body.

use crate::config::Config;
use crate::dispatch::{self, Request};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::convert::Infallible;
use std::sync::Arc;

pub async fn handle_request(
    req: hyper::Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    if config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }

    let response = dispatch::handle(&Request::new(uri.path(), method.as_str()));

    if config.logging.access_log {
        logger::log_response(response.status, response.body.len());
    }

    Ok(build_hyper_response(response, &config, is_head))
}

fn build_hyper_response(
    response: dispatch::Response,
    config: &Config,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = response.body.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(response.body)
    };

    let mut builder = Response::builder()
        .status(response.status)
        .header("Content-Length", content_length)
        .header("Server", &config.http.server_name);

    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    if config.http.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}
