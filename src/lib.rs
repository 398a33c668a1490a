//! Minimal HTTP responder exposing a health check and a server-info
//! document, plus a catch-all not-found response.
//!
//! The routing logic lives once in [`dispatch`]; everything else adapts it
//! to a hosting convention:
//! - [`gateway`]: synchronous environ/start_response calling convention
//! - [`fetch`]: async request-object calling convention
//! - [`handler`]: hyper service used by the built-in server binary

pub mod config;
pub mod dispatch;
pub mod fetch;
pub mod gateway;
pub mod handler;
pub mod logger;
