//! Web API module for ATOM.
//!
//! This module exposes topics and their messages over a JSON REST API.
//! Callers authenticate with bearer JWTs issued by a shared-secret
//! authentication service.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
