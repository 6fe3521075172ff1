//! HTTP surface
//!
//! The `/api` JSON routes, the route-boundary error mapping, server
//! configuration, and the server itself (CORS, request logging, static-asset
//! fallback).

mod api_routes;
mod config;
mod errors;
mod server;

pub use api_routes::{api_routes, ApiState};
pub use config::{Environment, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
