//! HTTP server
//!
//! Combines the `/api` routes, the health check, CORS, request-timing logging,
//! and (in production, when configured) the built-frontend static fallback.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Request, http::StatusCode, middleware, middleware::Next, response::IntoResponse,
    response::Response, routing::get, Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::observability::{Logger, Severity};

use super::api_routes::{api_routes, ApiState};
use super::config::{Environment, ServerConfig};

/// HTTP server for the portal backend
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(state: Arc<ApiState>) -> Self {
        Self::with_config(ServerConfig::default(), state)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServerConfig, state: Arc<ApiState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &ServerConfig, state: Arc<ApiState>) -> Router {
        // Permissive CORS; the API carries no credentials
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let mut router = Router::new()
            // Health check at root level
            .merge(health_routes())
            // JSON API under /api
            .nest("/api", api_routes(state));

        // Non-API requests fall through to the built frontend. In development
        // an external dev server owns the frontend, so nothing is mounted.
        if config.env == Environment::Production {
            if let Some(dir) = &config.public_dir {
                let index = ServeFile::new(dir.join("index.html"));
                router = router.fallback_service(ServeDir::new(dir).not_found_service(index));
            }
        }

        router
            .layer(middleware::from_fn(request_log))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address: {}", e),
            )
        })?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string()), ("port", &addr.port().to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Request-timing middleware: one log line per `/api` request.
async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    if path.starts_with("/api") {
        let status = response.status().as_u16().to_string();
        let duration_ms = start.elapsed().as_millis().to_string();
        Logger::log(
            Severity::Info,
            "http_request",
            &[
                ("method", method.as_str()),
                ("path", path.as_str()),
                ("status", status.as_str()),
                ("duration_ms", duration_ms.as_str()),
            ],
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(Arc::new(ApiState::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, Arc::new(ApiState::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(Arc::new(ApiState::new()));
        let _router = server.router();
        // If we get here, router construction succeeded
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
