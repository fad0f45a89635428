//! Router construction and listener binding

use std::io::ErrorKind;
use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{chat_handler, health_check};
use crate::state::AppState;

/// Build the application router
///
/// Unrouted paths fall through to static files under `static_dir`.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `host:port`, or `host:port+1` if the port is already in use
///
/// Only one fallback is attempted; any other bind error is returned as is.
pub async fn bind_with_fallback(host: &str, port: u16) -> std::io::Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            let next = port.checked_add(1).ok_or(e)?;
            tracing::warn!("⚠ Port {} is busy. Trying {}...", port, next);
            TcpListener::bind((host, next)).await
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_uses_requested_port_when_free() {
        let listener = bind_with_fallback("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_falls_back_to_next_port() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        if port == u16::MAX {
            return;
        }

        let listener = bind_with_fallback("127.0.0.1", port).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port + 1);
    }
}
