//! HTTP surface: routing, request timing, and process metrics.
//!
//! Everything request-scoped lives inside the handlers; the only shared
//! state is the last-request-duration cell that `/performance` reports.

mod handlers;
mod metrics;
pub mod wire;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};

/// Shared state for the HTTP surface.
#[derive(Clone, Default)]
pub struct AppState {
    clock: Arc<metrics::RequestClock>,
}

/// Build the service router with all endpoints wired up.
#[must_use]
pub fn router() -> Router {
    let state = AppState::default();
    Router::new()
        .route("/transactions:parse", post(handlers::parse))
        .route("/transactions:validator", post(handlers::validate))
        .route("/transactions:filter", post(handlers::filter))
        .route("/returns:nps", post(handlers::returns_nps))
        .route("/returns:index", post(handlers::returns_index))
        .route("/health", get(handlers::health))
        .route("/performance", get(handlers::performance))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_request_time,
        ))
        .with_state(state)
}

async fn track_request_time(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    state.clock.record(elapsed_ms);
    tracing::debug!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms,
        "handled request"
    );
    response
}

/// Bind `addr` and serve until the listener fails.
///
/// # Errors
///
/// Propagates bind and accept-loop I/O errors.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "nestegg server listening");
    axum::serve(listener, router()).await
}
