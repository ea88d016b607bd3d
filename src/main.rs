//! nestegg server binary.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8000);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nestegg=info")),
        )
        .init();

    let addr = match std::env::var("NESTEGG_ADDR") {
        Ok(raw) => match raw.parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::error!(%raw, %err, "invalid NESTEGG_ADDR");
                std::process::exit(2);
            }
        },
        Err(_) => SocketAddr::from(DEFAULT_ADDR),
    };

    if let Err(err) = nestegg::server::serve(addr).await {
        tracing::error!(%err, "server exited");
        std::process::exit(1);
    }
}
