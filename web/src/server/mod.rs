pub mod api;
pub mod router;

use crate::app::SharedState;
use anyhow::Result;

/// Start the axum HTTP server; returns after the shutdown token is cancelled.
pub async fn start_server(state: SharedState) -> Result<()> {
    let addr = state.config().listen_addr();
    let shutdown_token = state.shutdown_token().clone();
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Widget server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::net::{IpAddr, Ipv4Addr};

    #[tokio::test]
    async fn start_server_fails_when_port_is_taken() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = AppConfig {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            server_port: taken.local_addr().unwrap().port(),
            ..AppConfig::default()
        };
        let state = SharedState::new(config).unwrap();

        assert!(start_server(state).await.is_err());
    }
}
