//! disk2iso dashboard widget server.
//!
//! Serves the audio widgets of the web dashboard and stops on Ctrl+C.

use disk2iso_web_lib::app::SharedState;
use disk2iso_web_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    disk2iso_web_lib::init_tracing();

    tracing::info!("Starting disk2iso widget server");

    let config = disk2iso_web_lib::init_foundation()?;
    let state = SharedState::new(config)?;

    let server_state = state.clone();
    let mut server_handle = tokio::spawn(server::start_server(server_state));

    tracing::info!(
        addr = %state.config().listen_addr(),
        "Widget server running. Press Ctrl+C to stop."
    );

    tokio::select! {
        result = &mut server_handle => {
            // server stopped without a shutdown request (bind failure, accept error)
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => {
                    tracing::error!("Server failed: {e:#}");
                    Err(e)
                }
                Err(e) => Err(e.into()),
            };
        }
        signal = tokio::signal::ctrl_c() => signal?,
    }
    tracing::info!("Shutting down...");

    state.shutdown_token().cancel();
    match server_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Server ended with error during shutdown: {e:#}"),
        Err(e) => tracing::warn!("Server task ended abnormally: {e}"),
    }
    Ok(())
}
