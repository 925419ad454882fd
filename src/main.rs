use anyhow::Context as _;
use tokio::{net::TcpListener, signal};
use tracing::{debug, info};

use crate::config::CONFIG;
use crate::error::ServerError;
use crate::setup::SetupResult;
use crate::state::{AppData, AppState};

mod app;
mod catalog;
mod config;
mod error;
mod logging;
mod schema;
mod setup;
mod state;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let SetupResult { catalog } = setup::setup_all().await.context("setup failed")?;

    let schema = schema::schema();
    debug!("Schema:\n{}", schema::sdl(&schema));

    let app_state = AppState::new(AppData::new(catalog));
    let app = app::build_router(app_state, schema);

    let addr = CONFIG.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Server running at http://{}", addr);
    println!("🚀 Server ready at {}", CONFIG.public_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    Ok(())
}
