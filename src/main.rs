//! Tasktrack HTTP server.
//!
//! Loads `.env`, reads [`AppConfig`] from the environment, installs the
//! `tracing` subscriber, prepares storage, and serves the router until
//! SIGINT or SIGTERM arrives.

use std::process::ExitCode;

use tasktrack::config::AppConfig;
use tasktrack::http::{AppState, router};
use tasktrack::storage;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside development.
    let dotenv_result = dotenvy::dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_tracing("info");
            tracing::error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);
    if let Err(error) = dotenv_result {
        tracing::debug!(%error, "no .env file loaded");
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server terminated");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        profile = ?config.profile,
        storage = ?config.storage_mode,
        "starting tasktrack"
    );

    let repositories = storage::connect(config).await?;
    let application = router(AppState::from_repositories(repositories));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or, on Unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
