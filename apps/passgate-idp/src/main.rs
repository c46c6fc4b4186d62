//! passgate identity provider server.
//!
//! Serves registration, login and bearer-protected routes over HTTP.

mod app;
mod config;
mod health;
mod logging;

use config::Config;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("FATAL: Configuration error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        app_env = %config.app_env,
        token_ttl_secs = config.token_ttl_secs,
        "Starting passgate-idp"
    );

    if let Some(value) = &config.unrecognized_app_env {
        tracing::warn!(value = %value, "Unrecognized APP_ENV value, defaulting to development");
    }

    match config.validate_security_config() {
        Ok(warnings) => {
            for warning in &warnings {
                tracing::warn!(target: "security", "{warning}");
            }
        }
        Err(errors) => {
            for error in &errors {
                tracing::error!(target: "security", "{error}");
            }
            tracing::error!(
                target: "security",
                count = errors.len(),
                "Refusing to start in production with insecure configuration"
            );
            std::process::exit(1);
        }
    }

    let router = match app::build_app(&config) {
        Ok(router) => router,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr(), error = %e, "Invalid bind address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(%addr, "Listening");

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
