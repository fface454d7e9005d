use std::sync::Arc;

use clap::Parser;
use linkboard::app::create_app;
use linkboard::config::{Cli, Config};
use linkboard::db::Database;
use linkboard::handler::AppState;
use tokio::signal;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt().json().init();
    tracing::info!("linkboard.svc starting");

    let mut cfg = Config::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        std::process::exit(1);
    });
    if let Some(port) = args.port {
        cfg.port = port;
    }

    let db = Arc::new(Database::connect(&cfg).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup database");
        std::process::exit(1);
    }));

    let address = format!("0.0.0.0:{}", cfg.port);
    let app = create_app(AppState { db });

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("linkboard.svc running on {}", &address);
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, shutting down");
        }
    }

    tracing::info!("linkboard.svc going off");
}
