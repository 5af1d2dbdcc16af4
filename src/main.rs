// Copyright 2023. The polls authors all rights reserved.

use std::net::SocketAddr;

use axum::Server;
use dotenvy::dotenv;
use polls::{about, app, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load environment variables from '.env' file
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polls=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting the server...");

    let config = Config::new();
    let address: SocketAddr = match config.address.parse() {
        Ok(address) => address,
        Err(err) => {
            error!("invalid server address {}: {err}", config.address);
            std::process::exit(1);
        }
    };

    let server = match Server::try_bind(&address) {
        Ok(builder) => builder.serve(app().into_make_service()),
        Err(err) => {
            error!("failed to bind {address}: {err}");
            std::process::exit(1);
        }
    };

    print_server_started(&config);
    if let Err(err) = server.with_graceful_shutdown(shutdown_signal()).await {
        error!("server error: {err}");
        std::process::exit(1);
    }
    info!("Server stopped.");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {err}");
    }
}

fn print_server_started(config: &Config) {
    println!();
    print!("{}", about());
    info!(port = config.port, "Server started successfully. (address: {})", config.address);
}
