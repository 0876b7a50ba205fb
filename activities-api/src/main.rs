use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::adapters::outbound::sqlite::{fixtures, SqliteActivityStore};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = config::read_config().expect("Failed to read configuration");

    let store = SqliteActivityStore::connect(&settings.database)
        .await
        .expect("Failed to connect to database");
    store
        .initialize()
        .await
        .expect("Failed to create database schema");

    if settings.application.seed_fixtures {
        fixtures::seed_if_empty(store.pool())
            .await
            .expect("Failed to seed fixtures");
    }

    let app_state = factory::app_state(Arc::new(store));
    let app = router::create(app_state, &settings.application);

    let address = settings.application.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind {address}: {err}"));
    tracing::info!("listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("activities_api=debug,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
    tracing::info!("shutting down");
}
