//! Shakespeare gateway entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Load configuration** — read `.env` (if present) and the `GATEWAY_*`
//!    environment variables; see [`config`].
//! 2. **Wire observability** — install the `tracing-subscriber` console layer
//!    and, when `OTEL_EXPORTER_OTLP_ENDPOINT` is set, an OTLP exporter.
//! 3. **Construct infrastructure** — build the PokeAPI and FunTranslations
//!    clients and inject them into a [`gateway::TranslationPipeline`].
//! 4. **Serve** — bind the listener and run the axum router until Ctrl-C or
//!    SIGTERM.

mod config;
mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use funtranslations::FunTranslationsClient;
use gateway::TranslationPipeline;
use pokeapi::PokeApiClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let telemetry = telemetry::init(config.log_format)?;

    let pipeline = build_pipeline(&config)?;
    let app = api::build_router(pipeline);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    info!(
        addr = %config.bind_addr,
        pokeapi = %config.pokeapi_base_url,
        translation = %config.translation_url,
        timeout_secs = config.upstream_timeout.as_secs(),
        "shakespeare-gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shakespeare-gateway stopped");
    telemetry.shutdown();
    Ok(())
}

fn build_pipeline(config: &Config) -> anyhow::Result<TranslationPipeline> {
    let lookup = PokeApiClient::new(config.pokeapi_base_url.clone(), config.upstream_timeout)
        .context("failed to create PokeAPI client")?;
    let transformer =
        FunTranslationsClient::new(config.translation_url.clone(), config.upstream_timeout)
            .context("failed to create translation client")?;

    Ok(TranslationPipeline::new(
        Arc::new(lookup),
        Arc::new(transformer),
    ))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
