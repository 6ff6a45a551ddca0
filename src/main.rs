// src/main.rs
use anyhow::Context;
use farmcare_ai::{
    config::Config, routes::build_app, services::responder::Responder, state::AppState,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info,farmcare_ai=debug,tower_http=info")?;

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let responder = Responder::from_config(&config.gemini);
    tracing::info!(ai_available = responder.is_available(), "responder ready");
    tracing::info!(origins = ?config.allowed_origins, "CORS allowed origins");

    let app = build_app(AppState::shared(responder), &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("could not bind {}", config.bind_addr))?;

    tracing::info!("FarmCare AI server listening on http://{}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
