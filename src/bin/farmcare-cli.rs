// src/bin/farmcare-cli.rs
use farmcare_ai::{
    config::GeminiConfig, console::run_turn, services::responder::Responder,
    telemetry::init_tracing,
};

// Always exits 0: failures are logged and otherwise swallowed.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing("warn").ok();

    let responder = match GeminiConfig::from_env() {
        Ok(config) => Responder::from_config(&config),
        Err(e) => {
            tracing::warn!(error = %e, "invalid Gemini configuration; AI service disabled");
            Responder::unavailable()
        }
    };

    let stdin = std::io::stdin();
    if let Err(e) = run_turn(&responder, stdin.lock(), std::io::stdout()).await {
        tracing::warn!(error = %e, "console turn failed");
    }
}
