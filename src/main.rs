//! Stripe Webhook Receiver - Main Entry Point

use std::process::ExitCode;

use stripe_webhook_receiver::config::AppConfig;
use stripe_webhook_receiver::{server, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    // Configuration problems are reported before logging exists
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        println!("{}", err);
        return ExitCode::FAILURE;
    }

    telemetry::init(&config.server);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Stripe webhook receiver"
    );
    if !config.webhook.has_stripe_prefix() {
        tracing::warn!("SIGNING_SECRET does not start with whsec_; check it is the endpoint signing secret");
    }

    match server::run(config).await {
        Ok(()) => {
            tracing::info!("Server shutdown complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Server stopped unexpectedly");
            ExitCode::FAILURE
        }
    }
}
