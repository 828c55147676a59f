//! Dipwatch entry point
//!
//! Reads credentials and strategy parameters from the environment,
//! constructs the REST gateway and the trigger engine, runs one pass, and
//! reports the outcome. The process exit code reflects the terminal run
//! outcome.

mod settings;

use std::process::ExitCode;

use log::{error, info};

use dipwatch_audit::{AuditLog, JsonlAudit, LogAudit};
use dipwatch_gateway::{RestConfig, RestGateway};
use dipwatch_strategy::{TriggerConfig, TriggerEngine};

use crate::settings::{ENV_API_KEY, ENV_API_SECRET, Settings};

const EXCHANGE_NAME: &str = "restex";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    // Liveness marker: confirms the logging sink is wired before any
    // decision logic runs
    info!("dipwatch starting");

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !settings.has_credentials() {
        println!("No exchange credentials configured; nothing to do.");
        println!(
            "Set {} and {} in the environment to enable trading.",
            ENV_API_KEY, ENV_API_SECRET
        );
        return ExitCode::SUCCESS;
    }

    // Construction failures are fatal: there is no degraded gateway
    let gateway = match RestGateway::new(RestConfig {
        exchange_name: EXCHANGE_NAME.to_string(),
        base_url: settings.base_url.clone(),
        api_key: settings.api_key.clone(),
        api_secret: settings.api_secret.clone(),
    }) {
        Ok(gateway) => gateway,
        Err(e) => {
            error!("gateway construction failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let audit: Box<dyn AuditLog> = match &settings.audit_file {
        Some(path) => Box::new(JsonlAudit::new(path)),
        None => Box::new(LogAudit),
    };

    let config = TriggerConfig {
        pair: settings.pair.clone(),
        threshold: settings.threshold,
        buy_quantity: settings.buy_quantity,
    };
    let engine = TriggerEngine::new(config, gateway, audit);

    info!(
        "run {} configured: {} threshold {} quantity {}",
        engine.run_id(),
        settings.pair,
        settings.threshold,
        settings.buy_quantity
    );

    let outcome = engine.run().await;
    println!("{}", outcome);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
