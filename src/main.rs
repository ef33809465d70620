use anyhow::Context;
use std::process::ExitCode;
use sos_notifier::{Config, SosNotifier};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sos_notifier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    let notifier = SosNotifier::new(&config).context("Failed to initialize SOS notifier")?;
    info!("Sending SOS to {}", notifier.endpoint());

    // Outcome is already logged by notify
    match notifier.notify(config.coordinate()).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
