//! Portfolio Site
//!
//! Serves the portfolio page (server build) or hydrates it (web build).

use portfolio_site::app::App;

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(e) = init_server() {
            eprintln!("Failed to start: {:#}", e);
            std::process::exit(1);
        }
    }

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_server() -> anyhow::Result<()> {
    use portfolio_site::config;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Load configuration first so the log filter can come from it
    let config = config::load_config()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        "Starting Portfolio Site v{} ({})",
        env!("PORTFOLIO_VERSION"),
        env!("PORTFOLIO_GIT_SHA")
    );

    config::export_server_address(&config);
    tracing::info!("Configuration loaded, listening on {}:{}", config.ip, config.port);

    Ok(())
}
