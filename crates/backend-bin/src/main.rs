use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::time::interval;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use passgate_lib::{
    config::{Settings, DEFAULT_CONFIG_PATH},
    router, AppState,
};

/// Login form server with a password policy check
#[derive(Debug, Parser)]
#[command(name = "passgate", version, about)]
struct Args {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Common password list, overriding the configuration
    #[arg(long)]
    common_passwords: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load_from(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(path) = args.common_passwords {
        settings.policy.common_passwords_path = path;
    }
    settings.validate().context("validating settings")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=info", settings.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    tracing::debug!(config = %args.config.display(), ?settings, "Settings loaded");

    let addr = settings.bind_addr()?;
    let state = Arc::new(AppState::from_settings(settings));

    // Periodically forget clients whose rate limit window has passed
    let limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = interval(limiter.window());
        loop {
            interval.tick().await;
            limiter.cleanup();
            tracing::debug!(clients = limiter.tracked_clients(), "Rate limiter cleanup");
        }
    });

    let app = router::create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Server running on port {}", addr.port());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
