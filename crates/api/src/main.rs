use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardvault_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = cardvault_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let state = AppState::from_settings(&settings);
    if let Some(seed) = settings.mock_seed {
        tracing::info!(seed, "mock data provider is seeded; responses are reproducible");
    }

    let app = app(state, &settings.static_dir);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.port));

    tracing::info!(%addr, environment = %settings.environment, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown signal received; draining connections");
}

fn init_sentry(settings: &cardvault_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(settings.environment.clone().into()),
            ..Default::default()
        },
    )))
}
