pub mod error;
pub mod routes;
pub mod shell;

use axum::Router;
use cardvault_core::config::Settings;
use cardvault_core::mock::MockDataProvider;
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: MockDataProvider,
    pub version: &'static str,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            provider: MockDataProvider::new(settings.mock_seed),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub fn app(state: AppState, static_dir: &Path) -> Router {
    let router = Router::new().nest("/api", routes::api_router(state));

    with_layers(shell::attach(router, static_dir))
}

/// Middleware shared by every route: panics become a 500 JSON body, CORS, tracing.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
