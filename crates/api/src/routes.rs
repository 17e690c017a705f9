use axum::{
    extract::multipart::MultipartRejection,
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{DefaultBodyLimit, Multipart, OriginalUri, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use cardvault_core::domain::contract::{CardImage, GradeCardRequest, OracleRequest};
use cardvault_core::domain::grade::{GradePrediction, GradeResult};
use cardvault_core::domain::market::{MarketFilter, MarketListing};
use cardvault_core::domain::oracle::OracleAnswer;
use cardvault_core::domain::portfolio::PortfolioSnapshot;
use cardvault_core::error::ValidationError;
use cardvault_core::mock::DEMO_USER_ID;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// Multipart field names the grader accepts; any field carrying a filename also counts.
const UPLOAD_FIELDS: [&str; 3] = ["file", "image", "card"];

/// Routes mounted under `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/market-data", get(market_top_picks))
        .route("/market/top-picks", get(market_top_picks))
        .route("/grade-card", post(grade_card))
        .route(
            "/grader/predict",
            post(grader_predict).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/portfolio/value", get(portfolio_value))
        .route("/portfolio/:user_id", get(portfolio_by_user))
        .route("/oracle/ask", post(oracle_ask))
        .fallback(api_not_found)
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    version: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        version: state.version,
    })
}

#[derive(Debug, Default, Deserialize)]
struct MarketQuery {
    #[serde(alias = "category")]
    sport: Option<String>,
}

async fn market_top_picks(
    State(state): State<AppState>,
    query: Result<Query<MarketQuery>, QueryRejection>,
) -> Result<Json<Vec<MarketListing>>, ApiError> {
    let Query(query) = query?;
    let filter = MarketFilter::from_query(query.sport.as_deref());
    Ok(Json(state.provider.list_market_top_picks(&filter)))
}

async fn grade_card(
    State(state): State<AppState>,
    payload: Result<Json<GradeCardRequest>, JsonRejection>,
) -> Result<Json<GradeResult>, ApiError> {
    let Json(req) = payload?;
    let image = req.validate_and_into_image()?;
    Ok(Json(state.provider.generate_grade(&image)))
}

async fn grader_predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GradePrediction>, ApiError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        let filename = field.file_name().map(str::to_string);
        let is_upload = filename.is_some()
            || field
                .name()
                .is_some_and(|name| UPLOAD_FIELDS.contains(&name));
        if !is_upload {
            continue;
        }

        let bytes = field.bytes().await?;
        let image = CardImage::from_upload(filename, &bytes)?;
        tracing::info!(
            filename = image.filename.as_deref().unwrap_or("-"),
            size = image.size,
            "grading uploaded card"
        );
        return Ok(Json(state.provider.predict_grade(&image)));
    }

    Err(ValidationError::Missing { field: "file" }.into())
}

async fn portfolio_value(State(state): State<AppState>) -> Json<PortfolioSnapshot> {
    Json(state.provider.get_portfolio(DEMO_USER_ID))
}

async fn portfolio_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<PortfolioSnapshot> {
    Json(state.provider.get_portfolio(&user_id))
}

async fn oracle_ask(
    State(state): State<AppState>,
    payload: Result<Json<OracleRequest>, JsonRejection>,
) -> Result<Json<OracleAnswer>, ApiError> {
    let Json(req) = payload?;
    let question = req.validate_and_into_question()?;
    Ok(Json(state.provider.ask_oracle(&question)))
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
