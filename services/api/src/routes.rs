use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use rental_iq::analysis::{
    canonicalize_all, DataProvenance, ListingImporter, MarketContext, PropertyProfile, RawListing,
    StrAnalysis, StrAnalysisEngine,
};
use rental_iq::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct StrAnalysisRequest {
    pub(crate) property: PropertyProfile,
    /// Comparable listings in any of the supported field spellings.
    #[serde(default)]
    pub(crate) comparables: Vec<RawListing>,
    /// Optional CSV export appended to the JSON comparables.
    #[serde(default)]
    pub(crate) comparables_csv: Option<String>,
    #[serde(default)]
    pub(crate) market: MarketContext,
}

#[derive(Debug, Serialize)]
pub(crate) struct StrAnalysisResponse {
    pub(crate) data_source: DataProvenance,
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) analysis: StrAnalysis,
}

pub(crate) fn with_analysis_routes(engine: Arc<StrAnalysisEngine>) -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/str/analysis",
            axum::routing::post(str_analysis_endpoint),
        )
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn str_analysis_endpoint(
    Extension(engine): Extension<Arc<StrAnalysisEngine>>,
    Json(payload): Json<StrAnalysisRequest>,
) -> Result<Json<StrAnalysisResponse>, AppError> {
    let StrAnalysisRequest {
        property,
        comparables,
        comparables_csv,
        market,
    } = payload;

    let mut listings = canonicalize_all(comparables);
    if let Some(csv) = comparables_csv {
        let reader = Cursor::new(csv.into_bytes());
        listings.extend(ListingImporter::from_csv_reader(reader)?);
    }

    let analysis = engine.analyze(&property, &listings, &market);

    Ok(Json(StrAnalysisResponse {
        data_source: analysis.provenance,
        generated_at: Utc::now(),
        analysis,
    }))
}
