use std::sync::Arc;
use axum::{extract::State, routing::{get, post}, Router, Json};
use axum::http::{HeaderValue, Method, StatusCode};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};
use crate::schema::{AllocationRecord, StationRecord};
use crate::service::QueryService;
use crate::settings::ServerSettings;
use crate::store::LoadReport;

pub async fn allocation_data(State(service): State<QueryService>) -> Json<Arc<[AllocationRecord]>> {
    let records = service.allocation_records();
    info!(records = records.len(), "allocation data served");
    Json(records)
}

pub async fn station_data(State(service): State<QueryService>) -> Json<Arc<[StationRecord]>> {
    let records = service.station_records();
    info!(records = records.len(), "station data served");
    Json(records)
}

pub async fn reload(State(service): State<QueryService>) -> Result<Json<LoadReport>, (StatusCode, &'static str)> {
    // Loading reads files synchronously, keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || service.reload()).await.map_err(|e| {
        warn!(error=%e, "Join error");
        (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
    })?;
    info!(allocation = report.allocation.records, station = report.station.records, "reload complete");
    Ok(Json(report))
}

pub fn cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin=%o, error=%e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Normalizes a configured base path to `/segment[/segment...]`, or `/` for the root.
pub fn base_path(raw: &str) -> String {
    format!("/{}", raw.trim().trim_matches('/'))
}

pub fn router(service: QueryService, settings: &ServerSettings) -> Router {
    let mut api = Router::new()
        .route("/allocation-data", get(allocation_data))
        .route("/station-data", get(station_data));
    if settings.allow_reload {
        api = api.route("/reload", post(reload));
    }
    let api = api.with_state(service);
    let base = base_path(&settings.base_path);
    let app = if base == "/" { Router::new().merge(api) } else { Router::new().nest(&base, api) };
    app.layer(cors(&settings.cors_origins))
}
