// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    // Importamos os models para referenciar no Swagger
    models::dashboard::{MapMarker, PortfolioSummary},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do portfólio", body = PortfolioSummary)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> impl IntoResponse {
    let summary = app_state.dashboard_service.get_summary();
    (StatusCode::OK, Json(summary))
}

// GET /api/dashboard/map
#[utoipa::path(
    get,
    path = "/api/dashboard/map",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Marcadores do mapa com raio de densidade", body = Vec<MapMarker>)
    )
)]
pub async fn get_map(State(app_state): State<AppState>) -> impl IntoResponse {
    let markers = app_state.dashboard_service.get_map_markers();
    (StatusCode::OK, Json(markers))
}
