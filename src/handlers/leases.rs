// src/handlers/leases.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::lease::{LeaseQuery, LeaseRow, LeaseSummary},
};

// GET /api/leases/summary
#[utoipa::path(
    get,
    path = "/api/leases/summary",
    tag = "Leases",
    responses(
        (status = 200, description = "Contagens, contratos vencendo e economia potencial", body = LeaseSummary)
    )
)]
pub async fn get_lease_summary(State(app_state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let summary = app_state.lease_service.summary(today);
    (StatusCode::OK, Json(summary))
}

// GET /api/leases
#[utoipa::path(
    get,
    path = "/api/leases",
    tag = "Leases",
    params(LeaseQuery),
    responses(
        (status = 200, description = "Tabela de contratos filtrada e ordenada", body = Vec<LeaseRow>),
        (status = 400, description = "Filtro ou ordenação desconhecidos")
    )
)]
pub async fn list_leases(
    State(app_state): State<AppState>,
    locale: Locale,
    query: Result<Query<LeaseQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("query de contratos rejeitada: {}", rejection.body_text());
        AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;

    let today = Utc::now().date_naive();
    let rows = app_state.lease_service.rows(&query, today);
    Ok((StatusCode::OK, Json(rows)))
}
