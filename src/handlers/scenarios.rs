// src/handlers/scenarios.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::scenario::{
        CompareScenariosPayload, CreateScenarioPayload, Scenario, ScenarioComparison,
        ScenarioResults,
    },
};

// GET /api/scenarios
#[utoipa::path(
    get,
    path = "/api/scenarios",
    tag = "Scenarios",
    responses(
        (status = 200, description = "Cenários da sessão", body = Vec<Scenario>)
    )
)]
pub async fn list_scenarios(State(app_state): State<AppState>) -> impl IntoResponse {
    let scenarios = app_state.scenario_service.list().await;
    (StatusCode::OK, Json(scenarios))
}

// POST /api/scenarios
#[utoipa::path(
    post,
    path = "/api/scenarios",
    tag = "Scenarios",
    request_body = CreateScenarioPayload,
    responses(
        (status = 201, description = "Cenário criado", body = Scenario),
        (status = 400, description = "Um ou mais campos são inválidos")
    )
)]
pub async fn create_scenario(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateScenarioPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate().map_err(|e| {
        tracing::warn!("cenário rejeitado: {}", e);
        AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store)
    })?;

    let scenario = app_state.scenario_service.create(payload).await;

    Ok((StatusCode::CREATED, Json(scenario)))
}

// GET /api/scenarios/{id}/results
#[utoipa::path(
    get,
    path = "/api/scenarios/{id}/results",
    tag = "Scenarios",
    params(("id" = u32, Path, description = "ID do cenário")),
    responses(
        (status = 200, description = "Cenário aplicado a todo o portfólio", body = ScenarioResults),
        (status = 404, description = "Cenário não encontrado")
    )
)]
pub async fn get_scenario_results(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let results = app_state
        .scenario_service
        .results(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(results)))
}

// POST /api/scenarios/compare
#[utoipa::path(
    post,
    path = "/api/scenarios/compare",
    tag = "Scenarios",
    request_body = CompareScenariosPayload,
    responses(
        (status = 200, description = "Comparação e cenário recomendado", body = ScenarioComparison),
        (status = 400, description = "Lista de cenários inválida"),
        (status = 404, description = "Cenário não encontrado")
    )
)]
pub async fn compare_scenarios(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CompareScenariosPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let comparison = app_state
        .scenario_service
        .compare(&payload.scenario_ids)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(comparison)))
}
