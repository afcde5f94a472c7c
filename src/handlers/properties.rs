// src/handlers/properties.rs

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::{
        projection::{ProjectionOptions, ProjectionResult, PropertyCostReport},
        property::{OccupancyStatus, Property},
        scenario::validate_finite,
    },
};

// ---
// Query: filtros da listagem
// ---
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyListQuery {
    /// Owned ou Leased
    pub status: Option<OccupancyStatus>,
}

// ---
// Query: parâmetros da projeção
// Ausentes = padrão da configuração
// ---
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProjectionQuery {
    #[validate(range(min = 1, max = 30, message = "O horizonte deve ficar entre 1 e 30 anos."))]
    pub years: Option<u32>,

    pub include_move_costs: Option<bool>,
    pub include_fitout_costs: Option<bool>,

    /// Crescimento anual do opex (fração; 0.02 = 2%, no máximo 10 = 1000%)
    #[validate(range(exclusive_min = -1.0, max = 10.0), custom(function = "validate_finite"))]
    pub growth: Option<f64>,
}

impl ProjectionQuery {
    pub fn apply(&self, defaults: ProjectionOptions) -> ProjectionOptions {
        let mut options = defaults;
        if let Some(years) = self.years {
            options.horizon_years = years;
        }
        if let Some(growth) = self.growth {
            options = options.with_growth(growth);
        }
        options.include_move_costs = self.include_move_costs.unwrap_or(defaults.include_move_costs);
        options.include_fitout_costs = self.include_fitout_costs.unwrap_or(defaults.include_fitout_costs);
        options
    }
}

// GET /api/properties
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    params(PropertyListQuery),
    responses(
        (status = 200, description = "Imóveis do catálogo", body = Vec<Property>),
        (status = 400, description = "Filtro inválido")
    )
)]
pub async fn list_properties(
    State(app_state): State<AppState>,
    locale: Locale,
    query: Result<Query<PropertyListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;

    let properties: Vec<Property> = app_state
        .catalog
        .filter(query.status)
        .into_iter()
        .cloned()
        .collect();

    Ok((StatusCode::OK, Json(properties)))
}

// GET /api/properties/{id}
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = u32, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Imóvel", body = Property),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn get_property(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let property = app_state
        .catalog
        .find_by_id(id)
        .cloned()
        .ok_or(AppError::PropertyNotFound(id))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(property)))
}

// GET /api/properties/{id}/projection
#[utoipa::path(
    get,
    path = "/api/properties/{id}/projection",
    tag = "Analysis",
    params(("id" = u32, Path, description = "ID do imóvel"), ProjectionQuery),
    responses(
        (status = 200, description = "Projeção ficar x mudar", body = ProjectionResult),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn get_projection(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let options = query.apply(app_state.projection_service.defaults());
    let projection = app_state
        .projection_service
        .project_property(id, &options)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(projection)))
}

// GET /api/properties/{id}/breakdown
#[utoipa::path(
    get,
    path = "/api/properties/{id}/breakdown",
    tag = "Analysis",
    params(("id" = u32, Path, description = "ID do imóvel"), ProjectionQuery),
    responses(
        (status = 200, description = "Composição de custos e comparação com o mercado", body = PropertyCostReport),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 404, description = "Imóvel não encontrado")
    )
)]
pub async fn get_cost_breakdown(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::InvalidQuery(rejection.body_text()).to_api_error(&locale, &app_state.i18n_store)
    })?;
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let options = query.apply(app_state.projection_service.defaults());
    let report = app_state
        .projection_service
        .cost_report(id, &options)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(report)))
}
