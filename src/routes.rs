// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app_router(app_state: AppState) -> Router {
    let property_routes = Router::new()
        .route("/", get(handlers::properties::list_properties))
        .route("/{id}", get(handlers::properties::get_property))
        .route("/{id}/projection", get(handlers::properties::get_projection))
        .route("/{id}/breakdown", get(handlers::properties::get_cost_breakdown));

    let scenario_routes = Router::new()
        .route("/"
               ,post(handlers::scenarios::create_scenario)
               .get(handlers::scenarios::list_scenarios)
        )
        .route("/compare", post(handlers::scenarios::compare_scenarios))
        .route("/{id}/results", get(handlers::scenarios::get_scenario_results));

    let lease_routes = Router::new()
        .route("/", get(handlers::leases::list_leases))
        .route("/summary", get(handlers::leases::get_lease_summary));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/map", get(handlers::dashboard::get_map));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/properties", property_routes)
        .nest("/api/scenarios", scenario_routes)
        .nest("/api/leases", lease_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
