// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Properties ---
        handlers::properties::list_properties,
        handlers::properties::get_property,

        // --- Analysis ---
        handlers::properties::get_projection,
        handlers::properties::get_cost_breakdown,

        // --- Scenarios ---
        handlers::scenarios::list_scenarios,
        handlers::scenarios::create_scenario,
        handlers::scenarios::get_scenario_results,
        handlers::scenarios::compare_scenarios,

        // --- Leases ---
        handlers::leases::get_lease_summary,
        handlers::leases::list_leases,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_map,
    ),
    components(
        schemas(
            // --- PROPERTY ---
            models::property::OccupancyStatus,
            models::property::EnergyGrade,
            models::property::LocationType,
            models::property::GeoPoint,
            models::property::Property,

            // --- PROJECTION ---
            models::projection::Recommendation,
            models::projection::StayCosts,
            models::projection::RelocateCosts,
            models::projection::ProjectionResult,
            models::projection::CostBreakdown,
            models::projection::MarketComparison,
            models::projection::PropertyCostReport,

            // --- SCENARIOS ---
            models::scenario::RenewalStrategy,
            models::scenario::LocationTier,
            models::scenario::CostPerSqFt,
            models::scenario::CompanyPolicy,
            models::scenario::SustainabilityTargets,
            models::scenario::SatisfactionWeights,
            models::scenario::Scenario,
            models::scenario::CreateScenarioPayload,
            models::scenario::CompareScenariosPayload,
            models::scenario::PropertyOutcome,
            models::scenario::ScenarioResults,
            models::scenario::ScenarioComparisonEntry,
            models::scenario::ScenarioComparison,

            // --- LEASES ---
            models::lease::LeaseFilter,
            models::lease::LeaseSortField,
            models::lease::SortDirection,
            models::lease::LeaseSummary,
            models::lease::LeaseRow,

            // --- DASHBOARD ---
            models::dashboard::PortfolioSummary,
            models::dashboard::RecommendationCount,
            models::dashboard::MarkerCategory,
            models::dashboard::MapMarker,
        )
    ),
    tags(
        (name = "Properties", description = "Catálogo de Imóveis"),
        (name = "Analysis", description = "Projeção Financeira: Ficar x Mudar"),
        (name = "Scenarios", description = "Cenários What-If do Portfólio"),
        (name = "Leases", description = "Resumo de Contratos de Locação"),
        (name = "Dashboard", description = "Indicadores do Portfólio e Mapa")
    )
)]
pub struct ApiDoc;
