// src/services/scenario_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::{PropertyCatalog, ScenarioRepository},
    models::{
        projection::ProjectionOptions,
        property::{utilization_percent, EnergyGrade, Property},
        scenario::{
            CreateScenarioPayload, LocationTier, PropertyOutcome, SatisfactionWeights, Scenario,
            ScenarioComparison, ScenarioComparisonEntry, ScenarioResults,
        },
    },
    services::projection_service::project,
};

// ---
// Regras por imóvel
// ---

pub fn sustainability_score(grade: EnergyGrade) -> u8 {
    match grade {
        EnergyGrade::A | EnergyGrade::B => 10,
        EnergyGrade::C => 7,
        EnergyGrade::D => 4,
        _ => 2,
    }
}

/// Média de três termos: amenidades e transporte ponderados, mais o tipo de local.
pub fn satisfaction_score(property: &Property, weights: &SatisfactionWeights) -> f64 {
    let amenities = property.amenities * (weights.amenities_importance / 10.0);
    let transit = property.transit_access * (weights.transit_access_importance / 10.0);
    let location = if weights.location_preference == property.location_type { 10.0 } else { 5.0 };
    (amenities + transit + location) / 3.0
}

fn adjusted_capacity(area_sq_ft: u32, density: f64) -> u32 {
    if !(density > 0.0) {
        return 0;
    }
    (f64::from(area_sq_ft) / density).floor() as u32
}

fn effective_employees(employees: u32, remote_work_percentage: f64) -> u32 {
    (f64::from(employees) * (1.0 - remote_work_percentage / 100.0)).ceil().max(0.0) as u32
}

fn desks_needed(effective: u32, desk_sharing_ratio: f64) -> u32 {
    if !(desk_sharing_ratio > 0.0) {
        return effective;
    }
    (f64::from(effective) / desk_sharing_ratio).ceil() as u32
}

pub fn evaluate_property(
    property: &Property,
    scenario: &Scenario,
    base_options: &ProjectionOptions,
) -> PropertyOutcome {
    let capacity = adjusted_capacity(property.area_sq_ft, scenario.density);
    let tier = LocationTier::for_city(&property.city);
    let effective = effective_employees(property.employees, scenario.company_policy.remote_work_percentage);
    let desks = desks_needed(effective, scenario.company_policy.desk_sharing_ratio);
    // Sem capacidade ajustada não há ocupação
    let utilization = utilization_percent(desks, capacity).map(|u| u.min(100));

    let options = ProjectionOptions {
        capacity_override: Some(capacity),
        ..base_options.with_growth(scenario.opex_inflation / 100.0)
    };
    let projection = project(property, &options);

    PropertyOutcome {
        id: property.id,
        name: property.name.clone(),
        city: property.city.clone(),
        state: property.state.clone(),
        tier,
        adjusted_capacity: capacity,
        market_rate: scenario.cost_per_sq_ft.rate_for(tier),
        effective_employees: effective,
        desks_needed: desks,
        utilization,
        sustainability_score: sustainability_score(property.energy_efficiency),
        satisfaction_score: satisfaction_score(property, &scenario.employee_satisfaction),
        recommendation: projection.recommendation,
        current_cost: projection.current_annual_cost,
        projected_cost: projection.projected_annual_cost,
        savings: projection.net_savings,
        roi: projection.roi,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Aplica o cenário a todos os imóveis e soma os resultados.
pub fn aggregate(
    properties: &[Property],
    scenario: &Scenario,
    base_options: &ProjectionOptions,
) -> ScenarioResults {
    let recommendations: Vec<PropertyOutcome> = properties
        .iter()
        .map(|p| evaluate_property(p, scenario, base_options))
        .collect();

    let mut total_current_cost = 0.0;
    let mut total_projected_cost = 0.0;
    let mut total_savings = 0.0;
    for outcome in &recommendations {
        total_current_cost += outcome.current_cost;
        total_projected_cost += outcome.projected_cost;
        total_savings += outcome.savings;
    }

    ScenarioResults {
        scenario_id: scenario.id,
        total_current_cost,
        total_projected_cost,
        total_savings,
        // Imóveis sem ocupação definida ficam fora da média
        average_utilization: mean(recommendations.iter().filter_map(|r| r.utilization.map(f64::from))),
        average_sustainability: mean(recommendations.iter().map(|r| f64::from(r.sustainability_score))),
        average_satisfaction: mean(recommendations.iter().map(|r| r.satisfaction_score)),
        recommendations,
    }
}

/// Maior economia total vence; em empate fica o primeiro encontrado.
pub fn best_scenario(results: &[ScenarioResults]) -> Option<&ScenarioResults> {
    let (first, rest) = results.split_first()?;
    Some(rest.iter().fold(first, |best, current| {
        if current.total_savings > best.total_savings { current } else { best }
    }))
}

// ---
// Serviço
// ---

#[derive(Clone)]
pub struct ScenarioService {
    catalog: Arc<PropertyCatalog>,
    repo: ScenarioRepository,
    defaults: ProjectionOptions,
}

impl ScenarioService {
    pub fn new(catalog: Arc<PropertyCatalog>, repo: ScenarioRepository, defaults: ProjectionOptions) -> Self {
        Self { catalog, repo, defaults }
    }

    pub async fn list(&self) -> Vec<Scenario> {
        self.repo.list().await
    }

    // O payload já chega validado pelo handler
    pub async fn create(&self, payload: CreateScenarioPayload) -> Scenario {
        let scenario = self.repo.create(payload).await;
        tracing::info!(scenario_id = scenario.id, name = %scenario.name, "cenário criado");
        scenario
    }

    pub async fn results(&self, scenario_id: u32) -> Result<ScenarioResults, AppError> {
        let scenario = self
            .repo
            .find_by_id(scenario_id)
            .await
            .ok_or(AppError::ScenarioNotFound(scenario_id))?;

        Ok(aggregate(self.catalog.all(), &scenario, &self.defaults))
    }

    pub async fn compare(&self, scenario_ids: &[u32]) -> Result<ScenarioComparison, AppError> {
        let scenarios = self
            .repo
            .find_many(scenario_ids)
            .await
            .map_err(AppError::ScenarioNotFound)?;

        let results: Vec<ScenarioResults> = scenarios
            .iter()
            .map(|s| aggregate(self.catalog.all(), s, &self.defaults))
            .collect();
        let best_scenario_id = best_scenario(&results).map(|r| r.scenario_id);

        tracing::debug!(?scenario_ids, ?best_scenario_id, "comparação de cenários");

        let entries = scenarios
            .into_iter()
            .zip(results)
            .map(|(scenario, results)| ScenarioComparisonEntry { scenario, results })
            .collect();

        Ok(ScenarioComparison { entries, best_scenario_id })
    }
}
