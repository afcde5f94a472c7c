// src/models/scenario.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::projection::Recommendation;
use crate::models::property::{EnergyGrade, LocationType};

// ---
// Validação Customizada
// ---
pub(crate) fn validate_finite(val: f64) -> Result<(), ValidationError> {
    if !val.is_finite() {
        let mut err = ValidationError::new("finite");
        err.message = Some("O valor precisa ser um número finito.".into());
        return Err(err);
    }
    Ok(())
}

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RenewalStrategy {
    Market,
    BelowMarket,
    AboveMarket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationTier {
    Premium,
    Standard,
    Value,
}

impl LocationTier {
    /// Classificação pelo nome da cidade.
    pub fn for_city(city: &str) -> Self {
        match city {
            "New York" | "San Francisco" => LocationTier::Premium,
            "St. Louis" | "Kansas City" => LocationTier::Value,
            _ => LocationTier::Standard,
        }
    }
}

// --- Sub-registros do cenário ---
// Os Default abaixo são os valores do cenário base.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CostPerSqFt {
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[schema(example = 65.0)]
    pub premium: f64,
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[schema(example = 45.0)]
    pub standard: f64,
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[schema(example = 32.0)]
    pub value: f64,
}

impl Default for CostPerSqFt {
    fn default() -> Self {
        Self { premium: 65.0, standard: 45.0, value: 32.0 }
    }
}

impl CostPerSqFt {
    pub fn rate_for(&self, tier: LocationTier) -> f64 {
        match tier {
            LocationTier::Premium => self.premium,
            LocationTier::Standard => self.standard,
            LocationTier::Value => self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyPolicy {
    #[validate(range(min = 0.0, max = 100.0), custom(function = "validate_finite"))]
    #[schema(example = 20.0)]
    pub remote_work_percentage: f64,

    // Funcionários por mesa
    #[validate(range(exclusive_min = 0.0), custom(function = "validate_finite"))]
    #[schema(example = 1.2)]
    pub desk_sharing_ratio: f64,

    // Minutos
    #[schema(example = 45)]
    pub max_commute_time: u32,
}

impl Default for CompanyPolicy {
    fn default() -> Self {
        Self {
            remote_work_percentage: 20.0,
            desk_sharing_ratio: 1.2,
            max_commute_time: 45,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SustainabilityTargets {
    #[validate(range(min = 0.0, max = 100.0), custom(function = "validate_finite"))]
    #[schema(example = 15.0)]
    pub carbon_reduction_target: f64,
    #[schema(example = "LEED Silver")]
    pub green_building_certification: String,
    pub energy_efficiency_minimum: EnergyGrade,
}

impl Default for SustainabilityTargets {
    fn default() -> Self {
        Self {
            carbon_reduction_target: 15.0,
            green_building_certification: "LEED Silver".to_string(),
            energy_efficiency_minimum: EnergyGrade::B,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SatisfactionWeights {
    #[validate(range(min = 0.0, max = 10.0), custom(function = "validate_finite"))]
    #[schema(example = 7.0)]
    pub amenities_importance: f64,
    pub location_preference: LocationType,
    #[validate(range(min = 0.0, max = 10.0), custom(function = "validate_finite"))]
    #[schema(example = 8.0)]
    pub transit_access_importance: f64,
}

impl Default for SatisfactionWeights {
    fn default() -> Self {
        Self {
            amenities_importance: 7.0,
            location_preference: LocationType::Urban,
            transit_access_importance: 8.0,
        }
    }
}

// --- Cenário ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Baseline Scenario")]
    pub name: String,
    #[schema(example = "Current portfolio with no changes")]
    pub description: String,

    // Percentuais (2.5 = 2,5% ao ano)
    #[schema(example = 2.5)]
    pub employee_growth_rate: f64,
    #[schema(example = 3.0)]
    pub opex_inflation: f64,
    #[schema(example = 2.0)]
    pub rent_inflation: f64,
    pub renewal_strategy: RenewalStrategy,

    // sq ft por funcionário
    #[schema(example = 150.0)]
    pub density: f64,
    pub cost_per_sq_ft: CostPerSqFt,
    pub company_policy: CompanyPolicy,
    pub sustainability: SustainabilityTargets,
    pub employee_satisfaction: SatisfactionWeights,
}

impl Scenario {
    pub fn baseline(id: u32) -> Self {
        CreateScenarioPayload {
            name: "Baseline Scenario".to_string(),
            description: "Current portfolio with no changes".to_string(),
            ..CreateScenarioPayload::default()
        }
        .into_scenario(id)
    }
}

// ---
// Payload: CreateScenario
// Campos ausentes assumem os valores do cenário base.
// ---
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateScenarioPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Hybrid First")]
    pub name: String,
    pub description: String,

    // Percentuais anuais; acima de 1000% a composição estoura o f64
    #[validate(range(exclusive_min = -100.0, max = 1000.0), custom(function = "validate_finite"))]
    pub employee_growth_rate: f64,
    #[validate(range(exclusive_min = -100.0, max = 1000.0), custom(function = "validate_finite"))]
    pub opex_inflation: f64,
    #[validate(range(exclusive_min = -100.0, max = 1000.0), custom(function = "validate_finite"))]
    pub rent_inflation: f64,
    pub renewal_strategy: RenewalStrategy,

    #[validate(range(exclusive_min = 0.0), custom(function = "validate_finite"))]
    pub density: f64,

    #[validate(nested)]
    pub cost_per_sq_ft: CostPerSqFt,
    #[validate(nested)]
    pub company_policy: CompanyPolicy,
    #[validate(nested)]
    pub sustainability: SustainabilityTargets,
    #[validate(nested)]
    pub employee_satisfaction: SatisfactionWeights,
}

impl Default for CreateScenarioPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            employee_growth_rate: 2.5,
            opex_inflation: 3.0,
            rent_inflation: 2.0,
            renewal_strategy: RenewalStrategy::Market,
            density: 150.0,
            cost_per_sq_ft: CostPerSqFt::default(),
            company_policy: CompanyPolicy::default(),
            sustainability: SustainabilityTargets::default(),
            employee_satisfaction: SatisfactionWeights::default(),
        }
    }
}

impl CreateScenarioPayload {
    pub fn into_scenario(self, id: u32) -> Scenario {
        Scenario {
            id,
            name: self.name,
            description: self.description,
            employee_growth_rate: self.employee_growth_rate,
            opex_inflation: self.opex_inflation,
            rent_inflation: self.rent_inflation,
            renewal_strategy: self.renewal_strategy,
            density: self.density,
            cost_per_sq_ft: self.cost_per_sq_ft,
            company_policy: self.company_policy,
            sustainability: self.sustainability,
            employee_satisfaction: self.employee_satisfaction,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareScenariosPayload {
    // A tela original compara no máximo 3 cenários
    #[validate(length(min = 1, max = 3, message = "Informe entre 1 e 3 cenários."))]
    #[schema(example = json!([1, 2]))]
    pub scenario_ids: Vec<u32>,
}

// --- Resultados ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOutcome {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub tier: LocationTier,
    pub adjusted_capacity: u32,
    pub market_rate: f64,
    pub effective_employees: u32,
    pub desks_needed: u32,
    // null quando a capacidade ajustada é zero
    #[schema(nullable = true)]
    pub utilization: Option<u32>,
    pub sustainability_score: u8,
    pub satisfaction_score: f64,
    pub recommendation: Recommendation,
    pub current_cost: f64,
    pub projected_cost: f64,
    pub savings: f64,
    #[schema(nullable = true)]
    pub roi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResults {
    pub scenario_id: u32,
    pub total_current_cost: f64,
    pub total_projected_cost: f64,
    pub total_savings: f64,
    pub recommendations: Vec<PropertyOutcome>,
    #[schema(nullable = true)]
    pub average_utilization: Option<f64>,
    #[schema(nullable = true)]
    pub average_sustainability: Option<f64>,
    #[schema(nullable = true)]
    pub average_satisfaction: Option<f64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparisonEntry {
    pub scenario: Scenario,
    pub results: ScenarioResults,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub entries: Vec<ScenarioComparisonEntry>,
    #[schema(nullable = true)]
    pub best_scenario_id: Option<u32>,
}
