// src/models/projection.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Recommendation {
    Stay,
    Relocate,
}

/// Parâmetros do projetor. Taxas em fração (0.02 = 2% ao ano).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    pub horizon_years: u32,
    pub include_move_costs: bool,
    pub include_fitout_costs: bool,
    pub stay_growth: f64,
    pub relocate_growth: f64,
    // A análise de cenários projeta com a capacidade ajustada pela densidade
    pub capacity_override: Option<u32>,
}

pub const DEFAULT_HORIZON_YEARS: u32 = 5;
pub const DEFAULT_OPEX_GROWTH: f64 = 0.02;

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            include_move_costs: true,
            include_fitout_costs: true,
            stay_growth: DEFAULT_OPEX_GROWTH,
            relocate_growth: DEFAULT_OPEX_GROWTH,
            capacity_override: None,
        }
    }
}

impl ProjectionOptions {
    /// Mesma taxa para os dois ramos.
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.stay_growth = growth;
        self.relocate_growth = growth;
        self
    }

    pub fn with_horizon(mut self, years: u32) -> Self {
        self.horizon_years = years;
        self
    }
}

// --- Séries de custo ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayCosts {
    pub yearly: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelocateCosts {
    /// fitout * capacidade * 0.01 + mudança
    pub initial_cost: f64,
    /// Série composta, sem o custo inicial
    pub yearly: Vec<f64>,
    /// Série para o gráfico: ano 1 leva o custo inicial quando os dois toggles estão ligados
    pub display: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    #[schema(example = 3)]
    pub property_id: u32,
    #[schema(example = 5)]
    pub horizon_years: u32,
    pub stay: StayCosts,
    pub relocate: RelocateCosts,
    pub net_savings: f64,
    // null = "N/A"
    #[schema(nullable = true)]
    pub roi: Option<f64>,
    pub recommendation: Recommendation,
    pub current_annual_cost: f64,
    pub projected_annual_cost: f64,
}

// --- Composição de custos (gráfico de pizza) ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub rent: f64,
    pub opex: f64,
    pub fitout: f64,
    #[serde(rename = "move")]
    pub move_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketComparison {
    pub current_rate: f64,
    pub market_rate: f64,
    // (atual - mercado) / mercado, em %
    #[schema(nullable = true)]
    pub difference_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCostReport {
    pub property_id: u32,
    pub breakdown: CostBreakdown,
    #[schema(nullable = true)]
    pub market: Option<MarketComparison>,
}
