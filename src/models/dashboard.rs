// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::property::{GeoPoint, OccupancyStatus};

// 1. Resumo do portfólio (os cards da home)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_properties: usize,
    pub total_employees: u64,
    pub total_capacity: u64,
    #[schema(nullable = true)]
    pub portfolio_utilization: Option<u32>,
    pub total_annual_opex: f64,
    #[schema(nullable = true)]
    pub average_financial_score: Option<f64>,
    // Contagem pela recomendação estática do cadastro
    pub recommendations: Vec<RecommendationCount>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCount {
    pub recommendation: String,
    pub count: usize,
}

// 2. Mapa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerCategory {
    Headquarters,
    TechHub,
    Operations,
    RegionalHeadquarters,
    Other,
}

impl MarkerCategory {
    pub fn for_kind(kind: &str) -> Self {
        match kind {
            "Headquarters" => MarkerCategory::Headquarters,
            "Tech Hub" => MarkerCategory::TechHub,
            "Operations" => MarkerCategory::Operations,
            "Regional Headquarters" => MarkerCategory::RegionalHeadquarters,
            _ => MarkerCategory::Other,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub position: GeoPoint,
    pub status: OccupancyStatus,
    pub employees: u32,
    pub category: MarkerCategory,
    // Raio do círculo de densidade, em metros
    pub density_radius: u64,
}
