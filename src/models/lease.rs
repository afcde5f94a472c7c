// src/models/lease.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::projection::Recommendation;
use crate::models::property::OccupancyStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeaseFilter {
    #[default]
    All,
    Leased,
    Owned,
    Expiring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum LeaseSortField {
    #[default]
    Name,
    City,
    Status,
    LeaseExpiry,
    Employees,
    Utilization,
    AnnualOpex,
    FinancialScore,
    // Recomendação do cadastro (Stay, Renew, Evaluate Renewal...)
    Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct LeaseQuery {
    pub filter: LeaseFilter,
    pub sort: LeaseSortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaseSummary {
    pub total_properties: usize,
    pub leased_properties: usize,
    pub owned_properties: usize,
    // Vencem dentro da janela configurada (2 anos por padrão)
    pub expiring_leases: usize,
    pub potential_savings: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRow {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub status: OccupancyStatus,
    #[schema(value_type = Option<String>, format = Date)]
    pub lease_expiry: Option<NaiveDate>,
    pub employees: u32,
    pub utilization: u32,
    pub current_rate: f64,
    pub market_rate: f64,
    // aluguel + opex para Leased, só opex para Owned
    pub annual_cost: f64,
    #[schema(nullable = true)]
    pub cost_per_employee: Option<f64>,
    // Texto gravado no cadastro
    pub office_recommendation: String,
    // Resultado da projeção ficar x mudar
    pub recommendation: Recommendation,
    pub net_savings: f64,
}
