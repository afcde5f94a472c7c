// src/models/property.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OccupancyStatus {
    Owned,
    Leased,
}

/// Selo de eficiência energética do prédio (A = melhor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EnergyGrade {
    A,
    B,
    C,
    D,
    E,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Urban,
    Suburban,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    #[schema(example = 40.7395)]
    pub lat: f64,
    #[schema(example = -73.9905)]
    pub lng: f64,
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[schema(example = 3)]
    pub id: u32,

    #[schema(example = "New York Office")]
    pub name: String,

    #[schema(example = "150 5th Ave")]
    pub address: String,
    #[schema(example = "New York")]
    pub city: String,
    #[schema(example = "NY")]
    pub state: String,
    #[schema(example = "10011")]
    pub zip_code: String,

    // "type" no JSON original
    #[serde(rename = "type")]
    #[schema(example = "Tech Hub")]
    pub kind: String,

    pub status: OccupancyStatus,

    #[schema(example = 850)]
    pub employees: u32,
    #[schema(example = 1000)]
    pub capacity: u32,
    #[schema(example = 85)]
    pub utilization: u32,

    // Só fazem sentido quando Leased (0 quando Owned)
    #[schema(example = 85.0)]
    pub current_rate: f64,
    #[schema(example = 95.0)]
    pub market_rate: f64,

    #[serde(rename = "annualOpEx")]
    #[schema(example = 15000000.0)]
    pub annual_opex: f64,

    #[schema(value_type = Option<String>, format = Date, example = "2027-08-31")]
    pub lease_expiry: Option<NaiveDate>,

    // Custo por sq ft
    #[schema(example = 150.0)]
    pub fitout_cost: f64,
    // Valor fechado
    #[schema(example = 850000.0)]
    pub move_cost: f64,

    #[schema(example = 76)]
    pub financial_score: u8,
    #[schema(example = "Renew")]
    pub recommendation: String,
    #[schema(example = "High utilization and favorable current rate")]
    pub reason_to_stay: String,
    // Diferença percentual entre taxa atual e de mercado
    #[serde(rename = "difference")]
    #[schema(example = -10.5)]
    pub rate_difference: f64,

    // --- Atributos usados pela análise de cenários ---
    #[schema(example = 150000)]
    pub area_sq_ft: u32,
    pub energy_efficiency: EnergyGrade,
    #[schema(example = 8.0)]
    pub amenities: f64,
    #[schema(example = 9.0)]
    pub transit_access: f64,
    pub location_type: LocationType,
    pub location: GeoPoint,
}

/// Violações encontradas ao carregar um registro de imóvel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyViolation {
    #[error("leaseExpiry must be set for Leased and empty for Owned")]
    LeaseExpiryMismatch,
    #[error("owned properties carry no lease rates")]
    RatesOnOwned,
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
    #[error("utilization must equal round(employees / capacity * 100)")]
    UtilizationMismatch,
    #[error("{0} must be a finite number")]
    NonFiniteAmount(&'static str),
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),
    #[error("financialScore must be within 0..=100")]
    ScoreOutOfRange,
}

impl Property {
    pub fn is_leased(&self) -> bool {
        self.status == OccupancyStatus::Leased
    }

    /// `round(employees / capacity * 100)`, ou `None` quando a capacidade é zero.
    pub fn computed_utilization(&self) -> Option<u32> {
        utilization_percent(self.employees, self.capacity)
    }

    pub fn check_invariants(&self) -> Result<(), PropertyViolation> {
        // leaseExpiry é nulo sse Owned
        if self.lease_expiry.is_some() != self.is_leased() {
            return Err(PropertyViolation::LeaseExpiryMismatch);
        }
        if !self.is_leased() && (self.current_rate != 0.0 || self.market_rate != 0.0) {
            return Err(PropertyViolation::RatesOnOwned);
        }

        // Sem capacidade a ocupação não é definida; o cadastro recusa o registro
        let Some(expected) = self.computed_utilization() else {
            return Err(PropertyViolation::ZeroCapacity);
        };
        if self.utilization != expected {
            return Err(PropertyViolation::UtilizationMismatch);
        }

        let amounts = [
            ("currentRate", self.current_rate),
            ("marketRate", self.market_rate),
            ("annualOpEx", self.annual_opex),
            ("fitoutCost", self.fitout_cost),
            ("moveCost", self.move_cost),
            ("amenities", self.amenities),
            ("transitAccess", self.transit_access),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(PropertyViolation::NonFiniteAmount(field));
            }
            if value < 0.0 {
                return Err(PropertyViolation::NegativeAmount(field));
            }
        }

        if self.financial_score > 100 {
            return Err(PropertyViolation::ScoreOutOfRange);
        }
        Ok(())
    }
}

/// Percentual arredondado de ocupação. Capacidade zero não tem ocupação definida.
pub fn utilization_percent(occupied: u32, capacity: u32) -> Option<u32> {
    if capacity == 0 {
        return None;
    }
    Some((f64::from(occupied) / f64::from(capacity) * 100.0).round() as u32)
}
