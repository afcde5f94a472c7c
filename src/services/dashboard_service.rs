// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    db::PropertyCatalog,
    models::{
        dashboard::{MapMarker, MarkerCategory, PortfolioSummary, RecommendationCount},
        property::{utilization_percent, Property},
    },
};

// Metros de raio por funcionário no círculo de densidade
const DENSITY_RADIUS_PER_EMPLOYEE: u64 = 20;

pub fn portfolio_summary(properties: &[Property]) -> PortfolioSummary {
    let total_employees: u64 = properties.iter().map(|p| u64::from(p.employees)).sum();
    let total_capacity: u64 = properties.iter().map(|p| u64::from(p.capacity)).sum();

    // Mantém a ordem em que cada recomendação aparece no cadastro
    let mut recommendations: Vec<RecommendationCount> = Vec::new();
    for property in properties {
        match recommendations.iter_mut().find(|r| r.recommendation == property.recommendation) {
            Some(entry) => entry.count += 1,
            None => recommendations.push(RecommendationCount {
                recommendation: property.recommendation.clone(),
                count: 1,
            }),
        }
    }

    let average_financial_score = (!properties.is_empty()).then(|| {
        properties.iter().map(|p| f64::from(p.financial_score)).sum::<f64>() / properties.len() as f64
    });

    PortfolioSummary {
        total_properties: properties.len(),
        total_employees,
        total_capacity,
        portfolio_utilization: u32::try_from(total_employees)
            .ok()
            .zip(u32::try_from(total_capacity).ok())
            .and_then(|(employees, capacity)| utilization_percent(employees, capacity)),
        total_annual_opex: properties.iter().map(|p| p.annual_opex).sum(),
        average_financial_score,
        recommendations,
    }
}

pub fn map_markers(properties: &[Property]) -> Vec<MapMarker> {
    properties
        .iter()
        .map(|p| MapMarker {
            id: p.id,
            name: p.name.clone(),
            address: p.address.clone(),
            city: p.city.clone(),
            state: p.state.clone(),
            position: p.location,
            status: p.status,
            employees: p.employees,
            category: MarkerCategory::for_kind(&p.kind),
            density_radius: u64::from(p.employees) * DENSITY_RADIUS_PER_EMPLOYEE,
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<PropertyCatalog>,
}

impl DashboardService {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self { catalog }
    }

    pub fn get_summary(&self) -> PortfolioSummary {
        portfolio_summary(self.catalog.all())
    }

    pub fn get_map_markers(&self) -> Vec<MapMarker> {
        map_markers(self.catalog.all())
    }
}
