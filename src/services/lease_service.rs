// src/services/lease_service.rs

use std::{cmp::Ordering, sync::Arc};

use chrono::{Months, NaiveDate};

use crate::{
    db::PropertyCatalog,
    models::{
        lease::{LeaseFilter, LeaseQuery, LeaseRow, LeaseSortField, LeaseSummary, SortDirection},
        projection::{ProjectionOptions, Recommendation},
        property::Property,
    },
    services::projection_service::{cost_breakdown, project},
};

/// Contrato vence até `today + window_years`. Vale só para Leased.
pub fn is_expiring(property: &Property, today: NaiveDate, window_years: u32) -> bool {
    let Some(expiry) = property.lease_expiry else {
        return false;
    };
    // Janela fora do calendário cobre qualquer vencimento
    let limit = window_years
        .checked_mul(12)
        .and_then(|months| today.checked_add_months(Months::new(months)))
        .unwrap_or(NaiveDate::MAX);
    property.is_leased() && expiry <= limit
}

fn annual_cost(property: &Property, options: &ProjectionOptions) -> f64 {
    // aluguel é 0 para Owned
    cost_breakdown(property, options).rent + property.annual_opex
}

fn status_label(property: &Property) -> &'static str {
    if property.is_leased() { "Leased" } else { "Owned" }
}

fn compare_rows(a: &Property, b: &Property, field: LeaseSortField) -> Ordering {
    match field {
        LeaseSortField::Name => a.name.cmp(&b.name),
        LeaseSortField::City => a.city.cmp(&b.city),
        LeaseSortField::Status => status_label(a).cmp(status_label(b)),
        LeaseSortField::Employees => a.employees.cmp(&b.employees),
        LeaseSortField::Utilization => a.utilization.cmp(&b.utilization),
        LeaseSortField::AnnualOpex => a.annual_opex.total_cmp(&b.annual_opex),
        LeaseSortField::FinancialScore => a.financial_score.cmp(&b.financial_score),
        LeaseSortField::Recommendation => a.recommendation.cmp(&b.recommendation),
        // Tratado em sort_properties
        LeaseSortField::LeaseExpiry => a.lease_expiry.cmp(&b.lease_expiry),
    }
}

fn sort_properties(properties: &mut [&Property], field: LeaseSortField, direction: SortDirection) {
    let directed = |ordering: Ordering| match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };

    properties.sort_by(|a, b| {
        if field == LeaseSortField::LeaseExpiry {
            // Sem contrato (N/A) vai sempre para o fim, nos dois sentidos
            return match (a.lease_expiry, b.lease_expiry) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => directed(x.cmp(&y)),
            };
        }
        directed(compare_rows(a, b, field))
    });
}

#[derive(Clone)]
pub struct LeaseService {
    catalog: Arc<PropertyCatalog>,
    defaults: ProjectionOptions,
    expiry_window_years: u32,
}

impl LeaseService {
    pub fn new(catalog: Arc<PropertyCatalog>, defaults: ProjectionOptions, expiry_window_years: u32) -> Self {
        Self { catalog, defaults, expiry_window_years }
    }

    pub fn summary(&self, today: NaiveDate) -> LeaseSummary {
        let properties = self.catalog.all();
        let leased: Vec<&Property> = properties.iter().filter(|p| p.is_leased()).collect();

        // Economia potencial: contratos cuja recomendação é mudar
        let potential_savings = leased
            .iter()
            .map(|p| project(p, &self.defaults))
            .filter(|r| r.recommendation == Recommendation::Relocate)
            .map(|r| r.net_savings.abs())
            .sum();

        LeaseSummary {
            total_properties: properties.len(),
            leased_properties: leased.len(),
            owned_properties: properties.len() - leased.len(),
            expiring_leases: leased
                .iter()
                .filter(|p| is_expiring(p, today, self.expiry_window_years))
                .count(),
            potential_savings,
        }
    }

    pub fn rows(&self, query: &LeaseQuery, today: NaiveDate) -> Vec<LeaseRow> {
        let mut selected: Vec<&Property> = self
            .catalog
            .all()
            .iter()
            .filter(|p| match query.filter {
                LeaseFilter::All => true,
                LeaseFilter::Leased => p.is_leased(),
                LeaseFilter::Owned => !p.is_leased(),
                LeaseFilter::Expiring => is_expiring(p, today, self.expiry_window_years),
            })
            .collect();

        sort_properties(&mut selected, query.sort, query.direction);

        selected
            .into_iter()
            .map(|p| {
                let projection = project(p, &self.defaults);
                let annual_cost = annual_cost(p, &self.defaults);
                LeaseRow {
                    id: p.id,
                    name: p.name.clone(),
                    kind: p.kind.clone(),
                    city: p.city.clone(),
                    state: p.state.clone(),
                    zip_code: p.zip_code.clone(),
                    status: p.status,
                    lease_expiry: p.lease_expiry,
                    employees: p.employees,
                    utilization: p.utilization,
                    current_rate: p.current_rate,
                    market_rate: p.market_rate,
                    annual_cost,
                    cost_per_employee: (p.employees > 0).then(|| annual_cost / f64::from(p.employees)),
                    office_recommendation: p.recommendation.clone(),
                    recommendation: projection.recommendation,
                    net_savings: projection.net_savings,
                }
            })
            .collect()
    }
}
