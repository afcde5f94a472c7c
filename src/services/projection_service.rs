// src/services/projection_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::PropertyCatalog,
    models::{
        projection::{
            CostBreakdown, MarketComparison, ProjectionOptions, ProjectionResult,
            PropertyCostReport, Recommendation, RelocateCosts, StayCosts,
        },
        property::Property,
    },
};

// 10% a mais no primeiro ano por causa da transição
const RELOCATION_SURCHARGE: f64 = 1.10;
// fitout é cobrado por sq ft; capacidade * 0.01 é a convenção da planilha original
const FITOUT_AREA_FACTOR: f64 = 0.01;
const MONTHS_PER_YEAR: f64 = 12.0;

// ---
// Projetor financeiro (funções puras)
// ---

/// Custo único da mudança: `fitout * capacidade * 0.01 + mudança`.
pub fn initial_cost(property: &Property, capacity: u32) -> f64 {
    fitout_total(property, capacity) + property.move_cost
}

fn fitout_total(property: &Property, capacity: u32) -> f64 {
    property.fitout_cost * f64::from(capacity) * FITOUT_AREA_FACTOR
}

fn compounded(base: f64, growth: f64, year_index: u32) -> f64 {
    base * (1.0 + growth).powi(year_index as i32)
}

fn running_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Compara ficar x mudar no horizonte pedido.
pub fn project(property: &Property, options: &ProjectionOptions) -> ProjectionResult {
    let opex = property.annual_opex;
    let capacity = options.capacity_override.unwrap_or(property.capacity);

    // 1. Ficar: ano k = opex * (1+g)^(k-1)
    let stay_yearly: Vec<f64> = (0..options.horizon_years)
        .map(|k| compounded(opex, options.stay_growth, k))
        .collect();
    let stay_total: f64 = stay_yearly.iter().sum();

    // 2. Mudar: ano 1 com sobretaxa, demais com a mesma composição
    let relocate_yearly: Vec<f64> = (0..options.horizon_years)
        .map(|k| match k {
            0 => opex * RELOCATION_SURCHARGE,
            _ => compounded(opex, options.relocate_growth, k),
        })
        .collect();
    let initial = initial_cost(property, capacity);
    // O custo inicial entra no total, nunca na série composta
    let relocate_total = relocate_yearly.iter().fold(initial, |acc, v| acc + v);

    // Só para exibição: o ano 1 carrega o custo inicial quando os dois toggles estão ligados
    let mut display = relocate_yearly.clone();
    if options.include_move_costs && options.include_fitout_costs {
        if let Some(first) = display.first_mut() {
            *first += initial;
        }
    }

    // 3-5. Economia, ROI e recomendação
    let net_savings = stay_total - relocate_total;
    let roi = (net_savings > 0.0 && initial > 0.0).then(|| net_savings / initial * 100.0);
    let recommendation = if net_savings > 0.0 {
        Recommendation::Stay
    } else {
        Recommendation::Relocate
    };

    let current_annual_cost = stay_yearly.first().copied().unwrap_or(0.0);
    let projected_annual_cost = match recommendation {
        Recommendation::Stay => current_annual_cost,
        Recommendation::Relocate => relocate_yearly.first().copied().unwrap_or(0.0),
    };

    ProjectionResult {
        property_id: property.id,
        horizon_years: options.horizon_years,
        stay: StayCosts {
            cumulative: running_sum(&stay_yearly),
            yearly: stay_yearly,
            total: stay_total,
        },
        relocate: RelocateCosts {
            initial_cost: initial,
            cumulative: running_sum(&display),
            yearly: relocate_yearly,
            display,
            total: relocate_total,
        },
        net_savings,
        roi,
        recommendation,
        current_annual_cost,
        projected_annual_cost,
    }
}

/// Composição anual de custos. Fitout e mudança respeitam os toggles.
pub fn cost_breakdown(property: &Property, options: &ProjectionOptions) -> CostBreakdown {
    let capacity = options.capacity_override.unwrap_or(property.capacity);
    let rent = if property.is_leased() {
        property.current_rate * f64::from(capacity) * FITOUT_AREA_FACTOR * MONTHS_PER_YEAR
    } else {
        0.0
    };

    CostBreakdown {
        rent,
        opex: property.annual_opex,
        fitout: if options.include_fitout_costs { fitout_total(property, capacity) } else { 0.0 },
        move_cost: if options.include_move_costs { property.move_cost } else { 0.0 },
    }
}

pub fn market_comparison(property: &Property) -> Option<MarketComparison> {
    if !property.is_leased() {
        return None;
    }
    let difference_percent = (property.market_rate > 0.0)
        .then(|| (property.current_rate - property.market_rate) / property.market_rate * 100.0);

    Some(MarketComparison {
        current_rate: property.current_rate,
        market_rate: property.market_rate,
        difference_percent,
    })
}

// ---
// Serviço: liga o projetor ao catálogo
// ---

#[derive(Clone)]
pub struct ProjectionService {
    catalog: Arc<PropertyCatalog>,
    defaults: ProjectionOptions,
}

impl ProjectionService {
    pub fn new(catalog: Arc<PropertyCatalog>, defaults: ProjectionOptions) -> Self {
        Self { catalog, defaults }
    }

    pub fn defaults(&self) -> ProjectionOptions {
        self.defaults
    }

    pub fn project_property(
        &self,
        property_id: u32,
        options: &ProjectionOptions,
    ) -> Result<ProjectionResult, AppError> {
        let property = self
            .catalog
            .find_by_id(property_id)
            .ok_or(AppError::PropertyNotFound(property_id))?;

        let result = project(property, options);
        tracing::debug!(
            property_id,
            net_savings = result.net_savings,
            recommendation = ?result.recommendation,
            "projeção calculada"
        );
        Ok(result)
    }

    pub fn cost_report(
        &self,
        property_id: u32,
        options: &ProjectionOptions,
    ) -> Result<PropertyCostReport, AppError> {
        let property = self
            .catalog
            .find_by_id(property_id)
            .ok_or(AppError::PropertyNotFound(property_id))?;

        Ok(PropertyCostReport {
            property_id,
            breakdown: cost_breakdown(property, options),
            market: market_comparison(property),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PropertyCatalog {
        PropertyCatalog::seeded().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn stay_total_is_geometric_sum() {
        let catalog = catalog();
        let hq = catalog.find_by_id(1).unwrap();
        let result = project(hq, &ProjectionOptions::default());

        let a = hq.annual_opex;
        let expected = a * (1.0 + 1.02 + 1.02f64.powi(2) + 1.02f64.powi(3) + 1.02f64.powi(4));
        assert_eq!(result.stay.yearly.len(), 5);
        assert!(close(result.stay.total, expected));
        assert_eq!(result.stay.yearly[0], a);
    }

    #[test]
    fn initial_cost_uses_capacity_and_move_cost() {
        let mut property = catalog().find_by_id(1).unwrap().clone();
        property.fitout_cost = 100.0;
        property.capacity = 1000;
        property.move_cost = 1_200_000.0;

        assert_eq!(initial_cost(&property, property.capacity), 1_300_000.0);
        let result = project(&property, &ProjectionOptions::default());
        assert_eq!(result.relocate.initial_cost, 1_300_000.0);
    }

    #[test]
    fn relocate_first_year_carries_surcharge_and_total_carries_initial_cost() {
        let catalog = catalog();
        let ny = catalog.find_by_id(3).unwrap();
        let result = project(ny, &ProjectionOptions::default());

        assert!(close(result.relocate.yearly[0], ny.annual_opex * 1.10));
        assert!(close(result.relocate.yearly[1], ny.annual_opex * 1.02));
        let series: f64 = result.relocate.yearly.iter().sum();
        assert!(close(result.relocate.total, series + result.relocate.initial_cost));
    }

    #[test]
    fn same_growth_on_both_branches_always_recommends_relocate_without_roi() {
        // Com a mesma taxa, mudar custa sempre sobretaxa + custo inicial a mais
        for property in catalog().all() {
            let result = project(property, &ProjectionOptions::default());
            assert!(result.net_savings < 0.0);
            assert_eq!(result.recommendation, Recommendation::Relocate);
            assert_eq!(result.roi, None);
        }
    }

    #[test]
    fn roi_defined_when_staying_costs_more() {
        let catalog = catalog();
        let chicago = catalog.find_by_id(8).unwrap();
        let options = ProjectionOptions {
            stay_growth: 0.30,
            relocate_growth: 0.0,
            ..ProjectionOptions::default()
        };
        let result = project(chicago, &options);

        assert!(result.net_savings > 0.0);
        assert_eq!(result.recommendation, Recommendation::Stay);
        let roi = result.roi.expect("roi");
        assert!(close(roi, result.net_savings / result.relocate.initial_cost * 100.0));
        assert_eq!(result.projected_annual_cost, result.current_annual_cost);
    }

    #[test]
    fn zero_initial_cost_has_no_roi() {
        let mut property = catalog().find_by_id(8).unwrap().clone();
        property.fitout_cost = 0.0;
        property.move_cost = 0.0;
        let options = ProjectionOptions { stay_growth: 0.5, relocate_growth: 0.0, ..Default::default() };

        let result = project(&property, &options);
        assert!(result.net_savings > 0.0);
        assert_eq!(result.roi, None);
    }

    #[test]
    fn display_series_adds_initial_cost_only_with_both_toggles() {
        let catalog = catalog();
        let boston = catalog.find_by_id(9).unwrap();

        let with_both = project(boston, &ProjectionOptions::default());
        assert!(close(
            with_both.relocate.display[0],
            with_both.relocate.yearly[0] + with_both.relocate.initial_cost
        ));
        assert!(close(*with_both.relocate.cumulative.last().unwrap(), with_both.relocate.total));

        let no_move = project(boston, &ProjectionOptions { include_move_costs: false, ..Default::default() });
        assert_eq!(no_move.relocate.display, no_move.relocate.yearly);
        // Os toggles não mexem no total
        assert_eq!(no_move.relocate.total, with_both.relocate.total);
    }

    #[test]
    fn horizon_controls_series_length() {
        let catalog = catalog();
        let atlanta = catalog.find_by_id(10).unwrap();
        let result = project(atlanta, &ProjectionOptions::default().with_horizon(10));
        assert_eq!(result.stay.yearly.len(), 10);
        assert_eq!(result.relocate.display.len(), 10);
        assert_eq!(result.stay.cumulative.len(), 10);
    }

    #[test]
    fn projection_is_idempotent() {
        let catalog = catalog();
        let sf = catalog.find_by_id(5).unwrap();
        let options = ProjectionOptions::default().with_growth(0.031);
        let first = serde_json::to_string(&project(sf, &options)).unwrap();
        let second = serde_json::to_string(&project(sf, &options)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn breakdown_for_leased_and_owned() {
        let catalog = catalog();
        let ny = catalog.find_by_id(3).unwrap();
        let breakdown = cost_breakdown(ny, &ProjectionOptions::default());
        assert!(close(breakdown.rent, 85.0 * 1000.0 * 0.01 * 12.0));
        assert!(close(breakdown.fitout, 150.0 * 1000.0 * 0.01));
        assert_eq!(breakdown.move_cost, 850_000.0);

        let hq = catalog.find_by_id(1).unwrap();
        let owned = cost_breakdown(
            hq,
            &ProjectionOptions { include_fitout_costs: false, ..Default::default() },
        );
        assert_eq!(owned.rent, 0.0);
        assert_eq!(owned.fitout, 0.0);
    }

    #[test]
    fn market_comparison_matches_catalog_difference() {
        let catalog = catalog();
        let miami = market_comparison(catalog.find_by_id(6).unwrap()).unwrap();
        let diff = miami.difference_percent.unwrap();
        assert!((diff - 22.2).abs() < 0.05);

        assert!(market_comparison(catalog.find_by_id(2).unwrap()).is_none());
    }

    #[test]
    fn service_reports_unknown_property() {
        let service = ProjectionService::new(Arc::new(catalog()), ProjectionOptions::default());
        let err = service.project_property(99, &ProjectionOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::PropertyNotFound(99)));
    }
}
