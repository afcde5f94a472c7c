// tests/projection_properties.rs

use proptest::prelude::*;

use portfolio::{
    db::PropertyCatalog,
    models::projection::{ProjectionOptions, Recommendation},
    services::{projection_service::project, scenario_service::best_scenario},
};

fn options() -> impl Strategy<Value = ProjectionOptions> {
    (1u32..=30, -0.5f64..0.5, -0.5f64..0.5, any::<bool>(), any::<bool>()).prop_map(
        |(horizon_years, stay_growth, relocate_growth, include_move_costs, include_fitout_costs)| {
            ProjectionOptions {
                horizon_years,
                stay_growth,
                relocate_growth,
                include_move_costs,
                include_fitout_costs,
                capacity_override: None,
            }
        },
    )
}

proptest! {
    #[test]
    fn roi_exists_only_when_staying_saves(id in 1u32..=10, opts in options()) {
        let catalog = PropertyCatalog::seeded().unwrap();
        let property = catalog.find_by_id(id).unwrap();
        let result = project(property, &opts);

        prop_assert_eq!(result.stay.yearly.len(), opts.horizon_years as usize);
        prop_assert_eq!(result.relocate.yearly.len(), opts.horizon_years as usize);
        prop_assert_eq!(result.net_savings, result.stay.total - result.relocate.total);

        match result.roi {
            Some(roi) => {
                prop_assert!(result.net_savings > 0.0);
                prop_assert!(roi.is_finite() && roi > 0.0);
                prop_assert_eq!(result.recommendation, Recommendation::Stay);
            }
            None => prop_assert!(result.net_savings <= 0.0 || result.relocate.initial_cost <= 0.0),
        }
    }

    #[test]
    fn totals_ignore_display_toggles(id in 1u32..=10, opts in options()) {
        let catalog = PropertyCatalog::seeded().unwrap();
        let property = catalog.find_by_id(id).unwrap();

        let shown = project(property, &ProjectionOptions { include_move_costs: true, include_fitout_costs: true, ..opts });
        let hidden = project(property, &ProjectionOptions { include_move_costs: false, include_fitout_costs: false, ..opts });

        prop_assert_eq!(shown.relocate.total, hidden.relocate.total);
        prop_assert_eq!(shown.net_savings, hidden.net_savings);
        prop_assert_eq!(shown.roi, hidden.roi);
        prop_assert_eq!(&hidden.relocate.display, &hidden.relocate.yearly);
    }

    #[test]
    fn projection_is_deterministic(id in 1u32..=10, opts in options()) {
        let catalog = PropertyCatalog::seeded().unwrap();
        let property = catalog.find_by_id(id).unwrap();
        prop_assert_eq!(project(property, &opts), project(property, &opts));
    }
}

#[test]
fn best_scenario_of_nothing_is_none() {
    assert!(best_scenario(&[]).is_none());
}
