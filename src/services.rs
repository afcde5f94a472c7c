pub mod dashboard_service;
pub mod lease_service;
pub mod projection_service;
pub mod scenario_service;
