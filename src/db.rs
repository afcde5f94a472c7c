pub mod property_repo;
pub use property_repo::PropertyCatalog;
pub mod scenario_repo;
pub use scenario_repo::ScenarioRepository;
