// src/config.rs

use std::{env, path::PathBuf, str::FromStr, sync::Arc};

use anyhow::{bail, Context};

use crate::{
    common::i18n::I18nStore,
    db::{PropertyCatalog, ScenarioRepository},
    models::projection::{ProjectionOptions, DEFAULT_HORIZON_YEARS, DEFAULT_OPEX_GROWTH},
    services::{
        dashboard_service::DashboardService, lease_service::LeaseService,
        projection_service::ProjectionService, scenario_service::ScenarioService,
    },
};

pub const MAX_HORIZON_YEARS: u32 = 30;
pub const MAX_LEASE_EXPIRY_WINDOW_YEARS: u32 = 50;

// Configurações lidas do ambiente (.env)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    // Sem caminho, usa os escritórios padrão
    pub catalog_path: Option<PathBuf>,
    pub horizon_years: u32,
    pub opex_growth: f64,
    pub lease_expiry_window_years: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            catalog_path: None,
            horizon_years: DEFAULT_HORIZON_YEARS,
            opex_growth: DEFAULT_OPEX_GROWTH,
            lease_expiry_window_years: 2,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} inválida: {raw:?}")),
        None => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            bind_addr: lookup("APP_BIND_ADDR").unwrap_or(defaults.bind_addr),
            catalog_path: lookup("PORTFOLIO_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            horizon_years: parse_var(&lookup, "PROJECTION_HORIZON_YEARS", defaults.horizon_years)?,
            opex_growth: parse_var(&lookup, "OPEX_GROWTH_RATE", defaults.opex_growth)?,
            lease_expiry_window_years: parse_var(
                &lookup,
                "LEASE_EXPIRY_WINDOW_YEARS",
                defaults.lease_expiry_window_years,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            bail!("PROJECTION_HORIZON_YEARS precisa estar entre 1 e {MAX_HORIZON_YEARS}");
        }
        // Taxa negativa é deflação; abaixo de -100% não faz sentido
        if !self.opex_growth.is_finite() || self.opex_growth <= -1.0 || self.opex_growth > 10.0 {
            bail!("OPEX_GROWTH_RATE precisa ser finita, maior que -1 e no máximo 10");
        }
        if self.lease_expiry_window_years > MAX_LEASE_EXPIRY_WINDOW_YEARS {
            bail!("LEASE_EXPIRY_WINDOW_YEARS precisa ser no máximo {MAX_LEASE_EXPIRY_WINDOW_YEARS}");
        }
        Ok(())
    }

    pub fn projection_defaults(&self) -> ProjectionOptions {
        ProjectionOptions::default()
            .with_horizon(self.horizon_years)
            .with_growth(self.opex_growth)
    }
}

// O estado compartilhado por todos os handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<PropertyCatalog>,
    pub i18n_store: Arc<I18nStore>,
    pub projection_service: ProjectionService,
    pub scenario_service: ScenarioService,
    pub lease_service: LeaseService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => PropertyCatalog::from_json_file(path)?,
            None => PropertyCatalog::seeded()?,
        };
        tracing::info!("✅ Catálogo pronto com {} imóveis", catalog.len());

        Ok(Self::with_catalog(config, catalog))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_catalog(config: AppConfig, catalog: PropertyCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let defaults = config.projection_defaults();

        let projection_service = ProjectionService::new(catalog.clone(), defaults);
        let scenario_service =
            ScenarioService::new(catalog.clone(), ScenarioRepository::default(), defaults);
        let lease_service =
            LeaseService::new(catalog.clone(), defaults, config.lease_expiry_window_years);
        let dashboard_service = DashboardService::new(catalog.clone());

        Self {
            config: Arc::new(config),
            catalog,
            i18n_store: Arc::new(I18nStore::default()),
            projection_service,
            scenario_service,
            lease_service,
            dashboard_service,
        }
    }
}
