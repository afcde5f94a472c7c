// src/db/property_repo.rs

use std::{collections::HashSet, path::Path};

use anyhow::{bail, Context};

use crate::models::property::{OccupancyStatus, Property};

// Os dez escritórios de referência
const SEED_OFFICES: &str = include_str!("seed/offices.json");

/// Catálogo de imóveis em memória. Imutável depois de montado.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<Property>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id) {
                bail!("id de imóvel duplicado: {}", property.id);
            }
            property
                .check_invariants()
                .with_context(|| format!("imóvel {} ({}) inválido", property.id, property.name))?;
        }
        Ok(Self { properties })
    }

    pub fn seeded() -> anyhow::Result<Self> {
        Self::from_json_str(SEED_OFFICES).context("falha ao carregar os escritórios padrão")
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let properties: Vec<Property> = serde_json::from_str(raw)?;
        Self::new(properties)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("não foi possível ler {}", path.display()))?;
        let catalog = Self::from_json_str(&raw)
            .with_context(|| format!("catálogo inválido em {}", path.display()))?;

        tracing::info!("📦 Catálogo carregado de {} ({} imóveis)", path.display(), catalog.len());
        Ok(catalog)
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, status: Option<OccupancyStatus>) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| status.is_none_or(|s| p.status == s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
