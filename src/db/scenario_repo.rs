// src/db/scenario_repo.rs

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::scenario::{CreateScenarioPayload, Scenario};

// Cenários vivem só na sessão (memória do processo), nunca são persistidos
#[derive(Clone)]
pub struct ScenarioRepository {
    scenarios: Arc<RwLock<Vec<Scenario>>>,
}

impl Default for ScenarioRepository {
    fn default() -> Self {
        Self::new(vec![Scenario::baseline(1)])
    }
}

impl ScenarioRepository {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios: Arc::new(RwLock::new(scenarios)),
        }
    }

    pub async fn list(&self) -> Vec<Scenario> {
        self.scenarios.read().await.clone()
    }

    pub async fn find_by_id(&self, id: u32) -> Option<Scenario> {
        self.scenarios.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Busca vários mantendo a ordem pedida. Devolve o primeiro id ausente como erro.
    pub async fn find_many(&self, ids: &[u32]) -> Result<Vec<Scenario>, u32> {
        let scenarios = self.scenarios.read().await;
        ids.iter()
            .map(|id| scenarios.iter().find(|s| s.id == *id).cloned().ok_or(*id))
            .collect()
    }

    // Novo id = maior id existente + 1
    pub async fn create(&self, payload: CreateScenarioPayload) -> Scenario {
        let mut scenarios = self.scenarios.write().await;
        let next_id = scenarios.iter().map(|s| s.id).max().unwrap_or(0) + 1;

        let scenario = payload.into_scenario(next_id);
        scenarios.push(scenario.clone());
        scenario
    }
}
