//! ---
//! ops_section: "08-shift-models-interpolation"
//! ops_subsection: "module"
//! ops_type: "source"
//! ops_scope: "code"
//! ops_description: "Scenario records and impact models."
//! ops_version: "v0.0.0-prealpha"
//! ops_owner: "tbd"
//! ---
use indexmap::IndexMap;

use crate::errors::{Result, ScenarioError};
use crate::model::Scenario;

/// Id-keyed scenario collection, iterated in insertion order so selector
/// menus render stably.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: IndexMap<String, Scenario>,
}

impl ScenarioCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a scenario list, rejecting duplicate ids.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Result<Self> {
        let mut catalog = Self::new();
        for scenario in scenarios {
            catalog.insert(scenario)?;
        }
        Ok(catalog)
    }

    /// Register a scenario. Ids are unique across the catalog.
    pub fn insert(&mut self, scenario: Scenario) -> Result<()> {
        if self.scenarios.contains_key(&scenario.id) {
            return Err(ScenarioError::DuplicateId(scenario.id));
        }
        self.scenarios.insert(scenario.id.clone(), scenario);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
