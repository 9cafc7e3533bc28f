use crate::error::{ReportError, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    teams: Vec<TeamInfo>,
}

/// Known teams in registration order, with display names.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    ids: Vec<String>,
    names: FxHashMap<String, String>,
}

impl TeamRegistry {
    pub fn new(teams: Vec<TeamInfo>) -> Result<Self> {
        let mut ids = Vec::with_capacity(teams.len());
        let mut names = FxHashMap::default();

        for team in teams {
            if names.insert(team.id.clone(), team.name).is_some() {
                return Err(ReportError::Config(format!(
                    "duplicate team id in registry: {}",
                    team.id
                )));
            }
            ids.push(team.id);
        }

        Ok(Self { ids, names })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: RegistryFile = serde_json::from_str(&content)?;
        Self::new(file.teams)
    }

    pub fn team_ids(&self) -> &[String] {
        &self.ids
    }

    pub fn display_name(&self, team_id: &str) -> Option<&str> {
        self.names.get(team_id).map(String::as_str)
    }
}
