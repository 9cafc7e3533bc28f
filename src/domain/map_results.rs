use crate::domain::registry::TeamRegistry;
use crate::domain::team::{Screenshot, TeamResult};
use crate::error::{ReportError, Result};
use crate::infrastructure::ArtifactLocator;
use crate::services::scoring::{competition_ranks, screenshot_timepoints};
use std::path::PathBuf;
use tracing::{debug, info};

/// Every requested team's result on one map, normalized and ranked.
#[derive(Debug, Clone)]
pub struct MapResults {
    pub map_name: String,
    pub data_path: Option<PathBuf>,
    /// Longest run among valid teams. `None` when no team has data.
    pub turns: Option<usize>,
    pub init_score: Option<f64>,
    /// In request order, not rank order.
    pub entries: Vec<TeamResult>,
}

impl MapResults {
    /// Builds the result set for `map_name`. Without a `team_filter` every
    /// registered team is considered.
    pub fn load(
        map_name: &str,
        locator: &ArtifactLocator,
        registry: &TeamRegistry,
        team_filter: Option<&[String]>,
    ) -> Result<Self> {
        let data_path = locator.resolve_map_directory(map_name);
        let team_ids = team_filter.unwrap_or_else(|| registry.team_ids());

        let mut entries = Vec::with_capacity(team_ids.len());
        for team_id in team_ids {
            let display_name = registry
                .display_name(team_id)
                .ok_or_else(|| ReportError::UnknownTeam(team_id.clone()))?;
            entries.push(TeamResult::load(
                team_id,
                display_name,
                data_path.as_deref(),
            )?);
        }

        let results = Self::from_entries(map_name, data_path, entries);
        info!(
            "Map {}: {} teams, {} valid, {:?} turns",
            map_name,
            results.entries.len(),
            results.entries.iter().filter(|t| t.valid).count(),
            results.turns
        );

        Ok(results)
    }

    /// Aggregates already loaded entries: derives `turns` and the initial
    /// score, zeroes runs of non-canonical length and assigns ranks.
    pub fn from_entries(
        map_name: &str,
        data_path: Option<PathBuf>,
        mut entries: Vec<TeamResult>,
    ) -> Self {
        let valid = || entries.iter().filter(|t| t.valid);
        let turns = valid().map(|t| t.max_turn).max();
        let init_score = valid().next().and_then(|t| t.init_score);

        for entry in &mut entries {
            if Some(entry.max_turn) != turns && entry.final_score != 0.0 {
                debug!(
                    "Team {} ran {} of {:?} turns, score {} discarded",
                    entry.team_id, entry.max_turn, turns, entry.final_score
                );
                entry.final_score = 0.0;
            }
        }

        let scores: Vec<f64> = entries.iter().map(|t| t.final_score).collect();
        for (entry, rank) in entries.iter_mut().zip(competition_ranks(&scores)) {
            entry.rank = Some(rank);
        }

        Self {
            map_name: map_name.to_string(),
            data_path,
            turns,
            init_score,
            entries,
        }
    }

    #[cfg(test)]
    pub fn get_team(&self, team_id: &str) -> Option<&TeamResult> {
        self.entries.iter().find(|t| t.team_id == team_id)
    }

    pub fn screenshot_timepoints(&self) -> Vec<usize> {
        screenshot_timepoints(self.turns)
    }

    pub fn screenshots(&self, team: &TeamResult) -> Vec<Screenshot> {
        team.screenshots(&self.screenshot_timepoints(), self.turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::TeamInfo;
    use std::fs;
    use std::path::Path;

    fn registry(ids: &[&str]) -> TeamRegistry {
        TeamRegistry::new(
            ids.iter()
                .map(|id| TeamInfo {
                    id: id.to_string(),
                    name: id.to_uppercase(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn write_team(map_dir: &Path, team: &str, init: f64, final_score: f64, turns: usize) {
        let dir = map_dir.join(team);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("init-score.txt"), init.to_string()).unwrap();
        fs::write(dir.join("final-score.txt"), final_score.to_string()).unwrap();
        let series: Vec<String> = (0..=turns).map(|t| t.to_string()).collect();
        fs::write(dir.join("scores.txt"), series.join(" ")).unwrap();
    }

    fn ranks(results: &MapResults) -> Vec<Option<u32>> {
        results.entries.iter().map(|t| t.rank).collect()
    }

    #[test]
    fn aggregates_and_ranks() {
        let root = tempfile::tempdir().unwrap();
        let map_dir = root.path().join("Kobe1-eval");
        write_team(&map_dir, "a", 100.0, 10.0, 120);
        write_team(&map_dir, "b", 99.0, 10.0, 120);
        write_team(&map_dir, "c", 98.0, 7.0, 120);

        let locator = ArtifactLocator::new(root.path());
        let results =
            MapResults::load("Kobe1", &locator, &registry(&["a", "b", "c"]), None).unwrap();

        assert_eq!(results.data_path, Some(map_dir));
        assert_eq!(results.turns, Some(120));
        assert_eq!(results.init_score, Some(100.0));
        assert_eq!(ranks(&results), vec![Some(1), Some(1), Some(3)]);
        assert_eq!(results.screenshot_timepoints(), vec![50, 100, 120]);
    }

    #[test]
    fn short_run_is_zeroed() {
        let root = tempfile::tempdir().unwrap();
        let map_dir = root.path().join("Kobe1-eval");
        write_team(&map_dir, "full", 100.0, 5.0, 100);
        write_team(&map_dir, "short", 100.0, 50.0, 80);

        let locator = ArtifactLocator::new(root.path());
        let results =
            MapResults::load("Kobe1", &locator, &registry(&["full", "short"]), None).unwrap();

        let short = results.get_team("short").unwrap();
        assert_eq!(short.max_turn, 80);
        assert_eq!(short.final_score, 0.0);
        assert_eq!(short.rank, Some(2));
        assert_eq!(results.get_team("full").unwrap().rank, Some(1));
    }

    #[test]
    fn invalid_teams_join_the_zero_group() {
        let root = tempfile::tempdir().unwrap();
        let map_dir = root.path().join("Kobe1-eval");
        write_team(&map_dir, "a", 100.0, 3.0, 60);
        write_team(&map_dir, "b", 100.0, 0.0, 60);

        let locator = ArtifactLocator::new(root.path());
        let teams = registry(&["ghost", "a", "b"]);
        let results = MapResults::load("Kobe1", &locator, &teams, None).unwrap();

        assert_eq!(results.entries.len(), 3);
        let ghost = results.get_team("ghost").unwrap();
        assert!(!ghost.valid);
        assert_eq!(ghost.final_score, 0.0);
        assert_eq!(ghost.max_turn, 0);
        assert_eq!(ranks(&results), vec![Some(2), Some(1), Some(2)]);
    }

    #[test]
    fn filter_keeps_order_and_invalid_teams() {
        let root = tempfile::tempdir().unwrap();
        let map_dir = root.path().join("Kobe1-eval");
        write_team(&map_dir, "a", 100.0, 3.0, 60);
        write_team(&map_dir, "b", 100.0, 9.0, 60);

        let locator = ArtifactLocator::new(root.path());
        let filter = vec!["b".to_string(), "ghost".to_string()];
        let teams = registry(&["a", "b", "ghost"]);
        let results = MapResults::load("Kobe1", &locator, &teams, Some(&filter)).unwrap();

        let ids: Vec<&str> = results.entries.iter().map(|t| t.team_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "ghost"]);
        assert_eq!(ranks(&results), vec![Some(1), Some(2)]);
        assert!(results.get_team("a").is_none());
    }

    #[test]
    fn unknown_team_in_filter() {
        let root = tempfile::tempdir().unwrap();
        let locator = ArtifactLocator::new(root.path());
        let filter = vec!["nobody".to_string()];
        let result = MapResults::load("Kobe1", &locator, &registry(&["a"]), Some(&filter));
        assert!(matches!(result, Err(ReportError::UnknownTeam(id)) if id == "nobody"));
    }

    #[test]
    fn unresolvable_map_is_degenerate() {
        let root = tempfile::tempdir().unwrap();
        let locator = ArtifactLocator::new(root.path());
        let results =
            MapResults::load("Nowhere", &locator, &registry(&["a", "b"]), None).unwrap();

        assert_eq!(results.data_path, None);
        assert_eq!(results.turns, None);
        assert_eq!(results.init_score, None);
        assert!(results.entries.iter().all(|t| !t.valid));
        assert_eq!(ranks(&results), vec![Some(1), Some(1)]);
        assert!(results.screenshot_timepoints().is_empty());
        assert!(results.screenshots(&results.entries[0]).is_empty());
    }

    #[test]
    fn ranking_ignores_input_order() {
        let entry = |id: &str, score: f64| TeamResult {
            final_score: score,
            valid: true,
            max_turn: 10,
            score_series: vec![0.0; 11],
            ..TeamResult::invalid(id, id)
        };

        let forward = MapResults::from_entries(
            "m",
            None,
            vec![entry("a", 10.0), entry("b", 10.0), entry("c", 7.0)],
        );
        let backward = MapResults::from_entries(
            "m",
            None,
            vec![entry("c", 7.0), entry("b", 10.0), entry("a", 10.0)],
        );

        for team in &forward.entries {
            assert_eq!(backward.get_team(&team.team_id).unwrap().rank, team.rank);
        }
        assert_eq!(ranks(&forward), vec![Some(1), Some(1), Some(3)]);
    }

    #[test]
    fn longer_run_sets_canonical_length() {
        let entry = |id: &str, score: f64, max_turn: usize| TeamResult {
            final_score: score,
            valid: true,
            max_turn,
            score_series: vec![0.0; max_turn + 1],
            ..TeamResult::invalid(id, id)
        };

        let results = MapResults::from_entries(
            "m",
            None,
            vec![entry("a", 10.0, 100), entry("b", 4.0, 120)],
        );

        assert_eq!(results.turns, Some(120));
        assert_eq!(results.get_team("a").unwrap().final_score, 0.0);
        assert_eq!(results.get_team("b").unwrap().rank, Some(1));
    }
}
