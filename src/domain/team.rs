use crate::domain::storage::ArtifactKeys;
use crate::error::{ReportError, Result};
use crate::infrastructure::{read_scalar, read_series};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot artifacts shown for one team at one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub image: PathBuf,
    pub thumbnail: PathBuf,
    pub score: f64,
}

/// One column of a team's screenshot row. Empty when nothing comparable
/// exists for that turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screenshot {
    pub turn: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

impl Screenshot {
    fn empty(turn: usize) -> Self {
        Self {
            turn,
            snapshot: None,
        }
    }
}

/// One team's run on one map.
#[derive(Debug, Clone, Serialize)]
pub struct TeamResult {
    pub team_id: String,
    pub display_name: String,
    #[serde(skip)]
    pub dir: Option<PathBuf>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_score: Option<f64>,
    pub final_score: f64,
    #[serde(skip)]
    pub score_series: Vec<f64>,
    pub max_turn: usize,
    pub rank: Option<u32>,
}

impl TeamResult {
    pub fn invalid(team_id: &str, display_name: &str) -> Self {
        Self {
            team_id: team_id.to_string(),
            display_name: display_name.to_string(),
            dir: None,
            valid: false,
            init_score: None,
            final_score: 0.0,
            score_series: Vec::new(),
            max_turn: 0,
            rank: None,
        }
    }

    /// Loads the team's records from `{map_dir}/{team_id}`. A missing team
    /// directory gives an invalid result without touching any file.
    pub fn load(team_id: &str, display_name: &str, map_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = map_dir.map(|d| d.join(team_id)).filter(|d| d.exists()) else {
            debug!("No results for team {}", team_id);
            return Ok(Self::invalid(team_id, display_name));
        };

        let init_score = read_scalar(&dir.join(ArtifactKeys::INIT_SCORE))?;
        let final_score = require(read_scalar, &dir.join(ArtifactKeys::FINAL_SCORE))?;
        let score_series = require(read_series, &dir.join(ArtifactKeys::SCORES))?;
        let max_turn = score_series.len() - 1;

        debug!(
            "Loaded team {}: final score {}, {} turns",
            team_id, final_score, max_turn
        );

        Ok(Self {
            team_id: team_id.to_string(),
            display_name: display_name.to_string(),
            dir: Some(dir),
            valid: true,
            init_score,
            final_score,
            score_series,
            max_turn,
            rank: None,
        })
    }

    /// Screenshot row aligned with `timepoints`. The last timepoint uses the
    /// final snapshot, but only for a team that ran the full `turns`.
    pub fn screenshots(&self, timepoints: &[usize], turns: Option<usize>) -> Vec<Screenshot> {
        let Some((&terminal, intermediate)) = timepoints.split_last() else {
            return Vec::new();
        };

        let mut row: Vec<Screenshot> = intermediate
            .iter()
            .map(|&turn| self.intermediate_screenshot(turn))
            .collect();

        let ran_full_length = self.valid && Some(self.max_turn) == turns;
        let last = match (&self.dir, ran_full_length) {
            (Some(dir), true) => Screenshot {
                turn: self.max_turn,
                snapshot: Some(Snapshot {
                    image: dir.join(ArtifactKeys::snapshot(ArtifactKeys::SNAPSHOT_FINAL)),
                    thumbnail: dir.join(ArtifactKeys::thumbnail(ArtifactKeys::SNAPSHOT_FINAL)),
                    score: self.score_series[self.max_turn],
                }),
            },
            _ => Screenshot::empty(intermediate.last().copied().unwrap_or(terminal)),
        };
        row.push(last);

        row
    }

    fn intermediate_screenshot(&self, turn: usize) -> Screenshot {
        let Some(dir) = &self.dir else {
            return Screenshot::empty(turn);
        };

        let label = turn.to_string();
        let image = dir.join(ArtifactKeys::snapshot(&label));
        if turn > self.max_turn || !image.exists() {
            return Screenshot::empty(turn);
        }

        Screenshot {
            turn,
            snapshot: Some(Snapshot {
                image,
                thumbnail: dir.join(ArtifactKeys::thumbnail(&label)),
                score: self.score_series[turn],
            }),
        }
    }
}

fn require<T>(read: fn(&Path) -> Result<Option<T>>, path: &Path) -> Result<T> {
    read(path)?.ok_or_else(|| ReportError::MissingArtifact(path.to_path_buf()))
}
