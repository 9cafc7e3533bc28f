use crate::domain::map_results::MapResults;
use crate::domain::storage::ArtifactFile;
use crate::domain::team::{Screenshot, TeamResult};
use chrono::Local;
use serde::Serialize;

/// Aggregated results plus the downloadable artifacts found for the map.
#[derive(Debug, Clone)]
pub struct MapReport {
    pub results: MapResults,
    pub map_archive: Option<ArtifactFile>,
    pub log_archive: Option<ArtifactFile>,
    /// One slot per entry of `results.entries`.
    pub logfiles: Vec<Option<ArtifactFile>>,
}

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub map_name: &'a str,
    pub turns: Option<usize>,
    pub init_score: Option<f64>,
    pub timepoints: Vec<usize>,
    pub map_archive: Option<&'a ArtifactFile>,
    pub log_archive: Option<&'a ArtifactFile>,
    pub last_updated: String,
    pub entries: Vec<ManifestEntry<'a>>,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    #[serde(flatten)]
    pub team: &'a TeamResult,
    pub screenshots: Vec<Screenshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logfile: Option<&'a ArtifactFile>,
}

impl<'a> Manifest<'a> {
    pub fn new(report: &'a MapReport) -> Self {
        let results = &report.results;
        let entries = results
            .entries
            .iter()
            .zip(&report.logfiles)
            .map(|(team, logfile)| ManifestEntry {
                team,
                screenshots: results.screenshots(team),
                logfile: logfile.as_ref(),
            })
            .collect();

        Self {
            map_name: &results.map_name,
            turns: results.turns,
            init_score: results.init_score,
            timepoints: results.screenshot_timepoints(),
            map_archive: report.map_archive.as_ref(),
            log_archive: report.log_archive.as_ref(),
            last_updated: Local::now().to_rfc3339(),
            entries,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
