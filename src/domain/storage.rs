use serde::Serialize;
use std::path::PathBuf;

/// A file found on disk, with its size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactFile {
    pub size: u64,
    pub path: PathBuf,
}

pub struct ArtifactKeys;

impl ArtifactKeys {
    pub const EVAL_DIR_SUFFIX: &'static str = "-eval";
    pub const LOG_ARCHIVE_SUFFIX: &'static str = "-logs.tar";
    pub const MAP_ARCHIVE_SUFFIXES: [&'static str; 4] =
        ["-map.tar.gz", "-map.tgz", ".tgz", ".tar.gz"];
    /// How many parent directories are searched for the log archive.
    pub const LOG_ARCHIVE_ASCENT: usize = 3;

    pub const INIT_SCORE: &'static str = "init-score.txt";
    pub const FINAL_SCORE: &'static str = "final-score.txt";
    pub const SCORES: &'static str = "scores.txt";

    pub const SNAPSHOT_FINAL: &'static str = "final";

    pub fn plot_file(map_name: &str) -> String {
        format!("plot-{}.svg", map_name)
    }

    pub fn snapshot(label: &str) -> String {
        format!("snapshot-{}.png", label)
    }

    pub fn thumbnail(label: &str) -> String {
        format!("snapshot-{}-tn.jpg", label)
    }
}
