use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Missing required file: {0:?}")]
    MissingArtifact(PathBuf),
    #[error("Can't identify logfile for {team}: {matches} candidates")]
    AmbiguousLogfile { team: String, matches: usize },
    #[error("Unknown team: {0}")]
    UnknownTeam(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
