use crate::domain::storage::{ArtifactFile, ArtifactKeys};
use crate::error::{ReportError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolves evaluation artifacts relative to a root directory.
#[derive(Debug, Clone)]
pub struct ArtifactLocator {
    root: PathBuf,
}

impl ArtifactLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tries `{map}-eval/`, then `{map}/` and finally the root itself, the
    /// latter two only when they hold the map's score plot.
    pub fn resolve_map_directory(&self, map_name: &str) -> Option<PathBuf> {
        let plot = ArtifactKeys::plot_file(map_name);

        let eval_dir = self
            .root
            .join(format!("{}{}", map_name, ArtifactKeys::EVAL_DIR_SUFFIX));
        if eval_dir.is_dir() {
            return Some(eval_dir);
        }

        let map_dir = self.root.join(map_name);
        if map_dir.join(&plot).exists() {
            return Some(map_dir);
        }

        if self.root.join(&plot).exists() {
            return Some(self.root.clone());
        }

        warn!("Couldn't find eval directory for map {}", map_name);
        None
    }

    /// First existing archive in priority order wins.
    pub fn resolve_map_archive(&self, map_name: &str) -> Option<ArtifactFile> {
        ArtifactKeys::MAP_ARCHIVE_SUFFIXES
            .iter()
            .map(|suffix| self.root.join(format!("{}{}", map_name, suffix)))
            .find_map(|path| stat_file(&path))
    }

    pub fn resolve_log_archive(&self, map_name: &str) -> Option<ArtifactFile> {
        let file_name = format!("{}{}", map_name, ArtifactKeys::LOG_ARCHIVE_SUFFIX);
        let mut dir = self.root.clone();

        for _ in 0..=ArtifactKeys::LOG_ARCHIVE_ASCENT {
            if let Some(found) = stat_file(&dir.join(&file_name)) {
                debug!("Found log archive at {:?}", found.path);
                return Some(found);
            }
            dir = dir.join("..");
        }

        None
    }

    /// Exactly one non-hidden file in `directory` may carry the team's
    /// display name; anything else is reported as ambiguous. An unreadable
    /// directory or entry counts as no match.
    pub fn resolve_team_logfile(
        &self,
        directory: &Path,
        display_name: &str,
    ) -> Result<ArtifactFile> {
        let ambiguous = |matches: usize| ReportError::AmbiguousLogfile {
            team: display_name.to_string(),
            matches,
        };

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Can't list {:?} for logfiles: {}", directory, e);
                }
                return Err(ambiguous(0));
            }
        };

        let mut matches: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry in {:?}: {}", directory, e);
                    None
                }
            })
            .filter(|entry| {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                !name.starts_with('.') && name.contains(display_name)
            })
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();

        if matches.len() != 1 {
            return Err(ambiguous(matches.len()));
        }

        stat_file(&matches.remove(0)).ok_or_else(|| ambiguous(0))
    }

    /// Path as it should appear in a link from a page stored at the root.
    pub fn relative_link(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

fn stat_file(path: &Path) -> Option<ArtifactFile> {
    let metadata = fs::metadata(path).ok()?;
    metadata.is_file().then(|| ArtifactFile {
        size: metadata.len(),
        path: path.to_path_buf(),
    })
}
