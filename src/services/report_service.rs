use crate::config::cli::OutputFormat;
use crate::domain::{ArtifactFile, Manifest, MapReport, MapResults, TeamRegistry, TeamResult};
use crate::error::{ReportError, Result};
use crate::infrastructure::ArtifactLocator;
use crate::services::publish::PublishService;
use tracing::{info, warn};

pub struct ReportService {
    locator: ArtifactLocator,
    registry: TeamRegistry,
}

impl ReportService {
    pub fn new(locator: ArtifactLocator, registry: TeamRegistry) -> Self {
        Self { locator, registry }
    }

    pub fn build(&self, map_name: &str, team_filter: Option<&[String]>) -> Result<MapReport> {
        info!("Collecting results for map {}", map_name);

        let results = MapResults::load(map_name, &self.locator, &self.registry, team_filter)?;
        let map_archive = self.locator.resolve_map_archive(map_name);
        let log_archive = self.locator.resolve_log_archive(map_name);

        let logfiles = results
            .entries
            .iter()
            .map(|team| self.find_logfile(&results, team))
            .collect();

        Ok(MapReport {
            results,
            map_archive,
            log_archive,
            logfiles,
        })
    }

    /// A team without exactly one matching logfile simply gets no link.
    fn find_logfile(&self, results: &MapResults, team: &TeamResult) -> Option<ArtifactFile> {
        let data_path = results.data_path.as_deref().filter(|_| team.valid)?;

        match self
            .locator
            .resolve_team_logfile(data_path, &team.display_name)
        {
            Ok(logfile) => Some(logfile),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    pub fn render(
        &self,
        report: &MapReport,
        format: OutputFormat,
        log_url_base: &str,
    ) -> Result<String> {
        match format {
            OutputFormat::Html => {
                Ok(PublishService::new(&self.locator, log_url_base).render_html(report))
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Manifest::new(report))?),
        }
    }
}
