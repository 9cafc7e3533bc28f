use crate::domain::{ArtifactFile, MapReport, Screenshot, TeamResult};
use crate::infrastructure::ArtifactLocator;
use crate::utils::{escape_html, size_format};

/// Renders a [`MapReport`] as a standalone XHTML results page. Links are
/// relative to the locator's root, where the page is expected to live.
pub struct PublishService<'a> {
    locator: &'a ArtifactLocator,
    log_url_base: String,
}

impl<'a> PublishService<'a> {
    pub fn new(locator: &'a ArtifactLocator, log_url_base: &str) -> Self {
        Self {
            locator,
            log_url_base: log_url_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn render_html(&self, report: &MapReport) -> String {
        let map = escape_html(&report.results.map_name);
        let init_score = report
            .results
            .init_score
            .map(|score| format!("{:.2}", score))
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN"
               "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" lang="en" xml:lang="en">

<head>
<title>Results for map {map}</title>
<style type="text/css">
  body {{ font-family: sans-serif; }}

  table {{ border-collapse: collapse; }}
  tr.first {{ background-color: #E9D44A; }}
  tr.second {{ background-color: #C8C8C8; }}
  tr.third {{ background-color: #C89D4C; }}
  div.init-map {{ float:left;
                  text-align:center; }}
</style>
</head>

<body>
<h1>Results for {map}</h1>
{map_download}
<br clear="all" />
<div class="init-map"><a href="snapshot-init.png"><img src="snapshot-init-small.png" width="400" height="300" alt="Initial situation for {map}" /></a>
<br />
Initial score: {init_score}</div>
<a href="plot-{map}.svg"><img src="plot-{map}.svg" width="400" height="300" alt="Plot of agent scores vs time for {map}" /></a>

<br clear="all" />
<br />

{log_download}
{table}

</body>

</html>
"#,
            map = map,
            map_download = self.map_download(report.map_archive.as_ref()),
            init_score = init_score,
            log_download = self.log_download(&report.results.map_name, report.log_archive.as_ref()),
            table = self.results_table(report),
        )
    }

    fn map_download(&self, archive: Option<&ArtifactFile>) -> String {
        archive
            .map(|archive| {
                format!(
                    r#"<a href="{}">Download map</a> (Size: {})"#,
                    escape_html(&self.locator.relative_link(&archive.path)),
                    size_format(archive.size)
                )
            })
            .unwrap_or_default()
    }

    fn log_download(&self, map_name: &str, archive: Option<&ArtifactFile>) -> String {
        archive
            .map(|archive| {
                let url = format!("{}/{}/{}-all.tar", self.log_url_base, map_name, map_name);
                format!(
                    r#"<a href="{}">Download all logs</a> (Size: {})"#,
                    escape_html(&url),
                    size_format(archive.size)
                )
            })
            .unwrap_or_default()
    }

    fn results_table(&self, report: &MapReport) -> String {
        let results = &report.results;
        let timepoints = results.screenshot_timepoints();

        let mut headers = vec!["Team".to_string(), "Score".to_string(), "Rank".to_string()];
        headers.extend(timepoints.iter().map(|t| t.to_string()));
        headers.push("Logfile".to_string());

        let mut table = String::from(r#"<table border="2" cellspacing="0" cellpadding="5">"#);
        table.push_str(&table_row(&headers, None, "th"));
        for (team, logfile) in results.entries.iter().zip(&report.logfiles) {
            let cells = self.team_cells(team, &results.screenshots(team), logfile.as_ref());
            table.push_str(&table_row(&cells, podium_class(team.rank), "td"));
            table.push('\n');
        }
        table.push_str("</table>");
        table
    }

    fn team_cells(
        &self,
        team: &TeamResult,
        screenshots: &[Screenshot],
        logfile: Option<&ArtifactFile>,
    ) -> Vec<String> {
        let rank = team
            .rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-1".to_string());

        let mut cells = vec![
            escape_html(&team.display_name),
            format!("{:.6}", team.final_score),
            rank,
        ];
        cells.extend(screenshots.iter().map(|shot| self.screenshot_cell(shot)));
        cells.push(
            logfile
                .map(|log| {
                    format!(
                        r#"<a href="{}">Download</a> ({})"#,
                        escape_html(&self.locator.relative_link(&log.path)),
                        size_format(log.size)
                    )
                })
                .unwrap_or_default(),
        );
        cells
    }

    fn screenshot_cell(&self, shot: &Screenshot) -> String {
        let Some(snapshot) = &shot.snapshot else {
            return String::new();
        };

        format!(
            r#"<a href="{}"><img src="{}" width="100" height="75" alt="Map at turn {}" /></a><br />{:.4}"#,
            escape_html(&self.locator.relative_link(&snapshot.image)),
            escape_html(&self.locator.relative_link(&snapshot.thumbnail)),
            shot.turn,
            snapshot.score
        )
    }
}

fn podium_class(rank: Option<u32>) -> Option<&'static str> {
    match rank {
        Some(1) => Some("first"),
        Some(2) => Some("second"),
        Some(3) => Some("third"),
        _ => None,
    }
}

fn table_row(cells: &[String], class: Option<&str>, elem: &str) -> String {
    let class = class
        .map(|class| format!(r#" class="{}""#, class))
        .unwrap_or_default();
    let delim = format!("</{elem}><{elem}>");
    format!("<tr{class}><{elem}>{}</{elem}></tr>", cells.join(&delim))
}
