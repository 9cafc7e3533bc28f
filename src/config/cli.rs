use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Name of the map to build the results page for
    pub map: String,

    /// Directory holding the evaluation artifacts
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the team registry file
    #[arg(long, env = "MAPRESULTS_TEAMS", default_value = "teams.json")]
    pub teams: PathBuf,

    /// Only report these teams (repeatable). Defaults to every registered team
    #[arg(long = "team")]
    pub team_filter: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Base URL under which the full log archives are published
    #[clap(
        long,
        env = "MAPRESULTS_LOG_URL_BASE",
        default_value = "http://sourceforge.net/projects/roborescue/files/logs/2011"
    )]
    pub log_url_base: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
