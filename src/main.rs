use crate::config::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::ArtifactLocator;
use crate::services::report_service::ReportService;
use clap::Parser;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod utils;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args)?;

    let args = &config.args;
    let service = ReportService::new(ArtifactLocator::new(&args.root), config.registry.clone());

    let report = service.build(&args.map, config.team_filter())?;
    let rendered = service.render(&report, args.format, &args.log_url_base)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote results for {} to {:?}", args.map, path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
