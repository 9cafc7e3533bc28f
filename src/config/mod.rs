use crate::config::cli::Args;
use crate::domain::TeamRegistry;
use crate::error::Result;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub registry: TeamRegistry,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let registry = TeamRegistry::load(&args.teams)?;
        info!(
            "Loaded {} teams from {:?}",
            registry.team_ids().len(),
            args.teams
        );

        Ok(Self { args, registry })
    }

    /// `None` means "every registered team".
    pub fn team_filter(&self) -> Option<&[String]> {
        if self.args.team_filter.is_empty() {
            None
        } else {
            Some(&self.args.team_filter)
        }
    }
}
