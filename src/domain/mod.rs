mod manifest;
mod map_results;
mod registry;
pub(crate) mod storage;
mod team;

pub use manifest::{Manifest, MapReport};
pub use map_results::MapResults;
#[cfg(test)]
pub use registry::TeamInfo;
pub use registry::TeamRegistry;
pub use storage::ArtifactFile;
pub use team::{Screenshot, TeamResult};
