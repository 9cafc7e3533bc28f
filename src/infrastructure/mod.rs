mod storage;

pub use storage::fs_store::ArtifactLocator;
pub use storage::score_files::{read_scalar, read_series};
