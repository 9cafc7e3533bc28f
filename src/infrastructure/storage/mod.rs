pub(crate) mod fs_store;
pub(crate) mod score_files;
