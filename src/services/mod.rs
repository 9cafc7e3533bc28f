pub(crate) mod publish;
pub(crate) mod report_service;
pub(crate) mod scoring;
