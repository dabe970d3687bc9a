use std::path::PathBuf;

use nic_cli::pipeline::RunStatus;
use nic_core::BatchSummary;
use nic_output::OutputFormat;

#[derive(Debug)]
pub struct DecodeResult {
    pub summary: BatchSummary,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub missing_files: Vec<PathBuf>,
    pub failed_files: Vec<(PathBuf, String)>,
    pub status: RunStatus,
}
