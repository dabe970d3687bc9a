//! Input collection and batch decoding shared by the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use nic_core::{BatchSummary, Decoder, NicRecord};
use nic_ingest::{ColumnSelection, IngestError, InputFormat, load_nics};
use nic_output::OutputFormat;
use tracing::{error, info, warn};

use crate::logging::redact_value;

/// NIC strings gathered from arguments and files.
#[derive(Debug, Default)]
pub struct InputBatch {
    /// Arguments first, then each file's values in file order.
    pub nics: Vec<String>,
    /// Files that did not exist and were skipped.
    pub missing_files: Vec<PathBuf>,
    /// Files that existed but could not be loaded.
    pub failed_files: Vec<(PathBuf, String)>,
}

impl InputBatch {
    pub fn has_load_failures(&self) -> bool {
        !self.missing_files.is_empty() || !self.failed_files.is_empty()
    }
}

/// Records that decoded, plus counts for the whole batch.
#[derive(Debug, Default)]
pub struct DecodedBatch {
    pub records: Vec<NicRecord>,
    pub summary: BatchSummary,
}

/// How a decode run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every input loaded and decoded.
    Success,
    /// At least one NIC failed to decode or one file failed to load.
    Failed,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failed => 1,
        }
    }
}

/// Gathers NIC strings from command-line values and input files.
///
/// Missing files are skipped with a warning; other load failures are logged
/// as errors. Neither aborts the batch.
pub fn collect_inputs(
    nics: &[String],
    files: &[PathBuf],
    format: Option<InputFormat>,
    selection: &ColumnSelection,
    decoder: &Decoder,
) -> InputBatch {
    let mut batch = InputBatch {
        nics: nics.to_vec(),
        ..InputBatch::default()
    };
    for path in files {
        match load_nics(path, format, selection, decoder) {
            Ok(values) => batch.nics.extend(values),
            Err(IngestError::FileNotFound { path }) => {
                warn!(path = %path.display(), "input file not found, skipping");
                batch.missing_files.push(path);
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load input file");
                batch.failed_files.push((path.clone(), err.to_string()));
            }
        }
    }
    batch
}

/// Fails when there is nothing to decode and no file was attempted and lost.
///
/// # Errors
///
/// Returns "no NIC numbers provided" for an empty batch without load failures.
pub fn ensure_inputs(inputs: &InputBatch) -> Result<()> {
    if inputs.nics.is_empty() && !inputs.has_load_failures() {
        bail!("no NIC numbers provided");
    }
    Ok(())
}

/// Classifies a finished run; any decode or load failure fails the run.
pub fn run_status(inputs: &InputBatch, batch: &DecodedBatch) -> RunStatus {
    if batch.summary.has_failures() || inputs.has_load_failures() {
        RunStatus::Failed
    } else {
        RunStatus::Success
    }
}

/// Decodes every input, logging each failure and keeping the successes in order.
pub fn decode_inputs(decoder: &Decoder, inputs: &[String]) -> DecodedBatch {
    let outcomes = decoder.decode_all(inputs);
    let summary = BatchSummary::from_outcomes(&outcomes);
    let mut records = Vec::with_capacity(summary.decoded);
    for outcome in outcomes {
        match outcome.result {
            Ok(record) => records.push(record),
            Err(err) => error!(
                nic = redact_value(err.input()),
                kind = err.kind(),
                "{err}"
            ),
        }
    }
    if summary.has_failures() {
        warn!(
            decoded = summary.decoded,
            failed = summary.failed,
            "some NIC numbers could not be decoded"
        );
    } else {
        info!(decoded = summary.decoded, "decoded NIC numbers");
    }
    DecodedBatch { records, summary }
}

/// Picks the output format: explicit choice, then the output file extension, then txt.
pub fn resolve_output_format(explicit: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    explicit
        .or_else(|| output.and_then(OutputFormat::from_path))
        .unwrap_or_default()
}

/// Expands the `\n` and `\t` escapes accepted by `--separator`.
pub fn unescape_separator(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
