//! Batch decoding results.

use nic_model::{NicRecord, Result};

/// One input and what decoding it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// The input exactly as supplied (before trimming).
    pub input: String,
    pub result: Result<NicRecord>,
}

impl DecodeOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn record(&self) -> Option<&NicRecord> {
        self.result.as_ref().ok()
    }
}

/// Decoded/failed counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub decoded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[DecodeOutcome]) -> Self {
        let decoded = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        Self {
            decoded,
            failed: outcomes.len() - decoded,
        }
    }

    pub fn total(&self) -> usize {
        self.decoded + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
