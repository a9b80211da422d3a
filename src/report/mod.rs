//! Run results and their serialized forms
//!
//! The JSON line is the machine-readable contract and the default output. The
//! table is a human-friendly rendering of the same results.

pub mod table;
pub mod utils;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::compress::SizeOutcome;
use crate::runner::RunError;

/// Before/after sizes for one successfully processed image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResult {
    /// File name relative to the scanned directory
    pub name: String,
    pub original: u64,
    #[serde(rename = "final")]
    pub final_size: u64,
}

impl CompressionResult {
    pub fn new(name: &str, outcome: &SizeOutcome) -> Self {
        Self {
            name: name.to_string(),
            original: outcome.original,
            final_size: outcome.final_size,
        }
    }

    pub fn saved(&self) -> u64 {
        self.original.saturating_sub(self.final_size)
    }

    /// Share of the original size that was saved, in percent
    pub fn saved_percent(&self) -> f64 {
        if self.original == 0 {
            0.0
        } else {
            self.saved() as f64 / self.original as f64 * 100.0
        }
    }
}

/// Ordered collection of results, owned by a single run
#[derive(Debug, Default)]
pub struct RunReport {
    results: Vec<CompressionResult>,
}

impl RunReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: CompressionResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn total_saved(&self) -> u64 {
        total_saved(&self.results)
    }

    /// Hand over the results, failing the run if there are none
    pub fn finish(self) -> Result<Vec<CompressionResult>, RunError> {
        if self.results.is_empty() {
            return Err(RunError::NoImagesProcessed);
        }
        Ok(self.results)
    }
}

/// Sum of bytes saved across `results`
pub fn total_saved(results: &[CompressionResult]) -> u64 {
    results.iter().map(CompressionResult::saved).sum()
}

/// Serialize `results` as a single-line JSON array
pub fn to_json_line(results: &[CompressionResult]) -> Result<String> {
    Ok(serde_json::to_string(results)?)
}
