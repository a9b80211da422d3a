//! Run orchestration: scan, compress each candidate in order, collect results
//!
//! Files are processed strictly one after another. A per-file failure is
//! reported as a skip on the diagnostics stream and never stops the run; only
//! an unreadable directory or an empty result set fails it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::cli::Output;
use crate::compress;
use crate::report::{CompressionResult, RunReport};
use crate::scanner::scan_directory;

/// Errors that end the whole run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Error reading directory: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error: No images found in the specified directory.")]
    NoImagesProcessed,
}

/// Compress every supported image directly inside `dir`
///
/// Returns the per-file results in scan order. Fails if the directory cannot
/// be listed, or if not a single image produced a result.
pub fn run(dir: &Path, output: &Output) -> Result<Vec<CompressionResult>, RunError> {
    info!("Scanning directory: {}", dir.display());
    let candidates = scan_directory(dir)?;

    let mut report = RunReport::with_capacity(candidates.len());
    for candidate in &candidates {
        debug!("Processing {} as {}", candidate.name, candidate.format);
        match compress::compress(&candidate.path, candidate.format) {
            Ok(outcome) => report.push(CompressionResult::new(&candidate.name, &outcome)),
            Err(err) => output.skip(&candidate.name, &err),
        }
    }

    info!(
        "Processed {} of {} candidate(s), {} bytes saved",
        report.len(),
        candidates.len(),
        report.total_saved()
    );

    report.finish()
}
