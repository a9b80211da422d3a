//! Directory listing for the compressor
//!
//! Only the immediate entries of the target directory are considered. The whole
//! listing is collected before any file is processed, so a directory that cannot
//! be read fails the run before a single image is touched.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::types::{Candidate, ImageFormat};
use crate::runner::RunError;

/// List the supported image files directly inside `dir`
///
/// Entries come back in the order the filesystem yields them. Subdirectories,
/// symlinks and files with unsupported extensions are skipped without being
/// opened.
pub fn scan_directory(dir: &Path) -> Result<Vec<Candidate>, RunError> {
    let read_error = |source: io::Error| RunError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    // walkdir yields nothing below min_depth for a root that is a plain file.
    if !fs::metadata(dir).map_err(read_error)?.is_dir() {
        return Err(read_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{}: not a directory", dir.display()),
        )));
    }

    let mut candidates = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|err| read_error(err.into()))?;

        if !entry.file_type().is_file() {
            trace!("Skipping non-regular entry: {}", entry.path().display());
            continue;
        }

        let Some(format) = ImageFormat::from_path(entry.path()) else {
            trace!("Skipping unsupported extension: {}", entry.path().display());
            continue;
        };

        candidates.push(Candidate {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
            format,
        });
    }

    debug!(
        "Found {} candidate image(s) in {}",
        candidates.len(),
        dir.display()
    );

    Ok(candidates)
}
