use std::io;

use thiserror::Error;

/// Why a single file could not be compressed
///
/// These never abort a run; the file is skipped and the run moves on.
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("failed to stat original file: {0}")]
    Stat(#[source] io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("failed to replace original file: {0}")]
    Commit(#[source] io::Error),
}

impl CompressError {
    /// Scratch file I/O happens while producing the encoded bytes
    pub(crate) fn scratch_io(err: io::Error) -> Self {
        CompressError::Encode(image::ImageError::IoError(err))
    }
}

pub type Result<T> = std::result::Result<T, CompressError>;
