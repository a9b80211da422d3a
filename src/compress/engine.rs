//! Size-gated re-encode and replace
//!
//! A file is only ever replaced by an encoding that is strictly smaller than
//! what is on disk. Anything else leaves the original byte-for-byte untouched.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use super::codec;
use super::error::{CompressError, Result};
use super::scratch::ScratchFile;
use crate::scanner::ImageFormat;

/// Byte sizes observed while compressing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOutcome {
    /// Size on disk before processing
    pub original: u64,
    /// Size on disk after processing; equals `original` when nothing was replaced
    pub final_size: u64,
    /// Whether the file on disk was replaced
    pub replaced: bool,
}

impl SizeOutcome {
    pub fn saved(&self) -> u64 {
        self.original - self.final_size
    }
}

/// Re-encode the image at `path` and replace it if the result is smaller
pub fn compress(path: &Path, format: ImageFormat) -> Result<SizeOutcome> {
    let original = fs::metadata(path).map_err(CompressError::Stat)?.len();

    let image = codec::decode(path).map_err(CompressError::Decode)?;
    debug!(
        "Decoded {} ({}x{}, {:?}, {} bytes)",
        path.display(),
        image.width(),
        image.height(),
        image.color(),
        original
    );

    // Dropping the scratch file removes it, whichever way this function exits.
    let mut scratch = ScratchFile::beside(path).map_err(CompressError::scratch_io)?;
    {
        let mut writer = BufWriter::new(scratch.as_file_mut());
        codec::encode(&image, format, &mut writer).map_err(CompressError::Encode)?;
        writer.flush().map_err(CompressError::scratch_io)?;
    }
    let encoded = scratch.size().map_err(CompressError::scratch_io)?;
    debug!("Re-encoded {} as {}: {} -> {} bytes", path.display(), format, original, encoded);

    if encoded < original {
        scratch.commit_over(path).map_err(CompressError::Commit)?;
        info!("Replaced {} ({} -> {} bytes)", path.display(), original, encoded);
        Ok(SizeOutcome {
            original,
            final_size: encoded,
            replaced: true,
        })
    } else {
        debug!("Kept {}: re-encode was not smaller", path.display());
        Ok(SizeOutcome {
            original,
            final_size: original,
            replaced: false,
        })
    }
}
