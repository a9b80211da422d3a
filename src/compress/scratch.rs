//! Scratch files for in-place replacement
//!
//! A [`ScratchFile`] lives in the same directory as the file it may replace,
//! so committing it is a same-filesystem rename. Dropping it removes the file,
//! which covers every early return and error path with a single cleanup.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::{trace, warn};

const SCRATCH_PREFIX: &str = "compress-";
const SCRATCH_SUFFIX: &str = ".tmp";

pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Create an empty scratch file next to `target`
    pub fn beside(target: &Path) -> io::Result<Self> {
        let file = Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(SCRATCH_SUFFIX)
            .tempfile_in(parent_dir(target))?;
        trace!("Created scratch file {}", file.path().display());

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn as_file_mut(&mut self) -> &mut File {
        self.file.as_file_mut()
    }

    /// Current size of the scratch contents in bytes
    pub fn size(&self) -> io::Result<u64> {
        Ok(self.file.as_file().metadata()?.len())
    }

    /// Atomically replace `target` with the scratch contents
    ///
    /// The data is synced before the rename and the directory entry after it.
    /// The target's permissions are carried over. If `target` cannot be opened for writing the commit is
    /// refused and `target` is left as it was. On any error the scratch file is
    /// still removed.
    pub fn commit_over(self, target: &Path) -> io::Result<()> {
        self.file.as_file().sync_all()?;

        // Refuse to replace a file we would not be allowed to overwrite.
        OpenOptions::new().write(true).open(target)?;

        let permissions = fs::metadata(target)?.permissions();
        self.file.as_file().set_permissions(permissions)?;

        self.file.persist(target).map_err(|err| err.error)?;
        // The data is already in place; a failed directory sync is not a failed commit.
        if let Err(err) = sync_dir(parent_dir(target)) {
            warn!("Could not sync directory of {}: {}", target.display(), err);
        }
        trace!("Committed scratch file over {}", target.display());
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Flush the directory entry so a committed rename survives a crash
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_scratch_lives_beside_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("photo.jpg");

        let scratch = ScratchFile::beside(&target).unwrap();

        assert_eq!(scratch.path().parent(), Some(temp_dir.path()));
        let name = scratch.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("compress-"));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn test_drop_removes_scratch() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("photo.jpg");

        let mut scratch = ScratchFile::beside(&target).unwrap();
        scratch.as_file_mut().write_all(b"partial").unwrap();
        let scratch_path = scratch.path().to_path_buf();
        assert!(scratch_path.exists());

        drop(scratch);

        assert!(!scratch_path.exists());
        assert!(entries(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_commit_replaces_target_contents() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("photo.png");
        fs::write(&target, b"the original, longer contents").unwrap();

        let mut scratch = ScratchFile::beside(&target).unwrap();
        scratch.as_file_mut().write_all(b"shorter").unwrap();
        assert_eq!(scratch.size().unwrap(), 7);

        scratch.commit_over(&target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"shorter");
        assert_eq!(entries(temp_dir.path()), vec!["photo.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_commit_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("photo.png");
        fs::write(&target, b"original").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        let mut scratch = ScratchFile::beside(&target).unwrap();
        scratch.as_file_mut().write_all(b"new").unwrap();
        scratch.commit_over(&target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_parent_dir_of_bare_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("photo.jpg")), Path::new("."));
        assert_eq!(parent_dir(Path::new("shots/photo.jpg")), Path::new("shots"));
    }

    #[test]
    fn test_sync_dir_after_commit() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("photo.png");
        fs::write(&target, b"original contents").unwrap();

        let mut scratch = ScratchFile::beside(&target).unwrap();
        scratch.as_file_mut().write_all(b"new").unwrap();
        scratch.commit_over(&target).unwrap();

        sync_dir(parent_dir(&target)).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_failed_commit_still_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("vanished.png");

        let mut scratch = ScratchFile::beside(&target).unwrap();
        scratch.as_file_mut().write_all(b"data").unwrap();

        assert!(scratch.commit_over(&target).is_err());
        assert!(entries(temp_dir.path()).is_empty());
    }
}
