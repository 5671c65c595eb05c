//! Zip archive extraction.
//!
//! Extracts every entry of a zip archive into a destination directory,
//! preserving the archive's internal relative paths. Entries that would
//! escape the destination (absolute paths or `..` components) are rejected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned by [`extract_zip`].
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be opened for reading.
    #[error("cannot open archive {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not a valid zip archive, or an entry is corrupt.
    #[error("invalid zip archive {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    /// An entry's path would resolve outside the destination directory.
    #[error("archive entry {name:?} escapes the destination directory")]
    UnsafeEntry { name: String },
    /// Writing an entry to disk failed.
    #[error("extracting entry {name:?}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Extracts all entries of the zip archive at `archive_path` into
/// `destination_dir`, creating intermediate directories as needed.
///
/// The archive handle is closed before the call returns, on both success and
/// failure. Pre-existing unrelated files in the destination are left alone.
/// On Unix, entries carrying mode bits have them restored best effort.
pub fn extract_zip(archive_path: &Path, destination_dir: &Path) -> Result<(), ArchiveError> {
    let file = fs::File::open(archive_path).map_err(|source| ArchiveError::Open {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| ArchiveError::Malformed {
        path: archive_path.to_path_buf(),
        source,
    })?;

    fs::create_dir_all(destination_dir).map_err(|source| ArchiveError::Io {
        name: destination_dir.display().to_string(),
        source,
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|source| ArchiveError::Malformed {
            path: archive_path.to_path_buf(),
            source,
        })?;
        let name = entry.name().to_string();

        // Reject absolute paths and `..` traversal before touching the filesystem.
        let relative = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => return Err(ArchiveError::UnsafeEntry { name }),
        };
        let out_path = destination_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .map_err(|source| ArchiveError::Io { name, source })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| ArchiveError::Io { name: name.clone(), source })?;
        }
        let mut out = fs::File::create(&out_path)
            .map_err(|source| ArchiveError::Io { name: name.clone(), source })?;
        io::copy(&mut entry, &mut out)
            .map_err(|source| ArchiveError::Io { name: name.clone(), source })?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            if let Err(err) = fs::set_permissions(&out_path, fs::Permissions::from_mode(mode)) {
                tracing::debug!("could not restore mode {:o} on {}: {}", mode, out_path.display(), err);
            }
        }
    }

    tracing::info!(
        "extracted {} to {}",
        archive_path.display(),
        destination_dir.display()
    );
    Ok(())
}
