//! Cached download of a single file.
//!
//! Ensures a file exists at `folder_path/file_name`, downloading it if absent.
//! Existing files are trusted without verification; the download streams to a
//! `.part` file and is renamed into place on success.

mod download;
mod error;
mod exec_bit;
mod inflight;

pub use error::{DownloadError, FetchError};
pub use exec_bit::platform_supports_exec_bit;

use inflight::InflightPaths;
use std::fs;
use std::path::Path;

/// What [`Fetcher::ensure_file`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was fetched from the remote source.
    Downloaded,
    /// The file already existed locally; no request was made.
    AlreadyPresent,
}

/// One file to ensure locally.
#[derive(Debug)]
pub struct FetchRequest<'a> {
    /// Human-readable name of the asset, used only in diagnostics.
    pub label: &'a str,
    /// Directory the file lives in; created (with parents) if missing.
    pub folder_path: &'a Path,
    /// File name within `folder_path`.
    pub file_name: &'a str,
    /// Source URL to download from when the file is absent.
    pub file_url: &'a str,
    /// Add execute permission bits after the file exists (POSIX targets only).
    pub make_executable: bool,
}

/// Cached fetcher. Holds the transport options (timeouts, trust store) and an
/// in-process registry serializing concurrent fetches of the same target path.
#[derive(Default)]
pub struct Fetcher {
    options: crate::config::FetchOptions,
    inflight: InflightPaths,
}

impl Fetcher {
    pub fn new(options: crate::config::FetchOptions) -> Self {
        Self {
            options,
            inflight: InflightPaths::default(),
        }
    }

    /// Guarantees that a readable (and, if requested, executable) file exists
    /// at `folder_path/file_name` when this returns `Ok`.
    ///
    /// Steps, in order:
    /// 1. Create `folder_path` if it is not already a directory; failure is
    ///    [`FetchError::DirectoryUnavailable`] and no download is attempted.
    /// 2. If the file already exists it is trusted as-is (idempotent no-op).
    /// 3. Otherwise download to `<file>.part` and rename into place; any
    ///    transport failure is [`FetchError::DownloadFailed`].
    /// 4. If `make_executable` is set, add execute bits. Best effort: a chmod
    ///    failure logs a warning and does not fail the call.
    pub fn ensure_file(&self, req: &FetchRequest<'_>) -> Result<Outcome, FetchError> {
        if !req.folder_path.is_dir() {
            if let Err(source) = fs::create_dir_all(req.folder_path) {
                tracing::warn!(
                    "{}: unable to create directory {}: {}",
                    req.label,
                    req.folder_path.display(),
                    source
                );
                return Err(FetchError::DirectoryUnavailable {
                    path: req.folder_path.to_path_buf(),
                    source: Some(source),
                });
            }
            if !req.folder_path.is_dir() {
                return Err(FetchError::DirectoryUnavailable {
                    path: req.folder_path.to_path_buf(),
                    source: None,
                });
            }
        }

        let file_path = req.folder_path.join(req.file_name);
        let _claim = self.inflight.claim(&file_path);

        let outcome = if file_path.is_file() {
            tracing::debug!("{} already present at {}", req.label, file_path.display());
            Outcome::AlreadyPresent
        } else {
            tracing::info!("{} is not available locally, downloading", req.label);
            let part = download::part_path(&file_path);
            if let Err(source) = download::download_to(req.file_url, &part, &self.options) {
                let _ = fs::remove_file(&part);
                tracing::warn!("{}: download of {} failed: {}", req.label, req.file_url, source);
                return Err(FetchError::DownloadFailed {
                    url: req.file_url.to_string(),
                    source,
                });
            }
            if let Err(source) = fs::rename(&part, &file_path) {
                let _ = fs::remove_file(&part);
                return Err(FetchError::DownloadFailed {
                    url: req.file_url.to_string(),
                    source: DownloadError::Io {
                        path: file_path.clone(),
                        source,
                    },
                });
            }
            tracing::info!("{} downloaded to {}", req.label, file_path.display());
            Outcome::Downloaded
        };

        if req.make_executable && platform_supports_exec_bit() {
            if let Err(err) = exec_bit::add_exec_bits(&file_path) {
                tracing::warn!(
                    "{}: could not mark {} executable: {}",
                    req.label,
                    file_path.display(),
                    err
                );
            }
        }

        Ok(outcome)
    }
}
