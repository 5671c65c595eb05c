//! Fetch error taxonomy.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error returned by [`Fetcher::ensure_file`](super::Fetcher::ensure_file).
///
/// Variants are deliberately coarse so callers can tell "fix your permissions"
/// apart from "check your connectivity" without inspecting the source chain.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The destination directory could not be created, or the path is not a
    /// directory. Not retriable without operator intervention.
    #[error("cannot use {path} as a destination directory")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },
    /// The download itself failed (DNS, connect, TLS, HTTP status, or a disk
    /// write mid-stream). Terminal for this call; the caller decides whether
    /// to try again.
    #[error("download of {url} failed")]
    DownloadFailed {
        url: String,
        #[source]
        source: DownloadError,
    },
}

/// Underlying cause of a failed download (curl failure, HTTP error, or disk I/O).
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Curl reported an error (DNS, connect, TLS, timeout, aborted transfer).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the response body to disk failed (e.g. disk full).
    #[error("writing {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
