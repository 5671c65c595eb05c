//! Streaming HTTP(S) GET via libcurl.
//!
//! Writes the response body directly to a file as it arrives; the payload is
//! never buffered whole in memory.

use super::error::DownloadError;
use crate::config::FetchOptions;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path for the in-progress file: appends `.part` to the final path
/// (e.g. `tool.bin` → `tool.bin.part`).
pub(super) fn part_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Downloads `url` into the file at `dest`, streaming the body to disk.
///
/// TLS peer verification stays on; `opts.ca_bundle` overrides the trust store
/// when set. Returns an error on any curl failure, non-2xx status, or write
/// failure. The file at `dest` is left as-is on failure; the caller cleans up.
pub(super) fn download_to(url: &str, dest: &Path, opts: &FetchOptions) -> Result<(), DownloadError> {
    let io_err = |source: io::Error| DownloadError::Io {
        path: dest.to_path_buf(),
        source,
    };
    let file = File::create(dest).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let mut write_failure: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.transfer_timeout)?;
    if let Some(bundle) = &opts.ca_bundle {
        easy.cainfo(bundle)?;
    }

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match out.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(err) => {
                write_failure = Some(err);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    // A disk write failure aborts the transfer and surfaces as a curl error;
    // report the underlying I/O cause instead.
    if let Some(source) = write_failure {
        return Err(DownloadError::Io {
            path: dest.to_path_buf(),
            source,
        });
    }
    perform_result?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http(code));
    }

    out.flush().map_err(io_err)?;
    Ok(())
}
