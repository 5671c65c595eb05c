//! Local filename derivation from a download URL.
//!
//! Used when the caller does not name the destination file explicitly; takes
//! the last URL path segment and sanitizes it for Linux filesystems.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_file_name;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "asset.bin";

/// Derives a safe local filename for saving a download.
///
/// Uses the last path segment of `url`, sanitized for Linux (no `/`, NUL, or
/// control chars; no leading/trailing dots or spaces). Falls back to a fixed
/// default when the URL has no usable path.
pub fn derive_file_name(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_file_name(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
