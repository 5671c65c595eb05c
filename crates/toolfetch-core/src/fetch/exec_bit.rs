//! Best-effort executable-bit adjustment.
//!
//! Expressed as a capability of the platform rather than a platform-name
//! check: on targets without POSIX permission bits this is a no-op.

use std::io;
use std::path::Path;

/// True when the platform has POSIX permission bits to set.
pub fn platform_supports_exec_bit() -> bool {
    cfg!(unix)
}

/// Adds owner/group/other execute bits on top of the file's existing mode.
#[cfg(unix)]
pub(super) fn add_exec_bits(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
pub(super) fn add_exec_bits(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn adds_exec_without_clobbering_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool.bin");
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        add_exec_bits(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o751);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(add_exec_bits(&dir.path().join("absent")).is_err());
    }
}
