//! `toolfetch extract <archive> <dest>` – unzip into a directory.

use anyhow::Result;
use std::path::Path;
use toolfetch_core::archive::extract_zip;

pub fn run_extract(archive: &Path, dest: &Path) -> Result<()> {
    extract_zip(archive, dest)?;
    println!("Extracted {} to {}", archive.display(), dest.display());
    Ok(())
}
