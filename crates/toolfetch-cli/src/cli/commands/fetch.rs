//! `toolfetch fetch <url>` – ensure a file exists locally.

use anyhow::Result;
use std::path::PathBuf;
use toolfetch_core::config::ToolfetchConfig;
use toolfetch_core::fetch::{FetchRequest, Fetcher, Outcome};
use toolfetch_core::filename::derive_file_name;

pub fn run_fetch(
    cfg: &ToolfetchConfig,
    url: &str,
    dir: Option<PathBuf>,
    name: Option<String>,
    label: Option<String>,
    executable: bool,
) -> Result<()> {
    let dir = match dir.or_else(|| cfg.download_dir.clone()) {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let name = name.unwrap_or_else(|| derive_file_name(url));
    let label = label.unwrap_or_else(|| name.clone());

    let fetcher = Fetcher::new(cfg.fetch_options());
    let outcome = fetcher.ensure_file(&FetchRequest {
        label: &label,
        folder_path: &dir,
        file_name: &name,
        file_url: url,
        make_executable: executable,
    })?;

    let path = dir.join(&name);
    match outcome {
        Outcome::Downloaded => println!("{label}: downloaded to {}", path.display()),
        Outcome::AlreadyPresent => println!("{label}: already present at {}", path.display()),
    }
    Ok(())
}
