//! CLI for the toolfetch asset fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolfetch_core::config;

use commands::{run_extract, run_fetch};

/// Top-level CLI for toolfetch.
#[derive(Debug, Parser)]
#[command(name = "toolfetch")]
#[command(about = "toolfetch: cached downloads and archive extraction for build assets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ensure a file exists locally, downloading it if absent.
    Fetch {
        /// Direct HTTP/HTTPS URL to download.
        url: String,

        /// Destination directory (default: config `download_dir`, else cwd).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// File name within the destination directory (default: derived from the URL).
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// Human-readable label used in messages (default: the file name).
        #[arg(long, value_name = "LABEL")]
        label: Option<String>,

        /// Mark the file executable after fetching (POSIX targets only).
        #[arg(long)]
        executable: bool,
    },

    /// Extract a zip archive into a directory.
    Extract {
        /// Path to the zip archive.
        archive: PathBuf,

        /// Directory to extract into (created if missing).
        dest: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                dir,
                name,
                label,
                executable,
            } => run_fetch(&cfg, &url, dir, name, label, executable)?,
            CliCommand::Extract { archive, dest } => run_extract(&archive, &dest)?,
        }

        Ok(())
    }
}
