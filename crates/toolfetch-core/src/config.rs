use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Transport settings for a single fetch, resolved from config or built from
/// defaults. Timeouts are always explicit; there is no unbounded transfer.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Overall transfer timeout for the whole download.
    pub transfer_timeout: Duration,
    /// Maximum number of redirects to follow.
    pub max_redirections: u32,
    /// Path to a CA bundle used to validate the server certificate chain.
    /// `None` means libcurl's system default trust store.
    pub ca_bundle: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            transfer_timeout: Duration::from_secs(3600),
            max_redirections: 10,
            ca_bundle: None,
        }
    }
}

/// Global configuration loaded from `~/.config/toolfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolfetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall transfer timeout in seconds.
    pub transfer_timeout_secs: u64,
    /// Maximum number of redirects to follow.
    pub max_redirections: u32,
    /// Optional CA bundle path for TLS verification (None = system default).
    #[serde(default)]
    pub ca_bundle: Option<PathBuf>,
    /// Optional default destination directory for `toolfetch fetch`.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for ToolfetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            transfer_timeout_secs: 3600,
            max_redirections: 10,
            ca_bundle: None,
            download_dir: None,
        }
    }
}

impl ToolfetchConfig {
    /// Transport options derived from this config.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            transfer_timeout: Duration::from_secs(self.transfer_timeout_secs),
            max_redirections: self.max_redirections,
            ca_bundle: self.ca_bundle.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("toolfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ToolfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ToolfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ToolfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ToolfetchConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.transfer_timeout_secs, 3600);
        assert_eq!(cfg.max_redirections, 10);
        assert!(cfg.ca_bundle.is_none());
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ToolfetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ToolfetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.transfer_timeout_secs, cfg.transfer_timeout_secs);
        assert_eq!(parsed.max_redirections, cfg.max_redirections);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            connect_timeout_secs = 5
            transfer_timeout_secs = 120
            max_redirections = 3
            ca_bundle = "/etc/ssl/certs/ca-certificates.crt"
            download_dir = "/opt/toolchains"
        "#;
        let cfg: ToolfetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.transfer_timeout_secs, 120);
        assert_eq!(cfg.max_redirections, 3);
        assert_eq!(
            cfg.ca_bundle.as_deref(),
            Some(std::path::Path::new("/etc/ssl/certs/ca-certificates.crt"))
        );
        assert_eq!(
            cfg.download_dir.as_deref(),
            Some(std::path::Path::new("/opt/toolchains"))
        );
    }

    #[test]
    fn fetch_options_from_config() {
        let toml = r#"
            connect_timeout_secs = 5
            transfer_timeout_secs = 120
            max_redirections = 3
        "#;
        let cfg: ToolfetchConfig = toml::from_str(toml).unwrap();
        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.transfer_timeout, Duration::from_secs(120));
        assert_eq!(opts.max_redirections, 3);
        assert!(opts.ca_bundle.is_none());
    }
}
