use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL of the CVRPLIB mirror hosting the benchmark instances.
pub const DEFAULT_SOURCE_URL: &str = "http://vrp.atd-lab.inf.puc-rio.br";
/// Listing page, relative to the source URL.
pub const DEFAULT_PAGE_PATH: &str = "/index.php/en/";
pub const DEFAULT_OUTPUT_DIR: &str = "instances";
pub const DEFAULT_INSTANCE_PATTERN: &str = r"\.vrp|\.dat";
pub const DEFAULT_SOLUTION_PATTERN: &str = r"\.sol";
pub const DEFAULT_PROGRESS_WIDTH: usize = 20;

/// What the batch does when a pair fails to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed pair.
    #[default]
    Abort,
    /// Log the failed pair, record it in the report and continue.
    Skip,
}

/// libcurl transfer settings (optional section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Custom User-Agent header.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Treat non-2xx responses as errors instead of writing the body anyway.
    #[serde(default)]
    pub strict_status: bool,
}

/// Global configuration loaded from `~/.config/vrpdl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrpdlConfig {
    /// Host prefix relative links are resolved against.
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Path of the listing page under `source_url`.
    #[serde(default = "default_page_path")]
    pub page_path: String,
    /// Output root; category subdirectories are created under it.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Regex matched (unanchored) against hrefs to find instance files.
    #[serde(default = "default_instance_pattern")]
    pub instance_pattern: String,
    /// Regex matched (unanchored) against hrefs to find solution files.
    #[serde(default = "default_solution_pattern")]
    pub solution_pattern: String,
    /// Number of segments in the ASCII progress bar.
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_page_path() -> String {
    DEFAULT_PAGE_PATH.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_instance_pattern() -> String {
    DEFAULT_INSTANCE_PATTERN.to_string()
}

fn default_solution_pattern() -> String {
    DEFAULT_SOLUTION_PATTERN.to_string()
}

fn default_progress_width() -> usize {
    DEFAULT_PROGRESS_WIDTH
}

impl Default for VrpdlConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            page_path: default_page_path(),
            output_dir: default_output_dir(),
            instance_pattern: default_instance_pattern(),
            solution_pattern: default_solution_pattern(),
            progress_width: default_progress_width(),
            failure_policy: FailurePolicy::default(),
            http: HttpConfig::default(),
        }
    }
}

impl VrpdlConfig {
    /// Parsed `source_url`.
    pub fn source_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.source_url)
            .with_context(|| format!("invalid source_url {}", self.source_url))
    }

    /// Full URL of the listing page (`source_url` joined with `page_path`).
    pub fn page_url(&self) -> Result<url::Url> {
        self.source_url()?
            .join(&self.page_path)
            .with_context(|| format!("invalid page_path {}", self.page_path))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vrpdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VrpdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VrpdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VrpdlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
