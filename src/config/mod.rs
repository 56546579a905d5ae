use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolved runtime configuration. The theme preference itself does not
/// live here; it has its own read-write prefs file (see `store::FileStore`)
/// so toggles never rewrite a user-authored config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub no_tui: bool,
    pub log_level: String,
    pub prefs_path: PathBuf,
}

/// Shape of the optional config file; every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub prefs_path: Option<PathBuf>,
}

impl AppConfig {
    /// Precedence: CLI args, then env vars, then config file, then defaults.
    pub fn from_cli(cli: crate::Cli) -> Result<Self> {
        let file_cfg = load_file_config().unwrap_or_default();

        let log_level = cli
            .log_level
            .or_else(|| env::var("SHADE_LOG").ok())
            .or(file_cfg.log_level)
            .unwrap_or_else(|| "info".to_string());

        let prefs_path = cli
            .prefs
            .or_else(|| env::var("SHADE_PREFS").ok().map(PathBuf::from))
            .or(file_cfg.prefs_path)
            .unwrap_or_else(default_prefs_path);

        Ok(Self {
            no_tui: cli.no_tui,
            log_level,
            prefs_path,
        })
    }
}

/// Where the theme preference is persisted when nothing overrides it.
pub fn default_prefs_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("shade").join("prefs.toml"))
        .unwrap_or_else(|| PathBuf::from("shade-prefs.toml"))
}

pub fn load_file_config() -> Result<FileConfig> {
    fn candidate_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Ok(p) = env::var("SHADE_CONFIG") {
            v.push(PathBuf::from(p));
        }
        if let Ok(xdg_home) = env::var("XDG_CONFIG_HOME") {
            v.push(Path::new(&xdg_home).join("shade/config.toml"));
        } else if let Ok(home) = env::var("HOME") {
            v.push(Path::new(&home).join(".config/shade/config.toml"));
        }
        if let Ok(dirs) = env::var("XDG_CONFIG_DIRS") {
            for d in dirs.split(':') {
                if !d.is_empty() {
                    v.push(Path::new(d).join("shade/config.toml"));
                }
            }
        }
        v
    }

    for p in candidate_paths() {
        if p.exists() {
            match read_file_config(&p) {
                Ok(cfg) => {
                    info!(path = %p.display(), "loaded config file");
                    return Ok(cfg);
                }
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "loading config failed");
                    continue;
                }
            }
        }
    }
    Ok(FileConfig::default())
}

pub fn read_file_config(path: &Path) -> Result<FileConfig> {
    let s =
        fs::read_to_string(path).with_context(|| format!("read config file: {}", path.display()))?;
    toml::from_str::<FileConfig>(&s)
        .with_context(|| format!("parse config file: {}", path.display()))
}
