use std::path::{Path, PathBuf};

use super::types::KitbagConfig;

/// Get the default kitbag data directory: ~/.kitbag
pub fn get_kitbag_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".kitbag"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<KitbagConfig> {
    let s = std::fs::read_to_string(path)?;
    let mut cfg = toml::from_str::<KitbagConfig>(&s)?;
    fill_log_dir(&mut cfg, get_kitbag_data_dir().ok().as_deref());
    tracing::debug!(
        target: "kitbag.config",
        stage = "config.load",
        path = %path.display()
    );
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<KitbagConfig> {
    // Priority 1: ~/.kitbag/config.toml
    let kitbag_config = get_kitbag_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if kitbag_config.exists() {
        load_from_path(&kitbag_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        KitbagConfig::default()
    };

    fill_log_dir(&mut cfg, get_kitbag_data_dir().ok().as_deref());
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

/// Point an unset or blank `logging.directory` at `<data_dir>/logs`. The
/// directory is created by whoever opens the log file.
fn fill_log_dir(cfg: &mut KitbagConfig, data_dir: Option<&Path>) {
    let unset = cfg
        .logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .is_none();
    if let (true, Some(dir)) = (unset, data_dir) {
        cfg.logging.directory = Some(dir.join("logs").to_string_lossy().to_string());
    }
}

/// Environment variable overrides (highest priority).
fn apply_env_overrides(cfg: &mut KitbagConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("KITBAG_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
    if let Some(v) = lookup("KITBAG_HTTP_TIMEOUT_MS") {
        match v.trim().parse::<u64>() {
            Ok(ms) => cfg.http.timeout_ms = ms,
            Err(_) => tracing::warn!(
                target: "kitbag.config",
                stage = "config.env",
                value = %v,
                "ignoring non-numeric KITBAG_HTTP_TIMEOUT_MS"
            ),
        }
    }
}
