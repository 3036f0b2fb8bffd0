use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/viewtrack/config.toml`.
///
/// The 24-hour dedup window is deliberately absent: it is fixed by the
/// recorder and not tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// SQLite pool size for the view store.
    pub max_db_connections: u32,
    /// Report window used when `report` gets no `--window`
    /// ("1day", "7days", "1month", "1year"). Unrecognized names behave
    /// like "1day".
    #[serde(default)]
    pub default_window: Option<String>,
    /// Width in columns of the ASCII bar in `viewtrack report`
    /// (None = built-in default).
    #[serde(default)]
    pub chart_width: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_db_connections: 8,
            default_window: None,
            chart_width: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("viewtrack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TrackerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TrackerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TrackerConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.max_db_connections, 8);
        assert!(cfg.default_window.is_none());
        assert!(cfg.chart_width.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = TrackerConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: TrackerConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_db_connections, cfg.max_db_connections);
        assert_eq!(parsed.default_window, cfg.default_window);
        assert_eq!(parsed.chart_width, cfg.chart_width);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_db_connections = 2
            default_window = "7days"
            chart_width = 60
        "#;
        let cfg: TrackerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_db_connections, 2);
        assert_eq!(cfg.default_window.as_deref(), Some("7days"));
        assert_eq!(cfg.chart_width, Some(60));
    }

    #[test]
    fn config_toml_optional_fields_may_be_absent() {
        let toml = "max_db_connections = 4";
        let cfg: TrackerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_db_connections, 4);
        assert!(cfg.default_window.is_none());
        assert!(cfg.chart_width.is_none());
    }
}
