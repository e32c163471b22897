use super::types::{
    DEFAULT_LOG_LEVEL, LogConfig, RawLogConfig, RawSidenavConfig, RawUiConfig, SidenavConfig,
    UiConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming an extra config file layered over the user one
pub const CONFIG_ENV_VAR: &str = "SIDENAV_CONFIG";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user file, then `SIDENAV_CONFIG`)
    pub fn load() -> Result<SidenavConfig> {
        let paths: Vec<PathBuf> = Self::user_config_path()
            .into_iter()
            .chain(Self::env_config_path())
            .collect();
        Self::load_layers(&paths)
    }

    /// Load and merge the given files in order; later files win.
    /// Missing files are skipped.
    pub fn load_layers(paths: &[PathBuf]) -> Result<SidenavConfig> {
        let mut raw = RawSidenavConfig::default();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let layer = Self::read_raw(path)?;
            raw = Self::merge_raw(raw, layer);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/sidenav/config.toml`)
    pub fn user_config_path() -> Option<PathBuf> {
        let base = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()?.join(".config"),
        };
        Some(base.join("sidenav").join("config.toml"))
    }

    /// Get the override path from `SIDENAV_CONFIG`, if set
    pub fn env_config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn read_raw(path: &Path) -> Result<RawSidenavConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawSidenavConfig, overlay: RawSidenavConfig) -> RawSidenavConfig {
        RawSidenavConfig {
            ui: RawUiConfig {
                tick_rate_ms: overlay.ui.tick_rate_ms.or(base.ui.tick_rate_ms),
                sidebar_width: overlay.ui.sidebar_width.or(base.ui.sidebar_width),
                mouse: overlay.ui.mouse.or(base.ui.mouse),
            },
            log: RawLogConfig {
                file: overlay.log.file.or(base.log.file),
                level: overlay.log.level.or(base.log.level),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawSidenavConfig) -> SidenavConfig {
        let ui = UiConfig::default();
        SidenavConfig {
            ui: UiConfig {
                tick_rate_ms: raw.ui.tick_rate_ms.unwrap_or(ui.tick_rate_ms),
                sidebar_width: raw.ui.sidebar_width.unwrap_or(ui.sidebar_width),
                mouse: raw.ui.mouse.unwrap_or(ui.mouse),
            },
            log: LogConfig {
                file: raw.log.file,
                level: raw
                    .log
                    .level
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
        }
    }
}
