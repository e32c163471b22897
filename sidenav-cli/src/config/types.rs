use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sidenav_tui::{AppOptions, DEFAULT_SIDEBAR_WIDTH, DEFAULT_TICK_RATE};
use thiserror::Error;

/// Narrowest sidebar that still fits the "Settings" button.
pub const MIN_SIDEBAR_WIDTH: u16 = 10;

/// Default log level when a log file is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSidenavConfig {
    #[serde(default)]
    pub ui: RawUiConfig,

    #[serde(default)]
    pub log: RawLogConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    pub tick_rate_ms: Option<u64>,
    pub sidebar_width: Option<u16>,
    pub mouse: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLogConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SidenavConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Sidebar width in columns
    pub sidebar_width: u16,

    /// Capture mouse clicks and movement
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE.as_millis() as u64,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            mouse: true,
        }
    }
}

impl UiConfig {
    /// Options handed to the TUI.
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            tick_rate: Duration::from_millis(self.tick_rate_ms),
            sidebar_width: self.sidebar_width,
            mouse: self.mouse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; nothing is logged when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Filter directive, e.g. "info" or "sidenav_tui=debug"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,

    #[error("ui.sidebar_width must be at least {min} columns (got {width})")]
    SidebarTooNarrow { width: u16, min: u16 },

    #[error("log.level must not be empty")]
    EmptyLogLevel,
}

impl SidenavConfig {
    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.ui.sidebar_width < MIN_SIDEBAR_WIDTH {
            return Err(ConfigError::SidebarTooNarrow {
                width: self.ui.sidebar_width,
                min: MIN_SIDEBAR_WIDTH,
            });
        }
        if self.log.level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }
        Ok(())
    }
}
