//! Drawer configuration

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Viewports narrower than this (logical pixels) are treated as mobile
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;
pub const STORAGE_KEY: &str = "sidebar-open";
pub const TOGGLE_EVENT: &str = "sidebar-toggle";

/// Timing of the per-entry entrance animation
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EntranceStagger {
    pub step_ms: u32,
    pub duration_ms: u32,
}

impl Default for EntranceStagger {
    fn default() -> Self {
        Self {
            step_ms: 50,
            duration_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub desktop_breakpoint: f64,
    pub storage_key: String,
    pub toggle_event: String,
    pub footer_selector: String,
    pub stagger: EntranceStagger,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: DESKTOP_BREAKPOINT,
            storage_key: STORAGE_KEY.to_string(),
            toggle_event: TOGGLE_EVENT.to_string(),
            footer_selector: "footer".to_string(),
            stagger: EntranceStagger::default(),
        }
    }
}

impl DrawerConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let config: DrawerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.desktop_breakpoint.is_finite() && self.desktop_breakpoint > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "desktop_breakpoint must be positive, got {}",
                self.desktop_breakpoint
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key is empty".to_string()));
        }
        if self.toggle_event.trim().is_empty() {
            return Err(ConfigError::Invalid("toggle_event is empty".to_string()));
        }
        if self.footer_selector.trim().is_empty() {
            return Err(ConfigError::Invalid("footer_selector is empty".to_string()));
        }
        Ok(())
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width < self.desktop_breakpoint
    }
}
