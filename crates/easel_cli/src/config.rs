//! Easel configuration file handling
//!
//! `easel.toml` is optional. Every section and field has a default, so a
//! missing file and an empty file behave the same.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use easel_area::AreaConfig;

/// Configuration stored in easel.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EaselConfig {
    #[serde(default)]
    pub area: AreaSection,
    #[serde(default)]
    pub replay: ReplaySection,
}

/// The area traces are replayed against
#[derive(Debug, Deserialize, Serialize)]
pub struct AreaSection {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for AreaSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_name() -> String {
    "replay".to_string()
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

/// Replay output settings
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplaySection {
    /// Pretty-print each event instead of one JSON object per line
    #[serde(default)]
    pub pretty: bool,
    /// RGBA color the replay handler paints with
    #[serde(default = "default_fill")]
    pub fill: [u8; 4],
}

impl Default for ReplaySection {
    fn default() -> Self {
        Self {
            pretty: false,
            fill: default_fill(),
        }
    }
}

fn default_fill() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl EaselConfig {
    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: EaselConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn area_config(&self) -> AreaConfig {
        AreaConfig::new(self.area.name.clone()).size(self.area.width, self.area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: EaselConfig = toml::from_str("").unwrap();
        assert_eq!(config.area.name, "replay");
        assert_eq!((config.area.width, config.area.height), (640, 480));
        assert!(!config.replay.pretty);
        assert_eq!(config.replay.fill, [255, 255, 255, 255]);
    }

    #[test]
    fn test_partial_sections() {
        let config: EaselConfig = toml::from_str(
            r#"
[area]
width = 100

[replay]
fill = [0, 0, 255, 255]
"#,
        )
        .unwrap();
        assert_eq!(config.area.name, "replay");
        assert_eq!(config.area.width, 100);
        assert_eq!(config.area.height, 480);
        assert_eq!(config.replay.fill, [0, 0, 255, 255]);
        assert_eq!(config.area_config().width, 100);
    }
}
