//! Area configuration

use crate::error::{AreaError, Result};

/// Area configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaConfig {
    /// Name used in log records
    pub name: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
    /// Whether the wrapping scroll view clears behind the area
    pub draws_background: bool,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            name: "area".to_string(),
            width: 320,
            height: 240,
            draws_background: true,
        }
    }
}

impl AreaConfig {
    /// Create a new area configuration with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the initial size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the scroll view clears behind the area
    pub fn draws_background(mut self, draws: bool) -> Self {
        self.draws_background = draws;
        self
    }

    /// Check the configuration before an area is built from it
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AreaError::Config("area name must not be empty".to_string()));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(AreaError::Config(format!(
                "area size {}x{} exceeds the coordinate range",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
