// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flipbook creation settings.

use crate::artifact::ClipEncoding;
use crate::binding::TrackBinding;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default playback rate
pub const DEFAULT_FRAMES_PER_SECOND: f32 = 10.0;

/// Default clip file name, without extension
pub const DEFAULT_CLIP_FILE_NAME: &str = "NewUIAnimation";

/// Settings for building and storing a flipbook clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipbookConfig {
    /// Frames shown per second
    pub frames_per_second: f32,
    /// Property the sprite track drives
    pub binding: TrackBinding,
    /// Clip file name, without extension
    pub file_name: String,
    /// On-disk encoding
    pub encoding: ClipEncoding,
}

impl Default for FlipbookConfig {
    fn default() -> Self {
        Self {
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            binding: TrackBinding::default(),
            file_name: DEFAULT_CLIP_FILE_NAME.to_string(),
            encoding: ClipEncoding::default(),
        }
    }
}

impl FlipbookConfig {
    /// Set the playback rate
    pub fn with_frames_per_second(mut self, fps: f32) -> Self {
        self.frames_per_second = fps;
        self
    }

    /// Set the target binding
    pub fn with_binding(mut self, binding: TrackBinding) -> Self {
        self.binding = binding;
        self
    }

    /// Set the output encoding
    pub fn with_encoding(mut self, encoding: ClipEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(ValidationError::InvalidConfig(format!(
                "frames_per_second must be positive, got {}",
                self.frames_per_second
            )));
        }
        if self.file_name.is_empty() || self.file_name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidConfig(format!(
                "file_name must be a plain file name, got '{}'",
                self.file_name
            )));
        }
        if self.binding.property.is_empty() {
            return Err(ValidationError::InvalidConfig(
                "binding property must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load settings from a RON file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FlipbookConfig = ron::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        config.validate().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        Ok(config)
    }

    /// Save settings to a RON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let config = ron::ser::PrettyConfig::default().struct_names(true);
        let content = ron::ser::to_string_pretty(self, config).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
