use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pipeline parameters suitable for config files.
///
/// The augmentation set itself is fixed; these only tune the self-parameterizing
/// steps and the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    /// Fraction of each side kept by the center crop before resizing back
    pub crop_scale: f64,
    /// Brightness shift drawn from [-limit, limit], as a fraction of 255
    pub brightness_limit: f32,
    /// Contrast gain drawn from 1 + [-limit, limit]
    pub contrast_limit: f32,
    /// JPEG quality for archive entries (1..=100)
    pub jpeg_quality: u8,
    /// Fixed seed for the jitter step; None draws a fresh source per call
    pub seed: Option<u64>,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            crop_scale: 0.8,
            brightness_limit: 0.2,
            contrast_limit: 0.2,
            jpeg_quality: 95,
            seed: None,
        }
    }
}

impl PipelineParams {
    /// Reject values the processing steps cannot honour: limits must be finite
    /// and within [0, 1], `crop_scale` within (0, 1], quality within 1..=100.
    pub fn validate(&self) -> Result<()> {
        for (field, limit) in [
            ("brightness_limit", self.brightness_limit),
            ("contrast_limit", self.contrast_limit),
        ] {
            if !limit.is_finite() || !(0.0..=1.0).contains(&limit) {
                return Err(Error::InvalidParams {
                    field,
                    value: limit.to_string(),
                    expected: "a finite value in [0, 1]",
                });
            }
        }
        if !self.crop_scale.is_finite() || self.crop_scale <= 0.0 || self.crop_scale > 1.0 {
            return Err(Error::InvalidParams {
                field: "crop_scale",
                value: self.crop_scale.to_string(),
                expected: "a value in (0, 1]",
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidParams {
                field: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
                expected: "1..=100",
            });
        }
        Ok(())
    }
}

/// Settings for the upload collaborator, passed in explicitly at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory under which per-request staging directories are created
    pub upload_dest: PathBuf,
    /// Download name reported with the archive
    pub archive_name: String,
    pub params: PipelineParams,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            upload_dest: PathBuf::from("uploads"),
            archive_name: "augmented_images.zip".to_string(),
            params: PipelineParams::default(),
        }
    }
}

impl UploadConfig {
    /// Load from a JSON file; missing fields take their defaults. The pipeline
    /// parameters are validated before the config is returned.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: UploadConfig = serde_json::from_str(&text)?;
        config.params.validate()?;
        Ok(config)
    }
}
