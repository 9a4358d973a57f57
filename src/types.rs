//! Shared types and enums used across augzip.
//! Includes `ChannelOrder` and the `Augmentation` kinds applied by the pipeline.
use serde::{Deserialize, Serialize};

/// Interleaved channel order of an 8-bit, 3-channel frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// Order every transformation expects on input and produces on output.
pub const PIPELINE_ORDER: ChannelOrder = ChannelOrder::Rgb;

/// Order frames are handed to the JPEG writer in.
pub const ENCODER_ORDER: ChannelOrder = ChannelOrder::Bgr;

impl std::fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChannelOrder::Rgb => "RGB",
            ChannelOrder::Bgr => "BGR",
        };
        write!(f, "{}", s)
    }
}

/// One transformation in the fixed augmentation set.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Augmentation {
    Rotate90,
    Rotate180,
    Rotate270,
    HorizontalFlip,
    VerticalFlip,
    CenterCropResize,
    BrightnessContrast,
}

impl Augmentation {
    /// Human-facing label, used in logs only. Archive naming is positional.
    pub fn name(&self) -> &'static str {
        match self {
            Augmentation::Rotate90 => "rotate_90",
            Augmentation::Rotate180 => "rotate_180",
            Augmentation::Rotate270 => "rotate_270",
            Augmentation::HorizontalFlip => "horizontal_flip",
            Augmentation::VerticalFlip => "vertical_flip",
            Augmentation::CenterCropResize => "center_crop_resize",
            Augmentation::BrightnessContrast => "random_brightness_contrast",
        }
    }

    /// True for the one transformation whose output depends on the random source.
    pub fn is_randomized(&self) -> bool {
        matches!(self, Augmentation::BrightnessContrast)
    }
}

impl std::fmt::Display for Augmentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
