//! The augmentation pipeline: a fixed, ordered registry of transformations, each
//! applied independently to the original frame.
//!
//! Output position is meaningful (archive entries are named by index), so the
//! registry order is part of the contract and must not change.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::frame::Frame;
use crate::core::params::PipelineParams;
use crate::core::processing::geometry::{
    flip_horizontal, flip_vertical, rotate_90, rotate_180, rotate_270,
};
use crate::core::processing::photometric::random_brightness_contrast;
use crate::core::processing::resize::center_crop_resize;
use crate::error::Result;
use crate::types::{Augmentation, PIPELINE_ORDER};

/// Registry of transformations in output order.
pub const AUGMENTATIONS: [Augmentation; 7] = [
    Augmentation::Rotate90,
    Augmentation::Rotate180,
    Augmentation::Rotate270,
    Augmentation::HorizontalFlip,
    Augmentation::VerticalFlip,
    Augmentation::CenterCropResize,
    Augmentation::BrightnessContrast,
];

/// Number of derived frames produced per input frame.
pub const DERIVED_PER_IMAGE: usize = AUGMENTATIONS.len();

impl Augmentation {
    /// Apply this single transformation to `frame`.
    ///
    /// Input and output are both in `PIPELINE_ORDER`. Only the
    /// brightness/contrast step draws from `rng`.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        frame: &Frame,
        params: &PipelineParams,
        rng: &mut R,
    ) -> Result<Frame> {
        match self {
            Augmentation::Rotate90 => Ok(rotate_90(frame)),
            Augmentation::Rotate180 => Ok(rotate_180(frame)),
            Augmentation::Rotate270 => Ok(rotate_270(frame)),
            Augmentation::HorizontalFlip => Ok(flip_horizontal(frame)),
            Augmentation::VerticalFlip => Ok(flip_vertical(frame)),
            Augmentation::CenterCropResize => center_crop_resize(frame, params.crop_scale),
            Augmentation::BrightnessContrast => random_brightness_contrast(
                frame,
                rng,
                params.brightness_limit,
                params.contrast_limit,
            ),
        }
    }
}

/// Random source for one pipeline run: seeded when `params.seed` is set,
/// otherwise fresh from OS entropy.
pub fn pipeline_rng(params: &PipelineParams) -> StdRng {
    match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produce the derived frame set for `frame` using default parameters and a
/// fresh random source.
pub fn augment(frame: &Frame) -> Result<Vec<Frame>> {
    let params = PipelineParams::default();
    augment_with_rng(frame, &params, &mut pipeline_rng(&params))
}

/// Produce the derived frame set for `frame`, drawing randomness from `rng`.
///
/// `params` are validated first. The frame is converted to `PIPELINE_ORDER` on
/// entry; every output is in `PIPELINE_ORDER` and has the input's width and height.
pub fn augment_with_rng<R: Rng + ?Sized>(
    frame: &Frame,
    params: &PipelineParams,
    rng: &mut R,
) -> Result<Vec<Frame>> {
    params.validate()?;
    let original = frame.to_order(PIPELINE_ORDER);
    info!(
        "Augmenting {}x{} frame ({} transformations)",
        original.width(),
        original.height(),
        DERIVED_PER_IMAGE
    );

    let mut derived = Vec::with_capacity(DERIVED_PER_IMAGE);
    for augmentation in AUGMENTATIONS {
        debug!("Applying {}", augmentation);
        derived.push(augmentation.apply(&original, params, rng)?);
    }
    Ok(derived)
}
