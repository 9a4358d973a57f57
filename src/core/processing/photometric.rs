use rand::Rng;
use tracing::debug;

use crate::core::frame::Frame;
use crate::error::Result;

const SCALE_255: f32 = 255.0;

/// Contrast gain and brightness shift applied as `v * alpha + beta * 255`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BrightnessContrast {
    pub alpha: f32,
    pub beta: f32,
}

impl BrightnessContrast {
    /// Draw `alpha = 1 + U(-contrast_limit, contrast_limit)` and
    /// `beta = U(-brightness_limit, brightness_limit)` from `rng`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, brightness_limit: f32, contrast_limit: f32) -> Self {
        let alpha = 1.0 + symmetric(rng, contrast_limit);
        let beta = symmetric(rng, brightness_limit);
        Self { alpha, beta }
    }

    /// 256-entry table mapping every input level to its adjusted level.
    /// Values are clamped to 0..=255 and truncated.
    pub fn lut(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for v in 0u16..=255 {
            let adjusted = v as f32 * self.alpha + self.beta * SCALE_255;
            lut[v as usize] = adjusted.clamp(0.0, SCALE_255) as u8;
        }
        lut
    }

    pub fn apply(&self, frame: &Frame) -> Result<Frame> {
        let lut = self.lut();
        let data = frame.data().iter().map(|&v| lut[v as usize]).collect();
        frame.with_data(data)
    }
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, limit: f32) -> f32 {
    let limit = limit.abs();
    if limit == 0.0 {
        return 0.0;
    }
    rng.gen_range(-limit..=limit)
}

/// Randomized brightness/contrast jitter with parameters drawn from `rng`.
pub fn random_brightness_contrast<R: Rng + ?Sized>(
    frame: &Frame,
    rng: &mut R,
    brightness_limit: f32,
    contrast_limit: f32,
) -> Result<Frame> {
    let jitter = BrightnessContrast::sample(rng, brightness_limit, contrast_limit);
    debug!(
        "Brightness/contrast jitter: alpha={:.3}, beta={:.3}",
        jitter.alpha, jitter.beta
    );
    jitter.apply(frame)
}
