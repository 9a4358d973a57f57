use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::core::frame::Frame;
use crate::error::{Error, Result};
use crate::types::ChannelOrder;

fn into_frame(decoded: DynamicImage) -> Result<Frame> {
    // Alpha, grayscale, and 16-bit inputs collapse to 8-bit RGB
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::new(
        width as usize,
        height as usize,
        ChannelOrder::Rgb,
        rgb.into_raw(),
    )
}

/// Decode an encoded image held in memory. `name` only labels errors.
pub fn decode_bytes(name: &str, bytes: &[u8]) -> Result<Frame> {
    let decoded = image::load_from_memory(bytes).map_err(|source| Error::Decode {
        name: name.to_string(),
        source,
    })?;
    let frame = into_frame(decoded)?;
    debug!("Decoded {} ({}x{})", name, frame.width(), frame.height());
    Ok(frame)
}

/// Decode an image file from disk, guessing the format from its contents.
pub fn decode_file(path: &Path) -> Result<Frame> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&path.display().to_string(), &bytes)
}
