use jpeg_encoder::{ColorType, Encoder};

use crate::core::frame::Frame;
use crate::error::{Error, Result};
use crate::types::{ChannelOrder, ENCODER_ORDER};

/// Encode `frame` as a baseline JPEG at `quality` (1..=100).
///
/// The frame is converted to `ENCODER_ORDER` first and handed to the encoder
/// with the matching color type. `index` labels the error if encoding fails.
pub fn encode_jpeg(frame: &Frame, quality: u8, index: usize) -> Result<Vec<u8>> {
    let (cols, rows) = (frame.width(), frame.height());
    if cols > u16::MAX as usize || rows > u16::MAX as usize {
        return Err(Error::Encode {
            index,
            reason: format!("{}x{} exceeds the 65535 pixel JPEG limit", cols, rows),
        });
    }

    let ordered = frame.to_order(ENCODER_ORDER);
    let color_type = match ordered.order() {
        ChannelOrder::Rgb => ColorType::Rgb,
        ChannelOrder::Bgr => ColorType::Bgr,
    };

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(ordered.data(), cols as u16, rows as u16, color_type)
        .map_err(|e| Error::Encode {
            index,
            reason: e.to_string(),
        })?;
    Ok(buffer)
}
