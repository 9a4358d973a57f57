use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, warn};

use crate::core::frame::Frame;
use crate::error::{Error, Result};

/// Crop window `(left, top, width, height)` covering `scale` of each side,
/// centred on the frame.
///
/// Sides truncate toward zero and are clamped to at least one pixel, so tiny
/// frames still yield a valid window instead of failing.
pub fn center_crop_window(cols: usize, rows: usize, scale: f64) -> (usize, usize, usize, usize) {
    let crop_cols = ((cols as f64 * scale) as usize).clamp(1, cols);
    let crop_rows = ((rows as f64 * scale) as usize).clamp(1, rows);

    if (crop_cols == 1 && cols > 1) || (crop_rows == 1 && rows > 1) {
        warn!(
            "Center crop of {}x{} at scale {} clamped to {}x{}",
            cols, rows, scale, crop_cols, crop_rows
        );
    }

    let left = (cols - crop_cols) / 2;
    let top = (rows - crop_rows) / 2;
    (left, top, crop_cols, crop_rows)
}

/// Center-crop to `scale` of each side and resize the crop back to the original
/// dimensions, as a single composed step.
pub fn center_crop_resize(frame: &Frame, scale: f64) -> Result<Frame> {
    let (cols, rows) = (frame.width(), frame.height());
    let (left, top, crop_cols, crop_rows) = center_crop_window(cols, rows, scale);

    debug!(
        "Crop window {}x{} at ({}, {}), resizing back to {}x{}",
        crop_cols, crop_rows, left, top, cols, rows
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear))
        .crop(left as f64, top as f64, crop_cols as f64, crop_rows as f64);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        cols as u32,
        rows as u32,
        frame.data().to_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(cols as u32, rows as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    frame.with_data(dst_image.into_vec())
}
