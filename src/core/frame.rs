use crate::error::{Error, Result};
use crate::types::ChannelOrder;

/// Decoded raster: `height` rows of `width` interleaved 3-channel u8 pixels.
///
/// The channel order travels with the buffer so conversions happen only where a
/// consumer asks for a different order, never implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    pub fn new(width: usize, height: usize, order: ChannelOrder, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * Self::CHANNELS;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(Error::InvalidFrame {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Frame of a single repeated pixel; handy for fixtures.
    pub fn filled(width: usize, height: usize, order: ChannelOrder, pixel: [u8; 3]) -> Result<Self> {
        let data = pixel.repeat(width * height);
        Self::new(width, height, order, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Same frame with channels laid out in `order`. R and B swap when the order
    /// differs; otherwise the buffer is cloned as is.
    pub fn to_order(&self, order: ChannelOrder) -> Frame {
        if self.order == order {
            return self.clone();
        }
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(Self::CHANNELS) {
            px.swap(0, 2);
        }
        Frame {
            width: self.width,
            height: self.height,
            order,
            data,
        }
    }

    /// Build a frame of the same shape and order by sampling a source pixel per
    /// output pixel. `map(x, y)` returns the source coordinates.
    pub(crate) fn remap<F>(&self, out_width: usize, out_height: usize, map: F) -> Frame
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let mut data = Vec::with_capacity(out_width * out_height * Self::CHANNELS);
        for y in 0..out_height {
            for x in 0..out_width {
                let (sx, sy) = map(x, y);
                data.extend_from_slice(&self.pixel(sx, sy));
            }
        }
        Frame {
            width: out_width,
            height: out_height,
            order: self.order,
            data,
        }
    }

    pub(crate) fn with_data(&self, data: Vec<u8>) -> Result<Frame> {
        Frame::new(self.width, self.height, self.order, data)
    }
}
