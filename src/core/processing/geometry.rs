//! Same-canvas rotations and mirror flips.
//!
//! Rotations turn the content clockwise about the canvas centre and keep the
//! original width and height. Each output pixel is inverse-mapped to its nearest
//! source pixel; coordinates that land outside the canvas are reflected
//! (`dcb|abcd|cba`), so corners of non-square frames are filled with mirrored
//! content instead of a constant border. On square frames 90 and 270 degrees are
//! exact pixel permutations, and 180 degrees is exact for every shape.
use crate::core::frame::Frame;

/// Clockwise quarter-turn angles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QuarterTurn {
    Cw90,
    Cw180,
    Cw270,
}

/// Reflect-101 border: maps any integer coordinate into `0..len`.
pub(crate) fn reflect_101(i: i64, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as i64 - 1);
    let mut i = i.rem_euclid(period);
    if i >= len as i64 {
        i = period - i;
    }
    i as usize
}

pub fn rotate(frame: &Frame, turn: QuarterTurn) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let cx = (w as f64 - 1.0) / 2.0;
    let cy = (h as f64 - 1.0) / 2.0;

    frame.remap(w, h, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        // Inverse of the clockwise rotation, in y-down image coordinates
        let (sx, sy) = match turn {
            QuarterTurn::Cw90 => (dy, -dx),
            QuarterTurn::Cw180 => (-dx, -dy),
            QuarterTurn::Cw270 => (-dy, dx),
        };
        // Half-up on every tie, so half-pixel centres shift uniformly
        let src_x = (cx + sx + 0.5).floor() as i64;
        let src_y = (cy + sy + 0.5).floor() as i64;
        (reflect_101(src_x, w), reflect_101(src_y, h))
    })
}

pub fn rotate_90(frame: &Frame) -> Frame {
    rotate(frame, QuarterTurn::Cw90)
}

pub fn rotate_180(frame: &Frame) -> Frame {
    rotate(frame, QuarterTurn::Cw180)
}

pub fn rotate_270(frame: &Frame) -> Frame {
    rotate(frame, QuarterTurn::Cw270)
}

/// Mirror along the vertical axis (left and right swap).
pub fn flip_horizontal(frame: &Frame) -> Frame {
    let w = frame.width();
    frame.remap(w, frame.height(), |x, y| (w - 1 - x, y))
}

/// Mirror along the horizontal axis (top and bottom swap).
pub fn flip_vertical(frame: &Frame) -> Frame {
    let h = frame.height();
    frame.remap(frame.width(), h, |x, y| (x, h - 1 - y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChannelOrder;

    /// Pixels encode their own coordinates: [x, y, 0]
    fn coords(w: usize, h: usize) -> Frame {
        let mut data = Vec::new();
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[x as u8, y as u8, 0]);
            }
        }
        Frame::new(w, h, ChannelOrder::Rgb, data).unwrap()
    }

    #[test]
    fn reflect_101_mirrors_without_repeating_edge() {
        assert_eq!(reflect_101(-1, 4), 1);
        assert_eq!(reflect_101(-2, 4), 2);
        assert_eq!(reflect_101(4, 4), 2);
        assert_eq!(reflect_101(5, 4), 1);
        assert_eq!(reflect_101(3, 4), 3);
        assert_eq!(reflect_101(-7, 1), 0);
    }

    #[test]
    fn rotate_90_moves_top_left_to_top_right() {
        let f = coords(3, 3);
        let r = rotate_90(&f);
        assert_eq!(r.pixel(2, 0), [0, 0, 0]);
        assert_eq!(r.pixel(0, 0), [0, 2, 0]);
        assert_eq!(r.pixel(1, 1), [1, 1, 0]);
    }

    #[test]
    fn rotate_270_moves_top_left_to_bottom_left() {
        let f = coords(3, 3);
        let r = rotate_270(&f);
        assert_eq!(r.pixel(0, 2), [0, 0, 0]);
    }

    #[test]
    fn rotate_180_reverses_pixels_on_any_shape() {
        let f = coords(5, 2);
        let r = rotate_180(&f);
        assert_eq!(r.pixel(0, 0), [4, 1, 0]);
        assert_eq!(r.pixel(4, 1), [0, 0, 0]);
        assert_eq!(rotate_180(&r), f);
    }

    #[test]
    fn rotations_keep_canvas_on_non_square() {
        let f = coords(8, 5);
        for turn in [QuarterTurn::Cw90, QuarterTurn::Cw180, QuarterTurn::Cw270] {
            let r = rotate(&f, turn);
            assert_eq!((r.width(), r.height()), (8, 5));
            assert_eq!(r.order(), ChannelOrder::Rgb);
        }
    }

    #[test]
    fn half_pixel_centre_does_not_repeat_rows() {
        // 4x3: the centre sits between columns, so every source row is a tie
        let f = coords(4, 3);
        let r = rotate_90(&f);
        let rows: Vec<u8> = (0..4).map(|x| r.pixel(x, 0)[1]).collect();
        assert_eq!(rows, [1, 2, 1, 0]);
        assert_ne!(r.pixel(2, 0), r.pixel(3, 0));

        let r = rotate_270(&f);
        let rows: Vec<u8> = (0..4).map(|x| r.pixel(x, 0)[1]).collect();
        assert_eq!(rows, [0, 1, 2, 1]);
    }

    #[test]
    fn flips_mirror_the_expected_axis() {
        let f = coords(3, 2);
        let h = flip_horizontal(&f);
        assert_eq!(h.pixel(0, 0), [2, 0, 0]);
        assert_eq!(h.pixel(2, 1), [0, 1, 0]);
        let v = flip_vertical(&f);
        assert_eq!(v.pixel(0, 0), [0, 1, 0]);
        assert_eq!(v.pixel(2, 1), [2, 0, 0]);
    }
}
