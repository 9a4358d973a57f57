//! Augmentation primitives (geometry, crop/resize, photometric) and the
//! pipeline that applies them in a fixed order.
pub mod geometry;
pub mod photometric;
pub mod pipeline;
pub mod resize;
