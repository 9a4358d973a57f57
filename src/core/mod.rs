//! Core processing building blocks: the frame type, pipeline parameters, and the
//! geometric/photometric primitives behind the augmentation pipeline. These are
//! consumed by the high-level `api` module.
pub mod frame;
pub mod params;
pub mod processing;
