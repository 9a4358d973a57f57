//! Output writers: per-frame JPEG encoding and the ZIP archive assembler.
pub mod archive;
pub mod jpeg;
