//! I/O layer: decoding uploaded images into frames (`reader`) and the
//! `writers` that encode frames to JPEG and pack them into an archive.
pub mod reader;
pub use reader::{decode_bytes, decode_file};

pub mod writers;
pub use writers::archive::{assemble, assemble_with_quality, entry_name};
