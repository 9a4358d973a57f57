use std::io::{Cursor, Write};

use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::frame::Frame;
use crate::core::params::PipelineParams;
use crate::error::Result;
use crate::io::writers::jpeg::encode_jpeg;

/// Archive entry name for the frame at flattened position `index`.
pub fn entry_name(index: usize) -> String {
    format!("augmented_{}.jpg", index)
}

/// Encode every frame as JPEG at the default quality and pack them into an
/// in-memory ZIP. See [`assemble_with_quality`].
pub fn assemble(frames: &[Frame]) -> Result<Cursor<Vec<u8>>> {
    assemble_with_quality(frames, PipelineParams::default().jpeg_quality)
}

/// Encode every frame as JPEG and pack them into an in-memory ZIP, entry `i`
/// named `augmented_{i}.jpg`.
///
/// Any frame that fails to encode fails the whole archive; nothing partial is
/// returned. An empty slice yields a valid archive with no entries. The cursor
/// is rewound to position 0.
pub fn assemble_with_quality(frames: &[Frame], quality: u8) -> Result<Cursor<Vec<u8>>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // JPEG data does not deflate meaningfully
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (index, frame) in frames.iter().enumerate() {
        let jpeg = encode_jpeg(frame, quality, index)?;
        let name = entry_name(index);
        debug!("Adding {} ({} bytes)", name, jpeg.len());
        zip.start_file(name, options)?;
        zip.write_all(&jpeg)?;
    }

    let mut buffer = zip.finish()?;
    buffer.set_position(0);
    info!(
        "Assembled archive: {} entries, {} bytes",
        frames.len(),
        buffer.get_ref().len()
    );
    Ok(buffer)
}
