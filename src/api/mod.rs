//! High-level, ergonomic library API: hand a request's uploaded files to
//! [`handle_upload`] and get back a ready-to-send archive. Prefer these entry
//! points over the low-level processing modules when integrating augzip.
//!
//! This layer owns everything around the pipeline: extension filtering,
//! transient on-disk staging (removed when the request ends), decoding, and
//! flattening every upload's derived frames into one archive.
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::core::frame::Frame;
use crate::core::params::{PipelineParams, UploadConfig};
use crate::core::processing::pipeline::{DERIVED_PER_IMAGE, augment_with_rng, pipeline_rng};
use crate::error::{Error, Result};
use crate::io::reader::decode_file;
use crate::io::writers::archive::assemble_with_quality;

/// File extensions accepted as image uploads (compared case-insensitively).
/// Only raster formats the decoder can read; vector images are refused up front.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpe", "jpeg", "png", "gif", "bmp", "webp"];

pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a local file as if it had been uploaded under its own name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(filename, fs::read(path)?))
    }
}

/// Archive ready for transmission: body positioned at offset 0.
#[derive(Debug)]
pub struct ArchiveResponse {
    pub file_name: String,
    pub mime_type: &'static str,
    pub body: Cursor<Vec<u8>>,
}

/// True when `filename` carries one of [`IMAGE_EXTENSIONS`].
pub fn is_allowed_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Final path component of a client-supplied name, so uploads cannot escape
/// the staging directory.
fn sanitize_filename(filename: &str) -> Option<String> {
    let base = filename.rsplit(['/', '\\']).next()?.trim();
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(base.to_string())
}

/// Path in `dir` for `name`, suffixed `_1`, `_2`, ... when taken.
fn unique_staged_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut n = 1usize;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, n, ext));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Run the pipeline over every frame and flatten the results, in input order.
pub fn augment_all<R: Rng + ?Sized>(
    frames: &[Frame],
    params: &PipelineParams,
    rng: &mut R,
) -> Result<Vec<Frame>> {
    let mut flattened = Vec::with_capacity(frames.len() * DERIVED_PER_IMAGE);
    for frame in frames {
        flattened.extend(augment_with_rng(frame, params, rng)?);
    }
    Ok(flattened)
}

/// Filter, stage, and decode uploads into frames, in upload order.
///
/// Uploads with an empty name are skipped. Any other upload without an image
/// extension, or whose bytes do not decode, fails the whole request. Staged
/// copies are removed before returning.
pub fn stage_and_decode(uploads: &[Upload], upload_dest: &Path) -> Result<Vec<Frame>> {
    let mut accepted = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let Some(name) = sanitize_filename(&upload.filename) else {
            debug!("Skipping upload with empty filename");
            continue;
        };
        if !is_allowed_image(&name) {
            return Err(Error::UploadNotAllowed {
                filename: upload.filename.clone(),
            });
        }
        accepted.push((name, upload));
    }

    if accepted.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(upload_dest)?;
    // Dropped (and deleted) on every exit path
    let staging = tempfile::Builder::new()
        .prefix("upload-")
        .tempdir_in(upload_dest)?;
    debug!("Staging {} uploads in {:?}", accepted.len(), staging.path());

    let mut frames = Vec::with_capacity(accepted.len());
    for (name, upload) in accepted {
        let path = unique_staged_path(staging.path(), &name);
        fs::write(&path, &upload.bytes)?;
        info!("Staged upload {:?} ({} bytes)", path, upload.bytes.len());
        frames.push(decode_file(&path)?);
    }

    if let Err(e) = staging.close() {
        warn!("Failed to remove staging directory: {}", e);
    }
    Ok(frames)
}

/// Process one request's uploads end to end with the configured random source.
pub fn handle_upload(uploads: &[Upload], config: &UploadConfig) -> Result<ArchiveResponse> {
    handle_upload_with_rng(uploads, config, &mut pipeline_rng(&config.params))
}

/// Process one request's uploads end to end, drawing jitter from `rng`.
pub fn handle_upload_with_rng<R: Rng + ?Sized>(
    uploads: &[Upload],
    config: &UploadConfig,
    rng: &mut R,
) -> Result<ArchiveResponse> {
    info!("Received {} uploads", uploads.len());
    config.params.validate()?;

    let frames = stage_and_decode(uploads, &config.upload_dest)?;
    let derived = augment_all(&frames, &config.params, rng)?;
    let body = assemble_with_quality(&derived, config.params.jpeg_quality)?;

    Ok(ArchiveResponse {
        file_name: config.archive_name.clone(),
        mime_type: ARCHIVE_MIME_TYPE,
        body,
    })
}
