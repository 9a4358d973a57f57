use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use augzip::UploadConfig;
use augzip::api::{Upload, handle_upload};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(enabled: bool) {
    let default_level = if enabled { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Config file values first, then CLI overrides.
fn build_config(args: &CliArgs) -> Result<UploadConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => UploadConfig::from_json_file(path)?,
        None => UploadConfig::default(),
    };

    if let Some(dest) = &args.upload_dest {
        config.upload_dest = dest.clone();
    }
    if let Some(seed) = args.seed {
        config.params.seed = Some(seed);
    }
    if let Some(quality) = args.quality {
        if !(1..=100).contains(&quality) {
            return Err(AppError::InvalidQuality { quality });
        }
        config.params.jpeg_quality = quality;
    }
    config.params.validate()?;
    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = build_config(&args)?;

    let mut uploads = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        uploads.push(Upload::from_path(input).map_err(AppError::from)?);
    }

    let mut response = handle_upload(&uploads, &config).map_err(AppError::from)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&response.file_name));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut body = Vec::new();
    response.body.read_to_end(&mut body)?;
    fs::write(&output, &body)?;

    info!(
        "Wrote {} ({}, {} bytes) from {} inputs",
        output.display(),
        response.mime_type,
        body.len(),
        uploads.len()
    );
    Ok(())
}
