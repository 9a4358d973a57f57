use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "augzip", version, about = "Augment images into a ZIP of JPEGs")]
pub struct CliArgs {
    /// Input image file (repeat for several uploads)
    #[arg(short, long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output archive path (defaults to the configured archive name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON config file (upload_dest, archive_name, params)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for transient upload staging
    #[arg(long)]
    pub upload_dest: Option<PathBuf>,

    /// Seed for the brightness/contrast jitter (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JPEG quality for archive entries (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
