//! augzip HTTP server: `GET /` upload form, `POST /upload` returning the ZIP.

#[cfg(feature = "serve")]
use std::net::SocketAddr;
#[cfg(feature = "serve")]
use std::path::PathBuf;

#[cfg(feature = "serve")]
use clap::Parser;
#[cfg(feature = "serve")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "serve")]
#[derive(Parser)]
#[command(name = "augzip-server", version, about = "Serve image augmentation over HTTP")]
struct ServerArgs {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// JSON config file (upload_dest, archive_name, params)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for transient upload staging
    #[arg(long)]
    upload_dest: Option<PathBuf>,

    /// Seed for the brightness/contrast jitter (random per request when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(feature = "serve")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = ServerArgs::parse();
    let mut config = match &args.config {
        Some(path) => augzip::UploadConfig::from_json_file(path)?,
        None => augzip::UploadConfig::default(),
    };
    if let Some(dest) = args.upload_dest {
        config.upload_dest = dest;
    }
    if args.seed.is_some() {
        config.params.seed = args.seed;
    }
    config.params.validate()?;

    augzip::server::serve(args.bind, config).await?;
    Ok(())
}

#[cfg(not(feature = "serve"))]
fn main() {
    eprintln!("HTTP server is not enabled. Please build with --features serve");
    std::process::exit(1);
}
