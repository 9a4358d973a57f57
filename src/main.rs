//! augzip command-line tool.
//!
//! Treats every `--input` file as one upload of a single request: the files
//! are filtered, staged, decoded, augmented seven ways each, and the resulting
//! ZIP is written to `--output`. The HTTP front end lives in the
//! `augzip-server` binary; both drive `augzip::api::handle_upload`.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run(cli::CliArgs::parse())
}
