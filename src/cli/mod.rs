//! Glue between the command line and `augzip::api`.
//!
//! `args` declares the flags, `errors` the failures that only exist at this
//! layer (bad flag values), and `runner` merges the JSON config with flag
//! overrides, reads the inputs as uploads, and writes the archive body to disk.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
