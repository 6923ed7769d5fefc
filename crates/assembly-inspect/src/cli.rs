//! Command-line arguments for the inspector.

use std::path::PathBuf;

use clap::Parser;

/// Resolve a motion bundle into its view projection and print the summary.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Fail when the motion references a record the bundle lacks, instead of
    /// leaving it absent.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// JSON motion bundle to inspect.
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,
}
