//! Motion bundle inspector for the Assembly client.
//!
//! Reads a JSON motion bundle, resolves it into a view projection exactly as
//! the client would, applies the bundled updates, and prints the template
//! summary. The viewport classification decides the output layout: a mobile
//! viewport gets compact JSON, anything else pretty-printed JSON.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Load configuration from `assembly-config.yaml` (or `ASSEMBLY_CONFIG`)
//! 3. Initialize structured logging (tracing) at the configured level
//! 4. Read and parse the bundle
//! 5. Start the viewport service and feed it the bundle's viewport
//! 6. Resolve the projection and print its summary

mod bundle;
mod cli;
mod error;

use std::path::Path;

use assembly_view::ViewConfig;
use assembly_viewport::{SimulatedBreakpointObserver, ViewportService};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bundle::MotionBundle;
use crate::cli::Cli;
use crate::error::InspectError;

/// Default location of the configuration file.
const DEFAULT_CONFIG_PATH: &str = "assembly-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or the bundle cannot be loaded, or, in
/// strict mode, if the motion references a record the bundle lacks.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Parse arguments.
    let cli = Cli::parse();

    // 2. Load configuration.
    let config = load_config()?;

    // 3. Initialize structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        line_length = config.motions.line_length,
        line_numbering = ?config.motions.line_numbering,
        change_reco = ?config.motions.change_reco,
        "configuration loaded"
    );

    // 4. Read and parse the bundle.
    let bundle_path = cli.bundle;
    let contents = std::fs::read_to_string(&bundle_path).map_err(InspectError::from)?;
    let bundle: MotionBundle = serde_json::from_str(&contents).map_err(InspectError::from)?;
    info!(
        path = %bundle_path.display(),
        motion_id = %bundle.motion.id,
        updates = bundle.updates.len(),
        "bundle loaded"
    );

    // 5. Start the viewport service.
    let viewport = ViewportService::new(SimulatedBreakpointObserver::new());
    viewport.check_for_change();
    viewport.observer().emit(bundle.mobile);

    // 6. Resolve the projection and print its summary.
    let view = bundle::resolve(&bundle, config.motions.display_settings(), cli.strict)?;
    let summary = view.summary();

    let rendered = if viewport.is_mobile() {
        serde_json::to_string(&summary)
    } else {
        serde_json::to_string_pretty(&summary)
    }
    .map_err(InspectError::from)?;
    println!("{rendered}");

    info!(
        title = view.display_title().unwrap_or_default(),
        is_mobile = viewport.is_mobile(),
        "projection printed"
    );
    Ok(())
}

/// Load configuration, falling back to defaults when no file exists.
fn load_config() -> Result<ViewConfig, InspectError> {
    let path = std::env::var("ASSEMBLY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let path = Path::new(&path);
    if path.exists() {
        Ok(ViewConfig::from_file(path)?)
    } else {
        Ok(ViewConfig::default())
    }
}
