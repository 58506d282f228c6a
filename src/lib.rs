//! # GeoDraw
//!
//! Constraint-driven construction of triangles, quadrilaterals and ellipses
//! from a stream of pointer positions.
//!
//! ## Architecture
//!
//! GeoDraw is organized as a workspace with multiple crates:
//!
//! 1. **geodraw-core** - Integer points, line geometry, placement rules, errors
//! 2. **geodraw-designer** - Shape registry, resolvers, placement, metrics,
//!    preview, drawing state and drawing files
//! 3. **geodraw-settings** - JSON/TOML configuration
//! 4. **geodraw** - Binary that prints summaries of saved drawings and builds
//!    shapes from scripted points

pub use geodraw_designer as designer;
pub use geodraw_settings as settings;

pub use geodraw_core::{EdgeClearance, PlacementRules, Point};

pub use geodraw_designer::{
    Construction, DrawingError, DrawingFile, DrawingState, Metrics, PlacementError, Preview,
    Shape, ShapeFamily, ShapeKind,
};

pub use geodraw_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so that summaries printed on stdout stay clean.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
