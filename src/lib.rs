//! # DeskPlan
//!
//! Desk and workspace layout planner:
//! - Automatic arrangement of desk objects by category
//! - Collision-aware cable routing with gravity sag
//! - Snapshot-based undo/redo of every edit
//!
//! ## Architecture
//!
//! DeskPlan is organized as a workspace with multiple crates:
//!
//! 1. **deskplan-core** - Data model, geometry, errors, event bus
//! 2. **deskplan-designer** - Arrangement planner, cable router, history, workspace state
//! 3. **deskplan-settings** - Planner configuration (JSON/TOML)
//! 4. **deskplan** - Command line binary that integrates all crates

pub mod commands;

pub use deskplan_core::{
    Cable, Group, LayoutError, ObjectCategory, ObjectId, PlacedObject, Room,
};
pub use deskplan_designer as designer;
pub use deskplan_designer::{LayoutFile, WorkspaceState};
pub use deskplan_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("DESKPLAN_BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

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
