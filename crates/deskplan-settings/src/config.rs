//! Configuration for DeskPlan
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is in the platform config
//! directory.
//!
//! Configuration is organized into sections:
//! - Room size
//! - Desk model and wall clearance used by the arrangement planner
//! - Cable routing clearances and sag
//! - History depth and grid snapping

use deskplan_core::Room;
use deskplan_designer::{ArrangementConfig, RoutingConfig, SagConfig, WorkspaceOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, SettingsError};

/// Room dimensions in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSettings {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Default for RoomSettings {
    fn default() -> Self {
        let room = Room::default();
        Self {
            width: room.width,
            depth: room.depth,
            height: room.height,
        }
    }
}

/// Desk model used by the arrangement planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementSettings {
    /// Gap between the desk and the walls
    pub wall_offset: f64,
    pub desk_leg_height: f64,
    pub desk_surface_thickness: f64,
}

impl Default for ArrangementSettings {
    fn default() -> Self {
        let defaults = ArrangementConfig::default();
        Self {
            wall_offset: defaults.wall_offset,
            desk_leg_height: defaults.desk_leg_height,
            desk_surface_thickness: defaults.desk_surface_thickness,
        }
    }
}

/// Cable routing clearances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    pub desk_clearance: f64,
    pub low_route_drop: f64,
    pub sidestep_clearance: f64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        let defaults = RoutingConfig::default();
        Self {
            desk_clearance: defaults.desk_clearance,
            low_route_drop: defaults.low_route_drop,
            sidestep_clearance: defaults.sidestep_clearance,
        }
    }
}

/// Cable sag display parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SagSettings {
    pub gravity: f64,
    /// 0 sags fully, 1 keeps cables straight
    pub stiffness: f64,
    pub min_span: f64,
}

impl Default for SagSettings {
    fn default() -> Self {
        let defaults = SagConfig::default();
        Self {
            gravity: defaults.gravity,
            stiffness: defaults.stiffness,
            min_span: defaults.min_span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Number of undo snapshots kept
    pub max_size: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_size: deskplan_designer::DEFAULT_MAX_HISTORY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub snap_to_grid: bool,
    /// Grid spacing; clamped to [0.1, 2.0] when applied
    pub grid_size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            grid_size: 0.5,
        }
    }
}

/// Complete planner configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub room: RoomSettings,
    pub arrangement: ArrangementSettings,
    pub routing: RoutingSettings,
    pub sag: SagSettings,
    pub history: HistorySettings,
    pub grid: GridSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )
        .into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/deskplan/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("deskplan").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the config at [`default_path`](Self::default_path), or the
    /// defaults when no file exists there.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [
            ("room.width", self.room.width),
            ("room.depth", self.room.depth),
            ("room.height", self.room.height),
            ("arrangement.desk_surface_thickness", self.arrangement.desk_surface_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        for (key, value) in [
            ("arrangement.wall_offset", self.arrangement.wall_offset),
            ("arrangement.desk_leg_height", self.arrangement.desk_leg_height),
            ("routing.desk_clearance", self.routing.desk_clearance),
            ("routing.low_route_drop", self.routing.low_route_drop),
            ("routing.sidestep_clearance", self.routing.sidestep_clearance),
            ("sag.gravity", self.sag.gravity),
            ("sag.min_span", self.sag.min_span),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(0.0..=1.0).contains(&self.sag.stiffness) {
            return Err(ConfigError::out_of_range("sag.stiffness", self.sag.stiffness));
        }

        if self.history.max_size == 0 {
            return Err(ConfigError::out_of_range("history.max_size", 0));
        }

        if !(self.grid.grid_size.is_finite() && self.grid.grid_size > 0.0) {
            return Err(ConfigError::out_of_range("grid.grid_size", self.grid.grid_size));
        }

        Ok(())
    }

    pub fn room(&self) -> Room {
        Room::new(self.room.width, self.room.depth, self.room.height)
    }

    pub fn arrangement_config(&self) -> ArrangementConfig {
        ArrangementConfig {
            wall_offset: self.arrangement.wall_offset,
            desk_leg_height: self.arrangement.desk_leg_height,
            desk_surface_thickness: self.arrangement.desk_surface_thickness,
        }
    }

    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            desk_clearance: self.routing.desk_clearance,
            low_route_drop: self.routing.low_route_drop,
            sidestep_clearance: self.routing.sidestep_clearance,
        }
    }

    pub fn sag_config(&self) -> SagConfig {
        SagConfig {
            gravity: self.sag.gravity,
            stiffness: self.sag.stiffness,
            min_span: self.sag.min_span,
        }
    }

    /// Options for a new workspace built from this config.
    pub fn workspace_options(&self) -> WorkspaceOptions {
        WorkspaceOptions {
            room: self.room(),
            max_history: self.history.max_size,
            arrangement: self.arrangement_config(),
            routing: self.routing_config(),
            snap_to_grid: self.grid.snap_to_grid,
            grid_size: self.grid.grid_size,
        }
    }
}
