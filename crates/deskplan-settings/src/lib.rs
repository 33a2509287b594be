//! DeskPlan Settings Crate
//!
//! Handles planner configuration: room size, desk model, routing
//! clearances, cable sag, history depth and grid snapping, loaded from
//! JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{
    ArrangementSettings, Config, GridSettings, HistorySettings, RoomSettings, RoutingSettings,
    SagSettings,
};
pub use error::{ConfigError, Result, SettingsError};
