//! # DeskPlan Designer
//!
//! Layout tooling for a simulated desk setup: an arrangement planner that
//! places every object around the desk, a cable router that finds
//! collision-aware paths between objects, and a bounded undo/redo history.
//! [`WorkspaceState`] ties them together into one editing session.
//!
//! ## Architecture
//!
//! ```text
//! WorkspaceState (objects, selection, groups, cables, room)
//!   ├── ArrangementPlanner (desk frame + placement rules)
//!   ├── CableRouter (anchors, candidate paths, sag)
//!   ├── HistoryManager (snapshots, cursor)
//!   └── EventBus (notifications)
//!
//! LayoutFile (JSON save/load)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use deskplan_core::ObjectCategory;
//! use deskplan_designer::WorkspaceState;
//!
//! let mut state = WorkspaceState::new();
//! state.add_object(ObjectCategory::Desk);
//! state.add_object(ObjectCategory::Monitor);
//! state.add_object(ObjectCategory::PcTower);
//!
//! let summary = state.tidy_workspace();
//! assert_eq!(summary.placed, 3);
//! assert_eq!(summary.cables_added, 1);
//!
//! assert!(state.undo());
//! assert!(state.redo());
//! ```

pub mod arrangement;
pub mod history;
pub mod routing;
pub mod serialization;
pub mod workspace_state;

pub use arrangement::{
    compute_arrangement, generate_connections, missing_connections, ArrangementConfig,
    ArrangementPlan, ArrangementPlanner, Connection, DeskFrame, Placement, PERIPHERALS,
};
pub use history::{HistoryManager, HistorySnapshot, DEFAULT_MAX_HISTORY};
pub use routing::{
    anchor_point, apply_sag, compute_cable_path, find_path, CableRouter, Route, RouteKind,
    RoutingConfig, SagConfig,
};
pub use serialization::{LayoutFile, LayoutMetadata, FILE_FORMAT_VERSION};
pub use workspace_state::{
    Alignment, Axis, ObjectUpdate, TidySummary, WorkspaceError, WorkspaceOptions,
    WorkspaceResult, WorkspaceState,
};
