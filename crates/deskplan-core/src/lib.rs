//! # DeskPlan Core
//!
//! Core types, geometry primitives and events for DeskPlan.
//! Provides the data model shared by the arrangement planner, the cable
//! router and the workspace state, plus the error types and event bus used
//! across the workspace.

pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod model;

pub use error::LayoutError;

pub use event_bus::{
    AppEvent, EventBus, EventBusError, EventCategory, EventFilter, SubscriptionId, WorkspaceEvent,
};

pub use geometry::{bounding_box_of, path_length, segment_intersects_box, BoundingBox};

pub use model::{
    catalog_entry, Cable, CatalogEntry, Dimensions, Group, ObjectCategory, ObjectId,
    PlacedObject, Room, Vec3,
};
