//! Event type definitions for the event bus.
//!
//! Events describe state changes of a workspace: objects, selection,
//! cables, arrangement, history and whole-layout operations. They are
//! cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::model::{ObjectCategory, ObjectId};

/// Root event enum for all workspace events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Object collection changes
    Objects(ObjectEvent),
    /// Selection changes
    Selection(SelectionEvent),
    /// Cable changes
    Cables(CableEvent),
    /// Automatic arrangement
    Arrangement(ArrangementEvent),
    /// Undo/redo
    History(HistoryEvent),
    /// Whole-layout operations
    Layout(LayoutEvent),
}

/// Alias used by the workspace state when publishing.
pub type WorkspaceEvent = AppEvent;

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Objects(_) => EventCategory::Objects,
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::Cables(_) => EventCategory::Cables,
            AppEvent::Arrangement(_) => EventCategory::Arrangement,
            AppEvent::History(_) => EventCategory::History,
            AppEvent::Layout(_) => EventCategory::Layout,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Objects(e) => e.description(),
            AppEvent::Selection(e) => e.description(),
            AppEvent::Cables(e) => e.description(),
            AppEvent::Arrangement(e) => e.description(),
            AppEvent::History(e) => e.description(),
            AppEvent::Layout(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Objects,
    Selection,
    Cables,
    Arrangement,
    History,
    Layout,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Objects => write!(f, "Objects"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Cables => write!(f, "Cables"),
            EventCategory::Arrangement => write!(f, "Arrangement"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Layout => write!(f, "Layout"),
        }
    }
}

/// Object collection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectEvent {
    /// Object added to the workspace.
    Added {
        /// Id of the new object.
        id: ObjectId,
        /// Its category.
        category: ObjectCategory,
    },
    /// Object removed from the workspace.
    Removed {
        /// Id of the removed object.
        id: ObjectId,
    },
    /// Object transform or properties changed.
    Updated {
        /// Id of the changed object.
        id: ObjectId,
    },
    /// Several objects moved at once (align, distribute).
    Moved {
        /// Ids of the moved objects.
        ids: Vec<ObjectId>,
    },
    /// Objects grouped together.
    Grouped {
        /// Id of the new group.
        group_id: ObjectId,
        /// Members of the group.
        ids: Vec<ObjectId>,
    },
    /// Groups dissolved.
    Ungrouped {
        /// Ids of the dissolved groups.
        group_ids: Vec<ObjectId>,
    },
}

impl ObjectEvent {
    fn description(&self) -> String {
        match self {
            ObjectEvent::Added { id, category } => format!("Added {} ({})", category, id),
            ObjectEvent::Removed { id } => format!("Removed {}", id),
            ObjectEvent::Updated { id } => format!("Updated {}", id),
            ObjectEvent::Moved { ids } => format!("Moved {} objects", ids.len()),
            ObjectEvent::Grouped { group_id, ids } => {
                format!("Grouped {} objects into {}", ids.len(), group_id)
            }
            ObjectEvent::Ungrouped { group_ids } => {
                format!("Dissolved {} groups", group_ids.len())
            }
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// Selection changed.
    Changed {
        /// Primary selection.
        primary: Option<ObjectId>,
        /// Number of selected objects.
        count: usize,
    },
    /// Selection cleared.
    Cleared,
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { primary, count } => match primary {
                Some(id) => format!("Selected {} ({} total)", id, count),
                None => format!("Selection changed ({} total)", count),
            },
            SelectionEvent::Cleared => "Selection cleared".to_string(),
        }
    }
}

/// Cable events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CableEvent {
    /// Cable created and routed.
    Added {
        /// Id of the cable.
        id: ObjectId,
        /// Number of points in the routed path.
        points: usize,
    },
    /// Cable removed.
    Removed {
        /// Id of the cable.
        id: ObjectId,
    },
    /// Cables re-routed.
    Rerouted {
        /// Number of cables that received a new path.
        routed: usize,
        /// Number of cables skipped because an endpoint is missing.
        inactive: usize,
    },
    /// Paths cleared because an endpoint moved.
    Invalidated {
        /// Ids of the affected cables.
        ids: Vec<ObjectId>,
    },
}

impl CableEvent {
    fn description(&self) -> String {
        match self {
            CableEvent::Added { id, points } => format!("Cable {} routed ({} points)", id, points),
            CableEvent::Removed { id } => format!("Cable {} removed", id),
            CableEvent::Rerouted { routed, inactive } => {
                format!("Re-routed {} cables ({} inactive)", routed, inactive)
            }
            CableEvent::Invalidated { ids } => format!("Invalidated {} cable paths", ids.len()),
        }
    }
}

/// Arrangement events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrangementEvent {
    /// Workspace tidied.
    Applied {
        /// Number of objects that received a placement.
        placed: usize,
        /// Number of cables added by the connection generator.
        cables_added: usize,
    },
    /// Arrangement skipped because there is no desk.
    NoDesk,
}

impl ArrangementEvent {
    fn description(&self) -> String {
        match self {
            ArrangementEvent::Applied {
                placed,
                cables_added,
            } => format!("Arranged {} objects, added {} cables", placed, cables_added),
            ArrangementEvent::NoDesk => "Arrangement skipped: no desk".to_string(),
        }
    }
}

/// History events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// Undo applied.
    Undone {
        /// Whether another undo is possible.
        can_undo: bool,
        /// Whether redo is possible.
        can_redo: bool,
    },
    /// Redo applied.
    Redone {
        /// Whether undo is possible.
        can_undo: bool,
        /// Whether another redo is possible.
        can_redo: bool,
    },
}

impl HistoryEvent {
    fn description(&self) -> String {
        match self {
            HistoryEvent::Undone { can_undo, can_redo } => {
                format!("Undo (can undo: {}, can redo: {})", can_undo, can_redo)
            }
            HistoryEvent::Redone { can_undo, can_redo } => {
                format!("Redo (can undo: {}, can redo: {})", can_undo, can_redo)
            }
        }
    }
}

/// Whole-layout events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// Layout imported.
    Imported {
        /// Number of objects imported.
        objects: usize,
    },
    /// Workspace cleared.
    Cleared,
    /// Room dimensions changed.
    RoomChanged {
        /// New width.
        width: f64,
        /// New depth.
        depth: f64,
        /// New height.
        height: f64,
    },
}

impl LayoutEvent {
    fn description(&self) -> String {
        match self {
            LayoutEvent::Imported { objects } => format!("Imported {} objects", objects),
            LayoutEvent::Cleared => "Workspace cleared".to_string(),
            LayoutEvent::RoomChanged {
                width,
                depth,
                height,
            } => format!("Room: {}x{}x{}", width, depth, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_categories() {
        let e = AppEvent::Objects(ObjectEvent::Removed {
            id: ObjectId::from("a"),
        });
        assert_eq!(e.category(), EventCategory::Objects);
        assert_eq!(e.description(), "Removed a");

        let e = AppEvent::Layout(LayoutEvent::Cleared);
        assert_eq!(e.category(), EventCategory::Layout);
    }

    #[test]
    fn test_event_serializes() {
        let e = AppEvent::Cables(CableEvent::Rerouted {
            routed: 3,
            inactive: 1,
        });
        let json = serde_json::to_string(&e).unwrap();
        let back: AppEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
