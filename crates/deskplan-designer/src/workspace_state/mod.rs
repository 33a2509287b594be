//! Workspace state container.
//!
//! Owns the object collection, selection, groups, cables and room of one
//! workspace and composes the history manager, arrangement planner and
//! cable router. Every structural mutation snapshots the pre-mutation state
//! and publishes an event on the workspace's [`EventBus`].
//!
//! This module is split into submodules:
//! - `objects`: add, remove, duplicate, update, import
//! - `selection`: single/multi selection with group expansion
//! - `groups`: grouping and ungrouping
//! - `transforms`: align, distribute, grid snap, surface snap, auto stack
//! - `cables`: cable creation, invalidation and tidy routing
//! - `file_io`: layout file save/load

mod cables;
mod file_io;
mod groups;
mod objects;
mod selection;
mod transforms;

pub use objects::ObjectUpdate;
pub use transforms::{Alignment, Axis};

use std::sync::Arc;

use deskplan_core::event_bus::{
    AppEvent, ArrangementEvent, CableEvent, EventBus, HistoryEvent, LayoutEvent,
};
use deskplan_core::{
    Cable, Group, LayoutError, ObjectCategory, ObjectId, PlacedObject, Room,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrangement::{missing_connections, ArrangementConfig, ArrangementPlanner};
use crate::history::{HistoryManager, HistorySnapshot, DEFAULT_MAX_HISTORY};
use crate::routing::{CableRouter, RoutingConfig};

/// Errors from workspace operations that name a specific object.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),

    #[error("Operation needs at least {needed} objects, got {got}")]
    NotEnoughObjects { needed: usize, got: usize },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;

/// Tunables for a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceOptions {
    pub room: Room,
    pub max_history: usize,
    pub arrangement: ArrangementConfig,
    pub routing: RoutingConfig,
    pub snap_to_grid: bool,
    pub grid_size: f64,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            room: Room::default(),
            max_history: DEFAULT_MAX_HISTORY,
            arrangement: ArrangementConfig::default(),
            routing: RoutingConfig::default(),
            snap_to_grid: false,
            grid_size: 0.5,
        }
    }
}

/// Result of [`WorkspaceState::tidy_workspace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TidySummary {
    /// Objects that received a planned placement.
    pub placed: usize,
    /// Cables created for missing peripheral connections.
    pub cables_added: usize,
    /// Cables that received a fresh path.
    pub cables_routed: usize,
}

/// State of one workspace session.
pub struct WorkspaceState {
    objects: Vec<PlacedObject>,
    selected_id: Option<ObjectId>,
    selected_ids: Vec<ObjectId>,
    groups: Vec<Group>,
    cables: Vec<Cable>,
    room: Room,
    history: HistoryManager,
    arrangement: ArrangementConfig,
    router: CableRouter,
    snap_to_grid: bool,
    grid_size: f64,
    events: Arc<EventBus>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WorkspaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceState")
            .field("objects", &self.objects.len())
            .field("cables", &self.cables.len())
            .field("groups", &self.groups.len())
            .field("selected_id", &self.selected_id)
            .field("history", &self.history.len())
            .finish()
    }
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::with_options(WorkspaceOptions::default())
    }

    pub fn with_options(options: WorkspaceOptions) -> Self {
        Self::with_event_bus(options, Arc::new(EventBus::new()))
    }

    /// Create a workspace publishing on a shared bus.
    pub fn with_event_bus(options: WorkspaceOptions, events: Arc<EventBus>) -> Self {
        Self {
            objects: Vec::new(),
            selected_id: None,
            selected_ids: Vec::new(),
            groups: Vec::new(),
            cables: Vec::new(),
            room: options.room,
            history: HistoryManager::new(options.max_history),
            arrangement: options.arrangement,
            router: CableRouter::new(options.routing),
            snap_to_grid: options.snap_to_grid,
            grid_size: transforms::clamp_grid_size(options.grid_size),
            events,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn object(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    /// First desk in the collection.
    pub fn desk(&self) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.is(ObjectCategory::Desk))
    }

    pub fn cables(&self) -> &[Cable] {
        &self.cables
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Replace the room. Not recorded in history.
    pub fn set_room(&mut self, room: Room) -> WorkspaceResult<()> {
        room.validate()?;
        self.room = room;
        self.events.notify(AppEvent::Layout(LayoutEvent::RoomChanged {
            width: room.width,
            depth: room.depth,
            height: room.height,
        }));
        Ok(())
    }

    pub fn planner(&self) -> ArrangementPlanner {
        ArrangementPlanner::new(self.arrangement, self.room)
    }

    pub fn router(&self) -> &CableRouter {
        &self.router
    }

    /// Arrange every object around the desk, add missing peripheral cables
    /// and re-route every active cable against the new positions.
    ///
    /// Recorded as one history step. An empty workspace is left alone.
    pub fn tidy_workspace(&mut self) -> TidySummary {
        if self.objects.is_empty() {
            return TidySummary::default();
        }
        self.record();

        let plan = self.planner().compute(&self.objects);
        if plan.is_empty() {
            self.events.notify(AppEvent::Arrangement(ArrangementEvent::NoDesk));
        }
        let placed = plan.apply_to(&mut self.objects);

        let added = missing_connections(&self.objects, &self.cables);
        let cables_added = added.len();
        self.cables
            .extend(added.into_iter().map(|c| Cable::new(c.from, c.to)));
        let (cables_routed, _) = self.route_all_cables();

        tracing::info!(
            "Tidied workspace: {} placed, {} cables added, {} routed",
            placed,
            cables_added,
            cables_routed
        );
        self.events
            .notify(AppEvent::Arrangement(ArrangementEvent::Applied {
                placed,
                cables_added,
            }));
        TidySummary {
            placed,
            cables_added,
            cables_routed,
        }
    }

    /// Whether [`undo`](Self::undo) would change the state.
    ///
    /// Also true at the newest snapshot when the live state has changed
    /// since it was taken.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
            || (self.history.at_tip() && !self.history.is_empty() && !self.live_matches_current())
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous snapshot. Returns false at the start of history.
    ///
    /// Snapshots are taken before each mutation, so at the newest entry the
    /// live state is first pushed to keep the undone change redoable. On a
    /// full history that push evicts the oldest snapshot. With room for a
    /// single snapshot the live state is not pushed and the undone change
    /// cannot be redone.
    pub fn undo(&mut self) -> bool {
        let live_ahead =
            self.history.at_tip() && !self.history.is_empty() && !self.live_matches_current();
        let snapshot = if live_ahead && self.history.max_size() == 1 {
            self.history.current().cloned()
        } else {
            if live_ahead {
                self.history.push(self.live_snapshot());
            }
            self.history.undo()
        };
        let Some(snapshot) = snapshot else {
            return false;
        };
        self.restore(snapshot);
        self.events.notify(AppEvent::History(HistoryEvent::Undone {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }));
        true
    }

    /// Re-apply the next snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(snapshot);
        self.events.notify(AppEvent::History(HistoryEvent::Redone {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }));
        true
    }

    fn live_snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(&self.objects, self.selected_id.as_ref())
    }

    fn live_matches_current(&self) -> bool {
        self.history.current().is_some_and(|current| {
            current.objects == self.objects && current.selected_id == self.selected_id
        })
    }

    /// Snapshot the state as it is before a mutation.
    ///
    /// When the live state already equals the snapshot under the cursor
    /// (right after an undo, or two records without a change between them)
    /// only the redo entries are dropped.
    pub(crate) fn record(&mut self) {
        if self.live_matches_current() {
            self.history.discard_redo();
        } else {
            self.history.push(self.live_snapshot());
        }
    }

    fn restore(&mut self, snapshot: HistorySnapshot) {
        let before = std::mem::replace(&mut self.objects, snapshot.objects);
        self.selected_id = snapshot.selected_id;
        self.selected_ids = self.selected_id.iter().cloned().collect();
        self.sync_groups();

        let moved: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|o| {
                before
                    .iter()
                    .find(|b| b.id == o.id)
                    .map_or(true, |b| geometry_changed(b, o))
            })
            .map(|o| o.id.clone())
            .chain(
                before
                    .iter()
                    .filter(|b| self.object(&b.id).is_none())
                    .map(|b| b.id.clone()),
            )
            .collect();
        self.invalidate_cables_for_all(&moved);
    }

    /// Clear the paths of every cable touching one of `ids`.
    fn invalidate_cables_for_all(&mut self, ids: &[ObjectId]) {
        let mut invalidated = Vec::new();
        for cable in self.cables.iter_mut() {
            if cable.is_routed() && ids.iter().any(|id| cable.touches(id)) {
                cable.path.clear();
                invalidated.push(cable.id.clone());
            }
        }
        if !invalidated.is_empty() {
            tracing::debug!("Invalidated {} cable paths", invalidated.len());
            self.events
                .notify(AppEvent::Cables(CableEvent::Invalidated { ids: invalidated }));
        }
    }
}

/// Whether two versions of an object differ in anything a cable path
/// depends on.
fn geometry_changed(a: &PlacedObject, b: &PlacedObject) -> bool {
    a.position != b.position
        || a.rotation != b.rotation
        || a.scale != b.scale
        || a.dimensions != b.dimensions
}
