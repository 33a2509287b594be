//! Linear undo/redo over whole-workspace snapshots.
//!
//! Every snapshot is an owned deep copy of the object collection plus the
//! primary selection. The stack is bounded; the oldest snapshot is evicted
//! first when it overflows.

use std::collections::VecDeque;

use deskplan_core::{ObjectId, PlacedObject};
use serde::{Deserialize, Serialize};

/// Default number of snapshots kept.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Saved workspace state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    pub objects: Vec<PlacedObject>,
    pub selected_id: Option<ObjectId>,
}

impl HistorySnapshot {
    pub fn new(objects: &[PlacedObject], selected_id: Option<&ObjectId>) -> Self {
        Self {
            objects: objects.to_vec(),
            selected_id: selected_id.cloned(),
        }
    }
}

/// Bounded snapshot stack with a cursor.
///
/// `0 <= index < len` whenever the stack is non-empty. Undo is possible
/// when the cursor is past the first entry and redo when it is before the
/// last.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: VecDeque<HistorySnapshot>,
    index: usize,
    max_size: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl HistoryManager {
    /// Create an empty history. A `max_size` of zero is treated as one.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Record a copy of `objects`/`selected_id` after the cursor.
    ///
    /// Redo entries beyond the cursor are discarded, then the oldest entry
    /// is evicted if the stack is over capacity. The cursor ends on the new
    /// entry.
    pub fn snapshot(&mut self, objects: &[PlacedObject], selected_id: Option<&ObjectId>) {
        self.push(HistorySnapshot::new(objects, selected_id));
    }

    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.discard_redo();
        self.entries.push_back(snapshot);
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
            tracing::trace!("History full, evicted oldest snapshot");
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back and return a copy of the snapshot now under the cursor.
    pub fn undo(&mut self) -> Option<HistorySnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).cloned()
    }

    /// Step forward and return a copy of the snapshot now under the cursor.
    pub fn redo(&mut self) -> Option<HistorySnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Drop every entry after the cursor.
    pub fn discard_redo(&mut self) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.entries.get(self.index)
    }

    /// Whether the cursor is on the newest entry (or the stack is empty).
    pub fn at_tip(&self) -> bool {
        self.entries.is_empty() || self.index + 1 == self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}
