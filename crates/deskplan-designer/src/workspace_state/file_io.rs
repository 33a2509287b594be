//! File I/O operations for WorkspaceState.

use std::path::Path;

use deskplan_core::event_bus::{AppEvent, LayoutEvent};

use super::WorkspaceState;
use crate::serialization::LayoutFile;

impl WorkspaceState {
    /// Snapshot the workspace into a layout file.
    pub fn to_layout_file(&self, name: impl Into<String>) -> LayoutFile {
        let mut layout = LayoutFile::new(name);
        layout.room = Some(self.room);
        layout.objects = self.objects.clone();
        layout.cables = self.cables.clone();
        layout.groups = self.groups.clone();
        layout
    }

    /// Replace the workspace content with `layout`, as one history step.
    pub fn load_layout_file(&mut self, layout: LayoutFile) {
        self.record();
        let count = layout.objects.len();
        if let Some(room) = layout.room {
            self.room = room;
        }
        self.objects = layout.objects;
        self.cables = layout.cables;
        self.groups = layout.groups;
        self.clear_selection_quiet();
        self.sync_groups();
        tracing::info!(
            "Loaded layout '{}' ({} objects, {} cables)",
            layout.metadata.name,
            count,
            self.cables.len()
        );
        self.events
            .notify(AppEvent::Layout(LayoutEvent::Imported { objects: count }));
    }

    /// Save the workspace to a layout file.
    pub fn save_layout(&self, path: impl AsRef<Path>, name: &str) -> anyhow::Result<()> {
        self.to_layout_file(name).save_to_file(path)
    }

    /// Load a layout file into the workspace.
    pub fn load_layout(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let layout = LayoutFile::load_from_file(path)?;
        self.load_layout_file(layout);
        Ok(())
    }
}
