//! Object lifecycle: add, remove, duplicate, update, import.

use deskplan_core::event_bus::{AppEvent, LayoutEvent, ObjectEvent};
use deskplan_core::{Dimensions, ObjectCategory, ObjectId, PlacedObject, Vec3};

use super::{WorkspaceError, WorkspaceResult, WorkspaceState};

/// Offset applied to duplicates in x and z.
const DUPLICATE_OFFSET: f64 = 0.5;

/// Partial update of an object's properties.
///
/// Only `Some` fields are applied. Changing the transform or the
/// dimensions is significant: it is recorded in history and invalidates
/// the object's cable paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectUpdate {
    pub name: Option<String>,
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub color: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub price: Option<f64>,
}

impl ObjectUpdate {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Whether applying this update would move, turn or resize `object`.
    pub fn is_significant_for(&self, object: &PlacedObject) -> bool {
        self.position.is_some_and(|p| p != object.position)
            || self.rotation.is_some_and(|r| r != object.rotation)
            || self.scale.is_some_and(|s| s != object.scale)
            || self.dimensions.is_some_and(|d| Some(d) != object.dimensions)
    }

    fn apply(self, object: &mut PlacedObject) {
        if let Some(name) = self.name {
            object.name = name;
        }
        if let Some(position) = self.position {
            object.position = position;
        }
        if let Some(rotation) = self.rotation {
            object.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            object.scale = scale;
        }
        if let Some(color) = self.color {
            object.color = color;
        }
        if let Some(dimensions) = self.dimensions {
            object.dimensions = Some(dimensions);
        }
        if let Some(price) = self.price {
            object.price = Some(price);
        }
    }
}

impl WorkspaceState {
    /// Add a new object of `category` with catalog defaults and select it.
    pub fn add_object(&mut self, category: ObjectCategory) -> ObjectId {
        self.add_object_with(PlacedObject::new(category))
    }

    /// Add a prepared object and select it.
    pub fn add_object_with(&mut self, object: PlacedObject) -> ObjectId {
        self.record();
        let id = object.id.clone();
        let category = object.category;
        tracing::debug!("Adding {} {}", category, id);
        self.objects.push(object);
        self.set_single_selection(id.clone());
        self.events.notify(AppEvent::Objects(ObjectEvent::Added {
            id: id.clone(),
            category,
        }));
        id
    }

    /// Remove an object. Cables to it stay in place and become inactive.
    pub fn remove_object(&mut self, id: &ObjectId) -> WorkspaceResult<PlacedObject> {
        let index = self.index_of(id)?;
        self.record();
        let removed = self.objects.remove(index);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        self.selected_ids.retain(|s| s != id);
        self.sync_groups();
        self.invalidate_cables_for(id);

        tracing::debug!("Removed {} {}", removed.category, id);
        self.events
            .notify(AppEvent::Objects(ObjectEvent::Removed { id: id.clone() }));
        Ok(removed)
    }

    /// Copy an object with a fresh id, offset in x/z, and select the copy.
    pub fn duplicate_object(&mut self, id: &ObjectId) -> WorkspaceResult<ObjectId> {
        let source = self.object(id).ok_or_else(|| WorkspaceError::UnknownObject(id.clone()))?;
        let mut copy = source.clone();
        copy.id = ObjectId::generate();
        copy.name = format!("{} (copy)", source.name);
        copy.position[0] += DUPLICATE_OFFSET;
        copy.position[2] += DUPLICATE_OFFSET;
        Ok(self.add_object_with(copy))
    }

    /// Apply `update` to an object.
    ///
    /// Significant changes are recorded in history first; cosmetic changes
    /// (name, color, price) are not.
    pub fn update_object(&mut self, id: &ObjectId, update: ObjectUpdate) -> WorkspaceResult<()> {
        let index = self.index_of(id)?;
        let significant = update.is_significant_for(&self.objects[index]);
        if significant {
            self.record();
        }
        update.apply(&mut self.objects[index]);
        if significant {
            self.invalidate_cables_for(id);
        }
        self.events
            .notify(AppEvent::Objects(ObjectEvent::Updated { id: id.clone() }));
        Ok(())
    }

    /// Remove every object and clear the selection. Cables stay, inactive.
    pub fn clear_workspace(&mut self) {
        self.record();
        self.objects.clear();
        self.clear_selection_quiet();
        self.groups.clear();
        for cable in self.cables.iter_mut() {
            cable.path.clear();
        }
        tracing::debug!("Workspace cleared");
        self.events.notify(AppEvent::Layout(LayoutEvent::Cleared));
    }

    /// Replace the object collection, as one history step.
    pub fn import_objects(&mut self, objects: Vec<PlacedObject>) {
        self.record();
        let count = objects.len();
        self.objects = objects;
        self.clear_selection_quiet();
        self.sync_groups();
        for cable in self.cables.iter_mut() {
            cable.path.clear();
        }
        tracing::info!("Imported {} objects", count);
        self.events
            .notify(AppEvent::Layout(LayoutEvent::Imported { objects: count }));
    }

    /// Move an object without recording history; used by bulk operations
    /// that record once up front.
    pub(crate) fn set_transform(&mut self, id: &ObjectId, position: Vec3, rotation: Option<Vec3>) {
        let Some(object) = self.objects.iter_mut().find(|o| &o.id == id) else {
            return;
        };
        let changed = object.position != position || rotation.is_some_and(|r| r != object.rotation);
        object.position = position;
        if let Some(rotation) = rotation {
            object.rotation = rotation;
        }
        if changed {
            self.invalidate_cables_for(id);
        }
    }

    pub(crate) fn index_of(&self, id: &ObjectId) -> WorkspaceResult<usize> {
        self.objects
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| WorkspaceError::UnknownObject(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_selects_new_object() {
        let mut state = WorkspaceState::new();
        let id = state.add_object(ObjectCategory::Monitor);
        assert_eq!(state.selected_id(), Some(&id));
        assert_eq!(state.objects().len(), 1);
        assert_eq!(state.objects()[0].name, "Monitor");
    }

    #[test]
    fn test_remove_unknown_is_error() {
        let mut state = WorkspaceState::new();
        let err = state.remove_object(&ObjectId::from("nope")).unwrap_err();
        assert_eq!(err, WorkspaceError::UnknownObject(ObjectId::from("nope")));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_duplicate_offsets_and_renames() {
        let mut state = WorkspaceState::new();
        let id = state.add_object(ObjectCategory::Lamp);
        let copy_id = state.duplicate_object(&id).unwrap();
        assert_ne!(copy_id, id);
        let original = state.object(&id).unwrap().clone();
        let copy = state.object(&copy_id).unwrap();
        assert_eq!(copy.name, "Desk Lamp (copy)");
        assert_eq!(copy.position[0], original.position[0] + 0.5);
        assert_eq!(copy.position[1], original.position[1]);
        assert_eq!(copy.position[2], original.position[2] + 0.5);
        assert_eq!(state.selected_id(), Some(&copy_id));
    }

    #[test]
    fn test_every_significant_update_is_undoable() {
        let mut state = WorkspaceState::new();
        let id = state.add_object(ObjectCategory::Plant);
        state.update_object(&id, ObjectUpdate::position([1.0, 0.0, 0.0])).unwrap();
        state.update_object(&id, ObjectUpdate::position([2.0, 0.0, 0.0])).unwrap();

        assert!(state.undo());
        assert_eq!(state.object(&id).unwrap().position, [1.0, 0.0, 0.0]);
        assert!(state.undo());
        assert_eq!(state.object(&id).unwrap().position[0], 0.0);
    }

    #[test]
    fn test_cosmetic_update_not_recorded() {
        let mut state = WorkspaceState::new();
        let id = state.add_object(ObjectCategory::Plant);
        let before = state.history().len();
        state
            .update_object(
                &id,
                ObjectUpdate {
                    color: Some("#ff0000".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(state.history().len(), before);
        assert_eq!(state.object(&id).unwrap().color, "#ff0000");
    }

    #[test]
    fn test_import_replaces_objects() {
        let mut state = WorkspaceState::new();
        state.add_object(ObjectCategory::Mug);
        state.import_objects(vec![
            PlacedObject::new(ObjectCategory::Desk),
            PlacedObject::new(ObjectCategory::Chair),
        ]);
        assert_eq!(state.objects().len(), 2);
        assert!(state.selected_id().is_none());
        assert!(state.undo());
        assert_eq!(state.objects().len(), 1);
    }
}
