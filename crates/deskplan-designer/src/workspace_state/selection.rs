//! Selection handling.
//!
//! Selecting a grouped object selects every member of its group. In
//! multi-select mode the clicked group is toggled in or out of the
//! selection.

use deskplan_core::event_bus::{AppEvent, SelectionEvent};
use deskplan_core::{ObjectId, PlacedObject};

use super::WorkspaceState;

impl WorkspaceState {
    /// Primary selection.
    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selected_id.as_ref()
    }

    /// Full selection, in selection order.
    pub fn selected_ids(&self) -> &[ObjectId] {
        &self.selected_ids
    }

    pub fn selected_objects(&self) -> Vec<&PlacedObject> {
        self.objects
            .iter()
            .filter(|o| self.selected_ids.contains(&o.id))
            .collect()
    }

    /// Select `id` (with its group), or clear the selection for `None`.
    ///
    /// With `multi`, an already selected group is removed from the
    /// selection and the primary becomes the last remaining id; otherwise
    /// the group is added and `id` becomes primary.
    pub fn select_object(&mut self, id: Option<&ObjectId>, multi: bool) {
        let Some(id) = id else {
            self.clear_selection();
            return;
        };

        let members = self.group_members_of(id);
        if multi {
            let already = members
                .first()
                .is_some_and(|first| self.selected_ids.contains(first));
            if already {
                self.selected_ids.retain(|s| !members.contains(s));
                self.selected_id = self.selected_ids.last().cloned();
            } else {
                for member in members {
                    if !self.selected_ids.contains(&member) {
                        self.selected_ids.push(member);
                    }
                }
                self.selected_id = Some(id.clone());
            }
        } else {
            self.selected_id = Some(id.clone());
            self.selected_ids = members;
        }

        self.events.notify(AppEvent::Selection(SelectionEvent::Changed {
            primary: self.selected_id.clone(),
            count: self.selected_ids.len(),
        }));
    }

    pub fn clear_selection(&mut self) {
        self.clear_selection_quiet();
        self.events
            .notify(AppEvent::Selection(SelectionEvent::Cleared));
    }

    pub(crate) fn clear_selection_quiet(&mut self) {
        self.selected_id = None;
        self.selected_ids.clear();
    }

    pub(crate) fn set_single_selection(&mut self, id: ObjectId) {
        self.selected_ids = vec![id.clone()];
        self.selected_id = Some(id);
    }

    /// `id` alone, or every object sharing its group.
    fn group_members_of(&self, id: &ObjectId) -> Vec<ObjectId> {
        let group = self
            .object(id)
            .and_then(|o| o.group_id.as_ref());
        match group {
            Some(group) => self
                .objects
                .iter()
                .filter(|o| o.group_id.as_ref() == Some(group))
                .map(|o| o.id.clone())
                .collect(),
            None => vec![id.clone()],
        }
    }
}
