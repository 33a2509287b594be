//! Object groups.

use std::collections::BTreeSet;

use deskplan_core::event_bus::{AppEvent, ObjectEvent};
use deskplan_core::{Group, ObjectId};

use super::{WorkspaceError, WorkspaceResult, WorkspaceState};

impl WorkspaceState {
    /// Group `ids` under a new group and select them.
    pub fn group_objects(&mut self, ids: &[ObjectId]) -> WorkspaceResult<ObjectId> {
        if ids.len() < 2 {
            return Err(WorkspaceError::NotEnoughObjects {
                needed: 2,
                got: ids.len(),
            });
        }
        for id in ids {
            self.index_of(id)?;
        }
        self.record();

        let group_id = ObjectId::generate();
        for object in self.objects.iter_mut().filter(|o| ids.contains(&o.id)) {
            object.group_id = Some(group_id.clone());
        }
        self.groups.push(Group {
            id: group_id.clone(),
            name: format!("Group {}", self.groups.len() + 1),
            object_ids: ids.to_vec(),
        });
        // members that left another group
        self.sync_groups();

        self.selected_id = ids.first().cloned();
        self.selected_ids = ids.to_vec();
        tracing::debug!("Grouped {} objects into {}", ids.len(), group_id);
        self.events.notify(AppEvent::Objects(ObjectEvent::Grouped {
            group_id: group_id.clone(),
            ids: ids.to_vec(),
        }));
        Ok(group_id)
    }

    /// Dissolve every group containing one of `ids`. Returns the number of
    /// groups dissolved.
    pub fn ungroup_objects(&mut self, ids: &[ObjectId]) -> usize {
        let affected: BTreeSet<ObjectId> = self
            .objects
            .iter()
            .filter(|o| ids.contains(&o.id))
            .filter_map(|o| o.group_id.clone())
            .collect();
        if affected.is_empty() {
            return 0;
        }
        self.record();

        for object in self.objects.iter_mut() {
            if object.group_id.as_ref().is_some_and(|g| affected.contains(g)) {
                object.group_id = None;
            }
        }
        self.groups.retain(|g| !affected.contains(&g.id));

        let group_ids: Vec<ObjectId> = affected.into_iter().collect();
        self.events.notify(AppEvent::Objects(ObjectEvent::Ungrouped {
            group_ids: group_ids.clone(),
        }));
        group_ids.len()
    }

    /// Rebuild group membership from the objects' group ids.
    ///
    /// Groups without members are dropped; group ids carried by objects but
    /// missing from the list (after an undo) are recreated.
    pub(crate) fn sync_groups(&mut self) {
        for group in self.groups.iter_mut() {
            group.object_ids = self
                .objects
                .iter()
                .filter(|o| o.group_id.as_ref() == Some(&group.id))
                .map(|o| o.id.clone())
                .collect();
        }
        self.groups.retain(|g| !g.object_ids.is_empty());

        let missing: BTreeSet<ObjectId> = self
            .objects
            .iter()
            .filter_map(|o| o.group_id.clone())
            .filter(|g| !self.groups.iter().any(|group| &group.id == g))
            .collect();
        for group_id in missing {
            let object_ids = self
                .objects
                .iter()
                .filter(|o| o.group_id.as_ref() == Some(&group_id))
                .map(|o| o.id.clone())
                .collect();
            let name = format!("Group {}", self.groups.len() + 1);
            self.groups.push(Group {
                id: group_id,
                name,
                object_ids,
            });
        }
    }
}
