//! Cables: creation, removal, invalidation and tidy routing.
//!
//! A cable whose endpoint is missing from the collection is inactive: it is
//! kept, never routed and never resolved.

use deskplan_core::event_bus::{AppEvent, CableEvent};
use deskplan_core::{Cable, ObjectId};

use super::{WorkspaceError, WorkspaceResult, WorkspaceState};
use crate::arrangement::missing_connections;
use crate::routing::path_to_array;

impl WorkspaceState {
    /// Connect two existing objects and route the cable immediately.
    pub fn add_cable(&mut self, from: &ObjectId, to: &ObjectId) -> WorkspaceResult<ObjectId> {
        let from_obj = self
            .object(from)
            .ok_or_else(|| WorkspaceError::UnknownObject(from.clone()))?;
        let to_obj = self
            .object(to)
            .ok_or_else(|| WorkspaceError::UnknownObject(to.clone()))?;

        let points = self
            .router
            .find_path(from_obj, to_obj, &self.objects, self.desk());
        let mut cable = Cable::new(from.clone(), to.clone());
        cable.path = path_to_array(&points);
        let id = cable.id.clone();
        self.cables.push(cable);

        self.events.notify(AppEvent::Cables(CableEvent::Added {
            id: id.clone(),
            points: points.len(),
        }));
        Ok(id)
    }

    pub fn remove_cable(&mut self, id: &ObjectId) -> bool {
        let before = self.cables.len();
        self.cables.retain(|c| &c.id != id);
        let removed = self.cables.len() != before;
        if removed {
            self.events
                .notify(AppEvent::Cables(CableEvent::Removed { id: id.clone() }));
        }
        removed
    }

    /// Cables whose endpoints both exist.
    pub fn active_cables(&self) -> impl Iterator<Item = &Cable> {
        self.cables
            .iter()
            .filter(|c| c.endpoints(&self.objects).is_some())
    }

    /// Clear the path of every cable attached to `id`.
    pub fn invalidate_cables_for(&mut self, id: &ObjectId) {
        self.invalidate_cables_for_all(std::slice::from_ref(id));
    }

    /// Add the missing peripheral-to-tower cables and re-route every
    /// active cable. Returns the number of cables added.
    pub fn tidy_cables(&mut self) -> usize {
        self.record();
        let added = missing_connections(&self.objects, &self.cables);
        let count = added.len();
        self.cables
            .extend(added.into_iter().map(|c| Cable::new(c.from, c.to)));
        self.route_all_cables();
        tracing::debug!("Tidied cables, {} added", count);
        count
    }

    /// Route every active cable against the current positions. Returns
    /// `(routed, inactive)`.
    pub fn route_all_cables(&mut self) -> (usize, usize) {
        let desk = self.desk();
        let paths: Vec<Option<Vec<[f64; 3]>>> = self
            .cables
            .iter()
            .map(|cable| {
                let (from, to) = cable.endpoints(&self.objects)?;
                let points = self.router.find_path(from, to, &self.objects, desk);
                Some(path_to_array(&points))
            })
            .collect();

        let mut routed = 0;
        let mut inactive = 0;
        for (cable, path) in self.cables.iter_mut().zip(paths) {
            match path {
                Some(path) => {
                    cable.path = path;
                    routed += 1;
                }
                None => {
                    tracing::debug!("Cable {} has a missing endpoint, skipped", cable.id);
                    inactive += 1;
                }
            }
        }

        self.events
            .notify(AppEvent::Cables(CableEvent::Rerouted { routed, inactive }));
        (routed, inactive)
    }
}
