//! Bulk and assisted transforms: align, distribute, grid snapping, surface
//! snapping and auto stacking.
//!
//! Surface snapping and auto stacking use the desk's raw transform (its
//! position plus half its scale) rather than the arranged desk frame.

use std::f64::consts::FRAC_PI_4;

use deskplan_core::event_bus::{AppEvent, ObjectEvent};
use deskplan_core::{ObjectCategory, ObjectId, PlacedObject, Vec3};
use serde::{Deserialize, Serialize};

use super::{WorkspaceError, WorkspaceResult, WorkspaceState};

const MIN_GRID_SIZE: f64 = 0.1;
const MAX_GRID_SIZE: f64 = 2.0;
/// Horizontal distance within which an object snaps onto a desk.
const SURFACE_SNAP_RADIUS: f64 = 0.5;
/// An object this far above the desk top no longer snaps.
const SURFACE_SNAP_HEIGHT: f64 = 0.3;
/// Forward tilt given to monitors snapped onto a desk.
const MONITOR_TILT: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Min,
    Center,
    Max,
}

pub(crate) fn clamp_grid_size(size: f64) -> f64 {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

impl WorkspaceState {
    /// Align the selected objects' positions on `axis`.
    ///
    /// Needs at least two selected objects; `Center` aligns on the mean.
    pub fn align_objects(&mut self, axis: Axis, alignment: Alignment) -> WorkspaceResult<()> {
        let selected = self.selected_positions();
        if selected.len() < 2 {
            return Err(WorkspaceError::NotEnoughObjects {
                needed: 2,
                got: selected.len(),
            });
        }
        let i = axis.index();
        let values = selected.iter().map(|(_, p)| p[i]);
        let target = match alignment {
            Alignment::Min => values.fold(f64::INFINITY, f64::min),
            Alignment::Max => values.fold(f64::NEG_INFINITY, f64::max),
            Alignment::Center => values.sum::<f64>() / selected.len() as f64,
        };

        self.record();
        for (id, mut position) in selected.iter().cloned() {
            position[i] = target;
            self.set_transform(&id, position, None);
        }
        self.notify_moved(selected);
        Ok(())
    }

    /// Space the selected objects evenly on `axis` between the two
    /// outermost ones. Needs at least three selected objects.
    pub fn distribute_objects(&mut self, axis: Axis) -> WorkspaceResult<()> {
        let mut selected = self.selected_positions();
        if selected.len() < 3 {
            return Err(WorkspaceError::NotEnoughObjects {
                needed: 3,
                got: selected.len(),
            });
        }
        let i = axis.index();
        selected.sort_by(|a, b| a.1[i].total_cmp(&b.1[i]));
        let min = selected[0].1[i];
        let max = selected[selected.len() - 1].1[i];
        let step = (max - min) / (selected.len() - 1) as f64;

        self.record();
        for (n, (id, mut position)) in selected.iter().cloned().enumerate() {
            position[i] = min + step * n as f64;
            self.set_transform(&id, position, None);
        }
        self.notify_moved(selected);
        Ok(())
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Set the grid size, clamped to [0.1, 2].
    pub fn set_grid_size(&mut self, size: f64) {
        self.grid_size = clamp_grid_size(size);
    }

    /// Round `value` to the grid when snapping is enabled.
    pub fn snap_value(&self, value: f64) -> f64 {
        if !self.snap_to_grid {
            return value;
        }
        (value / self.grid_size).round() * self.grid_size
    }

    /// Put an object on top of a nearby desk.
    ///
    /// The first desk within reach horizontally, with the object not far
    /// above its top, wins; the object is centered on it. Returns whether
    /// the object moved.
    pub fn snap_to_surface(&mut self, id: &ObjectId) -> WorkspaceResult<bool> {
        let object = &self.objects[self.index_of(id)?];

        let target = self.desks().find_map(|desk| {
            let top = desk.position[1] + desk.scale[1] / 2.0;
            let dx = object.position[0] - desk.position[0];
            let dz = object.position[2] - desk.position[2];
            let near = (dx * dx + dz * dz).sqrt() < SURFACE_SNAP_RADIUS;
            (near && object.position[1] < top + SURFACE_SNAP_HEIGHT).then(|| {
                let mut rotation = object.rotation;
                if object.is(ObjectCategory::Monitor) {
                    rotation[0] = MONITOR_TILT;
                }
                (
                    [desk.position[0], top + object.scale[1] / 2.0, desk.position[2]],
                    rotation,
                )
            })
        });

        let Some((position, rotation)) = target else {
            return Ok(false);
        };
        self.record();
        self.set_transform(id, position, Some(rotation));
        self.events
            .notify(AppEvent::Objects(ObjectEvent::Updated { id: id.clone() }));
        Ok(true)
    }

    /// Move an object to its conventional spot relative to the first desk.
    ///
    /// Handles pc-towers (behind the left leg), speakers (left, or right when
    /// another speaker exists), monitor stands (desk center) and cable trays
    /// (under the back edge). Other categories and desk-less workspaces are
    /// left alone. Returns whether a rule applied.
    pub fn auto_stack(&mut self, id: &ObjectId) -> WorkspaceResult<bool> {
        let object = &self.objects[self.index_of(id)?];
        let Some(desk) = self.desk() else {
            return Ok(false);
        };

        let [dx, dy, dz] = desk.position;
        let top = dy + desk.scale[1] / 2.0;
        let left = dx - desk.scale[0] / 2.0;
        let right = dx + desk.scale[0] / 2.0;
        let back = dz - desk.scale[2] / 2.0;
        let half_height = object.scale[1] / 2.0;

        let (position, rotation): (Vec3, Option<Vec3>) = match object.category {
            ObjectCategory::PcTower => (
                [left + 0.3, dy - 0.1, back - 0.2],
                Some([0.0, FRAC_PI_4, 0.0]),
            ),
            ObjectCategory::Speaker => {
                let has_other = self
                    .objects
                    .iter()
                    .any(|o| o.is(ObjectCategory::Speaker) && &o.id != id);
                let x = if has_other { right - 0.3 } else { left + 0.3 };
                ([x, top + half_height, dz], None)
            }
            ObjectCategory::MonitorStand => ([dx, top + half_height, dz], None),
            ObjectCategory::CableTray => ([dx, dy - 0.15, back - 0.05], None),
            _ => return Ok(false),
        };

        self.record();
        self.set_transform(id, position, rotation);
        self.events
            .notify(AppEvent::Objects(ObjectEvent::Updated { id: id.clone() }));
        Ok(true)
    }

    fn desks(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().filter(|o| o.is(ObjectCategory::Desk))
    }

    fn selected_positions(&self) -> Vec<(ObjectId, Vec3)> {
        self.selected_objects()
            .into_iter()
            .map(|o| (o.id.clone(), o.position))
            .collect()
    }

    fn notify_moved(&self, moved: Vec<(ObjectId, Vec3)>) {
        let ids = moved.into_iter().map(|(id, _)| id).collect();
        self.events
            .notify(AppEvent::Objects(ObjectEvent::Moved { ids }));
    }
}
