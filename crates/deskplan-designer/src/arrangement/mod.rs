//! # Arrangement Planner
//!
//! Computes a tidy layout from object categories alone. The desk is pushed
//! against the back wall and every other object is placed relative to the
//! desk's edges by a fixed per-category rule (see `rules`). Objects whose
//! category has no rule are left out of the plan and keep their position.

mod connections;
mod rules;

pub use connections::{generate_connections, missing_connections, Connection, PERIPHERALS};

use std::collections::BTreeMap;

use deskplan_core::{ObjectCategory, ObjectId, PlacedObject, Room, Vec3};
use serde::{Deserialize, Serialize};

use rules::{RuleContext, RULES};

/// Desk model and wall clearance used by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrangementConfig {
    /// Gap kept between the desk and the walls.
    pub wall_offset: f64,
    /// Height of the desk legs above the floor.
    pub desk_leg_height: f64,
    pub desk_surface_thickness: f64,
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            wall_offset: 0.2,
            desk_leg_height: 0.73,
            desk_surface_thickness: 0.05,
        }
    }
}

/// Target transform for one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Placement {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}

/// Mapping from object id to its planned placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrangementPlan {
    placements: BTreeMap<ObjectId, Placement>,
}

impl ArrangementPlan {
    pub fn get(&self, id: &ObjectId) -> Option<&Placement> {
        self.placements.get(id)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.placements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &Placement)> {
        self.placements.iter()
    }

    pub(crate) fn insert(&mut self, id: &ObjectId, placement: Placement) {
        self.placements.insert(id.clone(), placement);
    }

    /// Write planned transforms onto `objects`; unplanned objects are left
    /// untouched. Returns the number of objects updated.
    pub fn apply_to(&self, objects: &mut [PlacedObject]) -> usize {
        let mut applied = 0;
        for object in objects.iter_mut() {
            if let Some(placement) = self.placements.get(&object.id) {
                object.position = placement.position;
                object.rotation = placement.rotation;
                applied += 1;
            }
        }
        applied
    }
}

/// Reference frame derived from the arranged desk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeskFrame {
    /// Desk center x.
    pub x: f64,
    /// Desk center z.
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    /// Height of the middle of the desk surface.
    pub surface_center: f64,
    /// Height of the desk's top face; on-desk objects rest here.
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub front: f64,
    pub back: f64,
}

/// Category-driven layout planner for a room.
#[derive(Debug, Clone, Default)]
pub struct ArrangementPlanner {
    config: ArrangementConfig,
    room: Room,
}

impl ArrangementPlanner {
    pub fn new(config: ArrangementConfig, room: Room) -> Self {
        Self { config, room }
    }

    pub fn config(&self) -> &ArrangementConfig {
        &self.config
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Place `desk` against the back wall and derive its frame.
    ///
    /// The desk is centered in x, clamped inside the walls unless it is
    /// wider than the room interior, in which case it stays centered.
    pub fn desk_frame(&self, desk: &PlacedObject) -> DeskFrame {
        let ArrangementConfig {
            wall_offset,
            desk_leg_height,
            desk_surface_thickness,
        } = self.config;
        let room = &self.room;
        let width = desk.scale[0];
        let depth = desk.scale[2];

        let x = if width > room.width - 2.0 * wall_offset {
            0.0
        } else {
            let min_x = -room.width / 2.0 + width / 2.0 + wall_offset;
            let max_x = room.width / 2.0 - width / 2.0 - wall_offset;
            0.0_f64.min(max_x).max(min_x)
        };

        let min_z = -room.depth / 2.0 + depth / 2.0 + wall_offset;
        let max_z = room.depth / 2.0 - depth / 2.0 - wall_offset;
        let z = min_z.min(max_z).max(min_z);

        let surface_center = desk_leg_height + desk_surface_thickness / 2.0;
        DeskFrame {
            x,
            z,
            width,
            depth,
            surface_center,
            top: surface_center + desk_surface_thickness / 2.0,
            left: x - width / 2.0,
            right: x + width / 2.0,
            front: z + depth / 2.0,
            back: z - depth / 2.0,
        }
    }

    /// Compute placements for the first desk and everything arranged
    /// around it. Without a desk the plan is empty.
    pub fn compute(&self, objects: &[PlacedObject]) -> ArrangementPlan {
        let mut plan = ArrangementPlan::default();
        let Some(desk) = objects.iter().find(|o| o.is(ObjectCategory::Desk)) else {
            tracing::debug!("No desk, nothing to arrange");
            return plan;
        };

        let frame = self.desk_frame(desk);
        plan.insert(&desk.id, Placement::new([frame.x, 0.0, frame.z], [0.0; 3]));

        let others: Vec<&PlacedObject> = objects.iter().filter(|o| o.id != desk.id).collect();
        let ctx = RuleContext {
            desk: &frame,
            room: &self.room,
            config: &self.config,
            others: &others,
        };
        for (_, rule) in RULES {
            rule(&ctx, &mut plan);
        }

        let skipped = others.iter().filter(|o| !plan.contains(&o.id)).count();
        tracing::debug!(
            "Arrangement planned {} of {} objects ({} kept in place)",
            plan.len(),
            objects.len(),
            skipped
        );
        plan
    }
}

/// Plan with the default room and desk model.
pub fn compute_arrangement(objects: &[PlacedObject]) -> ArrangementPlan {
    ArrangementPlanner::default().compute(objects)
}
