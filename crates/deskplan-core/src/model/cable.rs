//! Cables between objects and object groups.

use serde::{Deserialize, Serialize};

use super::object::{ObjectId, PlacedObject};
use super::Vec3;

/// A simulated cable connecting two placed objects.
///
/// Endpoints are plain references: a cable whose endpoint was removed stays
/// in the collection but is inactive until that object exists again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cable {
    pub id: ObjectId,
    pub from: ObjectId,
    pub to: ObjectId,
    /// Routed polyline; empty until routed and cleared when an endpoint
    /// moves.
    #[serde(default)]
    pub path: Vec<Vec3>,
}

impl Cable {
    pub fn new(from: ObjectId, to: ObjectId) -> Self {
        Self {
            id: ObjectId::generate(),
            from,
            to,
            path: Vec::new(),
        }
    }

    /// Whether this cable joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &ObjectId, b: &ObjectId) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    pub fn touches(&self, id: &ObjectId) -> bool {
        &self.from == id || &self.to == id
    }

    /// Resolve both endpoints, or `None` when either one is dangling.
    pub fn endpoints<'a>(
        &self,
        objects: &'a [PlacedObject],
    ) -> Option<(&'a PlacedObject, &'a PlacedObject)> {
        let from = objects.iter().find(|o| o.id == self.from)?;
        let to = objects.iter().find(|o| o.id == self.to)?;
        Some((from, to))
    }

    pub fn is_routed(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A named set of objects that select together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: ObjectId,
    pub name: String,
    pub object_ids: Vec<ObjectId>,
}
