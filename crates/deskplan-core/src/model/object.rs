//! Placed objects and their identifiers.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{catalog_entry, ObjectCategory};
use super::Vec3;

/// Unique, immutable identifier of a placed object, cable or group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Explicit object size overriding the scale-derived size.
///
/// Each axis falls back to the object's scale independently when the
/// value is missing or zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Dimensions {
    /// Width/height/depth as an array, absent or zero entries as `None`.
    fn axes(&self) -> [Option<f64>; 3] {
        [self.width, self.height, self.depth].map(|v| v.filter(|d| *d != 0.0))
    }
}

/// An object instance placed in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub category: ObjectCategory,
    #[serde(default)]
    pub name: String,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<ObjectId>,
}

fn unit_scale() -> Vec3 {
    [1.0, 1.0, 1.0]
}

impl PlacedObject {
    /// Create an object with the catalog defaults of its category.
    ///
    /// Desks sit on the floor at the origin; every other category is
    /// center-anchored and starts resting on the floor.
    pub fn new(category: ObjectCategory) -> Self {
        let defaults = catalog_entry(category);
        let position = if category.is_floor_anchored() {
            [0.0, 0.0, 0.0]
        } else {
            [0.0, defaults.scale[1] / 2.0, 0.0]
        };
        Self {
            id: ObjectId::generate(),
            category,
            name: defaults.name.to_string(),
            position,
            rotation: [0.0; 3],
            scale: defaults.scale,
            color: defaults.color.to_string(),
            dimensions: Some(defaults.dimensions),
            price: None,
            group_id: None,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<ObjectId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Option<Dimensions>) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Effective width/height/depth: explicit dimensions where present,
    /// scale otherwise, decided per axis.
    pub fn size(&self) -> Vec3 {
        let dims = self.dimensions.map(|d| d.axes()).unwrap_or([None; 3]);
        [
            dims[0].unwrap_or(self.scale[0]),
            dims[1].unwrap_or(self.scale[1]),
            dims[2].unwrap_or(self.scale[2]),
        ]
    }

    pub fn position_point(&self) -> Point3<f64> {
        Point3::new(self.position[0], self.position[1], self.position[2])
    }

    pub fn is(&self, category: ObjectCategory) -> bool {
        self.category == category
    }
}
