//! Geometry primitives shared by the arrangement planner and the cable
//! router: axis-aligned bounding boxes, segment/box intersection and
//! polyline length.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::model::PlacedObject;

/// Segments shorter than this are treated as degenerate.
const EPSILON: f64 = 0.001;

/// Direction components below this are parallel to their slab.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl BoundingBox {
    /// Box centered on `center` with the given full extents.
    pub fn from_center(center: Point3<f64>, size: [f64; 3]) -> Self {
        let (hx, hy, hz) = (size[0] / 2.0, size[1] / 2.0, size[2] / 2.0);
        Self {
            min_x: center.x - hx,
            max_x: center.x + hx,
            min_y: center.y - hy,
            max_y: center.y + hy,
            min_z: center.z - hz,
            max_z: center.z + hz,
        }
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    pub fn contains(&self, p: &Point3<f64>) -> bool {
        p.x >= self.min_x
            && p.x <= self.max_x
            && p.y >= self.min_y
            && p.y <= self.max_y
            && p.z >= self.min_z
            && p.z <= self.max_z
    }

    /// (min, max) along axis 0 = x, 1 = y, 2 = z.
    fn slab(&self, axis: usize) -> (f64, f64) {
        match axis {
            0 => (self.min_x, self.max_x),
            1 => (self.min_y, self.max_y),
            _ => (self.min_z, self.max_z),
        }
    }
}

/// Bounding box of a placed object: `position ± size / 2` per axis, where
/// the size comes from explicit dimensions when present and from the scale
/// otherwise.
pub fn bounding_box_of(object: &PlacedObject) -> BoundingBox {
    BoundingBox::from_center(object.position_point(), object.size())
}

/// Slab test of the finite segment `p0 → p1` against `bbox`.
///
/// Touching the boundary counts as an intersection. Degenerate segments
/// never intersect.
pub fn segment_intersects_box(p0: &Point3<f64>, p1: &Point3<f64>, bbox: &BoundingBox) -> bool {
    let delta = p1 - p0;
    let length = delta.norm();
    if length < EPSILON {
        return false;
    }
    let dir = delta / length;

    let mut t_min = 0.0_f64;
    let mut t_max = length;

    for axis in 0..3 {
        let (min, max) = bbox.slab(axis);
        let origin = p0[axis];
        let d = dir[axis];

        if d.abs() < PARALLEL_EPSILON {
            // parallel to this slab
            if origin < min || origin > max {
                return false;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t1 = (min - origin) * inv;
        let mut t2 = (max - origin) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_min > t_max {
            return false;
        }
    }

    true
}

/// Total length of a polyline. Zero for fewer than two points.
pub fn path_length(points: &[Point3<f64>]) -> f64 {
    points
        .windows(2)
        .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
        .sum()
}
