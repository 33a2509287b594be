//! Cable attachment points per object category.

use deskplan_core::{ObjectCategory, PlacedObject};
use nalgebra::{Point3, Vector3};

/// Point on `object` where a cable visually terminates.
///
/// Offsets are relative to the object's position and use its effective
/// size (dimensions where present, scale otherwise). Categories without a
/// dedicated port attach at their position.
pub fn anchor_point(object: &PlacedObject) -> Point3<f64> {
    let [_, h, d] = object.size();
    object.position_point() + anchor_offset(object.category, h, d)
}

fn anchor_offset(category: ObjectCategory, height: f64, depth: f64) -> Vector3<f64> {
    use ObjectCategory::*;
    match category {
        // back face
        Monitor | Speaker => Vector3::new(0.0, 0.0, -depth / 2.0),
        PcTower => Vector3::new(0.0, height / 4.0, depth / 2.0),
        // front bottom edge
        Keyboard | Mouse => Vector3::new(0.0, -height / 2.0, depth / 2.0),
        // underside
        Webcam | Microphone => Vector3::new(0.0, -height / 2.0, 0.0),
        _ => Vector3::zeros(),
    }
}
