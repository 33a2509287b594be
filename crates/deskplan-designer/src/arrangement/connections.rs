//! Default peripheral cabling.

use deskplan_core::{Cable, ObjectCategory, ObjectId, PlacedObject};
use serde::{Deserialize, Serialize};

/// Peripherals that get a cable to the tower, in emission order.
pub const PERIPHERALS: [ObjectCategory; 6] = [
    ObjectCategory::Monitor,
    ObjectCategory::Speaker,
    ObjectCategory::Keyboard,
    ObjectCategory::Mouse,
    ObjectCategory::Webcam,
    ObjectCategory::Microphone,
];

/// A proposed cable between two objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: ObjectId,
    pub to: ObjectId,
}

/// Connect every peripheral to the first pc-tower.
///
/// Empty when there is no tower. Existing cables are not consulted; see
/// [`missing_connections`].
pub fn generate_connections(objects: &[PlacedObject]) -> Vec<Connection> {
    let Some(tower) = objects.iter().find(|o| o.is(ObjectCategory::PcTower)) else {
        return Vec::new();
    };

    PERIPHERALS
        .iter()
        .flat_map(|&category| objects.iter().filter(move |o| o.is(category)))
        .map(|peripheral| Connection {
            from: peripheral.id.clone(),
            to: tower.id.clone(),
        })
        .collect()
}

/// Generated connections not already present as a cable in either
/// direction.
pub fn missing_connections(objects: &[PlacedObject], cables: &[Cable]) -> Vec<Connection> {
    generate_connections(objects)
        .into_iter()
        .filter(|c| !cables.iter().any(|cable| cable.connects(&c.from, &c.to)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(category: ObjectCategory, id: &str) -> PlacedObject {
        PlacedObject::new(category).with_id(id)
    }

    #[test]
    fn test_no_tower_no_connections() {
        let objects = vec![obj(ObjectCategory::Monitor, "m"), obj(ObjectCategory::Mouse, "x")];
        assert!(generate_connections(&objects).is_empty());
    }

    #[test]
    fn test_peripheral_order_and_first_tower() {
        let objects = vec![
            obj(ObjectCategory::Mouse, "mouse"),
            obj(ObjectCategory::PcTower, "t1"),
            obj(ObjectCategory::Monitor, "m1"),
            obj(ObjectCategory::PcTower, "t2"),
            obj(ObjectCategory::Lamp, "lamp"),
            obj(ObjectCategory::Monitor, "m2"),
        ];
        let from: Vec<_> = generate_connections(&objects)
            .into_iter()
            .map(|c| {
                assert_eq!(c.to.as_str(), "t1");
                c.from.to_string()
            })
            .collect();
        assert_eq!(from, ["m1", "m2", "mouse"]);
    }

    #[test]
    fn test_existing_cable_suppressed_either_direction() {
        let objects = vec![
            obj(ObjectCategory::PcTower, "t"),
            obj(ObjectCategory::Monitor, "m"),
            obj(ObjectCategory::Keyboard, "k"),
        ];
        let cables = vec![Cable::new(ObjectId::from("t"), ObjectId::from("m"))];
        let missing = missing_connections(&objects, &cables);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].from.as_str(), "k");
    }
}
