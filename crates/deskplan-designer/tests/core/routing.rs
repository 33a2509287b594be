use deskplan_core::{ObjectCategory, PlacedObject};
use deskplan_designer::routing::{
    anchor_point, apply_sag, find_path, is_clear, path_from_array, CableRouter, RouteKind,
    SagConfig,
};
use nalgebra::Point3;

fn books_at(id: &str, position: [f64; 3]) -> PlacedObject {
    PlacedObject::new(ObjectCategory::Books)
        .with_id(id)
        .with_position(position)
}

fn block_at(id: &str, position: [f64; 3], size: [f64; 3]) -> PlacedObject {
    PlacedObject::new(ObjectCategory::Books)
        .with_id(id)
        .with_position(position)
        .with_scale(size)
        .with_dimensions(None)
}

#[test]
fn test_clear_line_of_sight_is_two_points() {
    let a = books_at("a", [-1.0, 0.1, 0.0]);
    let b = books_at("b", [1.0, 0.1, 0.0]);
    let objects = vec![a.clone(), b.clone()];

    let path = find_path(&a, &b, &objects, None);
    assert_eq!(path, vec![anchor_point(&a), anchor_point(&b)]);
}

#[test]
fn test_blocked_path_goes_low() {
    let a = books_at("a", [-1.0, 0.1, 0.0]);
    let b = books_at("b", [1.0, 0.1, 0.0]);
    let wall = block_at("wall", [0.0, 0.5, 0.0], [0.4, 1.0, 0.4]);
    let objects = vec![a.clone(), wall, b.clone()];

    let route = CableRouter::default().route(&a, &b, &objects, None);
    assert_eq!(route.kind, RouteKind::LowSidestep);
    assert_eq!(route.points.len(), 4);
    assert!((route.points[1].y - (-0.2)).abs() < 1e-12);
    assert!(is_clear(&route.points, &objects, &[&a.id, &b.id]));
    assert!((route.length() - 2.6).abs() < 1e-9);
}

#[test]
fn test_path_always_starts_and_ends_at_anchors() {
    let monitor = PlacedObject::new(ObjectCategory::Monitor).with_position([0.0, 1.0, -1.0]);
    let tower = PlacedObject::new(ObjectCategory::PcTower).with_position([-1.0, 0.3, -1.0]);
    let objects = vec![monitor.clone(), tower.clone()];

    let path = find_path(&monitor, &tower, &objects, None);
    assert_eq!(path.first(), Some(&anchor_point(&monitor)));
    assert_eq!(path.last(), Some(&anchor_point(&tower)));
}

#[test]
fn test_sag_drops_below_level_segment() {
    let path = vec![Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
    let sagged = apply_sag(&path, &SagConfig::default());
    assert_eq!(sagged.len(), 3);
    assert_eq!(sagged[0], path[0]);
    assert_eq!(sagged[2], path[1]);
    assert!(sagged[1].y < 1.0);
    assert!((sagged[1].x - 0.5).abs() < 1e-12);
}

#[test]
fn test_stored_path_converts_back() {
    let stored = vec![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
    let points = path_from_array(&stored);
    assert_eq!(points[1], Point3::new(3.0, 4.0, 5.0));
}
