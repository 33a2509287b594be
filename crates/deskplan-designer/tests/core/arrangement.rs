use deskplan_core::{ObjectCategory, PlacedObject, Room};
use deskplan_designer::arrangement::{
    compute_arrangement, generate_connections, ArrangementConfig, ArrangementPlan,
    ArrangementPlanner,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn office() -> Vec<PlacedObject> {
    vec![
        PlacedObject::new(ObjectCategory::Desk).with_id("desk"),
        PlacedObject::new(ObjectCategory::Monitor).with_id("monitor"),
        PlacedObject::new(ObjectCategory::Keyboard).with_id("keyboard"),
        PlacedObject::new(ObjectCategory::PcTower).with_id("tower"),
    ]
}

#[test]
fn test_basic_office_layout() {
    let objects = office();
    let plan = compute_arrangement(&objects);
    assert_eq!(plan.len(), 4);

    let desk = plan.get(&"desk".into()).unwrap();
    assert_eq!(desk.position[0], 0.0);
    assert_eq!(desk.position[1], 0.0);
    assert!(close(desk.position[2], -1.3));

    let monitor = plan.get(&"monitor".into()).unwrap();
    assert!(close(monitor.position[0], 0.0));
    assert!(close(monitor.position[1], 0.86));
    assert!(close(monitor.position[2], -1.55));

    let keyboard = plan.get(&"keyboard".into()).unwrap();
    assert!(close(keyboard.position[1], 0.795));
    assert!(close(keyboard.position[2], -0.95));

    let tower = plan.get(&"tower".into()).unwrap();
    assert!(close(tower.position[0], -1.55));
    assert!(close(tower.position[1], 0.3));
    assert!(close(tower.position[2], -1.45));
    assert!(close(tower.rotation[1], std::f64::consts::FRAC_PI_4));
}

#[test]
fn test_no_desk_no_plan() {
    let objects = vec![
        PlacedObject::new(ObjectCategory::Monitor),
        PlacedObject::new(ObjectCategory::Chair),
    ];
    assert!(compute_arrangement(&objects).is_empty());
}

#[test]
fn test_wide_desk_stays_centered() {
    let planner = ArrangementPlanner::new(ArrangementConfig::default(), Room::new(2.0, 3.0, 2.5));
    let objects = vec![PlacedObject::new(ObjectCategory::Desk).with_id("desk")];
    let plan = planner.compute(&objects);
    assert_eq!(plan.get(&"desk".into()).unwrap().position[0], 0.0);
}

#[test]
fn test_unmatched_webcam_keeps_position() {
    let mut objects = vec![
        PlacedObject::new(ObjectCategory::Desk),
        PlacedObject::new(ObjectCategory::Webcam)
            .with_id("cam")
            .with_position([1.0, 2.0, 1.0]),
    ];
    let plan = compute_arrangement(&objects);
    assert!(!plan.contains(&"cam".into()));

    assert_eq!(plan.apply_to(&mut objects), 1);
    assert_eq!(objects[1].position, [1.0, 2.0, 1.0]);
}

#[test]
fn test_every_peripheral_goes_to_first_tower() {
    let mut objects = office();
    objects.push(PlacedObject::new(ObjectCategory::PcTower).with_id("second-tower"));
    objects.push(PlacedObject::new(ObjectCategory::Mouse).with_id("mouse"));

    let connections = generate_connections(&objects);
    assert_eq!(connections.len(), 3);
    assert!(connections.iter().all(|c| c.to.as_str() == "tower"));
    let from: Vec<&str> = connections.iter().map(|c| c.from.as_str()).collect();
    assert_eq!(from, ["monitor", "keyboard", "mouse"]);
}

// Default desk in the default room: x = 0, z = -1.3, top = 0.78,
// left = -1, right = 1, front = -0.8, back = -1.8.

/// Arrange a default desk plus `items`, in the given collection order.
fn arranged(items: &[(&str, ObjectCategory)]) -> ArrangementPlan {
    let mut objects = vec![PlacedObject::new(ObjectCategory::Desk).with_id("desk")];
    objects.extend(
        items
            .iter()
            .map(|(id, category)| PlacedObject::new(*category).with_id(*id)),
    );
    compute_arrangement(&objects)
}

/// Check `(id, position, yaw)` rows against the plan.
fn assert_placements(plan: &ArrangementPlan, expected: &[(&str, [f64; 3], f64)]) {
    for (id, position, yaw) in expected {
        let placement = plan
            .get(&(*id).into())
            .unwrap_or_else(|| panic!("{id} not placed"));
        for axis in 0..3 {
            assert!(
                close(placement.position[axis], position[axis]),
                "{id} axis {axis}: {:?} != {:?}",
                placement.position,
                position
            );
        }
        assert!(
            close(placement.rotation[1], *yaw),
            "{id} yaw {} != {yaw}",
            placement.rotation[1]
        );
        assert_eq!(placement.rotation[0], 0.0);
        assert_eq!(placement.rotation[2], 0.0);
    }
}

#[test]
fn test_monitors_centered_as_group() {
    let plan = arranged(&[
        ("m0", ObjectCategory::Monitor),
        ("m1", ObjectCategory::Monitor),
        ("m2", ObjectCategory::Monitor),
    ]);
    assert_placements(
        &plan,
        &[
            ("m0", [-1.05, 0.86, -1.55], 0.0),
            ("m1", [0.0, 0.86, -1.55], 0.0),
            ("m2", [1.05, 0.86, -1.55], 0.0),
        ],
    );

    let plan = arranged(&[("m0", ObjectCategory::Monitor), ("m1", ObjectCategory::Monitor)]);
    assert_placements(
        &plan,
        &[
            ("m0", [-0.525, 0.86, -1.55], 0.0),
            ("m1", [0.525, 0.86, -1.55], 0.0),
        ],
    );
}

#[test]
fn test_stands_and_webcams_follow_monitors() {
    let plan = arranged(&[
        ("m0", ObjectCategory::Monitor),
        ("stand0", ObjectCategory::MonitorStand),
        ("stand1", ObjectCategory::MonitorStand),
        ("cam0", ObjectCategory::Webcam),
    ]);
    assert_placements(
        &plan,
        &[
            ("stand0", [0.0, 0.83, -1.55], 0.0),
            ("stand1", [0.0, 0.83, -1.55], 0.0),
            ("cam0", [0.0, 1.145, -1.55], 0.0),
        ],
    );
}

#[test]
fn test_keyboards_and_mice_follow_monitors() {
    let plan = arranged(&[
        ("m0", ObjectCategory::Monitor),
        ("m1", ObjectCategory::Monitor),
        ("k0", ObjectCategory::Keyboard),
        ("k1", ObjectCategory::Keyboard),
        ("mouse0", ObjectCategory::Mouse),
        ("mouse1", ObjectCategory::Mouse),
    ]);
    assert_placements(
        &plan,
        &[
            ("k0", [-0.525, 0.795, -0.95], 0.0),
            ("k1", [0.525, 0.795, -0.95], 0.0),
            ("mouse0", [-0.155, 0.795, -0.95], 0.0),
            ("mouse1", [0.895, 0.795, -0.95], 0.0),
        ],
    );

    // no keyboard: x = 0 + 0.5 / 2 + 0.04 + 0.08
    let plan = arranged(&[("mouse", ObjectCategory::Mouse)]);
    assert_placements(&plan, &[("mouse", [0.37, 0.795, -0.95], 0.0)]);
}

#[test]
fn test_towers_alternate_depth() {
    let plan = arranged(&[("t0", ObjectCategory::PcTower), ("t1", ObjectCategory::PcTower)]);
    assert_placements(
        &plan,
        &[
            ("t0", [-1.55, 0.3, -1.45], FRAC_PI_4),
            ("t1", [-1.55, 0.3, -1.15], FRAC_PI_4),
        ],
    );
}

#[test]
fn test_speakers_alternate_sides() {
    let plan = arranged(&[
        ("s0", ObjectCategory::Speaker),
        ("s1", ObjectCategory::Speaker),
        ("s2", ObjectCategory::Speaker),
    ]);
    assert_placements(
        &plan,
        &[
            ("s0", [-0.75, 0.955, -1.6], FRAC_PI_2),
            ("s1", [0.75, 0.955, -1.6], -FRAC_PI_2),
            ("s2", [-0.75, 0.955, -1.6], FRAC_PI_2),
        ],
    );
}

#[test]
fn test_only_first_lamp_goes_left() {
    let plan = arranged(&[
        ("l0", ObjectCategory::Lamp),
        ("l1", ObjectCategory::Lamp),
        ("l2", ObjectCategory::Lamp),
    ]);
    assert_placements(
        &plan,
        &[
            ("l0", [-0.7, 0.98, -1.0], FRAC_PI_4),
            ("l1", [0.7, 0.98, -1.0], -FRAC_PI_4),
            ("l2", [0.7, 0.98, -1.0], -FRAC_PI_4),
        ],
    );
}

#[test]
fn test_microphones_step_back() {
    let plan = arranged(&[
        ("mic0", ObjectCategory::Microphone),
        ("mic1", ObjectCategory::Microphone),
        ("mic2", ObjectCategory::Microphone),
    ]);
    assert_placements(
        &plan,
        &[
            ("mic0", [0.7, 0.88, -1.1], FRAC_PI_2),
            ("mic1", [0.7, 0.88, -1.3], FRAC_PI_2),
            ("mic2", [0.7, 0.88, -1.5], FRAC_PI_2),
        ],
    );
}

#[test]
fn test_accessories_pack_in_category_order() {
    let plan = arranged(&[
        ("books", ObjectCategory::Books),
        ("pen", ObjectCategory::Pen),
        ("mug", ObjectCategory::Mug),
    ]);
    assert_placements(
        &plan,
        &[
            ("mug", [-0.7, 0.83, -1.3], 0.0),
            ("pen", [-0.47, 0.84, -1.3], 0.0),
            ("books", [-0.31, 0.88, -1.3], 0.0),
        ],
    );
}

#[test]
fn test_accessories_wrap_to_next_row() {
    let ids = ["b0", "b1", "b2", "b3", "b4", "b5"];
    let items: Vec<_> = ids.iter().map(|id| (*id, ObjectCategory::Books)).collect();
    let plan = arranged(&items);
    assert_placements(
        &plan,
        &[
            ("b0", [-0.7, 0.88, -1.3], 0.0),
            ("b4", [0.5, 0.88, -1.3], 0.0),
            ("b5", [-0.7, 0.88, -1.5], 0.0),
        ],
    );
}

#[test]
fn test_headphones_step_forward() {
    let plan = arranged(&[
        ("h0", ObjectCategory::Headphones),
        ("h1", ObjectCategory::Headphones),
    ]);
    assert_placements(
        &plan,
        &[
            ("h0", [0.75, 0.905, -1.5], FRAC_PI_2),
            ("h1", [0.75, 0.905, -1.3], FRAC_PI_2),
        ],
    );
}

#[test]
fn test_first_plant_on_desk_rest_on_floor() {
    let plan = arranged(&[
        ("p0", ObjectCategory::Plant),
        ("p1", ObjectCategory::Plant),
        ("p2", ObjectCategory::Plant),
    ]);
    assert_placements(
        &plan,
        &[
            ("p0", [-0.7, 0.955, -1.55], 0.0),
            ("p1", [1.4, 0.175, -1.05], 0.0),
            ("p2", [1.4, 0.175, -1.55], 0.0),
        ],
    );
}

#[test]
fn test_wall_items() {
    let plan = arranged(&[
        ("clock", ObjectCategory::Clock),
        ("poster0", ObjectCategory::Poster),
        ("poster1", ObjectCategory::Poster),
        ("shelf0", ObjectCategory::Shelf),
        ("shelf1", ObjectCategory::Shelf),
        ("shelf2", ObjectCategory::Shelf),
        ("shelf3", ObjectCategory::Shelf),
    ]);
    assert_placements(
        &plan,
        &[
            ("clock", [1.6, 1.38, -1.3], -FRAC_PI_2),
            ("poster0", [-1.8, 1.58, -1.3], FRAC_PI_2),
            ("poster1", [1.8, 1.58, -1.3], -FRAC_PI_2),
            ("shelf0", [-1.5, 1.28, -1.3], FRAC_PI_2),
            ("shelf1", [1.5, 1.63, -1.3], -FRAC_PI_2),
            ("shelf2", [-1.5, 1.98, -1.3], FRAC_PI_2),
            ("shelf3", [1.5, 1.28, -1.3], -FRAC_PI_2),
        ],
    );
}

#[test]
fn test_cable_tray_under_back_edge() {
    let plan = arranged(&[("tray", ObjectCategory::CableTray)]);
    assert_placements(&plan, &[("tray", [0.0, -0.12, -1.88], 0.0)]);
}

#[test]
fn test_chairs_spread_in_front() {
    let plan = arranged(&[("chair", ObjectCategory::Chair)]);
    assert_placements(&plan, &[("chair", [0.0, 0.6, -0.1], PI)]);

    let plan = arranged(&[
        ("c0", ObjectCategory::Chair),
        ("c1", ObjectCategory::Chair),
        ("c2", ObjectCategory::Chair),
    ]);
    assert_placements(
        &plan,
        &[
            ("c0", [-0.9, 0.6, -0.1], PI),
            ("c1", [0.0, 0.6, -0.1], PI),
            ("c2", [0.9, 0.6, -0.1], PI),
        ],
    );
}

#[test]
fn test_second_desk_is_not_planned() {
    let plan = arranged(&[("desk2", ObjectCategory::Desk)]);
    assert!(!plan.contains(&"desk2".into()));
    assert_eq!(plan.len(), 1);
}
