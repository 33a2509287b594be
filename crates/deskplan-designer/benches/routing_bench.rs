use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deskplan_core::{ObjectCategory, PlacedObject};
use deskplan_designer::{compute_arrangement, find_path, WorkspaceState};

fn furnished_office() -> Vec<PlacedObject> {
    let mut objects = vec![PlacedObject::new(ObjectCategory::Desk)];
    for category in [
        ObjectCategory::Monitor,
        ObjectCategory::Monitor,
        ObjectCategory::Keyboard,
        ObjectCategory::Mouse,
        ObjectCategory::PcTower,
        ObjectCategory::Speaker,
        ObjectCategory::Speaker,
        ObjectCategory::Lamp,
        ObjectCategory::Webcam,
        ObjectCategory::Microphone,
        ObjectCategory::Mug,
        ObjectCategory::Books,
        ObjectCategory::Plant,
        ObjectCategory::Chair,
        ObjectCategory::CableTray,
    ] {
        objects.push(PlacedObject::new(category));
    }
    let plan = compute_arrangement(&objects);
    plan.apply_to(&mut objects);
    objects
}

fn bench_arrangement(c: &mut Criterion) {
    let objects = furnished_office();
    c.bench_function("compute_arrangement", |b| {
        b.iter(|| compute_arrangement(black_box(&objects)))
    });
}

fn bench_find_path(c: &mut Criterion) {
    let objects = furnished_office();
    let desk = objects.iter().find(|o| o.is(ObjectCategory::Desk));
    let from = objects.iter().find(|o| o.is(ObjectCategory::Microphone));
    let to = objects.iter().find(|o| o.is(ObjectCategory::PcTower));
    let (Some(from), Some(to)) = (from, to) else {
        return;
    };
    c.bench_function("find_path_furnished", |b| {
        b.iter(|| find_path(black_box(from), black_box(to), &objects, desk))
    });
}

fn bench_tidy(c: &mut Criterion) {
    c.bench_function("tidy_workspace", |b| {
        b.iter(|| {
            let mut state = WorkspaceState::new();
            state.import_objects(furnished_office());
            state.tidy_workspace()
        })
    });
}

criterion_group!(benches, bench_arrangement, bench_find_path, bench_tidy);
criterion_main!(benches);
