use deskplan_core::{ObjectCategory, ObjectId, PlacedObject};
use deskplan_designer::history::{HistoryManager, HistorySnapshot};

fn objects(n: usize) -> Vec<PlacedObject> {
    (0..n)
        .map(|i| PlacedObject::new(ObjectCategory::Mug).with_id(format!("mug-{}", i)))
        .collect()
}

#[test]
fn test_history_manager_creation() {
    let manager = HistoryManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert!(manager.is_empty());
    assert_eq!(manager.max_size(), 50);
}

#[test]
fn test_single_snapshot_cannot_undo() {
    let mut manager = HistoryManager::new(50);
    manager.snapshot(&objects(1), None);
    assert!(!manager.can_undo());
    assert!(manager.undo().is_none());
}

#[test]
fn test_undo_returns_previous_snapshot() {
    let mut manager = HistoryManager::new(50);
    manager.snapshot(&objects(1), None);
    manager.snapshot(&objects(2), Some(&ObjectId::from("mug-1")));

    let undone = manager.undo().unwrap();
    assert_eq!(undone.objects.len(), 1);
    assert!(undone.selected_id.is_none());
    assert!(manager.can_redo());

    let redone = manager.redo().unwrap();
    assert_eq!(redone.objects.len(), 2);
    assert_eq!(redone.selected_id, Some(ObjectId::from("mug-1")));
    assert!(!manager.can_redo());
}

#[test]
fn test_snapshot_after_undo_discards_redo() {
    let mut manager = HistoryManager::new(50);
    for n in 1..=3 {
        manager.snapshot(&objects(n), None);
    }
    manager.undo();
    manager.undo();
    manager.snapshot(&objects(5), None);

    assert_eq!(manager.len(), 2);
    assert!(!manager.can_redo());
    assert_eq!(manager.current().unwrap().objects.len(), 5);
}

#[test]
fn test_oldest_evicted_when_full() {
    let mut manager = HistoryManager::new(3);
    for n in 1..=5 {
        manager.snapshot(&objects(n), None);
    }
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.index(), 2);

    manager.undo();
    let oldest = manager.undo().unwrap();
    assert_eq!(oldest.objects.len(), 3);
    assert!(!manager.can_undo());
}

#[test]
fn test_snapshots_are_deep_copies() {
    let mut manager = HistoryManager::new(10);
    let mut live = objects(1);
    manager.push(HistorySnapshot::new(&live, None));
    live[0].position = [9.0, 9.0, 9.0];
    assert_ne!(manager.current().unwrap().objects[0].position, live[0].position);
}

#[test]
fn test_clear() {
    let mut manager = HistoryManager::new(10);
    manager.snapshot(&objects(1), None);
    manager.snapshot(&objects(2), None);
    manager.clear();
    assert!(manager.is_empty());
    assert!(!manager.can_undo());
    assert!(manager.at_tip());
}
