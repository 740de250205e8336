use rolodex_core::{FieldValues, MemoryStore, RecordStore, UserRecord};
use std::collections::HashSet;
use uuid::Uuid;

fn values(name: &str) -> FieldValues {
    FieldValues {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        mobile: "1234567890".to_string(),
        dob: "1990-06-15".to_string(),
        address: "12 Elm St".to_string(),
    }
}

#[test]
fn add_appends_and_returns_the_assigned_id() {
    let mut store = MemoryStore::new();

    let id = store.add(values("Ada"));

    assert_eq!(store.len(), 1);
    let record = store.get(id).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Ada");
}

#[test]
fn added_ids_are_unique_across_the_collection() {
    let mut store = MemoryStore::new();

    let ids: HashSet<_> = (0..50).map(|n| store.add(values(&format!("U{n}")))).collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(store.len(), 50);
}

#[test]
fn update_replaces_only_the_matching_record_in_place() {
    let mut store = MemoryStore::new();
    let first = store.add(values("Ada"));
    let second = store.add(values("Brendan"));
    let third = store.add(values("Grace"));

    let mut edited = store.get(second).unwrap().values();
    edited.name = "Brendan E.".to_string();
    let replacement = UserRecord::with_id(second, edited).unwrap();

    assert!(store.update(replacement));

    assert_eq!(store.len(), 3);
    let ordered: Vec<_> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ordered, vec![first, second, third]);
    assert_eq!(store.records()[1].name, "Brendan E.");
    assert_eq!(store.get(first).unwrap().name, "Ada");
    assert_eq!(store.get(third).unwrap().name, "Grace");
}

#[test]
fn update_with_unknown_id_is_a_silent_noop() {
    let mut store = MemoryStore::new();
    let id = store.add(values("Ada"));

    let stranger = UserRecord::new(values("Nobody"));
    assert!(!store.update(stranger));

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).unwrap().name, "Ada");
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let mut store = MemoryStore::new();
    let first = store.add(values("Ada"));
    let second = store.add(values("Brendan"));
    let third = store.add(values("Grace"));

    assert!(store.delete(second));

    assert_eq!(store.len(), 2);
    assert!(store.get(second).is_none());
    let ordered: Vec<_> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ordered, vec![first, third]);
}

#[test]
fn delete_with_unknown_id_is_a_noop() {
    let mut store = MemoryStore::new();
    store.add(values("Ada"));

    assert!(!store.delete(Uuid::new_v4()));
    assert_eq!(store.len(), 1);
}

#[test]
fn records_preserve_insertion_order() {
    let mut store = MemoryStore::new();
    let names = ["Ada", "Brendan", "Grace", "Dennis"];
    for name in names {
        store.add(values(name));
    }

    let listed: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(listed, names);
}
