use mstep_core::{MigrationError, PendingReference, ReferenceStore};
use mstep_model::ReferenceValue;

fn pending(identifier: &str, value: i64, overwrite: bool) -> PendingReference {
    PendingReference {
        identifier: identifier.to_string(),
        value: ReferenceValue::Int(value),
        overwrite,
    }
}

#[test]
fn first_write_succeeds() {
    let mut store = ReferenceStore::new();
    let previous = store
        .add("loc", ReferenceValue::Int(5), false)
        .expect("add");
    assert_eq!(previous, None);
    assert_eq!(store.get("loc"), Some(&ReferenceValue::Int(5)));
    assert!(store.contains("loc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn second_write_without_overwrite_is_rejected() {
    let mut store = ReferenceStore::new();
    store.add("loc", ReferenceValue::Int(5), false).expect("add");

    let error = store
        .add("loc", ReferenceValue::Int(6), false)
        .unwrap_err();

    assert!(matches!(
        error,
        MigrationError::ReferenceAlreadyExists { ref identifier } if identifier == "loc"
    ));
    assert_eq!(store.get("loc"), Some(&ReferenceValue::Int(5)));
}

#[test]
fn overwrite_replaces_and_returns_previous() {
    let mut store = ReferenceStore::new();
    store.add("loc", ReferenceValue::Int(5), false).expect("add");

    let previous = store.add("loc", "five".into(), true).expect("overwrite");

    assert_eq!(previous, Some(ReferenceValue::Int(5)));
    assert_eq!(store.get("loc"), Some(&ReferenceValue::from("five")));
}

#[test]
fn add_all_is_all_or_nothing() {
    let mut store = ReferenceStore::new();
    store.add("taken", ReferenceValue::Int(1), false).expect("add");

    let error = store
        .add_all(vec![pending("fresh", 2, false), pending("taken", 3, false)])
        .unwrap_err();

    assert!(matches!(error, MigrationError::ReferenceAlreadyExists { .. }));
    assert!(!store.contains("fresh"));
    assert_eq!(store.get("taken"), Some(&ReferenceValue::Int(1)));
}

#[test]
fn add_all_checks_duplicates_inside_the_batch() {
    let mut store = ReferenceStore::new();

    assert!(
        store
            .add_all(vec![pending("same", 1, false), pending("same", 2, false)])
            .is_err()
    );
    assert!(store.is_empty());

    store
        .add_all(vec![pending("same", 1, false), pending("same", 2, true)])
        .expect("overwrite within batch");
    assert_eq!(store.get("same"), Some(&ReferenceValue::Int(2)));
}

#[test]
fn iteration_is_sorted_by_identifier() {
    let mut store = ReferenceStore::new();
    store
        .add_all(vec![pending("b", 2, false), pending("a", 1, false)])
        .expect("add");
    let keys: Vec<_> = store.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn stores_are_independent() {
    let mut first = ReferenceStore::new();
    let second = ReferenceStore::new();
    first.add("loc", ReferenceValue::Int(1), false).expect("add");
    assert!(second.get("loc").is_none());
}

#[test]
fn check_all_reports_without_writing() {
    let mut store = ReferenceStore::new();
    store.add("taken", ReferenceValue::Int(1), false).expect("add");

    let batch = vec![pending("fresh", 2, false), pending("taken", 3, false)];
    assert!(matches!(
        store.check_all(&batch),
        Err(MigrationError::ReferenceAlreadyExists { ref identifier }) if identifier == "taken"
    ));
    assert!(store.check_all(&[pending("fresh", 2, false)]).is_ok());
    assert!(!store.contains("fresh"));
}

#[test]
fn check_writes_needs_only_identifiers() {
    let mut store = ReferenceStore::new();
    store.add("taken", ReferenceValue::Int(1), false).expect("add");

    assert!(store.check_writes([("taken", true), ("fresh", false)]).is_ok());
    assert!(store.check_writes([("taken", false)]).is_err());
    assert!(store.check_writes([("fresh", false), ("fresh", false)]).is_err());
    assert_eq!(store.len(), 1);
}
