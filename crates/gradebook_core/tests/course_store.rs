use gradebook_core::{CourseChanges, CourseField, CourseRecord, CourseStore, StoreError};

fn course(code: &str, semester: &str, credits: u32, score: f64) -> CourseRecord {
    CourseRecord::new(code, format!("Course {code}"), credits, semester, score)
}

#[test]
fn add_then_list_contains_record_once() {
    let mut store = CourseStore::new();
    let record = course("CS101", "S1", 3, 8.0);

    let stored = store.add(record.clone()).unwrap();
    assert_eq!(stored, &record);

    let matches = store.list().iter().filter(|r| **r == record).count();
    assert_eq!(matches, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn duplicate_add_fails_and_leaves_store_unchanged() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();
    let before = store.clone();

    let err = store.add(course("CS101", "S2", 4, 5.0)).unwrap_err();
    assert_eq!(err, StoreError::DuplicateCode("CS101".to_string()));
    assert_eq!(store, before);
}

#[test]
fn add_rejects_boundary_violations() {
    let mut store = CourseStore::new();

    for bad in [
        course("A", "S1", 0, 5.0),
        course("B", "S1", 3, -0.01),
        course("C", "S1", 3, 10.01),
    ] {
        assert!(matches!(store.add(bad), Err(StoreError::Validation(_))));
    }
    assert!(store.is_empty());

    store.add(course("D", "S1", 3, 10.0)).unwrap();
    store.add(course("E", "S1", 3, 0.0)).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn update_rejects_invalid_merged_record_atomically() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();
    let before = store.clone();

    let changes = CourseChanges {
        name: Some("Renamed".to_string()),
        credits: Some(0),
        ..CourseChanges::default()
    };
    let err = store.update("CS101", &changes).unwrap_err();
    match err {
        StoreError::Validation(inner) => assert_eq!(inner.field(), CourseField::Credits),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store, before);
}

#[test]
fn update_missing_code_is_not_found() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();
    let before = store.clone();

    let err = store
        .update("MA101", &CourseChanges::default())
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound("MA101".to_string()));
    assert_eq!(store, before);
}

#[test]
fn update_code_collision_is_duplicate() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();
    store.add(course("MA101", "S1", 2, 6.0)).unwrap();
    let before = store.clone();

    let changes = CourseChanges {
        code: Some("MA101".to_string()),
        ..CourseChanges::default()
    };
    let err = store.update("CS101", &changes).unwrap_err();
    assert_eq!(err, StoreError::DuplicateCode("MA101".to_string()));
    assert_eq!(store, before);
}

#[test]
fn update_applies_partial_changes() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();

    let changes = CourseChanges {
        score: Some(9.0),
        semester: Some("S2".to_string()),
        ..CourseChanges::default()
    };
    let updated = store.update("CS101", &changes).unwrap().clone();

    assert_eq!(updated, CourseRecord::new("CS101", "Course CS101", 3, "S2", 9.0));
    assert_eq!(store.get("CS101"), Some(&updated));
}

#[test]
fn delete_removes_record_and_second_delete_fails() {
    let mut store = CourseStore::new();
    store.add(course("CS101", "S1", 3, 8.0)).unwrap();
    store.add(course("MA101", "S1", 2, 6.0)).unwrap();

    let removed = store.delete("CS101").unwrap();
    assert_eq!(removed.code, "CS101");
    assert!(store.list().iter().all(|r| r.code != "CS101"));

    let err = store.delete("CS101").unwrap_err();
    assert_eq!(err, StoreError::NotFound("CS101".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn list_is_insertion_ordered_and_stable() {
    let mut store = CourseStore::new();
    for code in ["Z9", "A1", "M5"] {
        store.add(course(code, "S1", 1, 5.0)).unwrap();
    }

    let first: Vec<_> = store.list().iter().map(|r| r.code.clone()).collect();
    let second: Vec<_> = store.list().iter().map(|r| r.code.clone()).collect();
    assert_eq!(first, vec!["Z9", "A1", "M5"]);
    assert_eq!(first, second);
}

#[test]
fn from_records_fails_on_first_duplicate() {
    let err = CourseStore::from_records(vec![
        course("CS101", "S1", 3, 8.0),
        course("CS101", "S2", 2, 6.0),
    ])
    .unwrap_err();
    assert_eq!(err, StoreError::DuplicateCode("CS101".to_string()));
}

#[test]
fn text_fields_are_stored_verbatim() {
    let mut store = CourseStore::new();
    let record = CourseRecord::new(" CS101 ", "  Intro ", 3, " S1", 8.0);
    store.add(record.clone()).unwrap();

    assert_eq!(store.list(), &[record]);
    assert!(store.get("CS101").is_none());
}
