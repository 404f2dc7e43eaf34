use gradebook_core::{CourseRecord, CourseRepository, JsonFileCourseRepository, RepoError};

fn sample() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new("MA101", "Calculus", 4, "2024-1", 7.5),
        CourseRecord::new("CS101", "Intro to CS", 3, "2024-1", 9.0),
        CourseRecord::new("PH101", "Physics", 3, "2024-2", 6.25),
    ]
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileCourseRepository::new(dir.path().join("gradebook.json"));

    assert!(repo.load().unwrap().is_empty());
    assert!(!repo.path().exists());
}

#[test]
fn save_then_load_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileCourseRepository::new(dir.path().join("gradebook.json"));

    repo.save(&sample()).unwrap();
    assert_eq!(repo.load().unwrap(), sample());
}

#[test]
fn save_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileCourseRepository::new(dir.path().join("gradebook.json"));

    repo.save(&sample()).unwrap();
    let smaller = vec![CourseRecord::new("EN101", "English", 2, "2024-2", 8.0)];
    repo.save(&smaller).unwrap();

    assert_eq!(repo.load().unwrap(), smaller);
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("gradebook.json")]);
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("gradebook.json");
    let repo = JsonFileCourseRepository::new(&path);

    repo.save(&sample()).unwrap();
    assert!(path.exists());
}

#[test]
fn saved_file_uses_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    let repo = JsonFileCourseRepository::new(&path);
    repo.save(&sample()[..1]).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{
            "code": "MA101",
            "name": "Calculus",
            "credits": 4,
            "semester": "2024-1",
            "score": 7.5
        }])
    );
}

#[test]
fn whitespace_only_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    std::fs::write(&path, " \n").unwrap();

    let repo = JsonFileCourseRepository::new(&path);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn corrupt_json_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    std::fs::write(&path, "[{\"code\": \"CS101\",").unwrap();

    let err = JsonFileCourseRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, RepoError::Json(_)));
}

#[test]
fn non_array_root_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    std::fs::write(&path, "{\"courses\": []}").unwrap();

    let err = JsonFileCourseRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, RepoError::Json(_)));
}

#[test]
fn one_invalid_entry_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    let payload = serde_json::json!([
        {"code": "CS101", "name": "Intro", "credits": 3, "semester": "S1", "score": 8.0},
        {"code": "CS102", "name": "Intro II", "credits": 0, "semester": "S1", "score": 8.0}
    ]);
    std::fs::write(&path, payload.to_string()).unwrap();

    let err = JsonFileCourseRepository::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("credits must be a positive integer"));
}

#[test]
fn legacy_files_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.json");
    let payload = serde_json::json!([
        {
            "course_code": "CS101",
            "course_name": "Intro",
            "credits": 3,
            "semester": "1",
            "score": 8.5
        }
    ]);
    std::fs::write(&path, serde_json::to_string_pretty(&payload).unwrap()).unwrap();

    let records = JsonFileCourseRepository::new(&path).load().unwrap();
    assert_eq!(records, vec![CourseRecord::new("CS101", "Intro", 3, "1", 8.5)]);
}
