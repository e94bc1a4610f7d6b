#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

/// An empty data directory, removed when the returned guard is dropped.
pub fn create_data_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("quizindex_test_")
        .tempdir()
        .expect("failed to create test data directory")
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("failed to write test file");
}

/// The three-file directory used throughout the tests: two valid quizzes and
/// one file that is not JSON at all.
pub fn create_sample_data_dir() -> TempDir {
    let dir = create_data_dir();
    write_file(
        dir.path(),
        "a.json",
        r#"{"config":{"title":"A","category":"math"},"questions":[1,2]}"#,
    );
    write_file(
        dir.path(),
        "b.json",
        r#"{"config":{"title":"B"},"questions":[]}"#,
    );
    write_file(dir.path(), "bad.json", "not json");
    dir
}
