// Configuration loading tests

use lecture_console::Config;
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lecture-console");

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.poll.interval_secs, 10);
}

#[test]
fn file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("lecture-console.toml");
    fs::write(
        &file,
        r#"
[backend]
base_url = "http://localhost:8080"

[poll]
interval_secs = 3
"#,
    )
    .unwrap();

    let path = dir.path().join("lecture-console");
    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.backend.base_url, "http://localhost:8080");
    assert_eq!(cfg.poll.interval_secs, 3);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("lecture-console.toml");
    fs::write(
        &file,
        r#"
[poll]
interval_secs = 30
"#,
    )
    .unwrap();

    let path = dir.path().join("lecture-console");
    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.poll.interval_secs, 30);
}
