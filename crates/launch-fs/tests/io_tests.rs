use launch_fs::{Error, io};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");

    io::write_atomic(&path, b"PORT=8000\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "PORT=8000\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");
    fs::write(&path, "PORT=8000\n").unwrap();

    io::write_atomic(&path, b"PORT=9000\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "PORT=9000\n");
}

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config").join("nested").join(".env");

    io::write_atomic(&path, b"x").unwrap();

    assert!(path.is_file());
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");

    io::write_atomic(&path, b"OPENAI_API_KEY=\n").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![".env".to_string()]);
}

#[test]
fn test_copy_atomic_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join(".env.example");
    let target = temp.path().join(".env");
    let content = b"# Fill in before running\r\nOPENAI_API_KEY=your-key-here\nBACKEND_URL=http://localhost:5000\n\xe2\x9c\x93\n";
    fs::write(&template, content).unwrap();

    let copied = io::copy_atomic(&template, &target).unwrap();

    assert_eq!(copied, content.len() as u64);
    assert_eq!(fs::read(&target).unwrap(), content.to_vec());
    assert_eq!(fs::read(&template).unwrap(), content.to_vec());
}

#[test]
fn test_copy_atomic_missing_source() {
    let temp = TempDir::new().unwrap();
    let err = io::copy_atomic(&temp.path().join("missing"), &temp.path().join(".env"))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!temp.path().join(".env").exists());
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&temp.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_write_atomic_failed_rename_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    // A non-empty directory where the file should go makes the rename fail
    let path = temp.path().join(".env");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let err = io::write_atomic(&path, b"PORT=8000\n").unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![".env".to_string()]);
}
