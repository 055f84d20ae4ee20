mod common;

use keyprobe::{load, EnvFileInspector, ErrorKind, Result};

use common::{app_root, fixture};

#[test]
fn test_inspect_laravel_env() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("laravel.env"), "APP_KEY");
    let entry = inspector.inspect()?.expect("APP_KEY is defined");

    assert_eq!(entry.lineno(), 3);
    assert_eq!(entry.value(), "base64:q1w2e3r4t5y6u7i8o9p0asdfghjklzxcvbnm1234567=");
    Ok(())
}

#[test]
fn test_first_definition_wins() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("duplicate-key.env"), "APP_KEY");
    let entry = inspector.inspect()?.expect("APP_KEY is defined");

    assert_eq!(entry.lineno(), 3);
    assert_eq!(entry.raw_line(), "APP_KEY=base64:first");
    assert_eq!(entry.value(), "base64:first");
    Ok(())
}

#[test]
fn test_crlf_line_endings() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("crlf.env"), "APP_KEY");
    let entry = inspector.inspect()?.expect("APP_KEY is defined");

    assert_eq!(entry.lineno(), 2);
    assert_eq!(entry.value(), "plain-secret");
    Ok(())
}

#[test]
fn test_other_key() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("laravel.env"), "DB_CONNECTION");
    let entry = inspector.inspect()?.expect("DB_CONNECTION is defined");

    assert_eq!(entry.lineno(), 7);
    assert_eq!(entry.value(), "mysql");
    Ok(())
}

#[test]
fn test_key_not_found() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("no-key.env"), "APP_KEY");
    assert_eq!(inspector.inspect()?, None);

    let err = inspector.expect_key().expect_err("APP_KEY is not defined");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    Ok(())
}

#[test]
fn test_idempotent() -> Result<()> {
    let inspector = EnvFileInspector::new(fixture("duplicate-key.env"), "APP_KEY");
    assert_eq!(inspector.inspect()?, inspector.inspect()?);
    Ok(())
}

#[test]
fn test_file_not_found() {
    let root = app_root(&[]);
    let err = load(root.path().join(".env")).expect_err("file is missing");

    assert_eq!(err.kind(), ErrorKind::FileNotFound);

    let inspector = EnvFileInspector::new(root.path().join(".env"), "APP_KEY");
    assert_eq!(inspector.inspect().expect_err("file is missing").kind(), ErrorKind::FileNotFound);
}

#[test]
fn test_directory_is_read_failure() {
    let root = app_root(&[]);
    let err = load(root.path()).expect_err("a directory has no text");

    assert_eq!(err.kind(), ErrorKind::ReadFailure);
}

#[test]
fn test_empty_file_is_content() -> Result<()> {
    let root = app_root(&[(".env", "")]);

    assert_eq!(load(root.path().join(".env"))?, "");
    let inspector = EnvFileInspector::new(root.path().join(".env"), "APP_KEY");
    assert_eq!(inspector.inspect()?, None);
    Ok(())
}

#[test]
fn test_invalid_utf8_is_decoded_lossy() -> Result<()> {
    let root = app_root(&[]);
    let path = root.path().join(".env");
    std::fs::write(&path, b"NAME=caf\xe9\nAPP_KEY=base64:ok\n")?;

    let contents = load(&path)?;
    assert!(contents.starts_with("NAME=caf\u{FFFD}"));

    let entry = EnvFileInspector::new(&path, "APP_KEY").inspect()?.expect("APP_KEY is defined");
    assert_eq!(entry.value(), "base64:ok");
    Ok(())
}
