mod common;

use std::{path::Path, process::{Command, Output}};

use common::{app_root, APP_CONFIG_FILE, BOOTSTRAP_FILE};

fn run(program: &str, root: &Path, vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(program);
    command
        .env("KEYPROBE_ROOT", root)
        .env_remove("KEYPROBE_ENV_FILE")
        .env_remove("KEYPROBE_KEY")
        .env_remove("KEYPROBE_DEBUG")
        .env_remove("KEYPROBE_LOG")
        .env_remove("APP_KEY");
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("run program")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_debug_env_without_file_exits_with_failure() {
    let root = app_root(&[]);
    let output = run(env!("CARGO_BIN_EXE_debug-env"), root.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("[fail] ERROR: the file does not exist"), "{}", stdout(&output));
}

#[test]
fn test_debug_env_without_key_succeeds() {
    let root = app_root(&[(".env", "APP_NAME=Laravel\n")]);
    let output = run(env!("CARGO_BIN_EXE_debug-env"), root.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("[warn] no APP_KEY line found in the file"), "{}", stdout(&output));
}

#[test]
fn test_debug_env_with_key_succeeds() {
    let root = app_root(&[(".env", "APP_KEY=base64:abc\n")]);
    let output = run(env!("CARGO_BIN_EXE_debug-env"), root.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("[ok]   APP_KEY has a value"), "{}", stdout(&output));
}

#[test]
fn test_debug_config_without_file_exits_with_failure() {
    let root = app_root(&[BOOTSTRAP_FILE, APP_CONFIG_FILE]);
    let output = run(env!("CARGO_BIN_EXE_debug-config"), root.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("[fail] ERROR: the file does not exist"), "{text}");
    assert!(!text.contains("2. Environment variables:"), "{text}");
}

#[test]
fn test_debug_config_without_key_succeeds() {
    let root = app_root(&[BOOTSTRAP_FILE, APP_CONFIG_FILE, (".env", "APP_NAME=Laravel\n")]);
    let output = run(env!("CARGO_BIN_EXE_debug-config"), root.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("[fail] APP_KEY NOT found in the file"), "{text}");
    assert!(text.contains("       APP_KEY (process): NOT DEFINED"), "{text}");
    assert!(text.contains("Done"), "{text}");
}

#[test]
fn test_illegal_option_exits_with_failure() {
    let root = app_root(&[(".env", "APP_KEY=base64:abc\n")]);
    let output = run(env!("CARGO_BIN_EXE_debug-env"), root.path(), &[("KEYPROBE_DEBUG", "yes")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OptionsParseError"));
}
