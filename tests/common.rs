#![allow(dead_code)]

use std::{fs, io::Write, path::{Path, PathBuf}};

use tempfile::TempDir;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// A throwaway application root holding the given files.
pub fn app_root(files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().expect("create temp dir");
    for (name, contents) in files {
        let path = root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
    }
    root
}

pub const BOOTSTRAP_FILE: (&str, &str) = ("bootstrap/app.php", "<?php\nreturn $app;\n");
pub const APP_CONFIG_FILE: (&str, &str) = ("config/app.php", "<?php\nreturn ['key' => env('APP_KEY')];\n");

/// Runs a report into a buffer and returns its result and text.
pub fn render(report: impl FnOnce(&mut dyn Write) -> keyprobe::Result<()>) -> (keyprobe::Result<()>, String) {
    let mut out = Vec::<u8>::new();
    let result = report(&mut out);
    (result, String::from_utf8(out).expect("report is UTF-8"))
}
