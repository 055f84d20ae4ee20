use std::path::{Path, PathBuf};

use crate::{entry::find_key, ConfigEntry, Error, ErrorKind, Result};

/// Reads a whole file as text.
///
/// A missing path is [`ErrorKind::FileNotFound`](crate::ErrorKind::FileNotFound),
/// anything else that keeps the content from being read (permissions, a
/// directory, I/O errors) is [`ErrorKind::ReadFailure`](crate::ErrorKind::ReadFailure).
/// An empty file is empty content. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| Error::from_read(path, err))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");

    Ok(match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::debug!(path = %path.display(), "file is not valid UTF-8, decoding lossy");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Looks up one key in one environment file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EnvFileInspector {
    path: PathBuf,
    key: String,
}

impl EnvFileInspector {
    #[inline]
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn load(&self) -> Result<String> {
        load(&self.path)
    }

    #[inline]
    pub fn find_key(&self, contents: &str) -> Option<ConfigEntry> {
        find_key(contents, &self.key)
    }

    /// `load` followed by `find_key`. `Ok(None)` means the file was read but
    /// holds no line for the key.
    pub fn inspect(&self) -> Result<Option<ConfigEntry>> {
        let contents = self.load()?;
        Ok(self.find_key(&contents))
    }

    /// Like [`EnvFileInspector::inspect`], but a missing line is
    /// [`ErrorKind::KeyNotFound`].
    pub fn expect_key(&self) -> Result<ConfigEntry> {
        let Some(entry) = self.inspect()? else {
            return Err(Error::with_cause(
                ErrorKind::KeyNotFound,
                format!("no {}= line in {}", self.key, self.path.display())));
        };
        Ok(entry)
    }
}
