use crate::line_splitter::split_lines;

/// A `KEY=value` line located in an environment file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ConfigEntry {
    key: String,
    raw_line: String,
    lineno: usize,
}

impl ConfigEntry {
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The matched line with surrounding whitespace removed.
    #[inline]
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Everything after `KEY=`, possibly empty.
    #[inline]
    pub fn value(&self) -> &str {
        &self.raw_line[self.key.len() + 1..]
    }

    /// 1-based line number of the match.
    #[inline]
    pub fn lineno(&self) -> usize {
        self.lineno
    }
}

/// Returns the first line whose trimmed text starts with `key=`.
///
/// This is a literal prefix test, so `APP_KEYFOO=1` is not a match for
/// `APP_KEY` and lines without any `=` are simply skipped. Quoting, comments
/// and `export` prefixes are not interpreted.
pub fn find_key(contents: &str, key: &str) -> Option<ConfigEntry> {
    for (lineno, line) in split_lines(contents) {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };

        if rest.starts_with('=') {
            tracing::debug!(key, lineno, "found key");
            return Some(ConfigEntry {
                key: key.to_owned(),
                raw_line: line.to_owned(),
                lineno,
            });
        }
    }

    tracing::debug!(key, "key not found");
    None
}
