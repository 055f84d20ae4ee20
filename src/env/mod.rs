pub mod system;
pub mod empty;
pub mod server;

use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}, hash::BuildHasher, path::PathBuf};

use crate::{options::{IllegalOption, OptionType, DEFAULT_KEY, DEFAULT_ROOT, ENV_FILE_NAME}, Error, ErrorKind, Result};

pub use system::{SystemEnv, SYSTEM_ENV};
pub use empty::EmptyEnv;
pub use server::ServerVars;

pub const ROOT_VAR: &str = "KEYPROBE_ROOT";
pub const ENV_FILE_VAR: &str = "KEYPROBE_ENV_FILE";
pub const KEY_VAR: &str = "KEYPROBE_KEY";
pub const DEBUG_VAR: &str = "KEYPROBE_DEBUG";

pub fn parse_bool(value: &OsStr) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

/// A key name must be non-empty and must not contain `=` or whitespace.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(|ch: char| ch == '=' || ch.is_whitespace())
}

/// Read-only access to a table of variables.
pub trait GetEnv {
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>>;

    /// Lossy string view of [`GetEnv::get`].
    #[inline]
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(key.as_ref()).map(|value| value.to_string_lossy().into_owned())
    }

    #[inline]
    fn get_root(&self) -> PathBuf {
        self.get(ROOT_VAR.as_ref())
            .filter(|path| !path.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ROOT), |path| PathBuf::from(path.into_owned()))
    }

    #[inline]
    fn get_env_file(&self) -> PathBuf {
        self.get(ENV_FILE_VAR.as_ref())
            .filter(|path| !path.is_empty())
            .map_or_else(|| self.get_root().join(ENV_FILE_NAME), |path| PathBuf::from(path.into_owned()))
    }

    fn get_key(&self) -> Result<String> {
        let Some(key) = self.get(KEY_VAR.as_ref()).filter(|key| !key.is_empty()) else {
            return Ok(DEFAULT_KEY.to_owned());
        };

        if let Some(valid) = key.to_str().filter(|key| is_valid_key(key)) {
            return Ok(valid.to_owned());
        }

        Err(Error::with_cause(
            ErrorKind::OptionsParseError,
            IllegalOption::new(
                OsString::from(KEY_VAR),
                key.into_owned(),
                OptionType::Key)))
    }

    #[inline]
    fn get_debug(&self) -> Result<bool> {
        self.get_bool(DEBUG_VAR.as_ref(), false)
    }

    fn get_bool(&self, key: &OsStr, default_value: bool) -> Result<bool> {
        if let Some(value) = self.get(key) {
            let value: &OsStr = &value;
            if value.is_empty() {
                return Ok(default_value);
            }

            let Some(value) = parse_bool(value) else {
                return Err(Error::with_cause(
                    ErrorKind::OptionsParseError,
                    IllegalOption::new(
                        key.to_owned(),
                        value.into(),
                        OptionType::Bool)));
            };

            Ok(value)
        } else {
            Ok(default_value)
        }
    }
}

/// A writable table. Only ever used for private tables, never the process
/// environment.
pub trait Env: GetEnv {
    fn set(&mut self, key: &OsStr, value: &OsStr);
}

impl<T: GetEnv + ?Sized> GetEnv for &T {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        (**self).get(key)
    }
}

impl<BH: BuildHasher> GetEnv for HashMap<OsString, OsString, BH> {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        HashMap::get(self, key).map(Cow::from)
    }
}

impl<BH: BuildHasher> Env for HashMap<OsString, OsString, BH> {
    #[inline]
    fn set(&mut self, key: &OsStr, value: &OsStr) {
        self.insert(key.to_os_string(), value.to_os_string());
    }
}

impl<BH: BuildHasher> GetEnv for HashMap<String, String, BH> {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        HashMap::get(self, key.to_string_lossy().as_ref()).map(|value| {
            let value: &OsStr = value.as_ref();
            Cow::from(value)
        })
    }
}
