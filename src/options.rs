use std::{ffi::{OsStr, OsString}, path::{Path, PathBuf}};

use crate::{env::{GetEnv, SYSTEM_ENV}, EnvFileInspector, Result};

pub const DEFAULT_ROOT: &str = "/var/www/html";
pub const DEFAULT_KEY: &str = "APP_KEY";
pub const DEFAULT_DEBUG: bool = false;

pub const ENV_FILE_NAME: &str = ".env";
pub const APP_CONFIG_PATH: &str = "config/app.php";
pub const BOOTSTRAP_PATH: &str = "bootstrap/app.php";

#[derive(Debug, PartialEq, Clone)]
pub struct Options {
    /// Application root directory.
    pub root: PathBuf,

    /// The environment file, `<root>/.env` unless configured otherwise.
    pub env_file: PathBuf,

    /// Name of the key to look for.
    pub key: String,

    /// Log debug events to stderr.
    pub debug: bool,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::with_root(DEFAULT_ROOT)
    }
}

impl Options {
    pub fn try_from(env: &impl GetEnv) -> Result<Self> {
        let root = env.get_root();
        let env_file = env.get_env_file();
        let key = env.get_key()?;
        let debug = env.get_debug()?;

        Ok(Self { root, env_file, key, debug })
    }

    #[inline]
    pub fn try_from_env() -> Result<Self> {
        Self::try_from(&SYSTEM_ENV)
    }

    #[inline]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            env_file: root.join(ENV_FILE_NAME),
            root,
            key: DEFAULT_KEY.to_owned(),
            debug: DEFAULT_DEBUG,
        }
    }

    #[inline]
    pub fn app_config_path(&self) -> PathBuf {
        self.root.join(APP_CONFIG_PATH)
    }

    #[inline]
    pub fn bootstrap_path(&self) -> PathBuf {
        self.root.join(BOOTSTRAP_PATH)
    }

    #[inline]
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    #[inline]
    pub fn inspector(&self) -> EnvFileInspector {
        EnvFileInspector::new(&self.env_file, &self.key)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OptionType {
    Bool,
    Key,
}

impl std::fmt::Display for OptionType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

#[derive(Debug)]
pub struct IllegalOption {
    name: OsString,
    value: OsString,
    option_type: OptionType,
}

impl IllegalOption {
    #[inline]
    pub fn new(name: OsString, value: OsString, option_type: OptionType) -> Self {
        Self { name, value, option_type }
    }

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &OsStr {
        &self.value
    }

    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl std::fmt::Display for IllegalOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} option has illegal value: {:?}={:?}", self.option_type, self.name, self.value)
    }
}

impl std::error::Error for IllegalOption {}
