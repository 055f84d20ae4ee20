//! The application framework's configuration, as seen from the outside.
//!
//! The diagnostics only ever query it: a [`Bootstrap`] produces a
//! [`ConfigSource`] and the source answers dotted path lookups such as
//! `app.key`. Both steps fail with
//! [`ErrorKind::InitializationFailure`](crate::ErrorKind::InitializationFailure).

pub mod dotenv;

pub use dotenv::{AppConfig, DotenvBootstrap};

use crate::Result;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    String(String),
}

impl ConfigValue {
    /// `Null`, `false` and the empty string count as unset.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::Null => false,
            ConfigValue::Bool(value) => *value,
            ConfigValue::String(value) => !value.is_empty(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(value) => write!(f, "{value}"),
            ConfigValue::String(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ConfigValue {
    #[inline]
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_owned())
    }
}

impl From<bool> for ConfigValue {
    #[inline]
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

pub trait ConfigSource {
    /// `Ok(None)` for paths the configuration doesn't know.
    fn get(&self, path: &str) -> Result<Option<ConfigValue>>;
}

pub trait Bootstrap {
    fn bootstrap(&self) -> Result<Box<dyn ConfigSource>>;
}

impl<F> Bootstrap for F
where F: Fn() -> Result<Box<dyn ConfigSource>> {
    #[inline]
    fn bootstrap(&self) -> Result<Box<dyn ConfigSource>> {
        self()
    }
}
