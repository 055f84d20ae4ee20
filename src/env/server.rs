use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}};

use super::{GetEnv, SystemEnv};

/// The server variable table.
///
/// This is a copy of the environment taken once when the program starts, so
/// it answers independently of later [`SystemEnv`] lookups.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServerVars {
    vars: HashMap<OsString, OsString>,
}

impl ServerVars {
    #[inline]
    pub fn capture() -> Self {
        Self { vars: SystemEnv::hash_map() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<HashMap<OsString, OsString>> for ServerVars {
    #[inline]
    fn from(vars: HashMap<OsString, OsString>) -> Self {
        Self { vars }
    }
}

impl GetEnv for ServerVars {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        self.vars.get(key).map(|value| Cow::from(value.as_os_str()))
    }
}
