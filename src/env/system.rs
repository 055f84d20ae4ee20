use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}};

use super::GetEnv;

/// Live lookups in the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv();

pub const SYSTEM_ENV: SystemEnv = SystemEnv();

impl SystemEnv {
    #[inline]
    pub fn new() -> Self {
        Self()
    }

    pub fn hash_map() -> HashMap<OsString, OsString> {
        std::env::vars_os().collect()
    }
}

impl GetEnv for SystemEnv {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        std::env::var_os(key).map(Cow::from)
    }
}
