use std::{borrow::Cow, ffi::OsStr};

use super::GetEnv;

/// A table without any variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyEnv();

impl GetEnv for EmptyEnv {
    #[inline]
    fn get<'a>(&'a self, _key: &OsStr) -> Option<Cow<'a, OsStr>> {
        None
    }
}
