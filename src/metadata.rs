use std::path::Path;

#[cfg(not(unix))]
use crate::ErrorKind;
use crate::Result;

/// Ownership and permissions of a file.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FileMetadata {
    /// User name, or the numeric uid if it has no name.
    pub owner: String,
    /// Group name, or the numeric gid if it has no name.
    pub group: String,
    /// Permission bits as four octal digits, e.g. `0644`.
    pub mode: String,
}

#[inline]
pub fn format_mode(mode: u32) -> String {
    format!("{:04o}", mode & 0o7777)
}

/// Name of the user `uid`, or the number itself if the user database has no
/// entry for it.
#[cfg(unix)]
pub fn user_name(uid: u32) -> String {
    use nix::unistd::{Uid, User};

    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => return user.name,
        Ok(None) => tracing::debug!(uid, "uid has no name"),
        Err(err) => tracing::debug!(uid, "user lookup failed: {err}"),
    }
    uid.to_string()
}

/// Name of the group `gid`, or the number itself if the group database has
/// no entry for it.
#[cfg(unix)]
pub fn group_name(gid: u32) -> String {
    use nix::unistd::{Gid, Group};

    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => return group.name,
        Ok(None) => tracing::debug!(gid, "gid has no name"),
        Err(err) => tracing::debug!(gid, "group lookup failed: {err}"),
    }
    gid.to_string()
}

/// Owner, group and permission bits of `path`, following symlinks.
#[cfg(unix)]
pub fn file_metadata(path: impl AsRef<Path>) -> Result<FileMetadata> {
    use std::os::unix::fs::MetadataExt;

    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|err| crate::Error::from_read(path, err))?;

    Ok(FileMetadata {
        owner: user_name(metadata.uid()),
        group: group_name(metadata.gid()),
        mode: format_mode(metadata.mode()),
    })
}

#[cfg(not(unix))]
pub fn file_metadata(_path: impl AsRef<Path>) -> Result<FileMetadata> {
    Err(ErrorKind::Unsupported.into())
}
