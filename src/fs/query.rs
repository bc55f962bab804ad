use std::ffi::OsStr;
use std::path::PathBuf;

use libc::stat as Stat;
use tracing::{debug, trace};

use super::{FileType, Metadata, Operation, StatError, SyscallError, path, syscall};

/// Runs a single query for `path`, with no retries.
pub(crate) fn query(path: &OsStr, op: Operation) -> Result<Stat, StatError> {
    let pathname = path::to_c_path(path).inspect_err(|e| debug!(?path, %op, "{e}"))?;

    trace!(?path, %op, "querying file metadata");
    syscall::stat_raw(&pathname, op).map_err(|errno| {
        debug!(?path, %op, errno = errno.code(), "query rejected: {errno}");
        StatError::from(SyscallError {
            op,
            errno,
            path: PathBuf::from(path),
        })
    })
}

/// Builds the record for a successful query of `path`.
pub(crate) fn marshal(path: &OsStr, op: Operation, raw: &Stat) -> Result<Metadata, StatError> {
    Metadata::from_stat(raw)
        .inspect_err(|e| debug!(?path, %op, "{e}"))
        .map_err(StatError::from)
}

/// Collects the metadata for the file at `path`. If `follow_links` is true, a symlink at the end
/// of the path is resolved (`stat`), otherwise the link itself is examined (`lstat`).
///
/// For a builder style API, see [`StatOptions`].
///
/// # Errors
/// Fails with [`StatError::Syscall`] if the file system rejects the query, in which case the
/// error number is reported as is. See [`StatError`] for the other cases.
pub fn collect<P: AsRef<OsStr>>(path: P, follow_links: bool) -> Result<Metadata, StatError> {
    StatOptions::new().follow_links(follow_links).collect(path)
}

/// Collects metadata for `path`, following symlinks.
pub fn stat<P: AsRef<OsStr>>(path: P) -> Result<Metadata, StatError> {
    collect(path, true)
}

/// Collects metadata for `path` itself, even if it is a symlink.
pub fn lstat<P: AsRef<OsStr>>(path: P) -> Result<Metadata, StatError> {
    collect(path, false)
}

/// Checks whether `path` names a symbolic link. The final component of the path is never
/// followed, so a dangling link is still reported as a link.
///
/// # Errors
/// Failures are tagged with [`Operation::SymlinkCheck`] to distinguish them from failures of
/// [`collect`].
pub fn is_symlink<P: AsRef<OsStr>>(path: P) -> Result<bool, StatError> {
    let raw = query(path.as_ref(), Operation::SymlinkCheck)?;
    Ok(FileType::mode_is_symlink(raw.st_mode))
}

/// A builder for metadata queries, available to avoid passing bare flags around. Links are
/// followed by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatOptions {
    pub(crate) follow_links: bool,
}

impl StatOptions {
    pub const fn new() -> StatOptions {
        StatOptions {
            follow_links: true,
        }
    }

    pub const fn follow_links(&mut self, value: bool) -> &mut Self {
        self.follow_links = value;
        self
    }

    pub(crate) const fn operation(&self) -> Operation {
        if self.follow_links {
            Operation::Stat
        } else {
            Operation::Lstat
        }
    }

    pub fn collect<P: AsRef<OsStr>>(&self, path: P) -> Result<Metadata, StatError> {
        let path = path.as_ref();
        let op = self.operation();
        marshal(path, op, &query(path, op)?)
    }
}

impl Default for StatOptions {
    fn default() -> Self {
        Self::new()
    }
}
