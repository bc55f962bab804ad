use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

/// Status reported on the integer channel when a query succeeds.
pub const STATUS_OK: i32 = 0;
/// Status reported on the integer channel for [`StatError::Internal`].
pub const STATUS_INTERNAL: i32 = -1;
/// Status reported on the integer channel for [`StatError::Marshal`].
pub const STATUS_MARSHAL: i32 = -2;
/// Added to the error number of a failed symlink check on the integer channel, so that it can't be
/// mistaken for a failed metadata collection.
pub const SYMLINK_STATUS_OFFSET: i32 = 1000;

/// A raw error number, as reported by a failed system call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub c_int);

impl Errno {
    pub const fn code(self) -> c_int {
        self.0
    }

    pub const fn is_not_found(self) -> bool {
        self.0 == libc::ENOENT
    }

    /// The symbolic name of this error number, or `"*UNKNOWN*"` if it isn't a commonly reported
    /// one.
    pub const fn name(self) -> &'static str {
        match self.0 {
            libc::EPERM =>        "EPERM",
            libc::ENOENT =>       "ENOENT",
            libc::ESRCH =>        "ESRCH",
            libc::EINTR =>        "EINTR",
            libc::EIO =>          "EIO",
            libc::ENXIO =>        "ENXIO",
            libc::E2BIG =>        "E2BIG",
            libc::ENOEXEC =>      "ENOEXEC",
            libc::EBADF =>        "EBADF",
            libc::ECHILD =>       "ECHILD",
            libc::EAGAIN =>       "EAGAIN",
            libc::ENOMEM =>       "ENOMEM",
            libc::EACCES =>       "EACCES",
            libc::EFAULT =>       "EFAULT",
            libc::ENOTBLK =>      "ENOTBLK",
            libc::EBUSY =>        "EBUSY",
            libc::EEXIST =>       "EEXIST",
            libc::EXDEV =>        "EXDEV",
            libc::ENODEV =>       "ENODEV",
            libc::ENOTDIR =>      "ENOTDIR",
            libc::EISDIR =>       "EISDIR",
            libc::EINVAL =>       "EINVAL",
            libc::ENFILE =>       "ENFILE",
            libc::EMFILE =>       "EMFILE",
            libc::ENOTTY =>       "ENOTTY",
            libc::ETXTBSY =>      "ETXTBSY",
            libc::EFBIG =>        "EFBIG",
            libc::ENOSPC =>       "ENOSPC",
            libc::ESPIPE =>       "ESPIPE",
            libc::EROFS =>        "EROFS",
            libc::EMLINK =>       "EMLINK",
            libc::EPIPE =>        "EPIPE",
            libc::EDOM =>         "EDOM",
            libc::ERANGE =>       "ERANGE",
            libc::ENAMETOOLONG => "ENAMETOOLONG",
            libc::ELOOP =>        "ELOOP",
            libc::EOVERFLOW =>    "EOVERFLOW",
            _ =>                  "*UNKNOWN*",
        }
    }
}

impl Display for Errno {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), io::Error::from_raw_os_error(self.0))
    }
}

impl From<Errno> for io::Error {
    fn from(value: Errno) -> Self {
        io::Error::from_raw_os_error(value.0)
    }
}

/// The query that produced a [`SyscallError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum Operation {
    #[display("stat")]
    Stat,
    #[display("lstat")]
    Lstat,
    #[display("symlink check")]
    SymlinkCheck,
}

impl Operation {
    pub const fn follows_links(self) -> bool {
        matches!(self, Operation::Stat)
    }
}

#[derive(Debug, Clone, Display, Error)]
#[display("{op} failed for {}: {errno}", path.display())]
pub struct SyscallError {
    pub op: Operation,
    pub errno: Errno,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Display, Error)]
#[display("unrecognised file type bits in mode {_0:#o}")]
pub struct UnknownFileTypeError(#[error(not(source))] pub u32);

#[derive(Debug, Clone, Display, Error)]
#[display("value {value} of field {field} is out of range")]
pub struct FieldRangeError {
    pub field: &'static str,
    pub value: i128,
}

#[derive(Debug, Clone, Display, Error)]
#[display("path contains a nul byte at offset {_0}")]
pub struct InteriorNulError(#[error(not(source))] pub usize);

/// The raw result of a query couldn't be represented as [`Metadata`](crate::fs::Metadata).
#[derive(Debug, Clone, Display, From, Error, IsVariant)]
pub enum MarshalError {
    UnknownFileType(UnknownFileTypeError),
    FieldRange(FieldRangeError),
}

/// Every way a metadata query can fail.
///
/// - [`Syscall`](StatError::Syscall): the file system rejected the query. Expected and
///   recoverable, the caller decides what to do with the error number.
/// - [`Marshal`](StatError::Marshal): the query succeeded but its result doesn't fit the record.
/// - [`Internal`](StatError::Internal): the query couldn't even be issued.
///
/// In no case is a partially populated record returned.
#[derive(Debug, Clone, Display, From, Error, IsVariant)]
pub enum StatError {
    Syscall(SyscallError),
    Marshal(MarshalError),
    Internal(InteriorNulError),
}

impl StatError {
    pub const fn errno(&self) -> Option<Errno> {
        match self {
            StatError::Syscall(e) => Some(e.errno),
            _ => None,
        }
    }

    pub const fn operation(&self) -> Option<Operation> {
        match self {
            StatError::Syscall(e) => Some(e.op),
            _ => None,
        }
    }

    /// Renders this error on a single integer channel: a positive error number for a failed
    /// collection, the error number plus [`SYMLINK_STATUS_OFFSET`] for a failed symlink check and
    /// a negative sentinel for everything else.
    pub const fn status_code(&self) -> i32 {
        match self {
            StatError::Syscall(SyscallError { op: Operation::SymlinkCheck, errno, .. }) => {
                errno.0 + SYMLINK_STATUS_OFFSET
            },
            StatError::Syscall(e) => e.errno.0,
            StatError::Marshal(_) => STATUS_MARSHAL,
            StatError::Internal(_) => STATUS_INTERNAL,
        }
    }
}
