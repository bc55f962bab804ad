use derive_more::{Display, IsVariant};
use libc::mode_t;

use crate::fs::UnknownFileTypeError;

/// The type of a file, as encoded in the `S_IFMT` bits of its mode.
///
/// POSIX defines exactly these seven types, so each variant corresponds to one of the `S_IS*`
/// tests holding and the other six failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum FileType {
    #[display("block device")]
    BlockDevice,
    #[display("character device")]
    CharDevice,
    #[display("directory")]
    Directory,
    #[display("fifo")]
    Fifo,
    #[display("symbolic link")]
    Symlink,
    #[display("regular file")]
    Regular,
    #[display("socket")]
    Socket,
}

use FileType::*;

impl FileType {
    pub const ALL: [FileType; 7] = [BlockDevice, CharDevice, Directory, Fifo, Symlink, Regular, Socket];

    #[inline(always)]
    #[allow(clippy::unnecessary_cast)]
    pub const fn from_stat_mode(st_mode: mode_t) -> Result<FileType, UnknownFileTypeError> {
        Ok(match st_mode & libc::S_IFMT {
            libc::S_IFBLK =>  BlockDevice,
            libc::S_IFCHR =>  CharDevice,
            libc::S_IFDIR =>  Directory,
            libc::S_IFIFO =>  Fifo,
            libc::S_IFLNK =>  Symlink,
            libc::S_IFREG =>  Regular,
            libc::S_IFSOCK => Socket,
            _ => return Err(UnknownFileTypeError(st_mode as u32)),
        })
    }

    /// Tests only the type bits of `st_mode`, so permission bits and unrecognised types are
    /// irrelevant.
    #[inline(always)]
    pub const fn mode_is_symlink(st_mode: mode_t) -> bool {
        st_mode & libc::S_IFMT == libc::S_IFLNK
    }
}
