use std::fmt::{self, Display, Formatter};

use libc::stat as Stat;

use super::{DeviceId, FieldRangeError, FileType, MarshalError, Protection, Timestamp};
use crate::util::fmt::Grouped;

/// Converts a raw `stat` field into the record's type for that field, failing instead of
/// truncating.
macro_rules! field {
    ($value:expr, $name:literal) => {{
        let value = $value;
        TryFrom::try_from(value).map_err(|_| FieldRangeError {
            field: $name,
            value: value as i128,
        })?
    }};
}

/// The metadata of a single file, collected by one `stat` or `lstat` call.
///
/// A `Metadata` is only ever constructed whole from a successful query, and is read-only from then
/// on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub(crate) device: u64,            // st_dev
    pub(crate) inode: u64,             // st_ino
    pub(crate) protection: Protection, // st_mode & 07777
    pub(crate) link_count: u64,        // st_nlink
    pub(crate) uid: u32,               // st_uid
    pub(crate) gid: u32,               // st_gid
    pub(crate) device_id: DeviceId,    // st_rdev
    pub(crate) size: i64,              // st_size
    pub(crate) block_size: i64,        // st_blksize
    pub(crate) blocks: i64,            // st_blocks
    pub(crate) file_type: FileType,    // st_mode & S_IFMT
    pub(crate) accessed: Timestamp,    // st_atime, st_atime_nsec
    pub(crate) modified: Timestamp,    // st_mtime, st_mtime_nsec
    pub(crate) changed: Timestamp,     // st_ctime, st_ctime_nsec
}

impl Metadata {
    #[allow(clippy::useless_conversion, clippy::unnecessary_cast)]
    pub(crate) fn from_stat(raw: &Stat) -> Result<Metadata, MarshalError> {
        Ok(Metadata {
            device: field!(raw.st_dev, "device"),
            inode: field!(raw.st_ino, "inode"),
            protection: Protection::from_mode(raw.st_mode),
            link_count: field!(raw.st_nlink, "link_count"),
            uid: raw.st_uid,
            gid: raw.st_gid,
            device_id: DeviceId(field!(raw.st_rdev, "device_id")),
            size: field!(raw.st_size, "size"),
            block_size: field!(raw.st_blksize, "block_size"),
            blocks: field!(raw.st_blocks, "blocks"),
            file_type: FileType::from_stat_mode(raw.st_mode)?,
            accessed: Timestamp::new(
                field!(raw.st_atime, "accessed"),
                field!(raw.st_atime_nsec, "accessed"),
                "accessed"
            )?,
            modified: Timestamp::new(
                field!(raw.st_mtime, "modified"),
                field!(raw.st_mtime_nsec, "modified"),
                "modified"
            )?,
            changed: Timestamp::new(
                field!(raw.st_ctime, "changed"),
                field!(raw.st_ctime_nsec, "changed"),
                "changed"
            )?,
        })
    }

    /// The ID of the device containing the file.
    pub const fn device(&self) -> u64 {
        self.device
    }

    pub const fn inode(&self) -> u64 {
        self.inode
    }

    pub const fn protection(&self) -> Protection {
        self.protection
    }

    /// The number of hard links to the file.
    pub const fn link_count(&self) -> u64 {
        self.link_count
    }

    pub const fn uid(&self) -> u32 {
        self.uid
    }

    pub const fn gid(&self) -> u32 {
        self.gid
    }

    /// The device this file represents, if it is a special file.
    pub const fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// The total size in bytes. For a symlink, this is the length of its target.
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// The preferred block size for file system I/O.
    pub const fn block_size(&self) -> i64 {
        self.block_size
    }

    /// The number of 512 byte blocks allocated.
    pub const fn blocks(&self) -> i64 {
        self.blocks
    }

    pub const fn file_type(&self) -> FileType {
        self.file_type
    }

    pub const fn accessed(&self) -> Timestamp {
        self.accessed
    }

    pub const fn modified(&self) -> Timestamp {
        self.modified
    }

    /// The time of the last status change, which includes changes to metadata, not only content.
    pub const fn changed(&self) -> Timestamp {
        self.changed
    }

    pub const fn is_regular(&self) -> bool {
        self.file_type.is_regular()
    }

    pub const fn is_directory(&self) -> bool {
        self.file_type.is_directory()
    }

    pub const fn is_char_device(&self) -> bool {
        self.file_type.is_char_device()
    }

    pub const fn is_block_device(&self) -> bool {
        self.file_type.is_block_device()
    }

    pub const fn is_fifo(&self) -> bool {
        self.file_type.is_fifo()
    }

    pub const fn is_symlink(&self) -> bool {
        self.file_type.is_symlink()
    }

    pub const fn is_socket(&self) -> bool {
        self.file_type.is_socket()
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rows: [(&str, &dyn Display); 20] = [
            ("device", &self.device),
            ("inode", &self.inode),
            ("protection", &self.protection),
            ("hard links", &self.link_count),
            ("uid", &self.uid),
            ("gid", &self.gid),
            ("device type", &self.device_id),
            ("size", &Grouped(self.size)),
            ("block size", &self.block_size),
            ("blocks", &self.blocks),
            ("regular file?", &self.is_regular()),
            ("directory?", &self.is_directory()),
            ("char device?", &self.is_char_device()),
            ("block device?", &self.is_block_device()),
            ("fifo?", &self.is_fifo()),
            ("symlink?", &self.is_symlink()),
            ("socket?", &self.is_socket()),
            ("accessed", &self.accessed),
            ("modified", &self.modified),
            ("status change", &self.changed),
        ];

        for (label, value) in rows {
            writeln!(f, "  {label:<14}: {value}")?;
        }
        Ok(())
    }
}
