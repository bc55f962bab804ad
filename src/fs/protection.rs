use std::fmt::{self, Display, Formatter};

use libc::mode_t;

/// The access control bits of a file mode: the nine permission bits plus setuid, setgid and
/// sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protection(u16);

impl Protection {
    pub const MASK: u16 = 0o7777;

    pub const fn from_mode(st_mode: mode_t) -> Protection {
        Protection((st_mode & Self::MASK as mode_t) as u16)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// The read, write and execute bits for owner, group and others, without setuid, setgid or
    /// sticky.
    pub const fn permissions(self) -> u16 {
        self.0 & 0o777
    }

    pub const fn is_setuid(self) -> bool {
        self.0 as mode_t & libc::S_ISUID != 0
    }

    pub const fn is_setgid(self) -> bool {
        self.0 as mode_t & libc::S_ISGID != 0
    }

    pub const fn is_sticky(self) -> bool {
        self.0 as mode_t & libc::S_ISVTX != 0
    }
}

impl Display for Protection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl From<Protection> for u16 {
    fn from(value: Protection) -> Self {
        value.0
    }
}
