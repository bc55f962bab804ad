use std::fmt::{self, Display, Formatter};

/// The device number of a character or block special file. Zero for every other type of file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceId(pub u64);

// glibc's encoding: 12 bits of major and 8 bits of minor in the low word, the rest above.
impl DeviceId {
    pub const fn major(self) -> u32 {
        (((self.0 >> 32) & 0xffff_f000) | ((self.0 >> 8) & 0x0000_0fff)) as u32
    }

    pub const fn minor(self) -> u32 {
        (((self.0 >> 12) & 0xffff_ff00) | (self.0 & 0x0000_00ff)) as u32
    }

    pub const fn from_parts(major: u32, minor: u32) -> DeviceId {
        let (major, minor) = (major as u64, minor as u64);
        DeviceId(
            ((major & 0xffff_f000) << 32)
                | ((major & 0x0000_0fff) << 8)
                | ((minor & 0xffff_ff00) << 12)
                | (minor & 0x0000_00ff)
        )
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "-,-")
        } else {
            write!(f, "{},{}", self.major(), self.minor())
        }
    }
}
