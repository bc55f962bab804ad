use std::fmt::{self, Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::fs::FieldRangeError;

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const MILLIS_PER_SEC: i64 = 1000;

/// A file timestamp, exactly as reported by the kernel: whole seconds since the epoch and the
/// nanoseconds within that second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    pub secs: i64,
    // Always in 0..1_000_000_000.
    pub nanos: i64,
}

impl Timestamp {
    pub(crate) fn new(secs: i64, nanos: i64, field: &'static str) -> Result<Timestamp, FieldRangeError> {
        if !(0..NANOS_PER_SEC).contains(&nanos) {
            Err(FieldRangeError { field, value: nanos as i128 })?
        }
        Ok(Timestamp { secs, nanos })
    }

    /// Milliseconds since the epoch. Sub-millisecond precision is truncated, not rounded.
    ///
    /// Returns [`None`] if the result doesn't fit in an `i64`, which file systems such as tmpfs
    /// allow.
    pub const fn as_millis(self) -> Option<i64> {
        match self.secs.checked_mul(MILLIS_PER_SEC) {
            Some(millis) => millis.checked_add(self.nanos / NANOS_PER_MILLI),
            None => None,
        }
    }

    pub fn to_system_time(self) -> SystemTime {
        let nanos = Duration::from_nanos(self.nanos as u64);
        if self.secs >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.secs as u64) + nanos
        } else {
            UNIX_EPOCH - Duration::from_secs(self.secs.unsigned_abs()) + nanos
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}
