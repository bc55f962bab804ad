use std::ffi::CStr;
use std::io;
use std::mem::MaybeUninit;

use libc::stat as Stat;

use super::{Errno, Operation};

pub fn err_no() -> Errno {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    Errno(unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() })
}

/// Issues exactly one `stat` or `lstat` call for `pathname`, depending on whether `op` follows
/// links.
pub(crate) fn stat_raw(pathname: &CStr, op: Operation) -> Result<Stat, Errno> {
    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
    // SAFETY: pathname is nul-terminated and raw_meta is valid for writes of a whole stat.
    let ret = unsafe {
        if op.follows_links() {
            libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr())
        } else {
            libc::lstat(pathname.as_ptr(), raw_meta.as_mut_ptr())
        }
    };
    if ret == -1 {
        Err(err_no())?
    }
    // SAFETY: stat and lstat initialize raw_meta unless they return -1, which is handled above.
    Ok(unsafe { raw_meta.assume_init() })
}
