use std::ffi::{CString, OsStr};
use std::os::unix::ffi::OsStrExt;

use super::InteriorNulError;

/// Copies `path` into a nul-terminated buffer for the kernel. Paths are passed through byte for
/// byte, without any normalization.
pub(crate) fn to_c_path(path: &OsStr) -> Result<CString, InteriorNulError> {
    CString::new(path.as_bytes()).map_err(|e| InteriorNulError(e.nul_position()))
}
