//! Metadata queries against the file system, via `stat` and `lstat`.
//!
//! Each query is a single, synchronous system call with no retained state. Results are returned as
//! an immutable [`Metadata`] record, built in one step from the raw `stat` structure, so a failed
//! query never leaves a partially populated record behind.
//!
//! # Errors
//! Failures are strongly typed via [`StatError`], which separates errors reported by the file
//! system from failures to represent the result and failures to issue the query at all. For
//! callers that need a single integer status, see [`StatError::status_code`].
#![cfg(target_os = "linux")]

mod device;
mod error;
mod file_type;
mod metadata;
mod path;
mod protection;
mod query;
mod syscall;
mod time;


pub use device::*;
pub use error::*;
pub use file_type::*;
pub use metadata::*;
pub use protection::*;
pub use query::*;
pub use time::*;
