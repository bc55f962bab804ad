//! This crate exposes file metadata, as collected by the `stat` and `lstat` system calls, through
//! strongly typed values.
//!
//! # Purpose
//! Querying a file's metadata is a single system call, but the raw `stat` structure is awkward to
//! use directly: the file type and permission bits share one packed field, timestamps are split
//! across two fields each, and failures are reported via `errno`. This crate translates one call in
//! into one immutable [`Metadata`](fs::Metadata) record out, and nothing more. There is no state,
//! no caching and no retrying.
//!
//! # Error Handling
//! Errors are returned via [`Result`]s, strongly typed using enums for static dispatch, with small
//! structs that implement [`Error`](std::error::Error). A rejected query is an expected outcome
//! which the caller has to branch on, so nothing here panics because a file couldn't be examined.
//! [`StatError`](fs::StatError) keeps the error number reported by the file system distinct from
//! failures within this crate.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers and on `tracing` to report the
//! queries it issues. Some derive macros are used to remove the need for repetitive error types.
//!
//! # Platforms
//! Only Linux is supported, because the layout of `stat` (timestamps in particular) differs
//! between platforms.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod fs;

pub(crate) mod util;
