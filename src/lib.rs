//! tasklist: a flat-file task list manager.
//!
//! Tasks live in a semicolon-delimited text file, one record per line:
//!
//! ```text
//! 1;Buy milk;urgent,home
//! 2;Call Bob;
//! ```
//!
//! The `store` module owns the codec and the in-memory operations; the
//! `task` binary wires them to files and the terminal. Every invocation is
//! one full read-decode-operate-encode-write cycle; the file is the only
//! state carried between runs.

pub mod color;
pub mod config;
pub mod store;
#[doc(hidden)]
pub mod testutil;
