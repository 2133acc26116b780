//! Purpose: Small synchronous helpers for moving JSON between HTTP endpoints and files.
//! Exports: `error`, `fetch`, and `file` modules plus top-level convenience re-exports.
//! Role: Stateless data-access utility layer; every call stands alone.
//! Invariants: All operations block the calling thread; no timeout is configured anywhere.
//! Invariants: HTTP status codes are never treated as failures by the fetch path.
//! Invariants: No call retains state for the next one; concurrent use needs no locks.
pub mod error;
pub mod fetch;
pub mod file;

pub use error::{Error, ErrorKind};
pub use fetch::{GetRequest, data_get};
pub use file::{SaveOptions, json_load, json_save};
