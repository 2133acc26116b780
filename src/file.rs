//! Purpose: Whole-file JSON load and save.
//! Exports: `json_load`, `json_save`, `SaveOptions`.
//! Role: File-system boundary; each call opens, transfers, and closes in one step.
//! Invariants: Files are read and written in full; there is no streaming path.
//! Invariants: Saves overwrite in place with no temp-and-rename step, so a failed
//! write can leave a partial file.
//! Invariants: Encode failures happen before any byte reaches disk.

use crate::error::{Error, ErrorKind, io_error_kind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// Encoder flags for [`json_save`]. The default is the compact encoder with
/// no trailing newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SaveOptions {
    pub pretty: bool,
    pub append_newline: bool,
}

/// Reads the file at `path` in full and decodes it as JSON.
///
/// An unreadable path surfaces as `NotFound`/`Permission`/`Io`, never as a
/// decode error; `Decode` is reserved for files whose bytes are not JSON.
pub fn json_load<T>(path: impl AsRef<Path>) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    debug!("json load - {}", path.display());
    let bytes = std::fs::read(path).map_err(|err| {
        Error::new(io_error_kind(&err))
            .with_message("failed to read file")
            .with_path(path)
            .with_source(err)
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message("file is not valid json")
            .with_path(path)
            .with_source(err)
    })
}

/// Encodes `value` as JSON and writes it to `path`, overwriting any existing
/// content. The parent directory must already exist.
pub fn json_save<T>(value: &T, path: impl AsRef<Path>, options: SaveOptions) -> Result<(), Error>
where
    T: Serialize,
{
    let path = path.as_ref();
    debug!("json save - {}", path.display());
    let encoded = if options.pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    let mut bytes = encoded.map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message("value is not representable as json")
            .with_path(path)
            .with_source(err)
    })?;
    if options.append_newline {
        bytes.push(b'\n');
    }
    std::fs::write(path, &bytes).map_err(|err| {
        Error::new(io_error_kind(&err))
            .with_message("failed to write file")
            .with_path(path)
            .with_source(err)
    })
}
