// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Whole-file reads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{ByteBuf, ReadError};

/// Reads the whole file at `path`.
///
/// # Errors
/// [`ReadError::Io`] if the file cannot be opened or read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ReadError> {
    read_file_at(path.as_ref())
}

#[instrument(level = "debug")]
fn read_file_at(path: &Path) -> Result<Vec<u8>, ReadError> {
    let bytes = std::fs::read(path).inspect_err(|err| warn!(error = %err, "read failed"))?;
    debug!(bytes = bytes.len(), "read file");
    Ok(bytes)
}

/// Reads the whole file at `path` into `buf`, replacing its contents.
///
/// Returns the number of bytes read. The file is read until EOF, so sources
/// that report a size of zero (procfs, pipes, devices) are filled correctly.
/// At most `capacity + 1` bytes are ever pulled from the file.
///
/// # Errors
/// - [`ReadError::BufferTooSmall`] if the file holds more than
///   `buf.capacity()` bytes. `len` is the reported file size, or the number of
///   bytes read before giving up when the size is not known up front.
/// - [`ReadError::Io`] if the file cannot be opened or read.
///
/// `buf` is unchanged on every error.
pub fn read_file_into(path: impl AsRef<Path>, buf: &mut ByteBuf<'_>) -> Result<usize, ReadError> {
    read_file_into_at(path.as_ref(), buf)
}

#[instrument(level = "debug", skip(buf), fields(capacity = buf.capacity()))]
fn read_file_into_at(path: &Path, buf: &mut ByteBuf<'_>) -> Result<usize, ReadError> {
    let capacity = buf.capacity();
    let file = File::open(path).inspect_err(|err| warn!(error = %err, "open failed"))?;
    let reported = file
        .metadata()
        .inspect_err(|err| warn!(error = %err, "metadata failed"))?
        .len();
    let reported = usize::try_from(reported).unwrap_or(usize::MAX);
    if reported > capacity {
        warn!(len = reported, capacity, "file does not fit buffer");
        return Err(ReadError::BufferTooSmall {
            len: reported,
            capacity,
        });
    }

    let limit = u64::try_from(capacity).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::with_capacity(reported);
    file.take(limit)
        .read_to_end(&mut bytes)
        .inspect_err(|err| warn!(error = %err, "read failed"))?;
    if bytes.len() > capacity {
        warn!(read = bytes.len(), capacity, "file grew past buffer");
        return Err(ReadError::BufferTooSmall {
            len: bytes.len().max(reported),
            capacity,
        });
    }

    buf.copy_from(&bytes)
        .inspect_err(|err| warn!(error = %err, "buffer copy failed"))?;
    debug!(bytes = bytes.len(), "read file into buffer");
    Ok(bytes.len())
}
