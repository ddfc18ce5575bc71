// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw bytes as vertex data.
//!
//! Any `bytemuck::Pod` type works; the intended targets are the `ys-math`
//! vectors and matrices, which are tightly packed native-endian `f32` arrays.

use std::path::Path;

use bytemuck::{Pod, PodCastError};
use tracing::{debug, warn};

use crate::{read_file, ReadError};

/// Views `bytes` as a slice of `T` without copying.
///
/// # Errors
/// [`ReadError::Layout`] if `bytes` is not aligned for `T` or its length is
/// not a multiple of `size_of::<T>()`.
pub fn cast_vertices<T: Pod>(bytes: &[u8]) -> Result<&[T], ReadError> {
    let vertices: &[T] = bytemuck::try_cast_slice(bytes)
        .inspect_err(|err| warn!(bytes = bytes.len(), error = ?err, "vertex cast failed"))?;
    debug!(bytes = bytes.len(), count = vertices.len(), "cast vertices");
    Ok(vertices)
}

/// Reads the file at `path` as a packed array of `T`.
///
/// The bytes are copied into a `Vec<T>`, so the file data need not be aligned.
///
/// # Errors
/// - [`ReadError::Io`] if the file cannot be read.
/// - [`ReadError::Layout`] if the file length is not a multiple of
///   `size_of::<T>()`, or `T` is zero-sized.
pub fn read_vertices<T: Pod>(path: impl AsRef<Path>) -> Result<Vec<T>, ReadError> {
    let bytes = read_file(path)?;
    let size = std::mem::size_of::<T>();
    if size == 0 {
        warn!("zero-sized vertex type");
        return Err(PodCastError::SizeMismatch.into());
    }
    if bytes.len() % size != 0 {
        warn!(bytes = bytes.len(), size, "trailing bytes after last vertex");
        return Err(PodCastError::OutputSliceWouldHaveSlop.into());
    }
    let vertices: Vec<T> = bytemuck::pod_collect_to_vec(&bytes);
    debug!(bytes = bytes.len(), count = vertices.len(), "read vertices");
    Ok(vertices)
}
