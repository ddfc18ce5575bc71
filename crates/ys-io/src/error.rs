// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for buffers and file reads.

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors from [`crate::ByteBuf`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufError {
    /// The operation would write past the buffer's capacity.
    #[error("buffer overflow: need {needed} bytes, capacity {capacity}")]
    Capacity {
        /// Bytes the operation would occupy.
        needed: usize,
        /// Fixed capacity of the destination.
        capacity: usize,
    },

    /// Contents are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
}

/// Errors from file reads and byte-to-vertex casts.
#[derive(Debug, Error)]
pub enum ReadError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// File does not fit in the destination buffer.
    #[error("file too large for buffer: {len} bytes, capacity {capacity}")]
    BufferTooSmall {
        /// File size in bytes.
        len: usize,
        /// Capacity of the destination buffer.
        capacity: usize,
    },

    /// Byte length or alignment does not match the target type.
    #[error("layout error: {0}")]
    Layout(#[from] bytemuck::PodCastError),

    /// Buffer operation failed.
    #[error(transparent)]
    Buf(#[from] BufError),
}
