// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ys-io: byte buffers, file reads and vertex casts.
//!
//! Everything here is blocking `std::fs` I/O with typed errors. The math crates
//! stay pure; this crate is where raw bytes become `&[Vec3]` or `Vec<Mat4>`.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod buffer;
mod error;
mod file;
mod vertex;

pub use buffer::ByteBuf;
pub use error::{BufError, ReadError};
pub use file::{read_file, read_file_into};
pub use vertex::{cast_vertices, read_vertices};
