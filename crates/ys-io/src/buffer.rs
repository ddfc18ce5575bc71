// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-capacity byte buffer over caller storage.

use crate::BufError;

/// Byte buffer that never grows.
///
/// Capacity is the length of the backing slice. Writes that would exceed it
/// return [`BufError::Capacity`] and leave the buffer untouched.
///
/// # Examples
/// ```
/// use ys_io::ByteBuf;
/// let mut storage = [0u8; 8];
/// let mut buf = ByteBuf::new(&mut storage);
/// buf.copy_from(b"ys").unwrap();
/// buf.push(b"-io").unwrap();
/// assert_eq!(buf.as_str().unwrap(), "ys-io");
/// assert!(buf.push(b"overflow").is_err());
/// assert_eq!(buf.len(), 5);
/// ```
#[derive(Debug)]
pub struct ByteBuf<'a> {
    storage: &'a mut [u8],
    len: usize,
}

impl<'a> ByteBuf<'a> {
    /// Wraps `storage` as an empty buffer.
    pub fn new(storage: &'a mut [u8]) -> Self {
        Self { storage, len: 0 }
    }

    /// Number of bytes in use.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// `true` when no bytes are in use.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes in use.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Contents as UTF-8.
    ///
    /// # Errors
    /// [`BufError::Utf8`] if the bytes in use are not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, BufError> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }

    /// Marks the buffer empty. Storage is not zeroed.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replaces the contents with `src`.
    ///
    /// # Errors
    /// [`BufError::Capacity`] if `src` is longer than the capacity.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<(), BufError> {
        self.check_fits(src.len())?;
        self.storage[..src.len()].copy_from_slice(src);
        self.len = src.len();
        Ok(())
    }

    /// Appends `src` after the bytes in use.
    ///
    /// # Errors
    /// [`BufError::Capacity`] if the result would exceed the capacity.
    pub fn push(&mut self, src: &[u8]) -> Result<(), BufError> {
        let needed = self.len.saturating_add(src.len());
        self.check_fits(needed)?;
        self.storage[self.len..needed].copy_from_slice(src);
        self.len = needed;
        Ok(())
    }

    /// Writes `a` followed by `b` into `dest`, replacing its contents.
    ///
    /// # Errors
    /// [`BufError::Capacity`] if `dest` cannot hold both; `dest` is unchanged.
    pub fn concat(
        a: &ByteBuf<'_>,
        b: &ByteBuf<'_>,
        dest: &mut ByteBuf<'_>,
    ) -> Result<(), BufError> {
        let needed = a.len.saturating_add(b.len);
        dest.check_fits(needed)?;
        dest.storage[..a.len].copy_from_slice(a.as_bytes());
        dest.storage[a.len..needed].copy_from_slice(b.as_bytes());
        dest.len = needed;
        Ok(())
    }

    fn check_fits(&self, needed: usize) -> Result<(), BufError> {
        if needed > self.capacity() {
            return Err(BufError::Capacity {
                needed,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}
