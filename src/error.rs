use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A checked read wanted `len` bytes at `offset` but the buffer holds
    /// only `available`.
    #[error("read of {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
}

pub type BitsResult<T> = Result<T, BitsError>;

/// Borrows `len` bytes at `offset`, or reports how far short the buffer is.
pub(crate) fn checked_range(buf: &[u8], offset: usize, len: usize) -> BitsResult<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or(BitsError::OutOfBounds {
            offset,
            len,
            available: buf.len(),
        })
}
