//! Bit-exact primitives for turning raw bytes into numbers: CRC-32, 16/32-bit
//! byte swaps, big-endian IEEE-754 doubles and masks for packed samples.
//!
//! None of the unchecked primitives validate their input; out-of-range reads
//! panic at the access point. The `_at`/`read_` variants return [`BitsResult`].

extern crate byteorder;
#[macro_use]
extern crate lazy_static;
extern crate thiserror;
#[macro_use]
extern crate tracing;

mod buffer;
mod crc;
mod crc_reader;
mod double;
mod error;
mod mask;
mod strings;
mod swap;

pub use buffer::{concat_all, concat_buffers, fill_buffer, fill_buffer_rgb};
pub use crc::{crc32, crc32_range, crc32_update, crc_table, Crc32, CrcTable};
pub use crc_reader::CrcReader;
pub use double::{bytes_to_double, bytes_to_double_at, read_double};
pub use error::{BitsError, BitsResult};
pub use mask::{create_bit_mask, SampleLayout};
pub use strings::{
    camel_case_to_title_case, dec2hex, safe_parse_float, safe_parse_int, string_at,
    strip_leading_zeros, trim,
};
pub use swap::{swap16, swap32};
