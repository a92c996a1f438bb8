//! Big-endian IEEE-754 doubles.
//!
//! Decoding is deliberately lossy at the edges: a zero exponent (true zero or
//! subnormal) decodes to `0.0` regardless of sign or mantissa, and an all-ones
//! exponent (infinity or NaN) decodes to the infinity matching the sign bit.

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{checked_range, BitsResult};

const EXPONENT_BIAS: i64 = 1023;
const MANTISSA_BITS: u32 = 52;

pub fn bytes_to_double(data: &[u8; 8]) -> f64 {
    let sign = (data[0] & 0x80) >> 7;
    let exponent = (u16::from(data[0] & 0x7F) << 4) | (u16::from(data[1] & 0xF0) >> 4);

    if exponent == 0 {
        return 0.0;
    }
    if exponent == 0x7FF {
        return if sign == 0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }

    let mantissa = data[2..]
        .iter()
        .fold(u64::from(data[1] & 0x0F), |acc, &b| (acc << 8) | u64::from(b));
    let significand = (mantissa | (1 << MANTISSA_BITS)) as f64;
    let magnitude = scale_by_pow2(significand, i64::from(exponent) - EXPONENT_BIAS - i64::from(MANTISSA_BITS));

    if sign == 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// `value * 2^exp`, exact for the significands produced above. Powers of two
/// are built from exponent bits, which only reaches down to `2^-1022`.
fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    // One step of 2^-1022 keeps every intermediate normal for significands
    // below 2^53.
    const MIN_STEP: i64 = -1022;
    while exp < MIN_STEP {
        value *= f64::from_bits(1 << MANTISSA_BITS); // 2^-1022
        exp -= MIN_STEP;
    }
    value * f64::from_bits(((exp + EXPONENT_BIAS) as u64) << MANTISSA_BITS)
}

/// Decodes the 8 bytes at `offset` in `buf`.
pub fn bytes_to_double_at(buf: &[u8], offset: usize) -> BitsResult<f64> {
    let bytes = checked_range(buf, offset, 8)?;
    let mut data = [0u8; 8];
    data.copy_from_slice(bytes);
    Ok(bytes_to_double(&data))
}

/// Reads the next 8 bytes of `reader` as a big-endian double.
pub fn read_double<R: Read>(reader: &mut R) -> BitsResult<f64> {
    let raw = reader.read_u64::<BigEndian>()?;
    Ok(bytes_to_double(&raw.to_be_bytes()))
}
