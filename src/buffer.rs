//! Buffer assembly for decoded sample data.

use byteorder::{ByteOrder, LittleEndian};

pub fn concat_buffers(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

pub fn concat_all<B: AsRef<[u8]>>(buffers: &[B]) -> Vec<u8> {
    let len = buffers.iter().map(|b| b.as_ref().len()).sum();
    let mut out = Vec::with_capacity(len);
    for b in buffers {
        out.extend_from_slice(b.as_ref());
    }
    out
}

/// Writes `samples` into `buf` at `offset`, one byte each (`num_bytes == 1`,
/// low 8 bits) or two little-endian bytes each (`num_bytes == 2`).
///
/// Other widths write nothing. Panics if `buf` is too short.
pub fn fill_buffer(samples: &[u16], buf: &mut [u8], offset: usize, num_bytes: u32) {
    match num_bytes {
        1 => {
            for (dst, &s) in buf[offset..offset + samples.len()].iter_mut().zip(samples) {
                *dst = s as u8;
            }
        }
        2 => {
            let dst = &mut buf[offset..offset + samples.len() * 2];
            LittleEndian::write_u16_into(samples, dst);
        }
        _ => {
            debug!(num_bytes, "fill_buffer: unsupported sample width, nothing written");
        }
    }
}

/// Averages interleaved RGB triples into one grey byte per pixel at `offset`.
///
/// A trailing pixel with missing components is written as 0.
pub fn fill_buffer_rgb(rgb: &[u8], buf: &mut [u8], offset: usize) {
    let pixels = (rgb.len() + 1) / 3;

    for (i, dst) in buf[offset..offset + pixels].iter_mut().enumerate() {
        *dst = match rgb.get(i * 3..i * 3 + 3) {
            Some(&[r, g, b]) => ((u16::from(r) + u16::from(g) + u16::from(b) + 1) / 3) as u8,
            _ => 0,
        };
    }
}
