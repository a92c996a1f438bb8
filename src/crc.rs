//! CRC-32 (ISO-HDLC, reflected polynomial `0xEDB88320`).

use std::ops::Index;

const POLY32: u32 = 0xEDB88320;

lazy_static! {
    static ref CRC32_TABLE: CrcTable = {
        let table = CrcTable::new();
        trace!(entry1 = table[1], "built crc32 lookup table");
        table
    };
}

/// Lookup table of partial CRC-32 remainders, one per byte value.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable([u32; 256]);

impl CrcTable {
    pub fn new() -> CrcTable {
        let mut table = [0u32; 256];

        for (n, entry) in table.iter_mut().enumerate() {
            let mut c = n as u32;
            for _ in 0..8 {
                c = if (c & 1) != 0 {
                    POLY32 ^ (c >> 1)
                } else {
                    c >> 1
                };
            }
            *entry = c;
        }

        CrcTable(table)
    }

    pub fn entries(&self) -> &[u32; 256] {
        &self.0
    }

    /// Feeds `data` into a raw (non-inverted) accumulator.
    #[inline]
    pub fn update(&self, mut acc: u32, data: &[u8]) -> u32 {
        for &b in data {
            let idx = (acc ^ u32::from(b)) & 0xFF;
            acc = (acc >> 8) ^ self.0[idx as usize];
        }
        acc
    }

    pub fn checksum(&self, data: &[u8]) -> u32 {
        !self.update(!0, data)
    }
}

impl Default for CrcTable {
    fn default() -> Self {
        CrcTable::new()
    }
}

impl Index<usize> for CrcTable {
    type Output = u32;

    fn index(&self, n: usize) -> &u32 {
        &self.0[n]
    }
}

impl std::fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("CrcTable").field(&format_args!("[..256]")).finish()
    }
}

/// The process-wide table, built on first use.
pub fn crc_table() -> &'static CrcTable {
    &CRC32_TABLE
}

pub fn crc32(data: &[u8]) -> u32 {
    CRC32_TABLE.checksum(data)
}

/// Checksums `len` bytes of `buf` starting at `offset` without copying them.
///
/// Panics if the range runs past the end of `buf`.
pub fn crc32_range(buf: &[u8], offset: usize, len: usize) -> u32 {
    crc32(&buf[offset..offset + len])
}

/// Continues a checksum previously returned by [`crc32`] or this function.
pub fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    !CRC32_TABLE.update(!crc, data)
}

/// Incremental CRC-32 over data arriving in chunks.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    acc: u32,
}

impl Crc32 {
    pub fn new() -> Crc32 {
        Crc32 { acc: !0 }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.acc = CRC32_TABLE.update(self.acc, data);
    }

    /// Checksum of everything fed so far. Does not reset the state.
    pub fn value(&self) -> u32 {
        !self.acc
    }

    pub fn finalize(self) -> u32 {
        self.value()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Crc32::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_matches_reference_entries() {
        let table = crc_table();
        assert_eq!(table[0], 0x00000000);
        assert_eq!(table[1], 0x77073096);
        assert_eq!(table[2], 0xEE0E612C);
        assert_eq!(table[128], 0xEDB88320);
        assert_eq!(table[255], 0x2D02EF8D);
    }

    #[test]
    fn rebuilt_table_is_identical() {
        assert_eq!(CrcTable::new(), *crc_table());
        assert_eq!(CrcTable::new().entries(), CrcTable::default().entries());
    }

    #[test]
    fn check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF43926);
    }

    #[test]
    fn empty_input() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(Crc32::new().finalize(), 0);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(crc32(b"hello"), 0x3610_A686);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414F_A339
        );
        assert_eq!(crc32(&[0u8; 32]), 0x190A_55AD);
    }

    #[test]
    fn range_checksums_sub_slice() {
        let buf = b"xx123456789yy";
        assert_eq!(crc32_range(buf, 2, 9), 0xCBF43926);
        assert_eq!(crc32_range(buf, 13, 0), 0);
    }

    #[test]
    #[should_panic]
    fn range_past_end_panics() {
        crc32_range(b"abc", 2, 2);
    }

    #[test]
    fn update_chains_like_zlib() {
        let head = crc32(b"12345");
        assert_eq!(crc32_update(head, b"6789"), 0xCBF43926);
        assert_eq!(crc32_update(0, b"123456789"), 0xCBF43926);
    }

    #[test]
    fn digest_value_does_not_reset() {
        let mut digest = Crc32::default();
        digest.update(b"1234");
        assert_eq!(digest.value(), crc32(b"1234"));
        digest.update(b"56789");
        assert_eq!(digest.finalize(), 0xCBF43926);
    }

    proptest! {
        #[test]
        fn chunking_does_not_change_checksum(data in any::<Vec<u8>>(), split in any::<prop::sample::Index>()) {
            let at = split.index(data.len() + 1);
            let (a, b) = data.split_at(at);

            let mut digest = Crc32::new();
            digest.update(a);
            digest.update(b);
            prop_assert_eq!(digest.finalize(), crc32(&data));
            prop_assert_eq!(crc32_update(crc32(a), b), crc32(&data));
        }
    }
}
