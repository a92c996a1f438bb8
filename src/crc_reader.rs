use std::io::{Read, Result};

use crate::crc::Crc32;

/// Checksums and counts every byte read through it.
#[derive(Debug)]
pub struct CrcReader<R: Read> {
    reader: R,
    crc: Crc32,
    count: usize,
}

impl<R: Read> Read for CrcReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = self.reader.read(buf)?;
        self.crc.update(&buf[..count]);
        self.count += count;
        Ok(count)
    }
}

impl<R: Read> CrcReader<R> {
    pub fn new(reader: R) -> CrcReader<R> {
        CrcReader {
            reader,
            crc: Crc32::new(),
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn checksum(&self) -> u32 {
        self.crc.value()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
