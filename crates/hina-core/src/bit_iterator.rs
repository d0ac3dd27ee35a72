use std::io::prelude::*;
use std::io::*;
use std::slice;

use crate::result::Result as HinaResult;
use crate::HinaError;

/// Iterates the bits of any `Read`, most significant bit of each byte first.
///
/// This is the canonical byte-to-bit order of the container format: the first
/// bit committed to a carrier channel is bit 7 of the first payload byte.
pub struct BitIterator<I> {
    n: u32,
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            n: 8,
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bit = (self.i % self.n) as u8;
            self.i += 1;
            if bit == 0 {
                self.byte = None;
            }
            if self.byte.is_none() {
                let mut b = 0;
                match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => None,
                    Ok(..) => {
                        self.byte = Some(b);
                        self.byte
                    }
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => None,
                };
            }
            return self.byte.map(|b| (b >> (7 - bit)) & 1);
        }
    }
}

/// Expands bytes to single bits, MSB first, one `0`/`1` per entry.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    BitIterator::new(bytes).collect()
}

/// Collapses a bit sequence back into bytes, MSB first.
///
/// The bit count must be a multiple of 8, there is no implicit zero padding.
pub fn bits_to_bytes(bits: &[u8]) -> HinaResult<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(HinaError::IncompleteBits);
    }

    Ok(bits
        .chunks_exact(8)
        .map(|c| c.iter().fold(0u8, |acc, b| (acc << 1) | (b & 1)))
        .collect())
}
