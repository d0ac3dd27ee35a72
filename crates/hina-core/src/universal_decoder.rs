use std::io::{BufWriter, Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

/// A rule for reading one payload bit back out of one carrier channel value.
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: u8) -> bool;
}

/// The low bit of a channel value, which is both the LSB rule and the
/// parity rule on the read side.
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 1) > 0
    }
}

/// Generic stegano decoder: reassembles bytes, MSB first, from the bits
/// carried by a channel traversal.
pub struct Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per channel value
        let items_to_take = buf.len() << 3;
        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, BigEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            let bit = self.algorithm.decode(carrier);
            bit_buffer.write_bit(bit)?;
            bits_read += 1;
        }

        // a trailing partial byte is zero padded into the buffer but
        // excluded from the reported count, only whole bytes are counted
        if !bit_buffer.byte_aligned() {
            bit_buffer.byte_align()?;
        }

        Ok(bits_read >> 3)
    }
}
