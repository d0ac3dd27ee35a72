use std::io::{Result, Write};

use enum_dispatch::enum_dispatch;

use crate::bit_iterator::BitIterator;

/// A rule for committing one payload bit into one carrier channel value.
#[enum_dispatch]
pub trait HideAlgorithm {
    fn hide(&self, carrier: &mut u8, bit: bool);
}

#[enum_dispatch(HideAlgorithm)]
pub enum HideAlgorithms {
    OneBitHide,
    ParityHide,
}

/// Overwrites the least significant bit of the carrier value.
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn hide(&self, carrier: &mut u8, bit: bool) {
        *carrier = (*carrier & (u8::MAX - 1)) | if bit { 1 } else { 0 };
    }
}

/// Adjusts the carrier value by at most 1 so that its parity equals the bit.
///
/// Reads back identically to [`OneBitHide`] but perturbs the value instead of
/// clobbering the low bit, the visually gentler commit used for masks.
/// Saturates at the value range ends, never wraps.
pub struct ParityHide;

impl HideAlgorithm for ParityHide {
    fn hide(&self, carrier: &mut u8, bit: bool) {
        if (*carrier & 1) != u8::from(bit) {
            *carrier = if *carrier == u8::MAX {
                u8::MAX - 1
            } else {
                *carrier + 1
            };
        }
    }
}

/// Generic stegano encoder: commits a byte stream bit by bit onto the
/// channel values yielded by a carrier traversal.
pub struct Encoder<'c, I>
where
    I: Iterator<Item = &'c mut u8>,
{
    pub input: I,
    pub algorithm: HideAlgorithms,
}

impl<'c, I> Encoder<'c, I>
where
    I: Iterator<Item = &'c mut u8>,
{
    pub fn new(input: I, algorithm: HideAlgorithms) -> Self {
        Encoder { input, algorithm }
    }
}

impl<'c, I> Write for Encoder<'c, I>
where
    I: Iterator<Item = &'c mut u8>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        // 1 bit per channel value <=> * 8 <=> << 3
        let items_to_take = buf.len() << 3;
        let mut bits = BitIterator::new(buf);
        let mut bits_written = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            match bits.next() {
                Some(bit) => {
                    self.algorithm.hide(carrier, bit == 1);
                    bits_written += 1;
                }
                None => break,
            }
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bit_hide_should_only_touch_the_lowest_bit() {
        let mut v = 0b1010_1010;
        OneBitHide.hide(&mut v, true);
        assert_eq!(v, 0b1010_1011);
        OneBitHide.hide(&mut v, false);
        assert_eq!(v, 0b1010_1010);
    }

    #[test]
    fn parity_hide_should_perturb_by_at_most_one() {
        for v in 0..=u8::MAX {
            for bit in [false, true] {
                let mut committed = v;
                ParityHide.hide(&mut committed, bit);
                assert_eq!(committed & 1, u8::from(bit), "parity wrong for {v}");
                assert!(v.abs_diff(committed) <= 1, "perturbation > 1 for {v}");
            }
        }
    }

    #[test]
    fn parity_hide_should_saturate_instead_of_wrapping() {
        let mut v = u8::MAX;
        ParityHide.hide(&mut v, false);
        assert_eq!(v, u8::MAX - 1);

        let mut v = 0;
        ParityHide.hide(&mut v, true);
        assert_eq!(v, 1);
    }

    #[test]
    fn should_commit_a_byte_msb_first() {
        let mut carrier = vec![0u8; 8];
        {
            let mut enc = Encoder::new(carrier.iter_mut(), OneBitHide.into());
            assert_eq!(enc.write(&[0b1100_0101]).unwrap(), 1);
        }
        assert_eq!(carrier, vec![1, 1, 0, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn should_report_a_short_write_when_the_carrier_is_exhausted() {
        let mut carrier = vec![0u8; 8];
        let mut enc = Encoder::new(carrier.iter_mut(), OneBitHide.into());

        assert_eq!(enc.write(&[0xAB, 0xCD]).unwrap(), 1);
        assert_eq!(enc.write(&[0xCD]).unwrap(), 0);
    }
}
