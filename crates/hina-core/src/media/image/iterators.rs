use std::iter::{Skip, StepBy};
use std::slice::{Iter, IterMut};

use image::RgbImage;

use crate::media::codec_options::ChannelSelector;

const CHANNELS: usize = 3;

/// Read-only traversal over the selected channel values of a carrier.
///
/// The order is row-major over pixels and, within a pixel, the selected
/// channels in ascending index order. It is the single source of embedding
/// and extraction order: encoder and decoder both walk it, which is what
/// makes them mutually invertible. The walk is restartable, constructing a
/// fresh iterator always yields the same sequence.
pub(crate) enum ChannelIter<'a> {
    All(Iter<'a, u8>),
    Single(StepBy<Skip<Iter<'a, u8>>>),
}

impl<'a> ChannelIter<'a> {
    pub fn from_image(input: &'a RgbImage, selector: ChannelSelector) -> Self {
        let samples: &[u8] = input;
        match selector {
            ChannelSelector::All => Self::All(samples.iter()),
            single => Self::Single(samples.iter().skip(single.indices()[0]).step_by(CHANNELS)),
        }
    }
}

impl Iterator for ChannelIter<'_> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ChannelIter::All(i) => i.next().copied(),
            ChannelIter::Single(i) => i.next().copied(),
        }
    }
}

/// Mutable counterpart of [`ChannelIter`], same traversal order.
pub(crate) enum ChannelIterMut<'a> {
    All(IterMut<'a, u8>),
    Single(StepBy<Skip<IterMut<'a, u8>>>),
}

impl<'a> ChannelIterMut<'a> {
    pub fn from_image(input: &'a mut RgbImage, selector: ChannelSelector) -> Self {
        let samples: &mut [u8] = input;
        match selector {
            ChannelSelector::All => Self::All(samples.iter_mut()),
            single => {
                Self::Single(samples.iter_mut().skip(single.indices()[0]).step_by(CHANNELS))
            }
        }
    }
}

impl<'a> Iterator for ChannelIterMut<'a> {
    type Item = &'a mut u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ChannelIterMut::All(i) => i.next(),
            ChannelIterMut::Single(i) => i.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_iterate_all_channels_row_major() {
        let img = prepare_5x5_image();
        let mut iter = ChannelIter::from_image(&img, ChannelSelector::All);

        for y in 0..5 {
            for x in 0..5 {
                let pixel = img.get_pixel(x, y);
                for c in 0..3 {
                    let given = iter
                        .next()
                        .unwrap_or_else(|| panic!("channel {c} at ({x}, {y}) missing"));
                    assert_eq!(given, pixel.0[c], "channel {c} at ({x}, {y}) wrong");
                }
            }
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn should_visit_exactly_one_value_per_pixel_for_a_single_channel() {
        let img = prepare_5x5_image();
        let mut iter = ChannelIter::from_image(&img, ChannelSelector::Channel1);

        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(iter.next().unwrap(), img.get_pixel(x, y).0[1]);
            }
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn should_be_restartable_with_a_stable_order() {
        let img = prepare_5x5_image();
        let first: Vec<u8> = ChannelIter::from_image(&img, ChannelSelector::Channel2).collect();
        let second: Vec<u8> = ChannelIter::from_image(&img, ChannelSelector::Channel2).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 25);
    }

    #[test]
    fn should_only_mutate_the_selected_channel() {
        let img_ro = prepare_5x5_image();
        let mut img = img_ro.clone();

        for channel in ChannelIterMut::from_image(&mut img, ChannelSelector::Channel0) {
            *channel = 0;
        }

        for (p_before, p_after) in img_ro.pixels().zip(img.pixels()) {
            assert_eq!(p_after.0[0], 0);
            assert_eq!(p_after.0[1], p_before.0[1]);
            assert_eq!(p_after.0[2], p_before.0[2]);
        }
    }
}
