use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbImage};

use crate::media::codec_options::CodecOptions;
use crate::media::image::iterators::{ChannelIter, ChannelIterMut};
use crate::universal_decoder::{OneBitUnveil, UnveilAlgorithm};
use crate::universal_encoder::{HideAlgorithm, ParityHide};

/// Commits and renders per-pixel watermark masks on the parity plane.
///
/// Unlike the file codec there is no framing: every selected channel of every
/// pixel carries the mask bit of its pixel, and extraction renders whatever
/// parity pattern is present, watermark or natural image noise alike.
pub struct MaskCodec;

impl MaskCodec {
    /// Reduces the mask to one bit per carrier pixel and writes it into the
    /// selected channels via the parity rule.
    ///
    /// The mask is fitted to the carrier dimensions with nearest-neighbor
    /// sampling and binarized by `opts.mask_threshold` (at or above → 1).
    pub fn embed(carrier: &mut RgbImage, mask: &GrayImage, opts: &CodecOptions) {
        let bits = binarize(mask, carrier.width(), carrier.height(), opts.mask_threshold);
        let per_pixel = opts.channels.per_pixel();

        for (i, channel) in ChannelIterMut::from_image(carrier, opts.channels).enumerate() {
            ParityHide.hide(channel, bits[i / per_pixel]);
        }
    }

    /// Renders the parity plane of the selected channels as an image:
    /// bit 1 → 255, bit 0 → 0. Grayscale for a single channel, per-channel
    /// RGB when all channels are selected.
    pub fn extract(carrier: &RgbImage, opts: &CodecOptions) -> DynamicImage {
        let (width, height) = carrier.dimensions();
        let plane: Vec<u8> = ChannelIter::from_image(carrier, opts.channels)
            .map(|c| if OneBitUnveil.decode(c) { u8::MAX } else { 0 })
            .collect();

        match opts.channels.per_pixel() {
            3 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(width, height, plane)
                    .expect("parity plane has exactly width * height * 3 samples"),
            ),
            _ => DynamicImage::ImageLuma8(
                GrayImage::from_raw(width, height, plane)
                    .expect("parity plane has exactly width * height samples"),
            ),
        }
    }
}

/// One bit per carrier pixel, row-major.
fn binarize(mask: &GrayImage, width: u32, height: u32, threshold: u8) -> Vec<bool> {
    let fitted = if mask.dimensions() == (width, height) {
        mask.clone()
    } else {
        imageops::resize(mask, width, height, FilterType::Nearest)
    };

    fitted.pixels().map(|p| p.0[0] >= threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::codec_options::ChannelSelector;
    use crate::test_utils::{prepare_checker_mask, prepare_linear_image};

    #[test]
    fn should_roundtrip_a_mask_on_the_parity_plane() {
        let mut carrier = prepare_linear_image(8, 8);
        let mask = prepare_checker_mask(8, 8);
        let opts = CodecOptions::default();

        MaskCodec::embed(&mut carrier, &mask, &opts);
        let rendered = MaskCodec::extract(&carrier, &opts).to_rgb8();

        for (x, y, p) in rendered.enumerate_pixels() {
            let expected = if mask.get_pixel(x, y).0[0] >= opts.mask_threshold {
                u8::MAX
            } else {
                0
            };
            assert_eq!(p.0, [expected; 3], "parity bit at ({x}, {y}) wrong");
        }
    }

    #[test]
    fn should_perturb_each_channel_by_at_most_one() {
        let carrier_ro = prepare_linear_image(8, 8);
        let mut carrier = carrier_ro.clone();
        let mask = prepare_checker_mask(8, 8);

        MaskCodec::embed(&mut carrier, &mask, &CodecOptions::default());

        for (before, after) in carrier_ro.pixels().zip(carrier.pixels()) {
            for c in 0..3 {
                assert!(before.0[c].abs_diff(after.0[c]) <= 1);
            }
        }
    }

    #[test]
    fn should_render_a_single_channel_as_grayscale() {
        let mut carrier = prepare_linear_image(4, 4);
        let mask = prepare_checker_mask(4, 4);
        let opts = CodecOptions {
            channels: ChannelSelector::Channel2,
            ..CodecOptions::default()
        };

        MaskCodec::embed(&mut carrier, &mask, &opts);
        let rendered = MaskCodec::extract(&carrier, &opts);

        let gray = match rendered {
            DynamicImage::ImageLuma8(g) => g,
            other => panic!("expected grayscale rendering, got {other:?}"),
        };
        for (x, y, p) in gray.enumerate_pixels() {
            let expected = if mask.get_pixel(x, y).0[0] >= 128 { u8::MAX } else { 0 };
            assert_eq!(p.0[0], expected, "parity bit at ({x}, {y}) wrong");
        }
    }

    #[test]
    fn should_fit_a_differently_sized_mask_to_the_carrier() {
        let mut carrier = prepare_linear_image(16, 16);
        let mask = prepare_checker_mask(4, 4);

        MaskCodec::embed(&mut carrier, &mask, &CodecOptions::default());
        let rendered = MaskCodec::extract(&carrier, &CodecOptions::default());

        assert_eq!(rendered.to_rgb8().dimensions(), (16, 16));
    }
}
