use std::io::{Read, Write};

use image::RgbImage;

use crate::media::codec_options::CodecOptions;
use crate::media::image::iterators::{ChannelIter, ChannelIterMut};
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds an LSB Image Decoder that implements `Read`
    pub fn decoder<'i>(input: &'i RgbImage, opts: &CodecOptions) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(
            ChannelIter::from_image(input, opts.channels),
            OneBitUnveil,
        ))
    }

    /// builds an LSB Image Encoder that implements `Write`
    pub fn encoder<'i>(carrier: &'i mut RgbImage, opts: &CodecOptions) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(
            ChannelIterMut::from_image(carrier, opts.channels),
            OneBitHide.into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::codec_options::ChannelSelector;
    use crate::test_utils::prepare_linear_image;

    #[test]
    fn should_encode_and_decode_through_the_same_traversal() {
        let mut img = prepare_linear_image(8, 8);
        let secret_message = "Hello World!".as_bytes();
        let opts = CodecOptions::default();

        {
            LsbCodec::encoder(&mut img, &opts)
                .write_all(secret_message)
                .expect("Cannot write to codec");
        }
        let mut buf = vec![0; secret_message.len()];
        LsbCodec::decoder(&img, &opts)
            .read_exact(&mut buf[..])
            .expect("Cannot read 12 bytes from codec");

        let msg = String::from_utf8(buf).expect("Cannot convert result to string");
        assert_eq!(msg, "Hello World!");
    }

    #[test]
    fn should_not_decode_with_a_different_selector_than_was_encoded() {
        // even LSBs everywhere, so a foreign selector reads all zero bytes
        let mut img = prepare_linear_image(16, 16);
        for p in img.pixels_mut() {
            for c in p.0.iter_mut() {
                *c &= 0xFE;
            }
        }

        let opts = CodecOptions {
            channels: ChannelSelector::Channel0,
            ..CodecOptions::default()
        };
        {
            LsbCodec::encoder(&mut img, &opts)
                .write_all(b"payload")
                .expect("Cannot write to codec");
        }

        let foreign = CodecOptions {
            channels: ChannelSelector::Channel1,
            ..CodecOptions::default()
        };
        let mut buf = vec![0u8; 7];
        LsbCodec::decoder(&img, &foreign)
            .read_exact(&mut buf)
            .expect("Cannot read from codec");

        assert_eq!(buf, vec![0u8; 7], "foreign selector must not see the payload");
    }
}
