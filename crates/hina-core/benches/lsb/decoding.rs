use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbImage};
use std::io::Read;

use hina_core::media::image::LsbCodec;
use hina_core::CodecOptions;

pub fn lsb_decoding(c: &mut Criterion) {
    c.bench_function("LSB Decoding", |b| {
        let carrier: RgbImage = ImageBuffer::from_fn(512, 512, |x, y| {
            let i = (x + y * 512) as u8;
            image::Rgb([i, i.wrapping_add(1), i.wrapping_add(2)])
        });
        let opts = CodecOptions::default();
        let mut buf = [0; 13];

        b.iter(|| {
            LsbCodec::decoder(&carrier, &opts)
                .read_exact(&mut buf)
                .expect("Failed to read 13 bytes");
        })
    });
}

criterion_group!(benches, lsb_decoding);
criterion_main!(benches);
