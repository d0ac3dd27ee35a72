use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbImage};
use std::io::Write;

use hina_core::media::image::LsbCodec;
use hina_core::CodecOptions;

pub fn lsb_encoding(c: &mut Criterion) {
    c.bench_function("LSB Encoding", |b| {
        let mut carrier: RgbImage = ImageBuffer::from_fn(512, 512, |x, y| {
            let i = (x + y * 512) as u8;
            image::Rgb([i, i.wrapping_add(1), i.wrapping_add(2)])
        });
        let secret_message = b"Hello World!";
        let opts = CodecOptions::default();

        b.iter(|| {
            LsbCodec::encoder(&mut carrier, &opts)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, lsb_encoding);
criterion_main!(benches);
