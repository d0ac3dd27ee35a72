//! Frequency-domain watermarking: forward/inverse 2-D FFT per channel,
//! a blind mask blend into the magnitude component, and a log-scaled
//! rendering of the magnitude spectrum.
//!
//! The blend keeps no record of the original magnitudes, so there is no
//! numeric mask recovery: a frequency watermark is "read" by visual
//! inspection of the rendered spectrum.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbImage};
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::media::codec_options::{ChannelSelector, CodecOptions};
use crate::media::frequency::spectrum::{Plane, Spectrum};

pub struct FrequencyCodec;

impl FrequencyCodec {
    /// Computes the frequency-domain representation of each selected channel.
    pub fn forward(img: &RgbImage, channels: ChannelSelector) -> Spectrum {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let mut planner = FftPlanner::new();

        let planes = channels
            .indices()
            .iter()
            .map(|&c| {
                let mut data: Vec<Complex<f64>> = img
                    .pixels()
                    .map(|p| Complex::new(f64::from(p.0[c]), 0.0))
                    .collect();
                fft2d(&mut planner, &mut data, width, height, Direction::Forward);
                Plane::new(c, data, width, height)
            })
            .collect();

        Spectrum { planes }
    }

    /// Blends a mask into the magnitude component of every plane.
    ///
    /// The mask is fitted to the plane dimensions and added, scaled by
    /// `opts.frequency_gain`, to every coefficient outside the low-frequency
    /// guard band around DC. Phase is left untouched. This is a blind,
    /// non-reversible blend.
    pub fn embed_mask(spectrum: &mut Spectrum, mask: &GrayImage, opts: &CodecOptions) {
        let (width, height) = (spectrum.width(), spectrum.height());
        let fitted = if mask.dimensions() == (width as u32, height as u32) {
            mask.clone()
        } else {
            imageops::resize(mask, width as u32, height as u32, FilterType::Nearest)
        };
        let guard = opts.frequency_guard_band;

        for plane in spectrum.planes.iter_mut() {
            for y in 0..height {
                for x in 0..width {
                    // wrap-around distance to the DC bin
                    let dx = x.min(width - x);
                    let dy = y.min(height - y);
                    if dx < guard && dy < guard {
                        continue;
                    }

                    // the mask is laid out in the centered (fftshifted) view,
                    // so it shows up at its own geometry in the rendering
                    let sx = (x + width / 2) % width;
                    let sy = (y + height / 2) % height;
                    let intensity = f64::from(fitted.get_pixel(sx as u32, sy as u32).0[0]);
                    if intensity == 0.0 {
                        continue;
                    }

                    let c = &mut plane.data[y * width + x];
                    let magnitude = c.norm() + opts.frequency_gain * intensity;
                    *c = Complex::from_polar(magnitude, c.arg());
                }
            }
        }
    }

    /// Reconstructs spatial-domain pixel values from a (possibly
    /// mask-modified) spectrum and writes them back into the carrier's
    /// selected channels, clamped to the channel value range.
    pub fn inverse(spectrum: &Spectrum, img: &mut RgbImage) {
        let (width, height) = (spectrum.width(), spectrum.height());
        let mut planner = FftPlanner::new();
        let norm = 1.0 / (width * height) as f64;

        for plane in spectrum.planes.iter() {
            let mut data = plane.data.clone();
            fft2d(&mut planner, &mut data, width, height, Direction::Inverse);

            for (i, value) in data.iter().enumerate() {
                let v = (value.re * norm).round().clamp(0.0, 255.0) as u8;
                let (x, y) = ((i % width) as u32, (i / width) as u32);
                img.get_pixel_mut(x, y).0[plane.channel] = v;
            }
        }
    }

    /// Renders the magnitude component as a normalized, log-scaled image:
    /// fftshifted so DC sits in the center, `ln(1 + m)` scaled to the full
    /// value range per plane. Grayscale for a single channel, per-channel
    /// RGB when all channels were transformed.
    pub fn render_magnitude(spectrum: &Spectrum) -> DynamicImage {
        let (width, height) = (spectrum.width(), spectrum.height());
        let rendered: Vec<(usize, Vec<u8>)> = spectrum
            .planes
            .iter()
            .map(|p| (p.channel, render_plane(p)))
            .collect();

        if rendered.len() == 1 {
            let (_, plane) = rendered.into_iter().next().expect("one rendered plane");
            DynamicImage::ImageLuma8(
                GrayImage::from_raw(width as u32, height as u32, plane)
                    .expect("rendering has exactly width * height samples"),
            )
        } else {
            let mut img = RgbImage::new(width as u32, height as u32);
            for (channel, plane) in rendered {
                for (i, &v) in plane.iter().enumerate() {
                    let (x, y) = ((i % width) as u32, (i / width) as u32);
                    img.get_pixel_mut(x, y).0[channel] = v;
                }
            }
            DynamicImage::ImageRgb8(img)
        }
    }
}

fn render_plane(plane: &Plane) -> Vec<u8> {
    let (width, height) = (plane.width(), plane.height());
    let mut scaled = vec![0.0f64; width * height];
    let mut max = 0.0f64;

    for y in 0..height {
        for x in 0..width {
            // fftshift: move DC into the center of the rendering
            let sx = (x + width / 2) % width;
            let sy = (y + height / 2) % height;
            let m = (1.0 + plane.data[y * width + x].norm()).ln();
            scaled[sy * width + sx] = m;
            max = max.max(m);
        }
    }

    if max == 0.0 {
        return vec![0; width * height];
    }
    scaled
        .into_iter()
        .map(|m| (m / max * 255.0).round() as u8)
        .collect()
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Forward,
    Inverse,
}

/// In-place 2-D FFT: rows first, then columns through a gather/scatter
/// buffer. The inverse pass is left unnormalized, callers divide by N.
fn fft2d(
    planner: &mut FftPlanner<f64>,
    data: &mut [Complex<f64>],
    width: usize,
    height: usize,
    direction: Direction,
) {
    if width == 0 || height == 0 {
        return;
    }

    let row_fft = match direction {
        Direction::Forward => planner.plan_fft_forward(width),
        Direction::Inverse => planner.plan_fft_inverse(width),
    };
    for row in data.chunks_exact_mut(width) {
        row_fft.process(row);
    }

    let col_fft = match direction {
        Direction::Forward => planner.plan_fft_forward(height),
        Direction::Inverse => planner.plan_fft_inverse(height),
    };
    let mut col_buf = vec![Complex::new(0.0, 0.0); height];
    for col in 0..width {
        for r in 0..height {
            col_buf[r] = data[r * width + col];
        }
        col_fft.process(&mut col_buf);
        for r in 0..height {
            data[r * width + col] = col_buf[r];
        }
    }
}
