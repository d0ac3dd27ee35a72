use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use image::RgbImage;
use image::imageops::{self, FilterType};
use log::error;

use crate::error::HinaError;
use crate::media::codec_options::ChannelSelector;
use crate::result::Result;

use super::Persist;

/// A carrier image: the mutable pixel grid that data is hidden in.
///
/// Carriers are three channel RGB with 8 bit per channel. Any format the
/// `image` crate can decode is accepted as input; output is always written
/// as PNG so the bit plane survives a lossless encode.
#[derive(Debug)]
pub struct Carrier {
    img: RgbImage,
}

impl Carrier {
    pub fn from_image(img: RgbImage) -> Self {
        Self { img }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        if !f.exists() {
            return Err(HinaError::InputNotFound(f.to_owned()));
        }
        let Some(ext) = f.extension() else {
            return Err(HinaError::UnsupportedMedia);
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "bmp" => Ok(Self {
                img: image::open(f)
                    .map_err(|_e| HinaError::InvalidImageMedia)?
                    .to_rgb8(),
            }),
            _ => Err(HinaError::UnsupportedMedia),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Number of payload bits the selected channels can carry.
    pub fn capacity_bits(&self, channels: ChannelSelector) -> usize {
        self.img.width() as usize * self.img.height() as usize * channels.per_pixel()
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.img
    }

    /// Rescales the carrier to the given dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.img = imageops::resize(&self.img, width, height, FilterType::Lanczos3);
    }

    /// Mirrors the carrier along the vertical axis (left-right flip).
    pub fn mirror_x(&mut self) {
        self.img = imageops::flip_horizontal(&self.img);
    }

    /// Mirrors the carrier along the horizontal axis (top-bottom flip).
    pub fn mirror_y(&mut self) {
        self.img = imageops::flip_vertical(&self.img);
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            HinaError::WriteError { source: e }
        })?;
        self.img
            .write_to(&mut BufWriter::new(f), image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                HinaError::ImageEncodingError
            })
    }
}

/// Loads a mask image as a grayscale intensity grid.
pub fn load_mask(f: &Path) -> Result<image::GrayImage> {
    if !f.exists() {
        return Err(HinaError::InputNotFound(f.to_owned()));
    }
    Ok(image::open(f)
        .map_err(|_e| HinaError::InvalidImageMedia)?
        .to_luma8())
}
