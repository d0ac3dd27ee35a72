use crate::HinaError;

/// Which color channels of the carrier participate in bit traversal.
///
/// The numeric form (0..=3) matches the command line contract: 0, 1 and 2
/// pick a single stored channel, 3 uses all of them. Selecting [`All`]
/// triples the per-pixel capacity versus a single channel.
///
/// [`All`]: ChannelSelector::All
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelector {
    Channel0,
    Channel1,
    Channel2,
    All,
}

impl ChannelSelector {
    /// The channel indices visited per pixel, in ascending order.
    pub fn indices(&self) -> &'static [usize] {
        match self {
            ChannelSelector::Channel0 => &[0],
            ChannelSelector::Channel1 => &[1],
            ChannelSelector::Channel2 => &[2],
            ChannelSelector::All => &[0, 1, 2],
        }
    }

    /// How many channel values one pixel contributes to the traversal.
    pub fn per_pixel(&self) -> usize {
        self.indices().len()
    }
}

impl Default for ChannelSelector {
    fn default() -> Self {
        ChannelSelector::All
    }
}

impl TryFrom<u8> for ChannelSelector {
    type Error = HinaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChannelSelector::Channel0),
            1 => Ok(ChannelSelector::Channel1),
            2 => Ok(ChannelSelector::Channel2),
            3 => Ok(ChannelSelector::All),
            other => Err(HinaError::UnsupportedChannelSelector(other)),
        }
    }
}

/// Codec configuration for embedding and extraction.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// The channels that carry payload bits.
    pub channels: ChannelSelector,

    /// Luminance threshold for reducing a mask image to one bit per pixel.
    /// Values at or above the threshold become bit 1.
    pub mask_threshold: u8,

    /// Scale applied to a mask intensity before it is added into a
    /// spectrum magnitude. Higher values make the watermark stand out more
    /// in the rendered spectrum at the cost of spatial-domain distortion.
    pub frequency_gain: f64,

    /// Radius (in frequency bins around DC, per axis) of the low-frequency
    /// band that a frequency-domain mask blend leaves untouched. Writing
    /// into the lowest frequencies distorts the image visibly.
    pub frequency_guard_band: usize,
}

impl Default for CodecOptions {
    /// The golden options
    fn default() -> Self {
        Self {
            channels: ChannelSelector::default(),
            mask_threshold: 128,
            frequency_gain: 50.0,
            frequency_guard_band: 8,
        }
    }
}
