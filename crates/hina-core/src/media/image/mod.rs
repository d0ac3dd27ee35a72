pub(crate) mod iterators;
pub mod lsb_codec;
pub mod mask_codec;

pub use lsb_codec::LsbCodec;
pub use mask_codec::MaskCodec;
