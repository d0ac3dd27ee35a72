pub mod codec;
pub mod spectrum;

pub use codec::FrequencyCodec;
pub use spectrum::{Plane, Spectrum};
