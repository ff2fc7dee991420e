mod codec;
mod convert;
mod normalizer;
mod sharpen;

pub use codec::ImageCodec;
pub use normalizer::ImageNormalizer;
pub use sharpen::UnsharpMask;

pub(crate) use convert::from_dynamic;
