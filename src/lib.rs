pub mod converter;
pub mod structs;
pub mod writer;

pub use structs::{read_header, WavHeader};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum WavError {
    #[error("failed to decode the header")]
    Parse(#[from] binrw::Error),
    #[error("bad magic for the {0} marker")]
    BadMagic(&'static str),
    #[error("byte rate {actual} doesn't match channels * sample rate * bytes per sample = {expected}")]
    ByteRateMismatch { expected: u64, actual: u32 },
    #[error("codec {0} is not PCM")]
    UnsupportedCodec(u16),
    #[error("only mono and stereo are supported, got {0} channels")]
    UnsupportedChannelCount(u16),
    #[error("only 16 bits per sample are supported, got {0}")]
    UnsupportedBitDepth(u16),
}

impl WavError {
    /// Whether the input isn't a wav file at all, as opposed to a
    /// well formed wav with an encoding this crate doesn't handle.
    pub fn is_not_wav(&self) -> bool {
        matches!(
            self,
            Self::Parse(..) | Self::BadMagic(..) | Self::ByteRateMismatch { .. }
        )
    }
}
