use std::io::{Read, Seek};

use binrw::BinReaderExt;

use crate::WavError;

/// The canonical 44 byte RIFF/WAVE header, fmt and data chunk included.
#[binrw::binread]
#[derive(Debug, Clone, Copy)]
pub struct WavHeader {
    pub riff: [u8; 4],
    pub file_size: u32,
    pub wave: [u8; 4],
    pub fmt: [u8; 4],
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channel_count: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data: [u8; 4],
    pub data_size: u32,
}

impl WavHeader {
    pub fn byte_len() -> u32 {
        44
    }

    /// Checks the magic markers and the byte rate invariant, everything
    /// that decides whether this is a wav file at all.
    pub fn check(&self) -> Result<(), WavError> {
        if &self.riff != b"RIFF" {
            return Err(WavError::BadMagic("RIFF"));
        }
        if &self.wave != b"WAVE" {
            return Err(WavError::BadMagic("WAVE"));
        }
        if &self.fmt != b"fmt " {
            return Err(WavError::BadMagic("fmt "));
        }
        if &self.data != b"data" {
            return Err(WavError::BadMagic("data"));
        }
        let expected = self.channel_count as u64 * self.sample_rate as u64
            * self.bits_per_sample as u64
            / 8;
        if expected != self.byte_rate as u64 {
            return Err(WavError::ByteRateMismatch {
                expected,
                actual: self.byte_rate,
            });
        }
        Ok(())
    }

    /// Checks that the encoding is one the converter handles, 16 bit
    /// PCM with one or two channels.
    pub fn check_supported(&self) -> Result<(), WavError> {
        if self.audio_format != 1 {
            return Err(WavError::UnsupportedCodec(self.audio_format));
        }
        if !matches!(self.channel_count, 1 | 2) {
            return Err(WavError::UnsupportedChannelCount(self.channel_count));
        }
        if self.bits_per_sample != 16 {
            return Err(WavError::UnsupportedBitDepth(self.bits_per_sample));
        }
        Ok(())
    }
}

/// Reads and validates the header, leaving the reader right before the
/// sample data.
pub fn read_header<RS: Read + Seek>(r: &mut RS) -> Result<WavHeader, WavError> {
    let header: WavHeader = r.read_le()?;
    header.check()?;
    Ok(header)
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, Seek};

    use crate::{read_header, WavError};

    use super::WavHeader;

    fn header_bytes(format: u16, channels: u16, sample_rate: u32, bits: u16, data_size: u32) -> Vec<u8> {
        let byte_rate = channels as u32 * sample_rate * bits as u32 / 8;
        let block_align = channels * bits / 8;
        let mut buf = Vec::with_capacity(44);
        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&(36 + data_size).to_le_bytes());
        buf.extend_from_slice(b"WAVE");
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&format.to_le_bytes());
        buf.extend_from_slice(&channels.to_le_bytes());
        buf.extend_from_slice(&sample_rate.to_le_bytes());
        buf.extend_from_slice(&byte_rate.to_le_bytes());
        buf.extend_from_slice(&block_align.to_le_bytes());
        buf.extend_from_slice(&bits.to_le_bytes());
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_size.to_le_bytes());
        buf
    }

    #[test]
    fn parses_canonical_header() {
        let mut cursor = Cursor::new(header_bytes(1, 2, 44100, 16, 8));
        let header = read_header(&mut cursor).unwrap();
        assert_eq!(header.audio_format, 1);
        assert_eq!(header.channel_count, 2);
        assert_eq!(header.sample_rate, 44100);
        assert_eq!(header.byte_rate, 176400);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_size, 8);
        // the reader must end up right before the sample data
        assert_eq!(cursor.stream_position().unwrap(), WavHeader::byte_len().into());
    }

    #[test]
    fn rejects_bad_magic() {
        for (offset, magic) in [(0usize, "RIFF"), (8, "WAVE"), (12, "fmt "), (36, "data")] {
            let mut bytes = header_bytes(1, 1, 8000, 16, 4);
            bytes[offset..offset + 4].copy_from_slice(b"XXXX");
            let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
            assert!(err.is_not_wav());
            assert!(matches!(err, WavError::BadMagic(m) if m == magic));
        }
    }

    #[test]
    fn rejects_byte_rate_mismatch() {
        let mut bytes = header_bytes(1, 1, 8000, 16, 4);
        bytes[28..32].copy_from_slice(&12345u32.to_le_bytes());
        let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
        assert!(err.is_not_wav());
        assert!(matches!(
            err,
            WavError::ByteRateMismatch {
                expected: 16000,
                actual: 12345
            }
        ));
    }

    #[test]
    fn rejects_truncated_header() {
        let bytes = header_bytes(1, 1, 8000, 16, 4);
        let err = read_header(&mut Cursor::new(&bytes[..20])).unwrap_err();
        assert!(err.is_not_wav());
        assert!(matches!(err, WavError::Parse(..)));
    }

    #[test]
    fn classifies_unsupported_formats() {
        let supported = read_header(&mut Cursor::new(header_bytes(1, 1, 8000, 16, 4))).unwrap();
        supported.check_supported().unwrap();

        // IEEE float PCM
        let float = read_header(&mut Cursor::new(header_bytes(3, 1, 8000, 16, 4))).unwrap();
        let err = float.check_supported().unwrap_err();
        assert!(!err.is_not_wav());
        assert!(matches!(err, WavError::UnsupportedCodec(3)));

        let quad = read_header(&mut Cursor::new(header_bytes(1, 4, 8000, 16, 4))).unwrap();
        assert!(matches!(
            quad.check_supported().unwrap_err(),
            WavError::UnsupportedChannelCount(4)
        ));

        let eight_bit = read_header(&mut Cursor::new(header_bytes(1, 1, 8000, 8, 4))).unwrap();
        assert!(matches!(
            eight_bit.check_supported().unwrap_err(),
            WavError::UnsupportedBitDepth(8)
        ));
    }
}
