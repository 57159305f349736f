use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const VALUES_PER_LINE: usize = 20;

/// Derives an output path next to the input, extension swapped.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Writes every sample as a little endian i16, the 12 bit value sits in
/// the low bits of the 16 bit slot.
pub fn write_bin<W: Write>(w: &mut W, samples: &[u16]) -> io::Result<()> {
    for &sample in samples {
        w.write_all(&(sample as i16).to_le_bytes())?;
    }
    Ok(())
}

/// Writes the samples as `0x%03x, ` literals, 20 per line. The newline
/// goes before the value that starts a new line, so the last line is
/// never terminated.
pub fn write_hex<W: Write>(w: &mut W, samples: &[u16]) -> io::Result<()> {
    for (idx, sample) in samples.iter().enumerate() {
        if idx != 0 && idx % VALUES_PER_LINE == 0 {
            writeln!(w)?;
        }
        write!(w, "0x{sample:03x}, ")?;
    }
    Ok(())
}
