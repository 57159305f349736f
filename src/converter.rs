/// Result of one conversion pass, samples in [0, 0xFFF] plus the
/// observed extremes. `min` and `max` are both 0 when no complete frame
/// was found in the input.
pub struct Rescaled {
    pub samples: Vec<u16>,
    pub min: u16,
    pub max: u16,
}

/// Maps the signed 16 bit range onto [0, 0xFFF] with truncating division.
fn rescale(sample: i32) -> u16 {
    ((sample + 32768) * 0xFFF / 65535) as u16
}

/// Converts raw little endian PCM bytes to 12 bit samples, averaging
/// stereo frames down to mono. Trailing bytes smaller than one frame
/// are ignored.
pub fn rescale_to_12bit(data: &[u8], channels: u16) -> Rescaled {
    assert!(matches!(channels, 1 | 2));
    let frame_width = channels as usize * 2;
    let mut samples = Vec::with_capacity(data.len() / frame_width);
    let mut min = u16::MAX;
    let mut max = 0;
    for frame in data.chunks_exact(frame_width) {
        let mut sample = i16::from_le_bytes([frame[0], frame[1]]) as i32;
        if channels == 2 {
            sample += i16::from_le_bytes([frame[2], frame[3]]) as i32;
            // truncates towards zero for negative sums
            sample /= 2;
        }
        let rescaled = rescale(sample);
        min = min.min(rescaled);
        max = max.max(rescaled);
        samples.push(rescaled);
    }
    if samples.is_empty() {
        min = 0;
        max = 0;
    }
    Rescaled { samples, min, max }
}
