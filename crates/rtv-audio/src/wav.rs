// wav.rs — Minimal 16-bit mono WAV writer.
//
// Writes a plain RIFF/PCM file with no metadata chunks, so the same
// samples always produce byte-identical output.

use std::io::{self, Write};

use crate::synth::SAMPLE_RATE;

const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// Write mono f32 samples as a 16-bit PCM WAV file.
///
/// Samples are expected in `[-1.0, 1.0]`; anything outside is clamped.
pub fn write_wav<W: Write>(writer: &mut W, samples: &[f32]) -> io::Result<()> {
    let data_size = (samples.len() * 2) as u32;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);

    // RIFF header.
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk: PCM, mono, 16-bit.
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?;
    writer.write_all(&CHANNELS.to_le_bytes())?;
    writer.write_all(&SAMPLE_RATE.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&block_align.to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk.
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    for sample in samples {
        let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer.write_all(&quantized.to_le_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_sizes_are_correct() {
        let samples = vec![0.0f32; 100];
        let mut out = Vec::new();
        write_wav(&mut out, &samples).unwrap();

        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(&out[36..40], b"data");
        // 44-byte header plus two bytes per sample.
        assert_eq!(out.len(), 44 + 200);
        assert_eq!(u32::from_le_bytes(out[40..44].try_into().unwrap()), 200);
    }

    #[test]
    fn samples_are_clamped_and_quantized() {
        let mut out = Vec::new();
        write_wav(&mut out, &[2.0, -2.0]).unwrap();
        let first = i16::from_le_bytes(out[44..46].try_into().unwrap());
        let second = i16::from_le_bytes(out[46..48].try_into().unwrap());
        assert_eq!(first, i16::MAX);
        assert_eq!(second, -i16::MAX);
    }
}
