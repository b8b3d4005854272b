//! Minimal PCM16 mono WAV writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write mono `f32` samples as a 16-bit PCM WAV file.
pub fn write_wav(path: &Path, sample_rate: u32, samples: &[f32]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    let data_len = (samples.len() * 2) as u32;
    let byte_rate = sample_rate * 2;

    out.write_all(b"RIFF")?;
    out.write_all(&(36 + data_len).to_le_bytes())?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?;
    out.write_all(&1u16.to_le_bytes())?; // PCM
    out.write_all(&1u16.to_le_bytes())?; // mono
    out.write_all(&sample_rate.to_le_bytes())?;
    out.write_all(&byte_rate.to_le_bytes())?;
    out.write_all(&2u16.to_le_bytes())?; // block align
    out.write_all(&16u16.to_le_bytes())?; // bits per sample

    out.write_all(b"data")?;
    out.write_all(&data_len.to_le_bytes())?;
    for sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let value = (clamped * i16::MAX as f32) as i16;
        out.write_all(&value.to_le_bytes())?;
    }
    out.flush()
}
