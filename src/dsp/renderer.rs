//! WAV renderer — encodes a waveform into an in-memory WAV image.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::waveform::Waveform;
use crate::error::SynthResult;

/// Convert samples in [-1, 1] to 16-bit PCM, saturating out-of-range values.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * i16::MAX as f64).round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

/// Encode a waveform as a 16-bit mono PCM WAV byte buffer.
pub fn encode_wav(waveform: &Waveform) -> SynthResult<Vec<u8>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buf = Vec::with_capacity(44 + waveform.len() * 2);
    {
        let mut writer = WavWriter::new(Cursor::new(&mut buf), spec)?;
        for sample in to_pcm_i16(waveform.samples()) {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(buf)
}
