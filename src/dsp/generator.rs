//! Additive signal generator.
//!
//! Sums the active harmonics as plain sinusoids on a shared time axis and
//! peak-normalizes the result to unit amplitude.

use crate::error::{SynthError, SynthResult};
use crate::harmonic::HarmonicSpec;

use super::mixer::Mixer;
use super::waveform::Waveform;

/// Number of samples covering `duration_seconds` at `sample_rate_hz`
/// (`floor(rate * duration)`).
///
/// Requests that went through `SynthesisRequest::clamped` stay at or below
/// 132 300 samples. Products past `usize::MAX` saturate.
pub fn sample_count(sample_rate_hz: u32, duration_seconds: f64) -> usize {
    let n = (sample_rate_hz as f64 * duration_seconds).floor();
    if n > 0.0 { n as usize } else { 0 }
}

/// Render the additive waveform for the active entries of `harmonics`.
///
/// `active_mask[k]` switches `harmonics[k]` on. The output holds
/// `floor(sample_rate_hz * duration_seconds)` samples; sample `i` sits at
/// `t = i / sample_rate_hz`. When at least one partial is audible the
/// result peaks at exactly 1.0, otherwise it is all zeros.
pub fn generate(
    fundamental_hz: f64,
    duration_seconds: f64,
    sample_rate_hz: u32,
    active_mask: &[bool],
    harmonics: &[HarmonicSpec],
) -> SynthResult<Waveform> {
    if sample_rate_hz == 0 {
        return Err(SynthError::InvalidSampleRate {
            rate: sample_rate_hz,
        });
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(SynthError::InvalidDuration {
            duration: duration_seconds,
        });
    }
    if !fundamental_hz.is_finite() || fundamental_hz <= 0.0 {
        return Err(SynthError::InvalidFrequency {
            freq: fundamental_hz,
        });
    }
    if active_mask.len() != harmonics.len() {
        return Err(SynthError::MaskLength {
            expected: harmonics.len(),
            found: active_mask.len(),
        });
    }

    let len = sample_count(sample_rate_hz, duration_seconds);
    let sample_rate = sample_rate_hz as f64;
    let mut mixer = Mixer::new(len);

    let mut active = 0;
    for (spec, _) in harmonics
        .iter()
        .zip(active_mask)
        .filter(|&(_, &on)| on)
    {
        mixer.add_sine(spec.frequency(fundamental_hz), spec.base_amplitude, sample_rate);
        active += 1;
    }

    log::debug!(
        "generated {len} samples at {sample_rate_hz} Hz from {active} harmonic(s) of {fundamental_hz} Hz, raw peak {:.4}",
        mixer.peak()
    );

    Ok(Waveform::new(mixer.into_normalized(), sample_rate_hz))
}
