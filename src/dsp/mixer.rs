//! Mixer — Sums sinusoidal partials and peak-normalizes the result.

use std::f64::consts::PI;

/// A summing buffer that accumulates partials sample by sample.
#[derive(Debug, Clone)]
pub struct Mixer {
    buffer: Vec<f64>,
}

impl Mixer {
    pub fn new(num_samples: usize) -> Self {
        Mixer {
            buffer: vec![0.0; num_samples],
        }
    }

    /// Add `amplitude * sin(2π * frequency * t)` to every sample, with
    /// `t = i / sample_rate`.
    pub fn add_sine(&mut self, frequency: f64, amplitude: f64, sample_rate: f64) {
        let omega = 2.0 * PI * frequency;
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let t = i as f64 / sample_rate;
            *slot += amplitude * (omega * t).sin();
        }
    }

    /// Largest absolute value currently in the buffer.
    pub fn peak(&self) -> f64 {
        peak(&self.buffer)
    }

    /// Consume the mixer and return the peak-normalized buffer.
    pub fn into_normalized(mut self) -> Vec<f64> {
        normalize_peak(&mut self.buffer);
        self.buffer
    }
}

/// Maximum absolute sample value, 0.0 for an empty slice.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

/// Scale `samples` so that the largest magnitude becomes 1.0.
///
/// Returns the peak measured before scaling. A silent buffer is left
/// untouched.
pub fn normalize_peak(samples: &mut [f64]) -> f64 {
    let max = peak(samples);
    if max > 0.0 {
        for s in samples.iter_mut() {
            *s /= max;
        }
    } else {
        log::trace!("skipping normalization of silent buffer ({} samples)", samples.len());
    }
    max
}
