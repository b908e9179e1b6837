//! Rendered waveform and its time axis.

use serde::Serialize;

/// A peak-normalized mono sample sequence at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    sample_rate: u32,
}

/// A short slice of a waveform paired with its time axis, for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformPreview {
    /// Seconds from the start of the waveform.
    pub time: Vec<f64>,
    pub samples: Vec<f64>,
}

impl Waveform {
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Waveform {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds (`len / sample_rate`).
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Time of sample `index` in seconds.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64
    }

    /// Time axis for every sample: `t_i = i / sample_rate`.
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.samples.len()).map(|i| self.time_at(i)).collect()
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        super::mixer::peak(&self.samples)
    }

    /// The first `seconds` worth of samples, truncated to the waveform length.
    pub fn preview(&self, seconds: f64) -> WaveformPreview {
        let wanted = (seconds.max(0.0) * self.sample_rate as f64).floor() as usize;
        let n = wanted.min(self.samples.len());
        WaveformPreview {
            time: (0..n).map(|i| self.time_at(i)).collect(),
            samples: self.samples[..n].to_vec(),
        }
    }

    /// Samples narrowed to `f32` for the browser audio buffer.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples.iter().map(|&s| s as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, sample_rate: u32) -> Waveform {
        let samples = (0..len).map(|i| i as f64 / len as f64).collect();
        Waveform::new(samples, sample_rate)
    }

    #[test]
    fn time_axis_is_half_open() {
        let w = ramp(4, 4);
        assert_eq!(w.time_axis(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(w.duration_seconds(), 1.0);
    }

    #[test]
    fn preview_twenty_ms_at_cd_rate() {
        let w = ramp(44100, 44100);
        let p = w.preview(0.02);
        assert_eq!(p.samples.len(), 882);
        assert_eq!(p.time.len(), 882);
        assert_eq!(p.time[0], 0.0);
        assert!((p.time[881] - 881.0 / 44100.0).abs() < 1e-15);
        assert_eq!(p.samples[..], w.samples()[..882]);
    }

    #[test]
    fn preview_truncates_to_length() {
        let w = ramp(10, 44100);
        let p = w.preview(0.02);
        assert_eq!(p.samples.len(), 10);
        assert_eq!(p.time.len(), 10);
    }

    #[test]
    fn negative_preview_is_empty() {
        let w = ramp(10, 100);
        assert!(w.preview(-1.0).samples.is_empty());
    }

    #[test]
    fn f32_conversion_keeps_length() {
        let w = Waveform::new(vec![0.0, 0.5, -1.0], 8000);
        assert_eq!(w.to_f32(), vec![0.0_f32, 0.5, -1.0]);
        assert_eq!(w.peak(), 1.0);
    }
}
