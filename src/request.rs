//! Synthesis request: the parameters collected from the lab's controls.
//!
//! Requests deserialize from JSON or JS objects with camelCase field names;
//! any field left out takes its default value.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::dsp::generator::generate;
use crate::dsp::waveform::Waveform;
use crate::error::{SynthError, SynthResult};
use crate::harmonic::{HARMONIC_COUNT, HARMONIC_SERIES, HarmonicRow, harmonic_rows};

/// Output sample rate used by the lab.
pub const SAMPLE_RATE_HZ: u32 = 44100;

/// Allowed fundamental frequencies.
pub const FUNDAMENTAL_RANGE_HZ: RangeInclusive<f64> = 50.0..=880.0;

/// Allowed audio lengths.
pub const DURATION_RANGE_SECONDS: RangeInclusive<f64> = 0.5..=3.0;

pub const DEFAULT_FUNDAMENTAL_HZ: f64 = 220.0;
pub const DEFAULT_DURATION_SECONDS: f64 = 1.5;

/// Length of the waveform slice shown in the plot (20 ms).
pub const PREVIEW_SECONDS: f64 = 0.02;

/// Parameters for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SynthesisRequest {
    pub fundamental_hz: f64,
    pub duration_seconds: f64,
    pub sample_rate_hz: u32,
    /// One flag per entry of [`HARMONIC_SERIES`].
    pub active_mask: [bool; HARMONIC_COUNT],
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        SynthesisRequest {
            fundamental_hz: DEFAULT_FUNDAMENTAL_HZ,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate_hz: SAMPLE_RATE_HZ,
            active_mask: [true, false, false, false, false, false],
        }
    }
}

impl SynthesisRequest {
    /// A request with only the fundamental active.
    pub fn new(fundamental_hz: f64, duration_seconds: f64) -> Self {
        SynthesisRequest {
            fundamental_hz,
            duration_seconds,
            ..Default::default()
        }
    }

    /// Switch one harmonic (0-based index) on or off. Indices past the
    /// table are ignored.
    pub fn with_active(mut self, index: usize, on: bool) -> Self {
        if let Some(flag) = self.active_mask.get_mut(index) {
            *flag = on;
        }
        self
    }

    pub fn with_mask(mut self, mask: [bool; HARMONIC_COUNT]) -> Self {
        self.active_mask = mask;
        self
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> SynthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Copy with every parameter pulled into its allowed range.
    ///
    /// Non-finite values fall back to their defaults and the sample rate is
    /// pinned to [`SAMPLE_RATE_HZ`], so a render never exceeds
    /// `SAMPLE_RATE_HZ * 3.0` samples.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.fundamental_hz = clamp_param(
            "fundamentalHz",
            self.fundamental_hz,
            &FUNDAMENTAL_RANGE_HZ,
            DEFAULT_FUNDAMENTAL_HZ,
        );
        out.duration_seconds = clamp_param(
            "durationSeconds",
            self.duration_seconds,
            &DURATION_RANGE_SECONDS,
            DEFAULT_DURATION_SECONDS,
        );
        if self.sample_rate_hz != SAMPLE_RATE_HZ {
            log::warn!("sampleRateHz = {}, using {SAMPLE_RATE_HZ}", self.sample_rate_hz);
            out.sample_rate_hz = SAMPLE_RATE_HZ;
        }
        out
    }

    /// Reject parameters outside their allowed ranges.
    pub fn validate(&self) -> SynthResult<()> {
        check_range("fundamentalHz", self.fundamental_hz, &FUNDAMENTAL_RANGE_HZ)?;
        check_range("durationSeconds", self.duration_seconds, &DURATION_RANGE_SECONDS)?;
        if self.sample_rate_hz != SAMPLE_RATE_HZ {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate_hz,
            });
        }
        Ok(())
    }

    /// Render this request against the lab's harmonic table.
    pub fn render(&self) -> SynthResult<Waveform> {
        generate(
            self.fundamental_hz,
            self.duration_seconds,
            self.sample_rate_hz,
            &self.active_mask,
            &HARMONIC_SERIES,
        )
    }

    /// Display rows for the harmonic toggles.
    pub fn harmonic_rows(&self) -> Vec<HarmonicRow> {
        harmonic_rows(self.fundamental_hz, &self.active_mask)
    }

    /// Number of samples a render of this request produces.
    pub fn sample_count(&self) -> usize {
        crate::dsp::generator::sample_count(self.sample_rate_hz, self.duration_seconds)
    }
}

fn clamp_param(name: &str, value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("{name} = {value} is not finite, using {fallback}");
        return fallback;
    }
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::warn!("{name} = {value} clamped to {clamped}");
    }
    clamped
}

fn check_range(name: &'static str, value: f64, range: &RangeInclusive<f64>) -> SynthResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SynthError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_lab_controls() {
        let r = SynthesisRequest::default();
        assert_eq!(r.fundamental_hz, 220.0);
        assert_eq!(r.duration_seconds, 1.5);
        assert_eq!(r.sample_rate_hz, 44100);
        assert_eq!(r.active_mask, [true, false, false, false, false, false]);
        assert!(r.validate().is_ok());
        assert_eq!(r.sample_count(), 66150);
    }

    #[test]
    fn builder_toggles() {
        let r = SynthesisRequest::new(100.0, 1.0)
            .with_active(1, true)
            .with_active(0, false)
            .with_active(9, true);
        assert_eq!(r.active_mask, [false, true, false, false, false, false]);

        let r = r.with_mask([true; 6]);
        assert!(r.active_mask.iter().all(|&a| a));
    }

    #[test]
    fn json_fills_missing_fields() {
        let r = SynthesisRequest::from_json(r#"{ "fundamentalHz": 330.0 }"#).unwrap();
        assert_eq!(
            r,
            SynthesisRequest {
                fundamental_hz: 330.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn json_full_request() {
        let json = r#"{
            "fundamentalHz": 100.0,
            "durationSeconds": 1.0,
            "sampleRateHz": 44100,
            "activeMask": [true, true, false, false, false, false]
        }"#;
        let r = SynthesisRequest::from_json(json).unwrap();
        assert_eq!(r, SynthesisRequest::new(100.0, 1.0).with_active(1, true));
        let w = r.render().unwrap();
        assert_eq!(w.len(), 44100);
    }

    #[test]
    fn json_rejects_short_mask() {
        let err = SynthesisRequest::from_json(r#"{ "activeMask": [true] }"#).unwrap_err();
        assert!(matches!(err, SynthError::Json(_)));
    }

    #[test]
    fn json_roundtrip_uses_camel_case() {
        let json = serde_json::to_string(&SynthesisRequest::default()).unwrap();
        assert!(json.contains("\"fundamentalHz\":220.0"));
        assert!(json.contains("\"activeMask\""));
    }

    #[test]
    fn clamps_into_slider_ranges() {
        let r = SynthesisRequest::new(10.0, 9.0).clamped();
        assert_eq!(r.fundamental_hz, 50.0);
        assert_eq!(r.duration_seconds, 3.0);

        let r = SynthesisRequest::new(5000.0, 0.1).clamped();
        assert_eq!(r.fundamental_hz, 880.0);
        assert_eq!(r.duration_seconds, 0.5);
    }

    #[test]
    fn clamp_replaces_non_finite_and_zero_rate() {
        let mut r = SynthesisRequest::new(f64::NAN, f64::INFINITY);
        r.sample_rate_hz = 0;
        let r = r.clamped();
        assert_eq!(r.fundamental_hz, DEFAULT_FUNDAMENTAL_HZ);
        assert_eq!(r.duration_seconds, DEFAULT_DURATION_SECONDS);
        assert_eq!(r.sample_rate_hz, SAMPLE_RATE_HZ);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn clamp_pins_sample_rate() {
        let r = SynthesisRequest::from_json(r#"{ "sampleRateHz": 8000000 }"#).unwrap();
        assert!(matches!(
            r.validate(),
            Err(SynthError::InvalidSampleRate { rate: 8000000 })
        ));

        let r = r.clamped();
        assert_eq!(r.sample_rate_hz, SAMPLE_RATE_HZ);
        assert!(r.validate().is_ok());
        assert_eq!(r.sample_count(), 66150);

        let mut r = SynthesisRequest::new(220.0, 3.0);
        r.sample_rate_hz = u32::MAX;
        assert_eq!(r.clamped().sample_count(), 132300);
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        let r = SynthesisRequest::new(440.0, 2.0).with_active(2, true);
        assert_eq!(r.clamped(), r);
    }

    #[test]
    fn validate_reports_offending_field() {
        let err = SynthesisRequest::new(1000.0, 1.0).validate().unwrap_err();
        match err {
            SynthError::OutOfRange { name, value, min, max } => {
                assert_eq!(name, "fundamentalHz");
                assert_eq!(value, 1000.0);
                assert_eq!((min, max), (50.0, 880.0));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = SynthesisRequest::new(220.0, 0.25).validate().unwrap_err();
        assert!(matches!(err, SynthError::OutOfRange { name: "durationSeconds", .. }));

        let mut r = SynthesisRequest::default();
        r.sample_rate_hz = 0;
        assert!(matches!(r.validate(), Err(SynthError::InvalidSampleRate { rate: 0 })));
    }

    #[test]
    fn rows_follow_request() {
        let rows = SynthesisRequest::new(200.0, 1.0).with_active(5, true).harmonic_rows();
        assert_eq!(rows[5].caption, "1200.0 Hz");
        assert!(rows[5].active);
        assert!(rows[0].active);
        assert!(!rows[1].active);
    }
}
