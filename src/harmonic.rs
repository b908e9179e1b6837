//! The fixed harmonic series offered by the lab.
//!
//! Six partials at integer multiples of the fundamental, with decreasing
//! base amplitudes so that the upper partials colour the tone without
//! swamping it.

use serde::Serialize;

/// Number of toggleable harmonics.
pub const HARMONIC_COUNT: usize = 6;

/// One entry of the harmonic table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicSpec {
    /// Multiple of the fundamental (1 = fundamental itself).
    pub order: u32,
    /// Weight applied to this partial before normalization.
    pub base_amplitude: f64,
    /// Display name.
    pub label: &'static str,
}

impl HarmonicSpec {
    /// Frequency of this partial for the given fundamental.
    pub fn frequency(&self, fundamental_hz: f64) -> f64 {
        fundamental_hz * self.order as f64
    }
}

/// The harmonic table, lowest partial first.
pub const HARMONIC_SERIES: [HarmonicSpec; HARMONIC_COUNT] = [
    HarmonicSpec { order: 1, base_amplitude: 0.5, label: "Fundamental" },
    HarmonicSpec { order: 2, base_amplitude: 0.4, label: "2nd (Octave)" },
    HarmonicSpec { order: 3, base_amplitude: 0.3, label: "3rd (Fifth)" },
    HarmonicSpec { order: 4, base_amplitude: 0.2, label: "4th (Two Octaves)" },
    HarmonicSpec { order: 5, base_amplitude: 0.15, label: "5th (Major Third)" },
    HarmonicSpec { order: 6, base_amplitude: 0.1, label: "6th (Fifth)" },
];

/// A display row for a single harmonic toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicRow {
    pub order: u32,
    pub label: &'static str,
    pub frequency_hz: f64,
    /// Caption shown under the toggle, e.g. `"440.0 Hz"`.
    pub caption: String,
    pub base_amplitude: f64,
    pub active: bool,
}

/// Build the display rows for every harmonic in the table.
///
/// Entries missing from `active` are reported as inactive.
pub fn harmonic_rows(fundamental_hz: f64, active: &[bool]) -> Vec<HarmonicRow> {
    HARMONIC_SERIES
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let frequency_hz = spec.frequency(fundamental_hz);
            HarmonicRow {
                order: spec.order,
                label: spec.label,
                frequency_hz,
                caption: format!("{frequency_hz:.1} Hz"),
                base_amplitude: spec.base_amplitude,
                active: active.get(i).copied().unwrap_or(false),
            }
        })
        .collect()
}
