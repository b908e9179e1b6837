//! DSP: additive synthesis and output encoding.
//!
//! Everything here is pure: the same parameters always yield the same
//! samples, whether called from the browser through WASM or natively.

pub mod generator;
pub mod mixer;
pub mod renderer;
pub mod waveform;
