pub mod dsp;
pub mod error;
pub mod harmonic;
pub mod request;

pub use crate::dsp::generator::generate;
pub use crate::dsp::waveform::{Waveform, WaveformPreview};
pub use crate::error::{SynthError, SynthResult};
pub use crate::harmonic::{HARMONIC_SERIES, HarmonicRow, HarmonicSpec};
pub use crate::request::SynthesisRequest;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the harmonics-lab core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Clamp a request into the lab's control ranges and render it.
pub fn synthesize(request: &SynthesisRequest) -> SynthResult<Waveform> {
    request.clamped().render()
}

/// Render a JSON request.
pub fn synthesize_json(json: &str) -> SynthResult<Waveform> {
    synthesize(&SynthesisRequest::from_json(json)?)
}

/// The plot slice for a request: the first 20 ms of the waveform.
pub fn preview(request: &SynthesisRequest) -> SynthResult<WaveformPreview> {
    Ok(synthesize(request)?.preview(crate::request::PREVIEW_SECONDS))
}

/// Toggle rows for a fundamental and a per-harmonic active list.
///
/// The fundamental is clamped into the slider range. Missing entries in
/// `active` read as off and extra entries are ignored.
pub fn harmonic_table_rows(fundamental_hz: f64, active: &[bool]) -> Vec<HarmonicRow> {
    let mut mask = [false; harmonic::HARMONIC_COUNT];
    for (slot, &on) in mask.iter_mut().zip(active) {
        *slot = on;
    }
    SynthesisRequest::new(fundamental_hz, request::DEFAULT_DURATION_SECONDS)
        .with_mask(mask)
        .clamped()
        .harmonic_rows()
}

fn request_from_js(value: JsValue) -> Result<SynthesisRequest, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(SynthesisRequest::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&format!("{e}")))
}

fn to_js_error(e: SynthError) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

/// WASM-exposed: harmonic toggle rows (label, frequency caption, active flag)
/// for a fundamental and an array of booleans. An absent array keeps only
/// the fundamental active.
#[wasm_bindgen]
pub fn harmonic_table(fundamental_hz: f64, active: JsValue) -> Result<JsValue, JsValue> {
    let active: Vec<bool> = if active.is_undefined() || active.is_null() {
        SynthesisRequest::default().active_mask.to_vec()
    } else {
        serde_wasm_bindgen::from_value(active).map_err(|e| JsValue::from_str(&format!("{e}")))?
    };
    serde_wasm_bindgen::to_value(&harmonic_table_rows(fundamental_hz, &active))
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a request to mono f32 samples for the audio player.
#[wasm_bindgen]
pub fn synthesize_samples(request: JsValue) -> Result<Vec<f32>, JsValue> {
    let request = request_from_js(request)?;
    let waveform = synthesize(&request).map_err(to_js_error)?;
    Ok(waveform.to_f32())
}

/// WASM-exposed: render a request and return the `{ time, samples }` plot slice.
#[wasm_bindgen]
pub fn synthesize_preview(request: JsValue) -> Result<JsValue, JsValue> {
    let request = request_from_js(request)?;
    let slice = preview(&request).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&slice).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a request to a 16-bit mono WAV byte array.
#[wasm_bindgen]
pub fn synthesize_wav(request: JsValue) -> Result<Vec<u8>, JsValue> {
    let request = request_from_js(request)?;
    let waveform = synthesize(&request).map_err(to_js_error)?;
    dsp::renderer::encode_wav(&waveform).map_err(to_js_error)
}
