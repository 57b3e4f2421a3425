//! WASM bindings for Seqtrans.
//!
//! This module provides JavaScript-friendly bindings for use in web pages
//! that show sequences and their transforms.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSequence } from 'seqtrans';
//!
//! await init();
//!
//! const x = new WasmSequence(new Float64Array([1, 2, 3]), 0n);
//! const y = x.convolve(new Float64Array([1, 1]), "full");
//! console.log(y.render());            // {_1, 3, 5, 3}
//! const spectrum = x.dft().samples(); // interleaved re, im
//! ```

use num_complex::Complex64;
use wasm_bindgen::prelude::*;

use crate::domain::Domain;
use crate::error::SeqError;
use crate::filter::ConvolveMode;
use crate::scalar::Laurent;
use crate::sequence::Sequence;
use crate::transform::{self, TracingSink};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(err: SeqError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn laurents(values: &[f64]) -> Result<Vec<Laurent>, JsValue> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(js_error(SeqError::WasmError {
            message: format!("non-finite value {}", bad),
        }));
    }
    Ok(values.iter().map(|&v| Laurent::from(v)).collect())
}

/// WASM-compatible discrete sequence.
///
/// Wraps a symbolic [`Sequence`] so that z-transforms can be rendered as
/// well as evaluated.
#[wasm_bindgen]
pub struct WasmSequence {
    seq: Sequence<Laurent>,
}

#[wasm_bindgen]
impl WasmSequence {
    /// Create a discrete-time sequence from real values.
    ///
    /// # Arguments
    /// * `values` - Sample values
    /// * `origin` - Position of the value at index 0
    #[wasm_bindgen(constructor)]
    pub fn new(values: &[f64], origin: i64) -> Result<WasmSequence, JsValue> {
        let seq = Sequence::builder(laurents(values)?)
            .origin(origin)
            .domain(Domain::Time)
            .build()
            .map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Discrete Fourier transform.
    #[wasm_bindgen]
    pub fn dft(&self) -> WasmSequence {
        WasmSequence {
            seq: transform::dft(&self.seq, &TracingSink),
        }
    }

    /// Inverse discrete Fourier transform.
    #[wasm_bindgen]
    pub fn idft(&self) -> WasmSequence {
        WasmSequence {
            seq: transform::idft(&self.seq, &TracingSink),
        }
    }

    /// Term-by-term z-transform.
    #[wasm_bindgen]
    pub fn zt(&self) -> Result<WasmSequence, JsValue> {
        let seq = self.seq.zt().map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Term-by-term inverse z-transform.
    #[wasm_bindgen]
    pub fn izt(&self) -> Result<WasmSequence, JsValue> {
        let seq = self.seq.izt().map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Convolve with another set of real values.
    ///
    /// # Arguments
    /// * `h` - Values of the other sequence
    /// * `mode` - "full" or "same"
    #[wasm_bindgen]
    pub fn convolve(&self, h: &[f64], mode: &str) -> Result<WasmSequence, JsValue> {
        let mode: ConvolveMode = mode.parse().map_err(js_error)?;
        let h = Sequence::new(laurents(h)?);
        let seq = self.seq.convolve(&h, mode).map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Apply a recursive digital filter.
    #[wasm_bindgen]
    pub fn lfilter(&self, b: &[f64], a: &[f64]) -> Result<WasmSequence, JsValue> {
        let seq = self
            .seq
            .lfilter(&laurents(b)?, &laurents(a)?)
            .map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Strip zeros from both ends.
    #[wasm_bindgen]
    pub fn prune(&self) -> WasmSequence {
        WasmSequence {
            seq: self.seq.prune(),
        }
    }

    /// Delay by `m` samples (negative advances).
    #[wasm_bindgen]
    pub fn delay(&self, m: i64) -> Result<WasmSequence, JsValue> {
        let seq = self.seq.checked_delay(m).map_err(js_error)?;
        Ok(WasmSequence { seq })
    }

    /// Logical indices of the stored values.
    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<i64> {
        self.seq.indices().to_vec()
    }

    /// Numeric values as interleaved real and imaginary parts.
    #[wasm_bindgen]
    pub fn samples(&self) -> Result<Vec<f64>, JsValue> {
        let samples = self.seq.as_array().map_err(js_error)?;
        Ok(samples
            .to_complex()
            .iter()
            .flat_map(|z| [z.re, z.im])
            .collect())
    }

    /// Sum of all values evaluated at the point `z = re + j·im`.
    ///
    /// On a z-transformed sequence this is X(z). Returns `[re, im]`.
    #[wasm_bindgen]
    pub fn sum_at(&self, re: f64, im: f64) -> Vec<f64> {
        let z = Complex64::new(re, im);
        let total: Complex64 = self.seq.values().iter().map(|v| v.eval_at(z)).sum();
        vec![total.re, total.im]
    }

    /// Plain rendering, e.g. `{1, _2, 3}`.
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.seq.to_string()
    }

    /// LaTeX rendering.
    #[wasm_bindgen]
    pub fn latex(&self) -> String {
        self.seq.latex()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
