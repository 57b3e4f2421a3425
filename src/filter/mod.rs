//! Digital filtering and convolution.
//!
//! [`lfilter`] runs the causal linear recursion
//!
//! ```text
//! a[0]·y[n] = Σₘ b[m]·x[n−m] − Σₘ≥₁ a[m]·y[n−m]
//! ```
//!
//! over the stored positions of x (not its logical indices). Taps that
//! reach before the first stored position are skipped: the input is not
//! zero-padded on the left, it simply has no such sample.
//!
//! [`convolve`] pads x with zeros and runs an FIR filter with the values of
//! h as taps.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SeqError};
use crate::scalar::Scalar;
use crate::sequence::Sequence;

/// Output length policy for [`convolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolveMode {
    /// Full linear convolution, `extent(x) + extent(h) − 1` long
    #[default]
    Full,
    /// Padded to the longer of the two extents
    Same,
}

impl FromStr for ConvolveMode {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(ConvolveMode::Full),
            "same" => Ok(ConvolveMode::Same),
            other => Err(SeqError::unknown_mode(other)),
        }
    }
}

impl fmt::Display for ConvolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvolveMode::Full => write!(f, "full"),
            ConvolveMode::Same => write!(f, "same"),
        }
    }
}

/// Filter `x` with numerator taps `b` and denominator taps `a`.
///
/// An empty `a` is treated as `[1]`, giving an FIR filter. The output keeps
/// the indices and domain of `x`.
pub fn lfilter<T: Scalar>(x: &Sequence<T>, b: &[T], a: &[T]) -> Result<Sequence<T>> {
    let one = [T::from_real(1.0)];
    let a = if a.is_empty() { &one[..] } else { a };
    let a0 = &a[0];
    if a0.is_zero() {
        return Err(SeqError::DivisionByZero);
    }

    tracing::debug!(len = x.len(), b = b.len(), a = a.len(), "filtering sequence");

    let xs = x.values();
    let mut y: Vec<T> = Vec::with_capacity(xs.len());

    for n in 0..xs.len() {
        let mut acc = T::zero();

        for (m, bm) in b.iter().enumerate() {
            if m > n {
                break;
            }
            acc = acc + bm.clone() * xs[n - m].clone();
        }

        for (m, am) in a.iter().enumerate().skip(1) {
            if m > n {
                break;
            }
            acc = acc - am.clone() * y[n - m].clone();
        }

        y.push(acc.checked_div(a0)?);
    }

    Ok(Sequence::from_parts(y, x.indices().to_vec(), x.domain()))
}

/// Convolve `x` with `h`.
///
/// x is zero-padded at the end (by `extent(h) − 1` samples for
/// [`ConvolveMode::Full`], up to the longer extent for
/// [`ConvolveMode::Same`]) and then filtered with the values of h as FIR
/// taps. Each leading zero of h delays the output by one sample, so the
/// padding grows by the same count and no output sample is cut off.
pub fn convolve<T: Scalar>(x: &Sequence<T>, h: &Sequence<T>, mode: ConvolveMode) -> Result<Sequence<T>> {
    let lx = x.extent();
    let lh = h.extent();
    let lead = h.values().iter().position(|v| !v.is_zero()).unwrap_or(0);

    let pad = lead
        + match mode {
            ConvolveMode::Full => (lx + lh).saturating_sub(1).saturating_sub(lx),
            ConvolveMode::Same => lx.max(lh) - lx,
        };

    tracing::debug!(lx, lh, lead, pad, %mode, "convolving sequences");

    lfilter(&x.zeropad(pad), h.values(), &[T::from_real(1.0)])
}

impl<T: Scalar> Sequence<T> {
    /// Filter with numerator taps `b` and denominator taps `a`.
    pub fn lfilter(&self, b: &[T], a: &[T]) -> Result<Sequence<T>> {
        lfilter(self, b, a)
    }

    /// Convolve with `h`.
    pub fn convolve(&self, h: &Sequence<T>, mode: ConvolveMode) -> Result<Sequence<T>> {
        convolve(self, h, mode)
    }
}
