//! Scalar values stored in sequences.
//!
//! The engine never inspects the values it stores beyond the operations of
//! the [`Scalar`] trait, so the numeric and symbolic backends are
//! interchangeable:
//!
//! - [`Complex64`] - purely numeric, cannot represent the z variable
//! - [`Laurent`] - polynomial in z with positive and negative powers
//!
//! Both are closed under the arithmetic the transforms and filters use.

mod laurent;

pub use laurent::Laurent;

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_complex::Complex64;

use crate::error::{Result, SeqError};

/// Magnitude at or below which a numeric value counts as zero.
///
/// Twiddles that are not quarter turns are rounded, so a DFT followed by
/// an IDFT leaves residue of order 1e-16 where the input was exactly zero.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Capability interface for sequence elements.
pub trait Scalar:
    Clone + PartialEq + fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive zero.
    fn zero() -> Self;

    /// Embed a real number.
    fn from_real(value: f64) -> Self;

    /// The unit phasor `exp(2πj · numerator / denominator)`.
    fn twiddle(numerator: i64, denominator: usize) -> Self;

    /// The z-domain variable raised to an integer power.
    fn z_power(exponent: i64) -> Result<Self>;

    /// Division that reports a zero or non-invertible divisor.
    fn checked_div(&self, rhs: &Self) -> Result<Self>;

    /// Numeric evaluation to a complex number.
    fn to_complex(&self) -> Result<Complex64>;

    /// Plain-text rendering.
    fn plain(&self) -> String;

    /// Typeset (LaTeX) rendering.
    fn latex(&self) -> String;

    /// Check whether this is the additive zero.
    ///
    /// Used by prune, extent and the `a[0]` check of lfilter.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Compute `exp(2πj · numerator / denominator)`.
///
/// The phase is reduced modulo one turn first; quarter turns are exact.
pub fn unit_phasor(numerator: i64, denominator: usize) -> Complex64 {
    if denominator == 0 {
        return Complex64::new(1.0, 0.0);
    }
    let den = denominator as i64;
    let rem = numerator.rem_euclid(den);

    if (4 * rem) % den == 0 {
        return match 4 * rem / den {
            0 => Complex64::new(1.0, 0.0),
            1 => Complex64::new(0.0, 1.0),
            2 => Complex64::new(-1.0, 0.0),
            _ => Complex64::new(0.0, -1.0),
        };
    }

    Complex64::from_polar(1.0, 2.0 * PI * rem as f64 / den as f64)
}

/// Render a real number, dropping the sign of negative zero.
pub(crate) fn format_real(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else {
        format!("{}", x)
    }
}

/// Render a complex number with `j` as the imaginary unit.
pub(crate) fn format_complex(c: Complex64) -> String {
    if c.im == 0.0 {
        return format_real(c.re);
    }

    let imag = match c.im {
        x if x == 1.0 => "j".to_string(),
        x if x == -1.0 => "-j".to_string(),
        x => format!("{}j", format_real(x)),
    };

    if c.re == 0.0 {
        imag
    } else if imag.starts_with('-') {
        format!("{} - {}", format_real(c.re), &imag[1..])
    } else {
        format!("{} + {}", format_real(c.re), imag)
    }
}

impl Scalar for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn from_real(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn twiddle(numerator: i64, denominator: usize) -> Self {
        unit_phasor(numerator, denominator)
    }

    fn z_power(_exponent: i64) -> Result<Self> {
        Err(SeqError::SymbolicUnsupported {
            operation: "z-domain power",
        })
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if *rhs == Self::zero() {
            return Err(SeqError::DivisionByZero);
        }
        Ok(*self / *rhs)
    }

    fn to_complex(&self) -> Result<Complex64> {
        Ok(*self)
    }

    fn plain(&self) -> String {
        format_complex(*self)
    }

    fn latex(&self) -> String {
        format_complex(*self).replace('j', r"\mathrm{j}")
    }

    fn is_zero(&self) -> bool {
        self.norm() <= ZERO_TOLERANCE
    }
}
