//! Numeric evaluation of sequences.
//!
//! Every stored value is evaluated to a complex number. When all imaginary
//! parts are negligible the whole result is returned as real numbers.

use num_complex::Complex64;

use super::Sequence;
use crate::error::Result;
use crate::scalar::Scalar;

/// Imaginary parts at or below this magnitude are treated as zero.
pub const IMAG_TOLERANCE: f64 = 1e-8;

/// Configuration for numeric evaluation.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Largest imaginary magnitude still cast to real.
    pub imag_tolerance: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            imag_tolerance: IMAG_TOLERANCE,
        }
    }
}

impl EvalConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance below which imaginary parts are discarded.
    pub fn with_imag_tolerance(mut self, imag_tolerance: f64) -> Self {
        self.imag_tolerance = imag_tolerance;
        self
    }
}

/// A single evaluated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Real(f64),
    Complex(Complex64),
}

/// A block of evaluated samples, real only if every sample is.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Real(Vec<f64>),
    Complex(Vec<Complex64>),
}

impl Samples {
    /// Cast to real when every imaginary part is within tolerance.
    fn from_complex(vals: Vec<Complex64>, config: &EvalConfig) -> Self {
        if vals.iter().all(|v| v.im.abs() <= config.imag_tolerance) {
            Samples::Real(vals.iter().map(|v| v.re).collect())
        } else {
            Samples::Complex(vals)
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Samples::Real(v) => v.len(),
            Samples::Complex(v) => v.len(),
        }
    }

    /// Check whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View every sample as complex.
    pub fn to_complex(&self) -> Vec<Complex64> {
        match self {
            Samples::Real(v) => v.iter().map(|&re| Complex64::new(re, 0.0)).collect(),
            Samples::Complex(v) => v.clone(),
        }
    }
}

impl<T: Scalar> Sequence<T> {
    /// Evaluate every stored value numerically.
    pub fn as_array(&self) -> Result<Samples> {
        self.as_array_with(&EvalConfig::default())
    }

    /// Evaluate every stored value numerically with a custom configuration.
    pub fn as_array_with(&self, config: &EvalConfig) -> Result<Samples> {
        let vals = self
            .values
            .iter()
            .map(T::to_complex)
            .collect::<Result<Vec<_>>>()?;
        Ok(Samples::from_complex(vals, config))
    }

    /// Evaluate the value at logical index `n` (zero outside the support).
    pub fn evaluate(&self, n: i64) -> Result<Sample> {
        self.evaluate_with(n, &EvalConfig::default())
    }

    /// Evaluate the value at logical index `n` with a custom configuration.
    pub fn evaluate_with(&self, n: i64, config: &EvalConfig) -> Result<Sample> {
        let val = self.get(n).to_complex()?;
        if val.im.abs() <= config.imag_tolerance {
            Ok(Sample::Real(val.re))
        } else {
            Ok(Sample::Complex(val))
        }
    }

    /// Evaluate the values at several logical indices.
    pub fn evaluate_at(&self, indices: &[i64]) -> Result<Samples> {
        self.evaluate_at_with(indices, &EvalConfig::default())
    }

    /// Evaluate the values at several logical indices with a custom
    /// configuration.
    pub fn evaluate_at_with(&self, indices: &[i64], config: &EvalConfig) -> Result<Samples> {
        let vals = indices
            .iter()
            .map(|&n| self.get(n).to_complex())
            .collect::<Result<Vec<_>>>()?;
        Ok(Samples::from_complex(vals, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeqError;
    use crate::scalar::Laurent;

    type Seq = Sequence<Complex64>;

    #[test]
    fn test_real_cast() {
        let s = Seq::new(vec![Complex64::new(1.0, 1e-12), Complex64::new(2.0, 0.0)]);
        assert_eq!(s.as_array().unwrap(), Samples::Real(vec![1.0, 2.0]));
    }

    #[test]
    fn test_stays_complex() {
        let s = Seq::new(vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)]);
        match s.as_array().unwrap() {
            Samples::Complex(v) => assert_eq!(v[1], Complex64::new(0.0, 1.0)),
            other => panic!("expected complex samples, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_tolerance() {
        let s = Seq::new(vec![Complex64::new(1.0, 1e-3)]);
        let loose = EvalConfig::new().with_imag_tolerance(1e-2);
        assert_eq!(s.as_array_with(&loose).unwrap(), Samples::Real(vec![1.0]));
        assert!(matches!(s.as_array().unwrap(), Samples::Complex(_)));
    }

    #[test]
    fn test_custom_tolerance_for_lookups() {
        let s = Seq::new(vec![Complex64::new(1.0, 1e-3), Complex64::new(2.0, 0.0)]);
        let loose = EvalConfig::new().with_imag_tolerance(1e-2);

        assert_eq!(s.evaluate_with(0, &loose).unwrap(), Sample::Real(1.0));
        assert!(matches!(s.evaluate(0).unwrap(), Sample::Complex(_)));
        assert_eq!(
            s.evaluate_at_with(&[0, 1, 2], &loose).unwrap(),
            Samples::Real(vec![1.0, 2.0, 0.0])
        );
        assert!(matches!(s.evaluate_at(&[0, 1]).unwrap(), Samples::Complex(_)));
    }

    #[test]
    fn test_evaluate_outside_support() {
        let s = Seq::from_reals(&[1.0, 2.0]).delay(3);
        assert_eq!(s.evaluate(3).unwrap(), Sample::Real(1.0));
        assert_eq!(s.evaluate(0).unwrap(), Sample::Real(0.0));
        assert_eq!(
            s.evaluate_at(&[2, 3, 4, 5]).unwrap(),
            Samples::Real(vec![0.0, 1.0, 2.0, 0.0])
        );
    }

    #[test]
    fn test_symbolic_values_are_not_numeric() {
        let s = Sequence::new(vec![Laurent::from(1.0), Laurent::z()]);
        assert!(matches!(s.as_array(), Err(SeqError::NotNumeric { .. })));
        assert_eq!(s.evaluate(0).unwrap(), Sample::Real(1.0));
    }
}
