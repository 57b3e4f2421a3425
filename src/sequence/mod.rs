//! Finite discrete sequences.
//!
//! A [`Sequence`] is the explicit representation of a conceptually infinite
//! discrete signal that is zero outside a finite support. It stores values
//! together with their logical indices, a [`Domain`] annotation and two
//! display-only truncation flags.
//!
//! ```
//! use seqtrans::{Complex64, Domain, Sequence};
//!
//! let values = vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0), Complex64::new(3.0, 0.0)];
//! let x = Sequence::builder(values)
//!     .origin(1)
//!     .domain(Domain::Time)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(x.indices(), &[-1, 0, 1]);
//! assert_eq!(x.get(0), Complex64::new(2.0, 0.0));
//! assert_eq!(x.get(100), Complex64::new(0.0, 0.0));
//! ```

mod algebra;
mod numeric;
mod render;

pub use numeric::{EvalConfig, Sample, Samples, IMAG_TOLERANCE};

use crate::domain::Domain;
use crate::error::{Result, SeqError};
use crate::scalar::Scalar;

/// A finite discrete sequence over scalar values `T`.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    values: Vec<T>,
    /// Logical index of each value, strictly increasing
    indices: Vec<i64>,
    domain: Domain,
    start_truncated: bool,
    end_truncated: bool,
}

/// Builder for [`Sequence`] with optional placement and annotations.
#[derive(Debug, Clone)]
pub struct SequenceBuilder<T> {
    values: Vec<T>,
    indices: Option<Vec<i64>>,
    origin: Option<i64>,
    domain: Domain,
    start_truncated: bool,
    end_truncated: bool,
}

impl<T: Scalar> SequenceBuilder<T> {
    /// Place the values at explicit logical indices.
    pub fn indices(mut self, indices: impl IntoIterator<Item = i64>) -> Self {
        self.indices = Some(indices.into_iter().collect());
        self
    }

    /// Place the value at position `origin` on index 0.
    pub fn origin(mut self, origin: i64) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the domain annotation.
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Mark the sequence as continuing beyond its stored range.
    pub fn truncated(mut self, start: bool, end: bool) -> Self {
        self.start_truncated = start;
        self.end_truncated = end;
        self
    }

    /// Validate and build the sequence.
    pub fn build(self) -> Result<Sequence<T>> {
        let len = self.values.len() as i64;
        let indices = match (self.indices, self.origin) {
            (Some(_), Some(_)) => return Err(SeqError::ConflictingArguments),
            (Some(indices), None) => indices,
            (None, Some(origin)) => placed_indices(len, origin)?,
            (None, None) => (0..len).collect(),
        };

        if indices.len() != self.values.len() {
            return Err(SeqError::length_mismatch(self.values.len(), indices.len()));
        }
        if let Some(position) = indices.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeqError::NonIncreasingIndices {
                position: position + 1,
            });
        }

        Ok(Sequence {
            values: self.values,
            indices,
            domain: self.domain,
            start_truncated: self.start_truncated,
            end_truncated: self.end_truncated,
        })
    }
}

impl<T: Scalar> Sequence<T> {
    /// Start building a sequence from its values.
    pub fn builder(values: Vec<T>) -> SequenceBuilder<T> {
        SequenceBuilder {
            values,
            indices: None,
            origin: None,
            domain: Domain::Unspecified,
            start_truncated: false,
            end_truncated: false,
        }
    }

    /// Create a sequence with indices `0..N-1`.
    pub fn new(values: Vec<T>) -> Self {
        let indices = (0..values.len() as i64).collect();
        Self::from_parts(values, indices, Domain::Unspecified)
    }

    /// Create a sequence with explicit logical indices.
    pub fn with_indices(values: Vec<T>, indices: impl IntoIterator<Item = i64>) -> Result<Self> {
        Self::builder(values).indices(indices).build()
    }

    /// Create a sequence whose element at position `origin` sits on index 0.
    pub fn with_origin(values: Vec<T>, origin: i64) -> Result<Self> {
        Self::builder(values).origin(origin).build()
    }

    /// Create a sequence from real values with indices `0..N-1`.
    pub fn from_reals(values: &[f64]) -> Self {
        Self::new(values.iter().map(|&v| T::from_real(v)).collect())
    }

    /// Assemble a sequence whose invariants the caller already guarantees.
    pub(crate) fn from_parts(values: Vec<T>, indices: Vec<i64>, domain: Domain) -> Self {
        debug_assert_eq!(values.len(), indices.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self {
            values,
            indices,
            domain,
            start_truncated: false,
            end_truncated: false,
        }
    }

    /// The stored values in index order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The logical indices of the stored values.
    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    /// The domain annotation.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the sequence is marked as continuing before its first value.
    pub fn start_truncated(&self) -> bool {
        self.start_truncated
    }

    /// Whether the sequence is marked as continuing after its last value.
    pub fn end_truncated(&self) -> bool {
        self.end_truncated
    }

    /// Iterate over (index, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Value at logical index `n`, or zero outside the stored support.
    ///
    /// This is a lookup by index, not by position.
    pub fn get(&self, n: i64) -> T {
        match self.indices.binary_search(&n) {
            Ok(pos) => self.values[pos].clone(),
            Err(_) => T::zero(),
        }
    }

    /// Position of the value stored at index 0, i.e. `-min(indices)`.
    pub fn origin(&self) -> Option<i64> {
        self.indices.first().map(|&first| -first)
    }

    /// Re-derive contiguous indices so that position `origin` sits on index 0.
    ///
    /// The indices are left untouched if they would leave the i64 range.
    pub fn set_origin(&mut self, origin: i64) -> Result<()> {
        self.indices = placed_indices(self.values.len() as i64, origin)?;
        Ok(())
    }

    /// Copy of this sequence with a different domain annotation.
    pub fn with_domain(&self, domain: Domain) -> Self {
        let mut seq = self.clone();
        seq.domain = domain;
        seq
    }

    /// Copy of this sequence with different truncation flags.
    pub fn with_truncation(&self, start: bool, end: bool) -> Self {
        let mut seq = self.clone();
        seq.start_truncated = start;
        seq.end_truncated = end;
        seq
    }
}

/// Indices `-origin..len-origin`, checked against i64 overflow.
fn placed_indices(len: i64, origin: i64) -> Result<Vec<i64>> {
    let overflow = || SeqError::IndexOverflow {
        index: len,
        offset: origin,
    };
    let first = origin.checked_neg().ok_or_else(overflow)?;
    let end = first.checked_add(len).ok_or_else(overflow)?;
    Ok((first..end).collect())
}

/// Sequences are equal when values and indices match element-wise.
///
/// The domain annotation and truncation flags are not compared.
impl<T: Scalar> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.indices == other.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    type Seq = Sequence<Complex64>;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    fn reals(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&v| c(v)).collect()
    }

    #[test]
    fn test_default_indices() {
        let s = Seq::from_reals(&[1.0, 2.0, 3.0]);
        assert_eq!(s.indices(), &[0, 1, 2]);
        assert_eq!(s.domain(), Domain::Unspecified);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_origin_placement() {
        let s = Seq::with_origin(reals(&[1.0, 2.0, 3.0, 4.0]), 1).unwrap();
        assert_eq!(s.indices(), &[-1, 0, 1, 2]);
        assert_eq!(s.origin(), Some(1));
        assert_eq!(s.get(0), c(2.0));
    }

    #[test]
    fn test_conflicting_arguments() {
        let result = Seq::builder(reals(&[1.0, 2.0]))
            .indices([0, 1])
            .origin(0)
            .build();
        assert_eq!(result, Err(SeqError::ConflictingArguments));
    }

    #[test]
    fn test_invalid_indices() {
        assert_eq!(
            Seq::with_indices(reals(&[1.0, 2.0]), [0]),
            Err(SeqError::length_mismatch(2, 1))
        );
        assert_eq!(
            Seq::with_indices(reals(&[1.0, 2.0, 3.0]), [0, 2, 2]),
            Err(SeqError::NonIncreasingIndices { position: 2 })
        );
    }

    #[test]
    fn test_logical_lookup() {
        let s = Seq::with_indices(reals(&[5.0, 6.0]), [3, 7]).unwrap();
        assert_eq!(s.get(3), c(5.0));
        assert_eq!(s.get(7), c(6.0));
        assert_eq!(s.get(0), c(0.0));
        assert_eq!(s.get(5), c(0.0));
        assert_eq!(s.get(100), c(0.0));
    }

    #[test]
    fn test_set_origin() {
        let mut s = Seq::from_reals(&[1.0, 2.0, 3.0]);
        s.set_origin(2).unwrap();
        assert_eq!(s.indices(), &[-2, -1, 0]);
        assert_eq!(s.len(), 3);
        assert_eq!(Seq::new(Vec::new()).origin(), None);
    }

    #[test]
    fn test_origin_out_of_range() {
        assert!(matches!(
            Seq::with_origin(reals(&[1.0]), i64::MIN),
            Err(SeqError::IndexOverflow { .. })
        ));
        assert!(matches!(
            Seq::with_origin(reals(&[1.0, 2.0]), -i64::MAX),
            Err(SeqError::IndexOverflow { .. })
        ));

        let mut s = Seq::from_reals(&[1.0, 2.0]);
        assert!(s.set_origin(i64::MIN).is_err());
        assert_eq!(s.indices(), &[0, 1]);
    }

    #[test]
    fn test_strict_equality() {
        let a = Seq::with_indices(reals(&[1.0, 2.0]), [0, 1]).unwrap();
        let b = Seq::with_indices(reals(&[1.0, 2.0]), [1, 2]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Seq::from_reals(&[1.0, 2.0]));
    }

    #[test]
    fn test_equality_ignores_domain() {
        let a = Seq::from_reals(&[1.0, 2.0]);
        assert_eq!(a.with_domain(Domain::Frequency), a.with_domain(Domain::Time));
    }

    #[test]
    fn test_builder_annotations() {
        let s = Seq::builder(reals(&[1.0]))
            .domain(Domain::ZTransform)
            .truncated(true, false)
            .build()
            .unwrap();
        assert_eq!(s.domain(), Domain::ZTransform);
        assert!(s.start_truncated());
        assert!(!s.end_truncated());
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(0, &c(1.0))]);
    }
}
