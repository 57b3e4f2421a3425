//! Index algebra on sequences: prune, pad, extend, delay and extent.

use std::ops::{Shl, Shr};

use super::Sequence;
use crate::error::{Result, SeqError};
use crate::scalar::Scalar;

impl<T: Scalar> Sequence<T> {
    /// Remove zeros from both ends of the sequence.
    ///
    /// `{0, 0, 1, 2, 3, 0}` becomes `{1, 2, 3}` at indices 2..=4. Interior
    /// zeros are kept. A sequence with no nonzero value prunes to the empty
    /// sequence. Zero is tested with [`Scalar::is_zero`], so float residue
    /// below [`ZERO_TOLERANCE`](crate::scalar::ZERO_TOLERANCE) is stripped too.
    pub fn prune(&self) -> Self {
        let first = self.values.iter().position(|v| !v.is_zero());
        let last = self.values.iter().rposition(|v| !v.is_zero());

        let (values, indices) = match (first, last) {
            (Some(m1), Some(m2)) => (
                self.values[m1..=m2].to_vec(),
                self.indices[m1..=m2].to_vec(),
            ),
            _ => (Vec::new(), Vec::new()),
        };
        Self::from_parts(values, indices, self.domain)
    }

    /// Append `m` zeros, continuing the indices from the last one.
    pub fn zeropad(&self, m: usize) -> Self {
        let mut values = self.values.clone();
        let mut indices = self.indices.clone();
        let next = self.indices.last().map_or(0, |&last| last + 1);

        values.extend(std::iter::repeat_with(T::zero).take(m));
        indices.extend(next..next + m as i64);
        Self::from_parts(values, indices, self.domain)
    }

    /// Fill in zeros so that the indices form a contiguous range that
    /// includes index 0.
    ///
    /// Truncation flags are kept; this is what rendering works from.
    pub fn zeroextend(&self) -> Self {
        let (Some(&first), Some(&last)) = (self.indices.first(), self.indices.last()) else {
            return self.clone();
        };

        let lo = first.min(0);
        let hi = last.max(0);
        let indices: Vec<i64> = (lo..=hi).collect();
        let values = indices.iter().map(|&n| self.get(n)).collect();

        let mut seq = Self::from_parts(values, indices, self.domain);
        seq.start_truncated = self.start_truncated;
        seq.end_truncated = self.end_truncated;
        seq
    }

    /// Delay by `m` samples; a negative `m` advances the sequence.
    ///
    /// # Panics
    ///
    /// Panics if a shifted index leaves the i64 range. Use
    /// [`checked_delay`](Self::checked_delay) for untrusted offsets.
    pub fn delay(&self, m: i64) -> Self {
        self.checked_delay(m).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Delay by `m` samples, failing if a shifted index overflows.
    pub fn checked_delay(&self, m: i64) -> Result<Self> {
        let indices = self
            .indices
            .iter()
            .map(|&n| {
                n.checked_add(m)
                    .ok_or(SeqError::IndexOverflow { index: n, offset: m })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(self.values.clone(), indices, self.domain))
    }

    /// Delay by a real number of samples, which must be a whole number.
    pub fn delay_by(&self, m: f64) -> Result<Self> {
        if m.fract() != 0.0 || !m.is_finite() {
            return Err(SeqError::NonIntegerDelay { delay: m });
        }
        self.checked_delay(m as i64)
    }

    /// Inclusive span between the first and last nonzero value.
    ///
    /// Interior zeros count toward the extent; an all-zero sequence has
    /// extent 0. Zero is tested the same way as in [`prune`](Self::prune).
    pub fn extent(&self) -> usize {
        let first = self.values.iter().position(|v| !v.is_zero());
        let last = self.values.iter().rposition(|v| !v.is_zero());
        match (first, last) {
            (Some(m1), Some(m2)) => m2 - m1 + 1,
            _ => 0,
        }
    }
}

impl<T: Scalar> Shr<i64> for &Sequence<T> {
    type Output = Sequence<T>;

    fn shr(self, m: i64) -> Sequence<T> {
        self.delay(m)
    }
}

impl<T: Scalar> Shl<i64> for &Sequence<T> {
    type Output = Sequence<T>;

    fn shl(self, m: i64) -> Sequence<T> {
        self.delay(-m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use num_complex::Complex64;

    type Seq = Sequence<Complex64>;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    fn reals(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&v| c(v)).collect()
    }

    #[test]
    fn test_prune() {
        let s = Seq::from_reals(&[0.0, 0.0, 1.0, 2.0, 3.0, 0.0]);
        let expected = Seq::with_indices(reals(&[1.0, 2.0, 3.0]), [2, 3, 4]).unwrap();
        assert_eq!(s.prune(), expected);
    }

    #[test]
    fn test_prune_keeps_interior_zeros() {
        let s = Seq::from_reals(&[0.0, 1.0, 0.0, 2.0]);
        let pruned = s.prune();
        assert_eq!(pruned.indices(), &[1, 2, 3]);
        assert_eq!(pruned.values(), reals(&[1.0, 0.0, 2.0]).as_slice());
    }

    #[test]
    fn test_prune_all_zero_is_empty() {
        let s = Seq::from_reals(&[0.0, 0.0, 0.0]).with_domain(Domain::Time);
        let pruned = s.prune();
        assert!(pruned.is_empty());
        assert_eq!(pruned.domain(), Domain::Time);
        assert!(Seq::new(Vec::new()).prune().is_empty());
    }

    #[test]
    fn test_zeropad() {
        let s = Seq::from_reals(&[1.0, 2.0, 3.0]).zeropad(2);
        assert_eq!(s.len(), 5);
        assert_eq!(s.indices(), &[0, 1, 2, 3, 4]);
        assert_eq!(s.get(3), c(0.0));
        assert_eq!(s.get(4), c(0.0));

        let offset = Seq::with_origin(reals(&[1.0, 2.0]), 3).unwrap().zeropad(1);
        assert_eq!(offset.indices(), &[-3, -2, -1]);
        assert_eq!(Seq::new(Vec::new()).zeropad(2).indices(), &[0, 1]);
    }

    #[test]
    fn test_zeroextend_after_origin() {
        let s = Seq::with_indices(reals(&[1.0, 2.0]), [2, 3])
            .unwrap()
            .with_truncation(false, true);
        let e = s.zeroextend();
        assert_eq!(e.indices(), &[0, 1, 2, 3]);
        assert_eq!(e.values(), reals(&[0.0, 0.0, 1.0, 2.0]).as_slice());
        assert!(e.end_truncated());
    }

    #[test]
    fn test_zeroextend_before_origin() {
        let s = Seq::with_indices(reals(&[1.0, 2.0]), [-3, -2]).unwrap();
        let e = s.zeroextend();
        assert_eq!(e.indices(), &[-3, -2, -1, 0]);
        assert_eq!(e.values(), reals(&[1.0, 2.0, 0.0, 0.0]).as_slice());
    }

    #[test]
    fn test_zeroextend_fills_gaps() {
        let s = Seq::with_indices(reals(&[1.0, 2.0]), [-1, 2]).unwrap();
        let e = s.zeroextend();
        assert_eq!(e.indices(), &[-1, 0, 1, 2]);
        assert_eq!(e.values(), reals(&[1.0, 0.0, 0.0, 2.0]).as_slice());
    }

    #[test]
    fn test_delay() {
        let s = Seq::from_reals(&[1.0, 2.0, 3.0]);
        let d = s.delay(1);
        assert_eq!(d.indices(), &[1, 2, 3]);
        assert_eq!(d.values(), s.values());
        assert_eq!(d.origin(), Some(-1));

        assert_eq!(&s >> 2, s.delay(2));
        assert_eq!((&s << 1).indices(), &[-1, 0, 1]);
    }

    #[test]
    fn test_delay_by() {
        let s = Seq::from_reals(&[1.0]);
        assert_eq!(s.delay_by(-2.0).unwrap().indices(), &[-2]);
        assert_eq!(s.delay_by(0.5), Err(SeqError::NonIntegerDelay { delay: 0.5 }));
    }

    #[test]
    fn test_checked_delay_overflow() {
        let s = Seq::from_reals(&[1.0, 2.0]);
        assert_eq!(
            s.checked_delay(i64::MAX),
            Err(SeqError::IndexOverflow {
                index: 1,
                offset: i64::MAX
            })
        );
        assert_eq!(s.checked_delay(i64::MAX - 1).unwrap().indices(), &[i64::MAX - 1, i64::MAX]);

        let early = Seq::with_indices(reals(&[1.0]), [-1]).unwrap();
        assert!(early.checked_delay(i64::MIN).is_err());
    }

    #[test]
    #[should_panic(expected = "Index overflow")]
    fn test_delay_overflow_panics() {
        Seq::from_reals(&[1.0]).delay(1).delay(i64::MAX);
    }

    #[test]
    fn test_float_residue_counts_as_zero() {
        let s = Seq::new(vec![Complex64::new(1e-17, -2e-17), c(1.0), Complex64::new(0.0, 3e-16)]);
        assert_eq!(s.extent(), 1);
        assert_eq!(s.prune().indices(), &[1]);
    }

    #[test]
    fn test_extent() {
        assert_eq!(Seq::from_reals(&[1.0, 1.0]).extent(), 2);
        assert_eq!(Seq::from_reals(&[1.0, 0.0, 1.0]).extent(), 3);
        assert_eq!(Seq::from_reals(&[0.0, 1.0, 0.0, 1.0]).extent(), 3);
        assert_eq!(Seq::from_reals(&[0.0, 0.0]).extent(), 0);
        assert_eq!(Seq::new(Vec::new()).extent(), 0);
    }
}
