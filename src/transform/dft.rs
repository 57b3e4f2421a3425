//! Naive O(N²) discrete Fourier transform and its inverse.
//!
//! The forward transform uses the logical indices of the input, so a
//! sequence that does not start at index 0 picks up the corresponding
//! linear phase. Both transforms produce N outputs at indices `0..N-1`.

use super::advisory::{Advisory, AdvisorySink};
use crate::domain::Domain;
use crate::scalar::Scalar;
use crate::sequence::Sequence;

/// `X[k] = Σᵢ x[i]·exp(−2πj·nᵢ·k/N)` for k in `0..N`.
pub fn dft<T: Scalar>(seq: &Sequence<T>, sink: &dyn AdvisorySink) -> Sequence<T> {
    if seq.domain() != Domain::Time {
        sink.emit(Advisory::DftOutsideTime {
            domain: seq.domain(),
        });
    }

    let len = seq.len();
    tracing::debug!(len, "computing DFT");

    let bins = (0..len as i64)
        .map(|k| {
            seq.iter().fold(T::zero(), |acc, (n, v)| {
                acc + v.clone() * T::twiddle(-n * k, len)
            })
        })
        .collect();

    Sequence::from_parts(bins, (0..len as i64).collect(), Domain::Frequency)
}

/// `x[n] = (1/N)·Σᵢ X[i]·exp(+2πj·n·kᵢ/N)` for n in `0..N`.
pub fn idft<T: Scalar>(seq: &Sequence<T>, sink: &dyn AdvisorySink) -> Sequence<T> {
    if seq.domain() != Domain::Frequency {
        sink.emit(Advisory::IdftOutsideFrequency {
            domain: seq.domain(),
        });
    }

    let len = seq.len();
    tracing::debug!(len, "computing IDFT");

    let scale = T::from_real(1.0 / len.max(1) as f64);
    let samples = (0..len as i64)
        .map(|n| {
            let sum = seq.iter().fold(T::zero(), |acc, (k, v)| {
                acc + v.clone() * T::twiddle(n * k, len)
            });
            sum * scale.clone()
        })
        .collect();

    Sequence::from_parts(samples, (0..len as i64).collect(), Domain::Time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Laurent;
    use crate::sequence::Samples;
    use crate::transform::advisory::{CollectingSink, SilentSink};
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    type Seq = Sequence<Complex64>;

    fn time(values: &[f64]) -> Seq {
        Seq::from_reals(values).with_domain(Domain::Time)
    }

    #[test]
    fn test_dft_four_point() {
        let x = dft(&time(&[1.0, 2.0, 3.0, 4.0]), &SilentSink);
        assert_eq!(x.domain(), Domain::Frequency);
        assert_eq!(x.indices(), &[0, 1, 2, 3]);
        assert_eq!(
            x.values(),
            &[
                Complex64::new(10.0, 0.0),
                Complex64::new(-2.0, 2.0),
                Complex64::new(-2.0, 0.0),
                Complex64::new(-2.0, -2.0),
            ]
        );
    }

    #[test]
    fn test_dft_uses_logical_indices() {
        // Unit impulse at index 0, stored at position 1
        let impulse = Seq::with_origin(
            vec![
                Complex64::new(0.0, 0.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, 0.0),
            ],
            1,
        )
        .unwrap()
        .with_domain(Domain::Time);
        let x = dft(&impulse, &SilentSink);
        assert_eq!(x.as_array().unwrap(), Samples::Real(vec![1.0; 4]));
    }

    #[test]
    fn test_round_trip() {
        let s = time(&[1.0, -2.5, 3.0, 0.25, 7.0]);
        let sink = CollectingSink::new();
        let back = idft(&dft(&s, &sink), &sink);

        assert!(sink.advisories().is_empty());
        assert_eq!(back.indices(), s.indices());
        match back.as_array().unwrap() {
            Samples::Real(v) => {
                for (got, want) in v.iter().zip([1.0, -2.5, 3.0, 0.25, 7.0]) {
                    assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
                }
            }
            other => panic!("expected real samples, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_complex() {
        let values = vec![Complex64::new(1.0, 1.0), Complex64::new(0.0, -2.0), Complex64::new(3.0, 0.5)];
        let s = Seq::new(values.clone()).with_domain(Domain::Time);
        let back = idft(&dft(&s, &SilentSink), &SilentSink);
        for (got, want) in back.values().iter().zip(values) {
            assert_abs_diff_eq!(got.re, want.re, epsilon = 1e-9);
            assert_abs_diff_eq!(got.im, want.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_trip_keeps_extent() {
        // Three points need rounded twiddles
        let s = time(&[0.0, 1.0, 0.0]);
        let back = idft(&dft(&s, &SilentSink), &SilentSink);
        assert_eq!(back.extent(), 1);
        assert_eq!(back.prune().indices(), &[1]);

        let symbolic: Sequence<Laurent> = Sequence::from_reals(&[0.0, 0.0, 2.0, 0.0, 0.0]);
        let back = idft(&dft(&symbolic, &SilentSink), &SilentSink);
        assert_eq!(back.extent(), 1);
    }

    #[test]
    fn test_wrong_domain_advisories() {
        let sink = CollectingSink::new();
        let s = Seq::from_reals(&[1.0, 2.0]);

        let _ = dft(&s, &sink);
        let _ = idft(&s.with_domain(Domain::Time), &sink);

        assert_eq!(
            sink.advisories(),
            vec![
                Advisory::DftOutsideTime {
                    domain: Domain::Unspecified
                },
                Advisory::IdftOutsideFrequency { domain: Domain::Time },
            ]
        );
    }

    #[test]
    fn test_empty() {
        let s = time(&[]);
        assert!(dft(&s, &SilentSink).is_empty());
        assert!(idft(&s.with_domain(Domain::Frequency), &SilentSink).is_empty());
    }
}
