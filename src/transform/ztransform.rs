//! Term-by-term z-transform and its inverse.
//!
//! The result is kept as a sequence of terms rather than summed into a
//! closed form, and the indices of the input are kept, so `izt(zt(s))`
//! recovers `s` exactly on a symbolic backend.

use super::advisory::{Advisory, AdvisorySink};
use super::dft::idft;
use crate::domain::Domain;
use crate::error::Result;
use crate::scalar::Scalar;
use crate::sequence::Sequence;

/// Map the value at index n to `value·z^(−n)`.
///
/// A frequency-domain input is first brought back to discrete time.
pub fn zt<T: Scalar>(seq: &Sequence<T>, sink: &dyn AdvisorySink) -> Result<Sequence<T>> {
    match seq.domain() {
        Domain::ZTransform => sink.emit(Advisory::ZtInZDomain),
        Domain::Frequency => return zt(&idft(seq, sink), sink),
        _ => {}
    }

    scale_by_z_power(seq, -1, Domain::ZTransform)
}

/// Map the value at index n to `value·z^(n)`.
///
/// A frequency-domain input is first brought back to discrete time.
pub fn izt<T: Scalar>(seq: &Sequence<T>, sink: &dyn AdvisorySink) -> Result<Sequence<T>> {
    match seq.domain() {
        Domain::Time => sink.emit(Advisory::IztInTimeDomain),
        Domain::Frequency => return izt(&idft(seq, sink), sink),
        _ => {}
    }

    scale_by_z_power(seq, 1, Domain::Time)
}

fn scale_by_z_power<T: Scalar>(seq: &Sequence<T>, sign: i64, domain: Domain) -> Result<Sequence<T>> {
    let values = seq
        .iter()
        .map(|(n, v)| T::z_power(sign * n).map(|zn| v.clone() * zn))
        .collect::<Result<Vec<_>>>()?;

    Ok(Sequence::from_parts(values, seq.indices().to_vec(), domain))
}
