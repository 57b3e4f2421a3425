//! Domain transforms between discrete time, discrete frequency and z.
//!
//! Four primitive transforms connect the three domains:
//!
//! ```text
//!            DFT
//!     n  ---------->  k
//!     |  <----------
//!     |      IDFT
//!  ZT | ^ IZT
//!     v |
//!     z
//! ```
//!
//! Conversions between k and z are composed through n, so all six directed
//! conversions are available from [`to_domain`]. A transform applied to a
//! sequence tagged with an unexpected domain still runs and reports an
//! [`Advisory`].

mod advisory;
mod dft;
mod ztransform;

pub use advisory::{Advisory, AdvisorySink, CollectingSink, SilentSink, TracingSink};
pub use dft::{dft, idft};
pub use ztransform::{izt, zt};

use crate::domain::Domain;
use crate::error::Result;
use crate::scalar::Scalar;
use crate::sequence::Sequence;

/// Convert a sequence to the `target` domain.
///
/// Returns a copy if the sequence is already there, the direct transform if
/// the target is one hop away, and the composition through discrete time
/// for k to z and z to k. A target of [`Domain::Unspecified`] yields a copy.
pub fn to_domain<T: Scalar>(
    seq: &Sequence<T>,
    target: Domain,
    sink: &dyn AdvisorySink,
) -> Result<Sequence<T>> {
    let source = seq.domain();
    if source == target || target == Domain::Unspecified {
        return Ok(seq.clone());
    }

    tracing::debug!(%source, %target, "converting sequence");

    match (target, source) {
        (Domain::Time, Domain::Frequency) => Ok(idft(seq, sink)),
        (Domain::Time, _) => izt(seq, sink),
        (Domain::Frequency, Domain::ZTransform) => Ok(dft(&izt(seq, sink)?, sink)),
        (Domain::Frequency, _) => Ok(dft(seq, sink)),
        (Domain::ZTransform, Domain::Frequency) => zt(&idft(seq, sink), sink),
        (Domain::ZTransform, _) => zt(seq, sink),
        (Domain::Unspecified, _) => Ok(seq.clone()),
    }
}

impl<T: Scalar> Sequence<T> {
    /// Discrete Fourier transform, reporting advisories to `tracing`.
    pub fn dft(&self) -> Sequence<T> {
        dft(self, &TracingSink)
    }

    /// Inverse discrete Fourier transform, reporting advisories to `tracing`.
    pub fn idft(&self) -> Sequence<T> {
        idft(self, &TracingSink)
    }

    /// Term-by-term z-transform, reporting advisories to `tracing`.
    pub fn zt(&self) -> Result<Sequence<T>> {
        zt(self, &TracingSink)
    }

    /// Term-by-term inverse z-transform, reporting advisories to `tracing`.
    pub fn izt(&self) -> Result<Sequence<T>> {
        izt(self, &TracingSink)
    }

    /// Convert to another domain, reporting advisories to `tracing`.
    pub fn to_domain(&self, target: Domain) -> Result<Sequence<T>> {
        to_domain(self, target, &TracingSink)
    }

    /// Convert to another domain, reporting advisories to `sink`.
    pub fn to_domain_with(&self, target: Domain, sink: &dyn AdvisorySink) -> Result<Sequence<T>> {
        to_domain(self, target, sink)
    }
}
