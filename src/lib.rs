//! # Seqtrans
//!
//! Finite discrete sequences and the transforms between their domains.
//!
//! This library provides:
//! - A [`Sequence`] type: values at logical indices, zero outside its support
//! - Index algebra: prune, zero-pad, zero-extend, delay, extent
//! - DFT/IDFT and term-by-term ZT/IZT, with dispatch between domains
//! - Recursive digital filtering and convolution
//! - Numeric evaluation with automatic casting to real
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`scalar`] - The [`Scalar`] trait and its numeric and symbolic backends
//! - [`domain`] - Domain tokens (n, k, z)
//! - [`sequence`] - The sequence container and its algebra
//! - [`transform`] - Domain transforms and advisories
//! - [`filter`] - Filtering and convolution
//! - [`report`] - Text output (CLI only)
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use seqtrans::{ConvolveMode, Domain, Laurent, Sequence};
//!
//! let x: Sequence<Laurent> = Sequence::from_reals(&[1.0, 2.0, 3.0]).with_domain(Domain::Time);
//! let h = Sequence::from_reals(&[1.0, 1.0]);
//!
//! let y = x.convolve(&h, ConvolveMode::Full).unwrap();
//! assert_eq!(y.to_string(), "{_1, 3, 5, 3}");
//!
//! let z = x.to_domain(Domain::ZTransform).unwrap();
//! assert_eq!(z.to_string(), "{_1, 2*z^-1, 3*z^-2}");
//! assert_eq!(z.izt().unwrap(), x);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! seqtrans -x 1,2,3 --origin 1 zt
//! ```
//!
//! ## Domains
//!
//! Every sequence carries a [`Domain`] tag. The tag is metadata: it selects
//! the path taken by [`Sequence::to_domain`], and a transform applied to a
//! sequence with an unexpected tag emits an [`Advisory`] instead of failing.

pub mod domain;
pub mod error;
pub mod filter;
pub mod scalar;
pub mod sequence;
pub mod transform;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use domain::Domain;
pub use error::{Result, SeqError};
pub use filter::{convolve, lfilter, ConvolveMode};
pub use num_complex::Complex64;
pub use scalar::{Laurent, Scalar};
pub use sequence::{EvalConfig, Sample, Samples, Sequence, SequenceBuilder};
pub use transform::{
    dft, idft, izt, to_domain, zt, Advisory, AdvisorySink, CollectingSink, SilentSink, TracingSink,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSequence;
