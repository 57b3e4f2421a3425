//! Non-fatal diagnostics raised by the transforms.
//!
//! A transform invoked on a sequence tagged with an unexpected domain still
//! runs, but reports an [`Advisory`] to an [`AdvisorySink`]. The default
//! sink forwards to `tracing` at WARN level, so advisories can be silenced
//! with the subscriber's filter or by passing [`SilentSink`].

use std::cell::RefCell;
use std::fmt;

use crate::domain::Domain;

/// A likely mistake noticed while transforming a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// DFT applied to a sequence not in discrete time
    DftOutsideTime { domain: Domain },
    /// IDFT applied to a sequence not in discrete frequency
    IdftOutsideFrequency { domain: Domain },
    /// ZT applied to a sequence already in the z-domain
    ZtInZDomain,
    /// IZT applied to a sequence already in discrete time
    IztInTimeDomain,
}

impl Advisory {
    /// Domain tag of the sequence that triggered the advisory.
    pub fn domain(&self) -> Domain {
        match self {
            Advisory::DftOutsideTime { domain } | Advisory::IdftOutsideFrequency { domain } => {
                *domain
            }
            Advisory::ZtInZDomain => Domain::ZTransform,
            Advisory::IztInTimeDomain => Domain::Time,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DftOutsideTime { domain } => {
                write!(f, "DFT applied to a {} sequence; IDFT may be intended", domain)
            }
            Advisory::IdftOutsideFrequency { domain } => {
                write!(f, "IDFT applied to a {} sequence; DFT may be intended", domain)
            }
            Advisory::ZtInZDomain => write!(f, "ZT applied to a z-domain sequence; IZT may be intended"),
            Advisory::IztInTimeDomain => {
                write!(f, "IZT applied to a discrete-time sequence; ZT may be intended")
            }
        }
    }
}

/// Destination for transform advisories.
pub trait AdvisorySink {
    /// Report one advisory.
    fn emit(&self, advisory: Advisory);
}

/// Forwards advisories to `tracing` as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn emit(&self, advisory: Advisory) {
        tracing::warn!(domain = %advisory.domain(), "{}", advisory);
    }
}

/// Discards every advisory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl AdvisorySink for SilentSink {
    fn emit(&self, _advisory: Advisory) {}
}

/// Records advisories for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    advisories: RefCell<Vec<Advisory>>,
}

impl CollectingSink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisories recorded so far.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.advisories.borrow().clone()
    }

    /// Remove and return the recorded advisories.
    pub fn take(&self) -> Vec<Advisory> {
        self.advisories.take()
    }
}

impl AdvisorySink for CollectingSink {
    fn emit(&self, advisory: Advisory) {
        self.advisories.borrow_mut().push(advisory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        sink.emit(Advisory::ZtInZDomain);
        sink.emit(Advisory::DftOutsideTime {
            domain: Domain::Frequency,
        });
        assert_eq!(sink.advisories().len(), 2);
        assert_eq!(sink.take()[1].domain(), Domain::Frequency);
        assert!(sink.advisories().is_empty());
    }

    #[test]
    fn test_messages() {
        let advisory = Advisory::IdftOutsideFrequency { domain: Domain::Time };
        assert_eq!(
            advisory.to_string(),
            "IDFT applied to a discrete-time sequence; DFT may be intended"
        );
        SilentSink.emit(advisory);
        TracingSink.emit(advisory);
    }
}
