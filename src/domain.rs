//! Domain tokens for sequences.

use std::fmt;
use std::str::FromStr;

use crate::error::SeqError;

/// The domain a sequence is expressed over.
///
/// Each concrete domain has a canonical variable token: `n` for discrete
/// time, `k` for discrete frequency and `z` for the z-transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    /// Discrete time (n)
    Time,
    /// Discrete frequency (k)
    Frequency,
    /// Z-transform (z)
    ZTransform,
    /// No domain annotation
    #[default]
    Unspecified,
}

impl Domain {
    /// Canonical variable token for this domain.
    pub fn variable(&self) -> Option<char> {
        match self {
            Domain::Time => Some('n'),
            Domain::Frequency => Some('k'),
            Domain::ZTransform => Some('z'),
            Domain::Unspecified => None,
        }
    }

    /// Check whether this domain is denoted by the given variable token.
    pub fn is_token(&self, token: char) -> bool {
        self.variable() == Some(token)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Time => write!(f, "discrete-time"),
            Domain::Frequency => write!(f, "discrete-frequency"),
            Domain::ZTransform => write!(f, "z-domain"),
            Domain::Unspecified => write!(f, "unspecified"),
        }
    }
}

impl FromStr for Domain {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "time" => Ok(Domain::Time),
            "k" | "frequency" => Ok(Domain::Frequency),
            "z" | "ztransform" => Ok(Domain::ZTransform),
            _ => Err(SeqError::UnknownDomain {
                token: s.to_string(),
            }),
        }
    }
}
