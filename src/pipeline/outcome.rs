//! Per-target outcomes
//!
//! Exactly one [`Outcome`] is produced for every target handed to the
//! pipeline. Failures are data, not errors.

use crate::pipeline::hasher::Fingerprint;
use crate::target::Target;
use crate::FetchError;
use std::fmt;

/// A target that was fetched and hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOutcome {
    pub target: Target,
    pub fingerprint: Fingerprint,
}

/// A target whose fetch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureOutcome {
    pub target: Target,
    pub cause: FetchError,
}

/// Result of processing one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(SuccessOutcome),
    Failure(FailureOutcome),
}

impl Outcome {
    pub fn success(target: Target, fingerprint: Fingerprint) -> Self {
        Outcome::Success(SuccessOutcome {
            target,
            fingerprint,
        })
    }

    pub fn failure(target: Target, cause: FetchError) -> Self {
        Outcome::Failure(FailureOutcome { target, cause })
    }

    /// The target this outcome belongs to
    pub fn target(&self) -> &Target {
        match self {
            Outcome::Success(s) => &s.target,
            Outcome::Failure(f) => &f.target,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn fingerprint(&self) -> Option<Fingerprint> {
        match self {
            Outcome::Success(s) => Some(s.fingerprint),
            Outcome::Failure(_) => None,
        }
    }
}

/// Renders the output line: `<target> <hex>` or `<target> <cause>`
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(s) => write!(f, "{} {}", s.target, s.fingerprint),
            Outcome::Failure(e) => write!(f, "{} {}", e.target, e.cause),
        }
    }
}
