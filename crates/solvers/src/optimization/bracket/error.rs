use std::fmt;

use thiserror::Error;

/// Why the bracket finder gave up on a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditioning {
    /// Every trial step, however small, evaluated to NaN.
    NoFiniteStep,
    /// The function reached `-inf`.
    UnboundedBelow,
    /// The iteration limit was reached while still descending.
    NoProgress,
    /// The trial abscissa overflowed.
    Diverged,
    /// Three points were found but could not form a valid bracket.
    Degenerate,
}

impl fmt::Display for Conditioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoFiniteStep => "no finite step found",
            Self::UnboundedBelow => "function is unbounded below",
            Self::NoProgress => "still descending at the iteration limit",
            Self::Diverged => "trial abscissa overflowed",
            Self::Degenerate => "points do not form a bracket",
        };
        f.write_str(reason)
    }
}

/// Errors that can occur while bracketing a minimum.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seed is not finite: {value}")]
    NonFiniteSeed { value: f64 },

    #[error("seeds are equal: both are {value}")]
    EqualSeeds { value: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("poorly conditioned function near x = {x}: {reason}")]
    PoorlyConditioned { x: f64, reason: Conditioning },
}

impl Error {
    /// Returns true if the function, not the caller's arguments, is to blame.
    #[must_use]
    pub fn is_poorly_conditioned(&self) -> bool {
        matches!(self, Self::PoorlyConditioned { .. })
    }
}
