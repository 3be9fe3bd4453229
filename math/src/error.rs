use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    /// Errors returned by the base-N digit decoder.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range [2, 36]")]
        UnsupportedBase(u32),
        #[error("empty digit string")]
        EmptyDigits,
        #[error("invalid digit '{digit}' for base {base}")]
        InvalidDigit { digit: char, base: u32 },
    }
}

pub mod lagrange {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("invalid point id: {0}")]
        InvalidPointId(u64),
        #[error("insufficient points: need {required}, got {provided}")]
        InsufficientPoints { required: usize, provided: usize },
        #[error("duplicate x coordinate {0} among interpolation points")]
        DuplicatePoint(u64),
        #[error("threshold must be at least 1")]
        ZeroThreshold,
    }
}

pub use lagrange::Error as LagrangeError;
pub use radix::Error as RadixError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Lagrange(#[from] LagrangeError),
}

pub type Error = MathError;
