// Error type shared by every fallible operation in the crate.
//
// All inputs to the generators are compile-time constants, so every error
// here is a defect (bad constant, bad caller argument), never a transient
// condition. Nothing is retried; errors propagate straight to the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A malformed scale degree, accidental, quality or key signature was
    /// passed in.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The key-name table has no entry for an accidental-order position.
    #[error("no key name configured for accidental-order position {position}")]
    MissingKeyName { position: usize },

    /// Applying a degree change would push an accidental past a double
    /// sharp or double flat.
    #[error("accidental {value} on degree {degree} is outside -2..=2")]
    AccidentalOutOfRange { degree: usize, value: i8 },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
