//! # Error Types

use crate::alloc::string::String;

/// The ways a single value can fail to be an acceptable code point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodePointFault {
    /// The integer lies outside of `[0, 0x10FFFF]`.
    #[error("{value} is outside of the code point range [0, 0x10FFFF]")]
    OutOfRange {
        /// The rejected integer.
        value: i128,
    },

    /// A surrogate (U+D800 - U+DFFF) was given without opting in.
    #[error(
        "U+{value:04X} is an unpaired surrogate; surrogates (U+D800 - U+DFFF) must be explicitly allowed"
    )]
    UnpairedSurrogate {
        /// The rejected surrogate.
        value: u32,
    },

    /// Text input did not hold exactly one code point.
    #[error("{text:?} does not represent a single code point")]
    NotSingleCodePoint {
        /// The rejected text.
        text: String,
    },
}

/// Errors from code point range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodePointError {
    /// A value is not an acceptable code point.
    #[error("invalid code point: {0}")]
    InvalidCodePoint(#[from] CodePointFault),

    /// A range was given with `first > last`.
    #[error("invalid range: first (U+{first:04X}) > last (U+{last:04X})")]
    InvalidRange {
        /// The first code point of the range.
        first: u32,

        /// The last code point of the range.
        last: u32,
    },

    /// Construction arguments were missing or conflicting.
    #[error("invalid arguments: {0}")]
    InvalidConstructorArguments(&'static str),

    /// A pattern was requested for a set of zero code points.
    #[error("no pattern can represent an empty set of code points")]
    EmptyRangeSet,
}

impl CodePointError {
    /// Is this an [`CodePointError::InvalidCodePoint`] error?
    pub fn is_invalid_code_point(&self) -> bool {
        matches!(self, Self::InvalidCodePoint(_))
    }
}

/// Result type for code point range operations.
pub type CPResult<T> = core::result::Result<T, CodePointError>;
