//! # `codepoint-ranges` Unicode Range Toolkit
//!
//! This crate turns arbitrary sets of Unicode code points into minimal sets
//! of contiguous ranges, and renders them as concise regex character-class
//! patterns.
//!
//! See:
//! * [`code_points`] to validate code points, and for UTF-16 surrogate helpers.
//! * [`ranges`] for [`CodePointRange`] and [`CodePointMultiRange`].
//! * [`patterns`] for escaping policies, pattern options, and engine conventions.
//!
//! Patterns are only emitted as text; compiling them is up to the caller.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Building Patterns
//!
//! ```rust
//! use codepoint_ranges::{CodePointMultiRange, EngineConvention, PatternOptions};
//!
//! let hex_digits = CodePointMultiRange::from_code_points("0123456789ABCDEFabcdef".chars())?;
//! assert_eq!(hex_digits.as_wide_pattern()?, "[0-9A-Fa-f]");
//!
//! let emoji = CodePointMultiRange::from_code_points(0x1F600u32..=0x1F64F)?;
//! assert_eq!(emoji.as_wide_pattern()?, "[\\U0001F600-\\U0001F64F]");
//! assert_eq!(
//!     emoji.as_convention_pattern(EngineConvention::Narrow)?,
//!     "\\uD83D[\\uDE00-\\uDE4F]"
//! );
//!
//! let options = PatternOptions::new().with_surrogate_pairs(true);
//! assert_eq!(emoji.as_legacy_pattern(&options)?, "\\uD83D[\\uDE00-\\uDE4F]");
//! # Ok::<(), codepoint_ranges::errors::CodePointError>(())
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod code_points;
pub mod errors;
pub mod patterns;
pub mod ranges;

#[doc(inline)]
pub use errors::{CPResult, CodePointError, CodePointFault};
#[doc(inline)]
pub use patterns::{
    CodePointEscaper, DefaultEscaper, EngineConvention, LegacyEscaper, PatternOptions,
};
#[doc(inline)]
pub use ranges::{
    CodePointMultiRange, CodePointRange, MultiRangeBuilder, MultiRangeSource, code_points_to_ranges,
};
