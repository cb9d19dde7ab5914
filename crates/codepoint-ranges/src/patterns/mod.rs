//! # Regex Pattern Generation
//!
//! Code point ranges are rendered as regex character-class patterns; see
//! [`CodePointRange`](crate::ranges::CodePointRange) and
//! [`CodePointMultiRange`](crate::ranges::CodePointMultiRange).
//!
//! The generated text uses `\uXXXX` and `\UXXXXXXXX` escapes by default;
//! the legacy modes use [`LegacyEscaper`], and a caller-supplied
//! [`CodePointEscaper`] overrides either.
//!
//! ## Pieces
//!
//! Each range is split into [`PatternPiece`]s; pieces which match code points
//! by value merge into one bracket expression, while surrogate pair pieces
//! become alternation branches. See [`synthesize_pattern`].
pub mod engine_convention;
pub mod escaping;
pub mod pattern_options;
pub mod pattern_pieces;
pub mod synthesis;

#[doc(inline)]
pub use engine_convention::EngineConvention;
#[doc(inline)]
pub use escaping::{
    CodePointEscaper, DefaultEscaper, LegacyEscaper, default_escape, legacy_escape,
};
#[doc(inline)]
pub use pattern_options::PatternOptions;
#[doc(inline)]
pub use pattern_pieces::{PatternPiece, decompose_range};
#[doc(inline)]
pub use synthesis::synthesize_pattern;
