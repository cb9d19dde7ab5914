//! # Code Point Range

use core::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::RangeInclusive,
};

use crate::{
    alloc::{string::String, vec::Vec},
    code_points::{
        CodePointValue,
        SURROGATE_FIRST,
        spans_surrogates,
        validate_code_point,
    },
    errors::{CPResult, CodePointError, CodePointFault},
    patterns::{
        EngineConvention,
        LegacyEscaper,
        PatternOptions,
        PatternPiece,
        decompose_range,
        synthesize_pattern,
    },
};

/// A range of code points from `first` up to and including `last`.
///
/// The bounds are inclusive, because regex ranges of the form
/// `[\Uxxxxxxxx-\Uxxxxxxxx]` include both the first and last code points.
///
/// Ranges compare (and hash) by their bounds alone; the
/// `unpaired_surrogates` flag is not part of a range's identity.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_support::RangeRepr"))]
pub struct CodePointRange {
    first: u32,
    last: u32,
    unpaired_surrogates: bool,
}

impl CodePointRange {
    /// Build a new range which rejects surrogates.
    ///
    /// ## Arguments
    /// * `first` - The first code point; an integer, `char`, or single code point text.
    /// * `last` - The last code point; an integer, `char`, or single code point text.
    ///
    /// ## Returns
    /// The range, or an error if either bound is invalid, `first > last`,
    /// or the range includes a surrogate.
    pub fn try_new<F, L>(
        first: F,
        last: L,
    ) -> CPResult<Self>
    where
        F: CodePointValue,
        L: CodePointValue,
    {
        Self::try_new_with_surrogates(first, last, false)
    }

    /// Build a new range, optionally permitting unpaired surrogates.
    ///
    /// ## Arguments
    /// * `first` - The first code point; an integer, `char`, or single code point text.
    /// * `last` - The last code point; an integer, `char`, or single code point text.
    /// * `unpaired_surrogates` - Whether U+D800 - U+DFFF may be included.
    pub fn try_new_with_surrogates<F, L>(
        first: F,
        last: L,
        unpaired_surrogates: bool,
    ) -> CPResult<Self>
    where
        F: CodePointValue,
        L: CodePointValue,
    {
        let first = first.to_code_point()?;
        let last = last.to_code_point()?;
        Self::from_bounds(first, last, unpaired_surrogates)
    }

    /// Build a range holding the single code point `cp`.
    pub fn try_single<V: CodePointValue>(cp: V) -> CPResult<Self> {
        let cp = cp.to_code_point()?;
        Self::from_bounds(cp, cp, false)
    }

    /// Validate and build from integer bounds.
    pub(crate) fn from_bounds(
        first: u32,
        last: u32,
        unpaired_surrogates: bool,
    ) -> CPResult<Self> {
        let first = validate_code_point(first as i128, true)?;
        let last = validate_code_point(last as i128, true)?;
        if first > last {
            return Err(CodePointError::InvalidRange { first, last });
        }
        if !unpaired_surrogates && spans_surrogates(first, last) {
            return Err(CodePointFault::UnpairedSurrogate {
                value: first.max(SURROGATE_FIRST),
            }
            .into());
        }
        Ok(Self {
            first,
            last,
            unpaired_surrogates,
        })
    }

    /// The first code point.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// The last code point.
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Whether this range was built permitting unpaired surrogates.
    pub fn unpaired_surrogates(&self) -> bool {
        self.unpaired_surrogates
    }

    /// The number of code points in the range.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Does the range hold exactly one code point?
    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    /// Is `cp` within `[first, last]`?
    pub fn contains(
        &self,
        cp: u32,
    ) -> bool {
        self.first <= cp && cp <= self.last
    }

    /// Do the two ranges intersect, or touch end-to-end?
    pub fn overlaps_or_adjacent(
        &self,
        other: &Self,
    ) -> bool {
        self.first <= other.last.saturating_add(1) && other.first <= self.last.saturating_add(1)
    }

    /// The union of two ranges which overlap or are adjacent.
    ///
    /// The union permits unpaired surrogates if either input did.
    ///
    /// ## Returns
    /// `None` if the union is not a contiguous range.
    pub fn merge(
        &self,
        other: &Self,
    ) -> Option<Self> {
        self.overlaps_or_adjacent(other).then(|| Self {
            first: self.first.min(other.first),
            last: self.last.max(other.last),
            unpaired_surrogates: self.unpaired_surrogates || other.unpaired_surrogates,
        })
    }

    /// Iterate over the code points of the range.
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    /// Split the range into [`PatternPiece`]s.
    ///
    /// ## Arguments
    /// * `surrogate_pairs` - Whether code points above the BMP are matched as surrogate pairs.
    pub fn pattern_pieces(
        &self,
        surrogate_pairs: bool,
    ) -> Vec<PatternPiece> {
        decompose_range(self.first, self.last, surrogate_pairs)
    }

    /// Express the range as a generic regex pattern.
    ///
    /// With the default options, every code point is written with a direct
    /// scalar escape. When `options` enables surrogate pairs, code points
    /// above the BMP are written as UTF-16 surrogate pairs, and the pattern may
    /// be an alternation of several branches.
    pub fn as_generic_pattern(
        &self,
        options: &PatternOptions,
    ) -> String {
        let pieces = self.pattern_pieces(options.uses_surrogate_pairs());
        // A range always has at least one piece.
        synthesize_pattern(pieces, options).unwrap_or_default()
    }

    /// Express the range as a pattern for engines with full `\u`/`\U` scalar escapes.
    pub fn as_wide_pattern(&self) -> String {
        self.as_generic_pattern(&PatternOptions::new().with_surrogate_pairs(false))
    }

    /// Express the range as a pattern for a legacy engine.
    ///
    /// The engine's string width must be stated in `options`;
    /// surrogate pairs for a narrow (UTF-16) engine, direct escapes for a wide one.
    /// Unless `options` chooses an escaper, code points are written with the
    /// [`LegacyEscaper`].
    ///
    /// ## Returns
    /// The pattern, or [`CodePointError::InvalidConstructorArguments`] when
    /// `options` does not state a surrogate pair preference.
    pub fn as_legacy_pattern(
        &self,
        options: &PatternOptions,
    ) -> CPResult<String> {
        options.require_surrogate_pairs()?;
        Ok(self.as_generic_pattern(&options.with_fallback_escaper(&LegacyEscaper)))
    }

    /// Express the range as a pattern for the given engine convention.
    pub fn as_convention_pattern(
        &self,
        convention: EngineConvention,
    ) -> String {
        if !convention.is_legacy() {
            return self.as_wide_pattern();
        }
        self.as_generic_pattern(
            &convention
                .pattern_options()
                .with_fallback_escaper(&LegacyEscaper),
        )
    }
}

impl PartialEq for CodePointRange {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.first == other.first && self.last == other.last
    }
}

impl Eq for CodePointRange {}

impl Hash for CodePointRange {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.first.hash(state);
        self.last.hash(state);
    }
}

impl PartialOrd for CodePointRange {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodePointRange {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        (self.first, self.last).cmp(&(other.first, other.last))
    }
}

impl Display for CodePointRange {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "U+{:04X}..U+{:04X}", self.first, self.last)
    }
}

impl IntoIterator for CodePointRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CodePointRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<RangeInclusive<u32>> for CodePointRange {
    type Error = CodePointError;

    fn try_from(range: RangeInclusive<u32>) -> CPResult<Self> {
        Self::try_new(*range.start(), *range.end())
    }
}

impl TryFrom<RangeInclusive<char>> for CodePointRange {
    type Error = CodePointError;

    fn try_from(range: RangeInclusive<char>) -> CPResult<Self> {
        Self::try_new(*range.start(), *range.end())
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::CodePointRange;
    use crate::errors::CodePointError;

    /// Unvalidated wire form of a [`CodePointRange`].
    #[derive(serde::Deserialize)]
    pub(super) struct RangeRepr {
        first: u32,
        last: u32,
        #[serde(default)]
        unpaired_surrogates: bool,
    }

    impl TryFrom<RangeRepr> for CodePointRange {
        type Error = CodePointError;

        fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
            CodePointRange::from_bounds(repr.first, repr.last, repr.unpaired_surrogates)
        }
    }
}
