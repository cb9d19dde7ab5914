//! # Code Point Multi-Range
//!
//! A [`CodePointMultiRange`] is a set of code points held as sorted,
//! disjoint, maximal [`CodePointRange`]s; it synthesizes minimal regex
//! patterns for the whole set.

use core::fmt::{Display, Formatter};

use crate::{
    alloc::{string::String, vec::Vec},
    code_points::CodePointValue,
    errors::CPResult,
    patterns::{
        EngineConvention,
        LegacyEscaper,
        PatternOptions,
        PatternPiece,
        synthesize_pattern,
    },
    ranges::{CodePointRange, code_points_to_ranges, fuse_ranges},
};

/// The input a [`CodePointMultiRange`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiRangeSource {
    /// Raw code points, in any order, possibly with duplicates.
    CodePoints {
        /// The code points.
        code_points: Vec<u32>,

        /// Whether U+D800 - U+DFFF are accepted.
        unpaired_surrogates: bool,
    },

    /// Already-built ranges, in any order, possibly overlapping.
    Ranges(Vec<CodePointRange>),
}

/// A collection of non-overlapping [`CodePointRange`]s.
///
/// The ranges are sorted, and no two of them overlap or are adjacent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<CodePointRange>", into = "Vec<CodePointRange>"))]
pub struct CodePointMultiRange {
    ranges: Vec<CodePointRange>,
}

impl From<Vec<CodePointRange>> for CodePointMultiRange {
    fn from(ranges: Vec<CodePointRange>) -> Self {
        Self::from_ranges(ranges)
    }
}

impl From<CodePointMultiRange> for Vec<CodePointRange> {
    fn from(multi_range: CodePointMultiRange) -> Self {
        multi_range.ranges
    }
}

impl From<CodePointRange> for CodePointMultiRange {
    fn from(range: CodePointRange) -> Self {
        Self {
            ranges: Vec::from([range]),
        }
    }
}

impl FromIterator<CodePointRange> for CodePointMultiRange {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl CodePointMultiRange {
    /// Build a multi-range from a [`MultiRangeSource`].
    pub fn new(source: MultiRangeSource) -> CPResult<Self> {
        match source {
            MultiRangeSource::CodePoints {
                code_points,
                unpaired_surrogates,
            } => Ok(Self {
                ranges: code_points_to_ranges(code_points, unpaired_surrogates)?,
            }),
            MultiRangeSource::Ranges(ranges) => Ok(Self::from_ranges(ranges)),
        }
    }

    /// Build a multi-range from code points, rejecting surrogates.
    ///
    /// See [`code_points_to_ranges`].
    pub fn from_code_points<I, V>(code_points: I) -> CPResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: CodePointValue,
    {
        Ok(Self {
            ranges: code_points_to_ranges(code_points, false)?,
        })
    }

    /// Build a multi-range from ranges, fusing any which overlap or are adjacent.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        Self {
            ranges: fuse_ranges(ranges),
        }
    }

    /// The member ranges, in ascending order.
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// The number of member ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Are there no member ranges?
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The number of code points in the set.
    pub fn code_point_count(&self) -> usize {
        self.ranges.iter().map(CodePointRange::len).sum()
    }

    /// Whether any member range permits unpaired surrogates.
    pub fn unpaired_surrogates(&self) -> bool {
        self.ranges.iter().any(CodePointRange::unpaired_surrogates)
    }

    /// Is `cp` in the set?
    pub fn contains(
        &self,
        cp: u32,
    ) -> bool {
        let idx = self.ranges.partition_point(|r| r.last() < cp);
        self.ranges.get(idx).is_some_and(|r| r.contains(cp))
    }

    /// Iterate over the code points of the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(CodePointRange::iter)
    }

    /// Split every member range into [`PatternPiece`]s, in ascending order.
    ///
    /// ## Arguments
    /// * `surrogate_pairs` - Whether code points above the BMP are matched as surrogate pairs.
    pub fn pattern_pieces(
        &self,
        surrogate_pairs: bool,
    ) -> Vec<PatternPiece> {
        self.ranges
            .iter()
            .flat_map(|r| r.pattern_pieces(surrogate_pairs))
            .collect()
    }

    /// Express the set as a generic regex pattern.
    ///
    /// Ranges which can share a bracket expression are merged into one;
    /// surrogate pair pieces follow as `|` alternation branches.
    ///
    /// ## Returns
    /// The pattern, or [`CodePointError::EmptyRangeSet`](crate::errors::CodePointError::EmptyRangeSet)
    /// when the set is empty.
    pub fn as_generic_pattern(
        &self,
        options: &PatternOptions,
    ) -> CPResult<String> {
        let surrogate_pairs = options.uses_surrogate_pairs();
        log::trace!(
            "synthesizing pattern for {} ranges (surrogate_pairs: {})",
            self.ranges.len(),
            surrogate_pairs
        );
        synthesize_pattern(self.pattern_pieces(surrogate_pairs), options)
    }

    /// Express the set as a pattern for engines with full `\u`/`\U` scalar escapes.
    pub fn as_wide_pattern(&self) -> CPResult<String> {
        self.as_generic_pattern(&PatternOptions::new().with_surrogate_pairs(false))
    }

    /// Express the set as a pattern for a legacy engine.
    ///
    /// The engine's string width must be stated in `options`.
    /// Unless `options` chooses an escaper, code points are written with the
    /// [`LegacyEscaper`].
    ///
    /// ## Returns
    /// The pattern, or [`CodePointError::InvalidConstructorArguments`](crate::errors::CodePointError::InvalidConstructorArguments)
    /// when `options` does not state a surrogate pair preference.
    pub fn as_legacy_pattern(
        &self,
        options: &PatternOptions,
    ) -> CPResult<String> {
        options.require_surrogate_pairs()?;
        self.as_generic_pattern(&options.with_fallback_escaper(&LegacyEscaper))
    }

    /// Express the set as a pattern for the given engine convention.
    pub fn as_convention_pattern(
        &self,
        convention: EngineConvention,
    ) -> CPResult<String> {
        if !convention.is_legacy() {
            return self.as_wide_pattern();
        }
        self.as_legacy_pattern(&convention.pattern_options())
    }
}

impl<'a> IntoIterator for &'a CodePointMultiRange {
    type Item = &'a CodePointRange;
    type IntoIter = core::slice::Iter<'a, CodePointRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl Display for CodePointMultiRange {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{{")?;
        for (idx, range) in self.ranges.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{range}")?;
        }
        write!(f, "}}")
    }
}
