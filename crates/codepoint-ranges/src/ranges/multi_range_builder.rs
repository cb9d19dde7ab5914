//! # Multi-Range Builder

use crate::{
    alloc::vec::Vec,
    code_points::CodePointValue,
    errors::{CPResult, CodePointError},
    ranges::{CodePointMultiRange, CodePointRange, MultiRangeSource},
};

/// Builder for [`CodePointMultiRange`]s.
///
/// Exactly one of [`with_code_points`](Self::with_code_points) or
/// [`with_ranges`](Self::with_ranges) must be given before [`build`](Self::build).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultiRangeBuilder {
    code_points: Option<CPResult<Vec<u32>>>,
    ranges: Option<Vec<CodePointRange>>,
    unpaired_surrogates: bool,
}

impl MultiRangeBuilder {
    /// Create a new, empty [`MultiRangeBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code points to build from.
    ///
    /// Decoding errors are reported by [`build`](Self::build).
    ///
    /// ## Arguments
    /// * `code_points` - Integers, `char`s, or single code point text; in any order.
    pub fn with_code_points<I, V>(
        mut self,
        code_points: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: CodePointValue,
    {
        self.code_points = Some(
            code_points
                .into_iter()
                .map(|cp| cp.to_code_point())
                .collect(),
        );
        self
    }

    /// Set the ranges to build from.
    ///
    /// ## Arguments
    /// * `ranges` - Ranges in any order; overlapping or adjacent ranges are fused.
    pub fn with_ranges<I>(
        mut self,
        ranges: I,
    ) -> Self
    where
        I: IntoIterator<Item = CodePointRange>,
    {
        self.ranges = Some(ranges.into_iter().collect());
        self
    }

    /// Get whether code points may include unpaired surrogates.
    pub fn unpaired_surrogates(&self) -> bool {
        self.unpaired_surrogates
    }

    /// Set whether code points may include unpaired surrogates.
    ///
    /// Ranges carry their own setting, so this only applies to code points.
    pub fn set_unpaired_surrogates(
        &mut self,
        unpaired_surrogates: bool,
    ) {
        self.unpaired_surrogates = unpaired_surrogates;
    }

    /// Set whether code points may include unpaired surrogates.
    ///
    /// Ranges carry their own setting, so this only applies to code points.
    pub fn with_unpaired_surrogates(
        mut self,
        unpaired_surrogates: bool,
    ) -> Self {
        self.set_unpaired_surrogates(unpaired_surrogates);
        self
    }

    /// The [`MultiRangeSource`] described by this builder.
    ///
    /// ## Returns
    /// The source, or [`CodePointError::InvalidConstructorArguments`] unless exactly
    /// one of code points or ranges was given.
    pub fn source(self) -> CPResult<MultiRangeSource> {
        match (self.code_points, self.ranges) {
            (Some(code_points), None) => Ok(MultiRangeSource::CodePoints {
                code_points: code_points?,
                unpaired_surrogates: self.unpaired_surrogates,
            }),
            (None, Some(ranges)) => Ok(MultiRangeSource::Ranges(ranges)),
            (Some(_), Some(_)) => Err(CodePointError::InvalidConstructorArguments(
                "code points and ranges are mutually exclusive",
            )),
            (None, None) => Err(CodePointError::InvalidConstructorArguments(
                "one of code points or ranges is required",
            )),
        }
    }

    /// Build the [`CodePointMultiRange`].
    pub fn build(self) -> CPResult<CodePointMultiRange> {
        CodePointMultiRange::new(self.source()?)
    }
}
