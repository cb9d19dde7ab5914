//! # Range Builder
//!
//! Collapses unordered collections of code points (or ranges) into sorted,
//! disjoint, maximal [`CodePointRange`]s.

use crate::{
    alloc::vec::Vec,
    code_points::CodePointValue,
    errors::CPResult,
    ranges::CodePointRange,
};

/// Convert a collection of code points into a list of [`CodePointRange`]s.
///
/// The input may be in any order, and may hold duplicates.
/// The result is sorted, and no two ranges overlap or are adjacent.
///
/// ## Arguments
/// * `code_points` - The code points; integers, `char`s, or single code point text.
/// * `unpaired_surrogates` - Whether U+D800 - U+DFFF are accepted.
///
/// ## Returns
/// The ranges, or the first validation error encountered.
pub fn code_points_to_ranges<I, V>(
    code_points: I,
    unpaired_surrogates: bool,
) -> CPResult<Vec<CodePointRange>>
where
    I: IntoIterator<Item = V>,
    V: CodePointValue,
{
    let mut values = code_points
        .into_iter()
        .map(|cp| cp.to_code_point())
        .collect::<CPResult<Vec<u32>>>()?;
    let input_count = values.len();

    values.sort_unstable();
    values.dedup();

    let mut ranges = Vec::new();
    let mut iter = values.into_iter();
    if let Some(start) = iter.next() {
        let (mut first, mut last) = (start, start);
        for cp in iter {
            if cp == last + 1 {
                last = cp;
                continue;
            }
            ranges.push(CodePointRange::from_bounds(first, last, unpaired_surrogates)?);
            (first, last) = (cp, cp);
        }
        ranges.push(CodePointRange::from_bounds(first, last, unpaired_surrogates)?);
    }

    log::debug!(
        "built {} code point ranges from {} code points",
        ranges.len(),
        input_count
    );
    Ok(ranges)
}

/// Convert several collections of code points into one list of [`CodePointRange`]s.
///
/// Equivalent to [`code_points_to_ranges`] over the concatenated collections.
///
/// ## Arguments
/// * `sets` - The code point collections.
/// * `unpaired_surrogates` - Whether U+D800 - U+DFFF are accepted.
pub fn code_point_sets_to_ranges<S, I, V>(
    sets: S,
    unpaired_surrogates: bool,
) -> CPResult<Vec<CodePointRange>>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = V>,
    V: CodePointValue,
{
    code_points_to_ranges(sets.into_iter().flatten(), unpaired_surrogates)
}

/// Sort ranges, and fuse those which overlap or are adjacent.
///
/// A fused range permits unpaired surrogates if any of its parts did.
pub fn fuse_ranges<I>(ranges: I) -> Vec<CodePointRange>
where
    I: IntoIterator<Item = CodePointRange>,
{
    let mut ranges: Vec<CodePointRange> = ranges.into_iter().collect();
    let input_count = ranges.len();
    ranges.sort_unstable();

    let mut fused: Vec<CodePointRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match fused.last_mut() {
            Some(current) => match current.merge(&range) {
                Some(merged) => *current = merged,
                None => fused.push(range),
            },
            None => fused.push(range),
        }
    }

    if fused.len() != input_count {
        log::debug!("fused {} ranges into {}", input_count, fused.len());
    }
    fused
}
