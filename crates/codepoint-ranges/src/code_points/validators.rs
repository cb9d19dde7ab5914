//! Validators for code point values.
use crate::errors::{CPResult, CodePointFault};

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// The last code point of the Basic Multilingual Plane.
pub const BMP_LAST: u32 = 0xFFFF;

/// The first surrogate code point.
pub const SURROGATE_FIRST: u32 = 0xD800;

/// The last surrogate code point.
pub const SURROGATE_LAST: u32 = 0xDFFF;

/// The first UTF-16 lead (high) surrogate unit.
pub const LEAD_SURROGATE_FIRST: u32 = 0xD800;

/// The last UTF-16 lead (high) surrogate unit.
pub const LEAD_SURROGATE_LAST: u32 = 0xDBFF;

/// The first UTF-16 trail (low) surrogate unit.
pub const TRAIL_SURROGATE_FIRST: u32 = 0xDC00;

/// The last UTF-16 trail (low) surrogate unit.
pub const TRAIL_SURROGATE_LAST: u32 = 0xDFFF;

/// Is `value` in `[0, 0x10FFFF]`?
///
/// Surrogates are in range; see [`is_surrogate`].
pub fn is_scalar_value(value: i128) -> bool {
    (0..=MAX_CODE_POINT as i128).contains(&value)
}

/// Is `value` in the surrogate block `[0xD800, 0xDFFF]`?
pub fn is_surrogate(value: u32) -> bool {
    (SURROGATE_FIRST..=SURROGATE_LAST).contains(&value)
}

/// Does the closed interval `[first, last]` touch the surrogate block?
pub fn spans_surrogates(
    first: u32,
    last: u32,
) -> bool {
    first <= SURROGATE_LAST && SURROGATE_FIRST <= last
}

/// Validates and returns a code point.
///
/// ## Arguments
/// * `value` - The candidate integer.
/// * `unpaired_surrogates` - Whether surrogates are accepted.
///
/// ## Returns
/// The value as a `u32`, or the [`CodePointFault`] explaining the rejection.
pub fn validate_code_point(
    value: i128,
    unpaired_surrogates: bool,
) -> CPResult<u32> {
    if !is_scalar_value(value) {
        return Err(CodePointFault::OutOfRange { value }.into());
    }
    let value = value as u32;
    if !unpaired_surrogates && is_surrogate(value) {
        return Err(CodePointFault::UnpairedSurrogate { value }.into());
    }
    Ok(value)
}
