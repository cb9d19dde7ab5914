//! # UTF-16 Surrogate Pairs

use crate::{
    alloc::{vec, vec::Vec},
    code_points::{
        BMP_LAST,
        LEAD_SURROGATE_FIRST,
        LEAD_SURROGATE_LAST,
        MAX_CODE_POINT,
        TRAIL_SURROGATE_FIRST,
        TRAIL_SURROGATE_LAST,
    },
};

/// Encode a code point above the BMP as a `(lead, trail)` surrogate pair.
///
/// Returns `None` for BMP code points and values above `0x10FFFF`.
pub fn encode_surrogate_pair(cp: u32) -> Option<(u16, u16)> {
    if cp <= BMP_LAST || cp > MAX_CODE_POINT {
        return None;
    }
    let offset = cp - 0x10000;
    let lead = LEAD_SURROGATE_FIRST + (offset >> 10);
    let trail = TRAIL_SURROGATE_FIRST + (offset & 0x3FF);
    Some((lead as u16, trail as u16))
}

/// Decode a `(lead, trail)` surrogate pair to its code point.
///
/// Returns `None` if either unit is not in its surrogate half.
pub fn decode_surrogate_pair(
    lead: u16,
    trail: u16,
) -> Option<u32> {
    let (lead, trail) = (lead as u32, trail as u32);
    if !(LEAD_SURROGATE_FIRST..=LEAD_SURROGATE_LAST).contains(&lead)
        || !(TRAIL_SURROGATE_FIRST..=TRAIL_SURROGATE_LAST).contains(&trail)
    {
        return None;
    }
    Some(0x10000 + ((lead - LEAD_SURROGATE_FIRST) << 10) + (trail - TRAIL_SURROGATE_FIRST))
}

/// The UTF-16 code units for a code point.
///
/// BMP values, including lone surrogates, are a single unit.
/// Values above `0x10FFFF` have no encoding and yield no units.
pub fn encode_utf16_units(cp: u32) -> Vec<u16> {
    if cp <= BMP_LAST {
        vec![cp as u16]
    } else {
        match encode_surrogate_pair(cp) {
            Some((lead, trail)) => vec![lead, trail],
            None => Vec::new(),
        }
    }
}
