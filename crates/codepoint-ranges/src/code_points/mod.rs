//! # Code Points
//!
//! Code points are carried as `u32` values throughout this crate, so that
//! surrogates (which `char` cannot hold) can be represented when allowed.
pub mod code_point_value;
pub mod utf16;
pub mod validators;

#[doc(inline)]
pub use code_point_value::CodePointValue;
#[doc(inline)]
pub use utf16::{decode_surrogate_pair, encode_surrogate_pair, encode_utf16_units};
#[doc(inline)]
pub use validators::{
    BMP_LAST, LEAD_SURROGATE_FIRST, LEAD_SURROGATE_LAST, MAX_CODE_POINT, SURROGATE_FIRST,
    SURROGATE_LAST, TRAIL_SURROGATE_FIRST, TRAIL_SURROGATE_LAST, is_scalar_value, is_surrogate,
    spans_surrogates, validate_code_point,
};
