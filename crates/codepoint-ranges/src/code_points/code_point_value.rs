//! # Code Point Inputs
//!
//! Ranges may be built from integers, `char`s, or text holding exactly one
//! code point.

use num_traits::ToPrimitive;

use crate::{
    alloc::string::{String, ToString},
    code_points::validate_code_point,
    errors::{CPResult, CodePointFault},
};

/// A value which can be decoded to a code point.
///
/// Decoding checks that the value lies in `[0, 0x10FFFF]`;
/// whether surrogates are acceptable is decided by the consumer.
pub trait CodePointValue {
    /// Decode the value to an integer code point.
    fn to_code_point(&self) -> CPResult<u32>;
}

impl<V: CodePointValue + ?Sized> CodePointValue for &V {
    fn to_code_point(&self) -> CPResult<u32> {
        (**self).to_code_point()
    }
}

macro_rules! impl_integer_code_point_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl CodePointValue for $t {
                fn to_code_point(&self) -> CPResult<u32> {
                    // Every listed type fits in an i128.
                    validate_code_point(self.to_i128().unwrap_or(i128::MAX), true)
                }
            }
        )*
    };
}

impl_integer_code_point_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl CodePointValue for char {
    fn to_code_point(&self) -> CPResult<u32> {
        Ok(*self as u32)
    }
}

impl CodePointValue for str {
    fn to_code_point(&self) -> CPResult<u32> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c as u32),
            _ => Err(CodePointFault::NotSingleCodePoint {
                text: self.to_string(),
            }
            .into()),
        }
    }
}

impl CodePointValue for String {
    fn to_code_point(&self) -> CPResult<u32> {
        self.as_str().to_code_point()
    }
}
