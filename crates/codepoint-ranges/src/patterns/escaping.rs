//! # Code Point Escaping
//!
//! An escaper maps a single code point to the text used for it in a pattern;
//! both as a standalone literal and as an endpoint of a `[<first>-<last>]` range.
//!
//! Two policies are provided:
//! * [`DefaultEscaper`] writes `\uXXXX` and `\UXXXXXXXX` scalar escapes.
//! * [`LegacyEscaper`] writes a backslash before the literal character, for
//!   engines which predate `\u`/`\U` escapes.

use crate::{
    alloc::{format, string::String, string::ToString},
    code_points::BMP_LAST,
};

/// Escaping policy for code points in generated patterns.
///
/// Any `Fn(u32) -> String` is an escaper.
///
/// An escaper is only asked to escape a surrogate when the range being
/// rendered was built with unpaired surrogates allowed, or when it is
/// rendering the units of a surrogate pair.
pub trait CodePointEscaper {
    /// Escape a single code point.
    fn escape(
        &self,
        cp: u32,
    ) -> String;

    /// Escape one UTF-16 unit of a surrogate pair.
    ///
    /// Defaults to [`escape`](Self::escape).
    fn escape_surrogate_unit(
        &self,
        unit: u32,
    ) -> String {
        self.escape(unit)
    }
}

impl<F> CodePointEscaper for F
where
    F: Fn(u32) -> String,
{
    fn escape(
        &self,
        cp: u32,
    ) -> String {
        self(cp)
    }
}

/// The default [`CodePointEscaper`].
///
/// See [`default_escape`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultEscaper;

impl CodePointEscaper for DefaultEscaper {
    fn escape(
        &self,
        cp: u32,
    ) -> String {
        default_escape(cp)
    }
}

/// The default escape for a code point.
///
/// * ASCII `0-9A-Za-z` are emitted literally.
/// * Other BMP values are emitted as `\uXXXX`.
/// * Everything else is emitted as `\UXXXXXXXX`.
///
/// Hex digits are uppercase and zero-padded.
pub fn default_escape(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(c) if c.is_ascii_alphanumeric() => c.to_string(),
        _ if cp <= BMP_LAST => format!("\\u{cp:04X}"),
        _ => format!("\\U{cp:08X}"),
    }
}

/// The [`CodePointEscaper`] for legacy regex engines.
///
/// This is the escaper the legacy pattern modes use when none is configured.
/// Surrogate pair units still use `\uXXXX`, as a `String` cannot hold them.
///
/// See [`legacy_escape`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyEscaper;

impl CodePointEscaper for LegacyEscaper {
    fn escape(
        &self,
        cp: u32,
    ) -> String {
        legacy_escape(cp)
    }

    fn escape_surrogate_unit(
        &self,
        unit: u32,
    ) -> String {
        default_escape(unit)
    }
}

/// The legacy escape for a code point.
///
/// * ASCII `0-9A-Za-z` are emitted literally.
/// * Every other character is emitted as a backslash followed by the character.
/// * Surrogates, which have no character, fall back to [`default_escape`].
pub fn legacy_escape(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(c) if c.is_ascii_alphanumeric() => c.to_string(),
        Some(c) => format!("\\{c}"),
        None => default_escape(cp),
    }
}
