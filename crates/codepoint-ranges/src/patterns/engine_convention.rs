//! # Regex Engine Conventions

use crate::patterns::PatternOptions;

/// The code point convention of the regex engine a pattern is generated for.
///
/// The caller detects (or configures) the engine, and hands the value to the
/// `as_convention_pattern` renderers; this crate never inspects its environment.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EngineConvention {
    /// An engine which understands `\uXXXX` and `\UXXXXXXXX` scalar escapes.
    #[default]
    Generic,

    /// A legacy engine with full-width (UCS-4) strings.
    Wide,

    /// A legacy engine with UTF-16 strings;
    /// code points above the BMP must be matched as surrogate pairs.
    Narrow,
}

impl EngineConvention {
    /// Whether this engine sees code points above the BMP as surrogate pairs.
    pub fn surrogate_pairs(&self) -> bool {
        matches!(self, Self::Narrow)
    }

    /// Is this a legacy engine convention?
    pub fn is_legacy(&self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// The [`PatternOptions`] for this convention.
    pub fn pattern_options(&self) -> PatternOptions<'static> {
        let options = PatternOptions::new();
        match self {
            Self::Generic => options,
            Self::Wide | Self::Narrow => options.with_surrogate_pairs(self.surrogate_pairs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::alloc::{string::ToString, vec::Vec};

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            EngineConvention::from_str("narrow"),
            Ok(EngineConvention::Narrow)
        );
        assert_eq!(
            EngineConvention::from_str("Wide"),
            Ok(EngineConvention::Wide)
        );
        assert!(EngineConvention::from_str("ucs2").is_err());

        let names: Vec<_> = EngineConvention::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["generic", "wide", "narrow"]);
    }

    #[test]
    fn test_pattern_options() {
        assert_eq!(EngineConvention::default(), EngineConvention::Generic);

        assert_eq!(EngineConvention::Generic.pattern_options().surrogate_pairs(), None);
        assert_eq!(
            EngineConvention::Wide.pattern_options().surrogate_pairs(),
            Some(false)
        );
        assert_eq!(
            EngineConvention::Narrow.pattern_options().surrogate_pairs(),
            Some(true)
        );

        assert!(!EngineConvention::Generic.is_legacy());
        assert!(EngineConvention::Narrow.is_legacy());
    }
}
