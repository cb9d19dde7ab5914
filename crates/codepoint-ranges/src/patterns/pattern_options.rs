//! # Pattern Synthesis Options

use core::fmt::{Debug, Formatter};

use crate::{
    alloc::string::String,
    errors::{CPResult, CodePointError},
    patterns::{CodePointEscaper, DefaultEscaper},
};

/// Options for rendering code point ranges as regex patterns.
///
/// ## Style Hints
///
/// Instance names should prefer `pattern_options`,
/// or `options` when there is no ambiguity.
#[derive(Clone, Copy)]
pub struct PatternOptions<'a> {
    /// Whether code points above the BMP are written as UTF-16 surrogate pairs.
    ///
    /// `None` when the caller has not stated a preference.
    surrogate_pairs: Option<bool>,

    /// The escaping policy.
    ///
    /// `None` when the caller has not chosen one; each pattern mode then uses its own.
    escaper: Option<&'a dyn CodePointEscaper>,
}

impl Default for PatternOptions<'static> {
    fn default() -> Self {
        Self {
            surrogate_pairs: None,
            escaper: None,
        }
    }
}

impl Debug for PatternOptions<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PatternOptions")
            .field("surrogate_pairs", &self.surrogate_pairs)
            .field("custom_escaper", &self.escaper.is_some())
            .finish()
    }
}

impl PatternOptions<'static> {
    /// Options with no stated surrogate pair preference, and no chosen escaper.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> PatternOptions<'a> {
    /// The stated surrogate pair preference, if any.
    pub fn surrogate_pairs(&self) -> Option<bool> {
        self.surrogate_pairs
    }

    /// Whether surrogate pairs are in use; `false` when unstated.
    pub fn uses_surrogate_pairs(&self) -> bool {
        self.surrogate_pairs.unwrap_or(false)
    }

    /// The stated surrogate pair preference.
    ///
    /// ## Returns
    /// The preference, or [`CodePointError::InvalidConstructorArguments`] when unstated.
    pub fn require_surrogate_pairs(&self) -> CPResult<bool> {
        self.surrogate_pairs
            .ok_or(CodePointError::InvalidConstructorArguments(
                "the legacy pattern mode requires an explicit surrogate_pairs setting",
            ))
    }

    /// Set whether code points above the BMP are written as surrogate pairs.
    ///
    /// ## Arguments
    /// * `surrogate_pairs` - The new preference.
    pub fn set_surrogate_pairs(
        &mut self,
        surrogate_pairs: bool,
    ) {
        self.surrogate_pairs = Some(surrogate_pairs);
    }

    /// Set whether code points above the BMP are written as surrogate pairs.
    ///
    /// ## Arguments
    /// * `surrogate_pairs` - The new preference.
    pub fn with_surrogate_pairs(
        mut self,
        surrogate_pairs: bool,
    ) -> Self {
        self.set_surrogate_pairs(surrogate_pairs);
        self
    }

    /// Get the chosen escaping policy, if any.
    pub fn escaper(&self) -> Option<&'a dyn CodePointEscaper> {
        self.escaper
    }

    /// The escaping policy in effect; the [`DefaultEscaper`] when none was chosen.
    pub fn effective_escaper(&self) -> &'a dyn CodePointEscaper {
        self.escaper().unwrap_or(&DefaultEscaper)
    }

    /// Use `escaper` unless an escaping policy was already chosen.
    ///
    /// ## Arguments
    /// * `escaper` - The mode's own escaping policy.
    pub fn with_fallback_escaper(
        mut self,
        escaper: &'a dyn CodePointEscaper,
    ) -> Self {
        if self.escaper.is_none() {
            self.escaper = Some(escaper);
        }
        self
    }

    /// Replace the escaping policy.
    ///
    /// ## Arguments
    /// * `escaper` - The new escaping policy.
    pub fn with_escaper<'b>(
        self,
        escaper: &'b dyn CodePointEscaper,
    ) -> PatternOptions<'b> {
        PatternOptions {
            surrogate_pairs: self.surrogate_pairs,
            escaper: Some(escaper),
        }
    }

    /// Escape a code point with the policy in effect.
    pub fn escape(
        &self,
        cp: u32,
    ) -> String {
        self.effective_escaper().escape(cp)
    }

    /// Escape one UTF-16 unit of a surrogate pair with the policy in effect.
    pub fn escape_surrogate_unit(
        &self,
        unit: u32,
    ) -> String {
        self.effective_escaper().escape_surrogate_unit(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alloc::format, patterns::LegacyEscaper};

    #[test]
    fn test_defaults() {
        let options = PatternOptions::new();
        assert_eq!(options.surrogate_pairs(), None);
        assert!(!options.uses_surrogate_pairs());
        assert!(matches!(
            options.require_surrogate_pairs(),
            Err(CodePointError::InvalidConstructorArguments(_))
        ));
        assert!(options.escaper().is_none());
        assert_eq!(options.escape(0x2D), "\\u002D");
    }

    #[test]
    fn test_fallback_escaper() {
        let options = PatternOptions::new().with_fallback_escaper(&LegacyEscaper);
        assert!(options.escaper().is_some());
        assert_eq!(options.escape(0x2D), "\\-");
        assert_eq!(options.escape_surrogate_unit(0xDC00), "\\uDC00");

        // A chosen escaper wins over the fallback.
        let escaper = |cp: u32| format!("<{cp}>");
        let options = PatternOptions::new()
            .with_escaper(&escaper)
            .with_fallback_escaper(&LegacyEscaper);
        assert_eq!(options.escape(0x2D), "<45>");
        assert_eq!(options.escape_surrogate_unit(0xDC00), "<56320>");
    }

    #[test]
    fn test_builders() {
        let mut options = PatternOptions::new().with_surrogate_pairs(true);
        assert_eq!(options.require_surrogate_pairs(), Ok(true));

        options.set_surrogate_pairs(false);
        assert_eq!(options.surrogate_pairs(), Some(false));

        let escaper = |cp: u32| format!("<{cp}>");
        let options = options.with_escaper(&escaper);
        assert_eq!(options.surrogate_pairs(), Some(false));
        assert_eq!(options.escape(65), "<65>");

        assert_eq!(
            format!("{options:?}"),
            "PatternOptions { surrogate_pairs: Some(false), custom_escaper: true }"
        );
    }
}
