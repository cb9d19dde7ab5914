//! # Pattern Synthesis
//!
//! Joins [`PatternPiece`]s into one pattern: every bracket-compatible piece is
//! merged into a single bracket expression, and the remaining pieces follow as
//! `|` alternation branches.

use crate::{
    alloc::{string::String, vec::Vec},
    errors::{CPResult, CodePointError},
    patterns::{
        PatternOptions,
        PatternPiece,
        pattern_pieces::{render_bracket_item, render_class},
    },
};

/// Synthesize a pattern from pieces given in ascending order.
///
/// ## Arguments
/// * `pieces` - The pieces to join.
/// * `options` - The rendering options.
///
/// ## Returns
/// The pattern, or [`CodePointError::EmptyRangeSet`] when there are no pieces.
pub fn synthesize_pattern<I>(
    pieces: I,
    options: &PatternOptions,
) -> CPResult<String>
where
    I: IntoIterator<Item = PatternPiece>,
{
    let mut units: Vec<(u32, u32)> = Vec::new();
    let mut branches: Vec<String> = Vec::new();
    for piece in pieces {
        match piece {
            PatternPiece::Units { lo, hi } => units.push((lo, hi)),
            pairs => branches.push(pairs.render(options)),
        }
    }

    log::trace!(
        "synthesizing pattern: {} bracket items, {} alternation branches",
        units.len(),
        branches.len()
    );

    let bracket = match units.as_slice() {
        [] => None,
        [(lo, hi)] => Some(render_class(*lo, *hi, |cp| options.escape(cp))),
        items => {
            let mut bracket = String::from("[");
            for (lo, hi) in items {
                bracket.push_str(&render_bracket_item(*lo, *hi, |cp| options.escape(cp)));
            }
            bracket.push(']');
            Some(bracket)
        }
    };

    let parts: Vec<String> = bracket.into_iter().chain(branches).collect();
    if parts.is_empty() {
        return Err(CodePointError::EmptyRangeSet);
    }
    Ok(parts.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn test_empty() {
        assert_eq!(
            synthesize_pattern(Vec::<PatternPiece>::new(), &PatternOptions::new()),
            Err(CodePointError::EmptyRangeSet)
        );
    }

    #[test]
    fn test_brackets_and_branches() {
        let options = PatternOptions::new();

        let pieces = vec![
            PatternPiece::Units { lo: 0x30, hi: 0x39 },
            PatternPiece::Units { lo: 0x5F, hi: 0x5F },
            PatternPiece::Units { lo: 0x61, hi: 0x66 },
        ];
        assert_eq!(
            synthesize_pattern(pieces, &options).unwrap(),
            "[0-9\\u005Fa-f]"
        );

        let pieces = vec![
            PatternPiece::Units { lo: 0x5F, hi: 0x5F },
            PatternPiece::Pairs {
                leads: (0xD83D, 0xD83D),
                trails: (0xDE00, 0xDE4F),
            },
        ];
        assert_eq!(
            synthesize_pattern(pieces, &options).unwrap(),
            "\\u005F|\\uD83D[\\uDE00-\\uDE4F]"
        );

        let pieces = vec![
            PatternPiece::Pairs {
                leads: (0xD800, 0xD800),
                trails: (0xDFFF, 0xDFFF),
            },
            PatternPiece::Pairs {
                leads: (0xD801, 0xD801),
                trails: (0xDC00, 0xDC00),
            },
        ];
        assert_eq!(
            synthesize_pattern(pieces, &options).unwrap(),
            "\\uD800\\uDFFF|\\uD801\\uDC00"
        );
    }
}
