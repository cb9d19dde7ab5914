//! # Pattern Pieces
//!
//! A code point range is rendered as one or more pieces. A piece either
//! matches code points directly by value (and so can join other pieces in a
//! bracket expression), or matches UTF-16 surrogate pairs as a lead class
//! followed by a trail class (and so must stand as its own alternation branch).

use crate::{
    alloc::{format, string::String, vec::Vec},
    code_points::{BMP_LAST, TRAIL_SURROGATE_FIRST, TRAIL_SURROGATE_LAST, encode_surrogate_pair},
    patterns::PatternOptions,
};

/// One renderable piece of a code point range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternPiece {
    /// The code points `[lo, hi]`, matched by value.
    Units {
        /// The first code point.
        lo: u32,

        /// The last code point.
        hi: u32,
    },

    /// Every surrogate pair with a lead unit in `leads` and a trail unit in `trails`.
    ///
    /// Both bounds are inclusive.
    Pairs {
        /// The inclusive span of lead units.
        leads: (u32, u32),

        /// The inclusive span of trail units.
        trails: (u32, u32),
    },
}

impl PatternPiece {
    /// Can this piece be merged into a bracket expression?
    pub fn is_bracket_compatible(&self) -> bool {
        matches!(self, Self::Units { .. })
    }

    /// Render the piece as a standalone pattern.
    ///
    /// Surrogate pair units are written with
    /// [`PatternOptions::escape_surrogate_unit`].
    pub fn render(
        &self,
        options: &PatternOptions,
    ) -> String {
        match *self {
            Self::Units { lo, hi } => render_class(lo, hi, |cp| options.escape(cp)),
            Self::Pairs { leads, trails } => {
                let unit = |u: u32| options.escape_surrogate_unit(u);
                let mut pattern = render_class(leads.0, leads.1, unit);
                pattern.push_str(&render_class(trails.0, trails.1, unit));
                pattern
            }
        }
    }
}

/// Render `[lo, hi]` as a single escape or a `[lo-hi]` bracket.
pub(crate) fn render_class<E>(
    lo: u32,
    hi: u32,
    escape: E,
) -> String
where
    E: Fn(u32) -> String,
{
    if lo == hi {
        escape(lo)
    } else {
        format!("[{}]", render_bracket_item(lo, hi, escape))
    }
}

/// Render `[lo, hi]` as the body of a bracket item: `lo` or `lo-hi`.
pub(crate) fn render_bracket_item<E>(
    lo: u32,
    hi: u32,
    escape: E,
) -> String
where
    E: Fn(u32) -> String,
{
    if lo == hi {
        escape(lo)
    } else {
        format!("{}-{}", escape(lo), escape(hi))
    }
}

/// Split the closed interval `[first, last]` into pattern pieces.
///
/// Without surrogate pairs, the interval is a single [`PatternPiece::Units`].
///
/// With surrogate pairs, the interval is split at `0x10000`; the BMP part is
/// a [`PatternPiece::Units`], and the rest is covered by at most three
/// [`PatternPiece::Pairs`]: a partial first lead, a run of leads taking every
/// trail, and a partial last lead. The pieces match exactly the UTF-16
/// encodings of the interval, in ascending order.
pub fn decompose_range(
    first: u32,
    last: u32,
    surrogate_pairs: bool,
) -> Vec<PatternPiece> {
    let mut pieces = Vec::new();
    if !surrogate_pairs || last <= BMP_LAST {
        pieces.push(PatternPiece::Units { lo: first, hi: last });
        return pieces;
    }

    let mut astral_first = first;
    if first <= BMP_LAST {
        pieces.push(PatternPiece::Units {
            lo: first,
            hi: BMP_LAST,
        });
        astral_first = BMP_LAST + 1;
    }
    push_astral_pieces(astral_first, last, &mut pieces);
    pieces
}

/// Cover `[first, last]`, entirely above the BMP, with surrogate pair pieces.
fn push_astral_pieces(
    first: u32,
    last: u32,
    pieces: &mut Vec<PatternPiece>,
) {
    let (Some((first_lead, first_trail)), Some((last_lead, last_trail))) =
        (encode_surrogate_pair(first), encode_surrogate_pair(last))
    else {
        return;
    };
    let (first_lead, first_trail) = (first_lead as u32, first_trail as u32);
    let (last_lead, last_trail) = (last_lead as u32, last_trail as u32);

    if first_lead == last_lead {
        pieces.push(PatternPiece::Pairs {
            leads: (first_lead, first_lead),
            trails: (first_trail, last_trail),
        });
        return;
    }

    let mut full_first = first_lead;
    if first_trail != TRAIL_SURROGATE_FIRST {
        pieces.push(PatternPiece::Pairs {
            leads: (first_lead, first_lead),
            trails: (first_trail, TRAIL_SURROGATE_LAST),
        });
        full_first += 1;
    }

    let mut full_last = last_lead;
    let mut tail = None;
    if last_trail != TRAIL_SURROGATE_LAST {
        tail = Some(PatternPiece::Pairs {
            leads: (last_lead, last_lead),
            trails: (TRAIL_SURROGATE_FIRST, last_trail),
        });
        full_last -= 1;
    }

    if full_first <= full_last {
        pieces.push(PatternPiece::Pairs {
            leads: (full_first, full_last),
            trails: (TRAIL_SURROGATE_FIRST, TRAIL_SURROGATE_LAST),
        });
    }
    pieces.extend(tail);
}
