#![allow(dead_code)]

//! A tiny matcher for the pattern subset this crate emits.
//!
//! Supported syntax: `|` alternation, `[...]` classes of items and `a-b` spans,
//! `\uXXXX` and `\UXXXXXXXX` escapes, a backslash before any other character,
//! and literal ASCII alphanumerics.
//!
//! Patterns are matched against sequences of values: UTF-16 units for narrow
//! engines, or whole code points for wide ones.

use codepoint_ranges::code_points::encode_utf16_units;

/// One position of a branch: the inclusive spans of values it accepts.
type Atom = Vec<(u32, u32)>;

/// A parsed pattern: alternative sequences of atoms.
pub struct UnitPattern {
    branches: Vec<Vec<Atom>>,
}

impl UnitPattern {
    pub fn parse(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let mut branches = vec![Vec::new()];
        let mut idx = 0;
        while idx < chars.len() {
            match chars[idx] {
                '|' => {
                    idx += 1;
                    branches.push(Vec::new());
                }
                '[' => {
                    idx += 1;
                    let mut atom = Vec::new();
                    while chars[idx] != ']' {
                        let lo = parse_value(&chars, &mut idx);
                        let hi = if chars[idx] == '-' {
                            idx += 1;
                            parse_value(&chars, &mut idx)
                        } else {
                            lo
                        };
                        atom.push((lo, hi));
                    }
                    idx += 1;
                    branches.last_mut().unwrap().push(atom);
                }
                _ => {
                    let value = parse_value(&chars, &mut idx);
                    branches.last_mut().unwrap().push(vec![(value, value)]);
                }
            }
        }
        Self { branches }
    }

    /// Does the pattern match exactly the values?
    pub fn is_match_units(
        &self,
        units: &[u32],
    ) -> bool {
        self.branches.iter().any(|branch| {
            branch.len() == units.len()
                && branch
                    .iter()
                    .zip(units)
                    .all(|(atom, &unit)| atom.iter().any(|&(lo, hi)| lo <= unit && unit <= hi))
        })
    }

    /// Does the pattern match exactly the UTF-16 encoding of `cp`?
    pub fn is_match_utf16(
        &self,
        cp: u32,
    ) -> bool {
        let units: Vec<u32> = encode_utf16_units(cp).into_iter().map(u32::from).collect();
        self.is_match_units(&units)
    }

    /// Does the pattern match exactly the single code point `cp`?
    pub fn is_match_code_point(
        &self,
        cp: u32,
    ) -> bool {
        self.is_match_units(&[cp])
    }
}

fn parse_value(
    chars: &[char],
    idx: &mut usize,
) -> u32 {
    if chars[*idx] != '\\' {
        let c = chars[*idx];
        assert!(c.is_ascii_alphanumeric(), "unexpected literal: {c:?}");
        *idx += 1;
        return c as u32;
    }
    let width = match chars[*idx + 1] {
        'u' => 4,
        'U' => 8,
        escaped => {
            *idx += 2;
            return escaped as u32;
        }
    };
    let hex: String = chars[*idx + 2..*idx + 2 + width].iter().collect();
    *idx += 2 + width;
    u32::from_str_radix(&hex, 16).expect("hex escape")
}

/// Code points around the interesting boundaries, plus a sparse sweep.
pub fn sample_code_points() -> Vec<u32> {
    let mut samples: Vec<u32> = (0..=0x10FFFF).step_by(331).collect();
    for edge in [
        0x0u32, 0x2D, 0x2F, 0x30, 0x39, 0x3A, 0x5C, 0x5D, 0x7C, 0x100, 0xFFF, 0xD7FF, 0xE000,
        0xFFEF, 0xFFF0, 0xFFFE, 0xFFFF, 0x10000, 0x103FF, 0x10400, 0x10401, 0x1000FF, 0x100100,
        0x101110, 0x101111, 0x10FFFE, 0x10FFFF,
    ] {
        samples.extend(edge.saturating_sub(2)..=(edge + 2).min(0x10FFFF));
    }
    samples.sort_unstable();
    samples.dedup();
    samples
}
