// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::ops::Range;

/// A word selecting which of a group's candidates are meant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Quantifier {
    /// `ALL`
    All,
    /// A bare count, e.g. `3`: the first n candidates.
    Count(usize),
    /// `2ND`, `SECOND`: exactly the n-th candidate, counting from 1.
    Ordinal(usize),
    /// `2-4`: the n-th through N-th candidates, inclusive.
    Range(usize, usize),
}

fn ordinal_word(word: &str) -> Option<usize> {
    match word {
        "FIRST" => Some(1),
        "SECOND" => Some(2),
        "THIRD" => Some(3),
        "FOURTH" => Some(4),
        "FIFTH" => Some(5),
        "SIXTH" => Some(6),
        "SEVENTH" => Some(7),
        "EIGHTH" => Some(8),
        "NINTH" => Some(9),
        "TENTH" => Some(10),
        "ELEVENTH" => Some(11),
        "TWELFTH" => Some(12),
        _ => None,
    }
}

fn positive(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|n| *n > 0)
}

/// Recognize an (uppercase) word as a quantifier.
pub fn parse_quantifier(word: &str) -> Option<Quantifier> {
    if word == "ALL" {
        return Some(Quantifier::All);
    }
    if let Some(n) = ordinal_word(word) {
        return Some(Quantifier::Ordinal(n));
    }
    if let Some(n) = positive(word) {
        return Some(Quantifier::Count(n));
    }
    if let Some((low, high)) = word.split_once('-') {
        let (low, high) = (positive(low)?, positive(high)?);
        return Some(Quantifier::Range(low.min(high), low.max(high)));
    }
    if word.len() > 2 {
        let (digits, suffix) = word.split_at(word.len() - 2);
        if matches!(suffix, "ST" | "ND" | "RD" | "TH") {
            return positive(digits).map(Quantifier::Ordinal);
        }
    }
    None
}

impl Quantifier {
    /// The slice of `len` candidates this selects. The end is clamped to `len`; the start is
    /// not, so a start at or past `len` means there weren't enough candidates.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        match *self {
            Quantifier::All => 0..len,
            Quantifier::Count(n) => 0..n.min(len),
            Quantifier::Ordinal(n) => n - 1..n.min(len),
            Quantifier::Range(low, high) => low - 1..high.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::matching::quantifier::{Quantifier, parse_quantifier};

    #[test_case("ALL", Some(Quantifier::All); "all")]
    #[test_case("3", Some(Quantifier::Count(3)); "count")]
    #[test_case("0", None; "zero is not a count")]
    #[test_case("1ST", Some(Quantifier::Ordinal(1)); "first numeric")]
    #[test_case("22ND", Some(Quantifier::Ordinal(22)); "twenty second")]
    #[test_case("3RD", Some(Quantifier::Ordinal(3)); "third numeric")]
    #[test_case("5TH", Some(Quantifier::Ordinal(5)); "fifth numeric")]
    #[test_case("SECOND", Some(Quantifier::Ordinal(2)); "second word")]
    #[test_case("2-3", Some(Quantifier::Range(2, 3)); "range")]
    #[test_case("4-2", Some(Quantifier::Range(2, 4)); "descending range")]
    #[test_case("0-2", None; "range from zero")]
    #[test_case("2-", None; "open range")]
    #[test_case("-2", None; "negative")]
    #[test_case("TH", None; "bare suffix")]
    #[test_case("XTH", None; "suffix without digits")]
    #[test_case("BALL", None; "noun")]
    fn test_parse_quantifier(word: &str, expected: Option<Quantifier>) {
        assert_eq!(parse_quantifier(word), expected);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Quantifier::All.bounds(4), 0..4);
        assert_eq!(Quantifier::Count(6).bounds(4), 0..4);
        assert_eq!(Quantifier::Ordinal(2).bounds(4), 1..2);
        assert_eq!(Quantifier::Ordinal(5).bounds(4), 4..4);
        assert_eq!(Quantifier::Range(2, 9).bounds(4), 1..4);
        assert_eq!(Quantifier::Range(6, 9).bounds(4), 5..4);
    }
}
