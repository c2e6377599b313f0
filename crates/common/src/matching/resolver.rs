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

use tracing::trace;

use crate::matching::{MatchResult, parse_quantifier};
use crate::model::Thing;
use crate::util::join_words;

fn candidates<'t>(alias: &str, collections: &[&'t [Thing]]) -> Vec<&'t Thing> {
    collections
        .iter()
        .flat_map(|collection| collection.iter())
        .filter(|thing| thing.has_alias(alias))
        .collect()
}

fn is_alias(word: &str, collections: &[&[Thing]]) -> bool {
    collections
        .iter()
        .flat_map(|collection| collection.iter())
        .any(|thing| thing.has_alias(word))
}

/// Resolve up to `limit` groups (all of them if `None`) from the end of `words` against the
/// things in `collections`.
///
/// Words are scanned right to left: a group ends in an alias, which is preceded by any number of
/// qualifiers narrowing it, which may in turn be preceded by one quantifier (`ALL`, `3`, `2ND`,
/// `2-4`). Without a quantifier a group selects its first candidate. Runs of words that match no
/// alias come back as a single `Unknown` span and count as one group.
///
/// Returns the results in reading order, along with the words left unconsumed at the front.
/// No thing is ever returned twice from one call.
pub fn resolve<'t, 'w, S: AsRef<str>>(
    words: &'w [S],
    limit: Option<usize>,
    collections: &[&'t [Thing]],
) -> (Vec<MatchResult<'t>>, &'w [S]) {
    // Built back to front, reversed on the way out.
    let mut results: Vec<MatchResult<'t>> = vec![];
    let mut end = words.len();
    let mut groups = 0;

    while end > 0 && limit.is_none_or(|limit| groups < limit) {
        groups += 1;
        let alias = words[end - 1].as_ref();
        let mut matched = candidates(alias, collections);
        let mut start = end - 1;

        if matched.is_empty() {
            while start > 0 && !is_alias(words[start - 1].as_ref(), collections) {
                start -= 1;
            }
            trace!(span = %join_words(&words[start..end]), "unknown words");
            results.push(MatchResult::Unknown(join_words(&words[start..end])));
            end = start;
            continue;
        }

        while start > 0 {
            let word = words[start - 1].as_ref();
            if words[start..end].iter().any(|w| w.as_ref() == word) {
                break;
            }
            let narrowed: Vec<&'t Thing> = matched
                .iter()
                .copied()
                .filter(|thing| thing.qualifies(alias, word))
                .collect();
            if narrowed.is_empty() {
                break;
            }
            matched = narrowed;
            start -= 1;
        }

        let quantifier = match start {
            0 => None,
            _ => parse_quantifier(words[start - 1].as_ref()),
        };
        if quantifier.is_some() {
            start -= 1;
        }
        let selected = quantifier.map_or(0..1, |q| q.bounds(matched.len()));

        if selected.start >= matched.len() {
            trace!(span = %join_words(&words[start..end]), candidates = matched.len(), "not enough");
            results.push(MatchResult::NotEnough(join_words(&words[start..end])));
        } else {
            for thing in matched[selected].iter().rev() {
                if !results.iter().any(|r| r.found() == Some(*thing)) {
                    results.push(MatchResult::Found(*thing));
                }
            }
        }
        end = start;
    }

    results.reverse();
    (results, &words[..end])
}

/// Resolve every group in `words`.
pub fn resolve_all<'t, S: AsRef<str>>(
    words: &[S],
    collections: &[&'t [Thing]],
) -> Vec<MatchResult<'t>> {
    resolve(words, None, collections).0
}

/// Resolve the last group in `words`, returning the words before it.
pub fn resolve_one<'t, 'w, S: AsRef<str>>(
    words: &'w [S],
    collections: &[&'t [Thing]],
) -> (Vec<MatchResult<'t>>, &'w [S]) {
    resolve(words, Some(1), collections)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::matching::mock_things::{
        box_of, four_balls, large_green_ball, long_sword, sheathed_sword, small_green_ball,
    };
    use crate::matching::{MatchResult, resolve, resolve_all, resolve_one};
    use crate::model::Thing;
    use crate::util::split_words;

    fn describe(results: &[MatchResult<'_>]) -> Vec<String> {
        results
            .iter()
            .map(|r| match r {
                MatchResult::Found(thing) => thing.name().to_string(),
                MatchResult::Unknown(span) => format!("unknown: {span}"),
                MatchResult::NotEnough(span) => format!("not enough: {span}"),
            })
            .collect()
    }

    fn resolve_four_balls(input: &str) -> Vec<String> {
        let balls = four_balls();
        describe(&resolve_all(&split_words(input), &[&balls]))
    }

    #[test]
    fn test_green_ball_picks_first_declared() {
        let balls = vec![small_green_ball(), large_green_ball()];
        let words = split_words("GREEN BALL");
        let (results, rest) = resolve_one(&words, &[&balls]);
        assert_eq!(describe(&results), vec!["a small green ball"]);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_all_green_balls_in_declaration_order() {
        let balls = vec![small_green_ball(), large_green_ball()];
        let words = split_words("ALL GREEN BALL");
        let (results, rest) = resolve_one(&words, &[&balls]);
        assert_eq!(
            describe(&results),
            vec!["a small green ball", "a large green ball"]
        );
        assert!(rest.is_empty());
    }

    #[test_case("BALL", &["a red ball"]; "no quantifier takes the first")]
    #[test_case("BLUE BALL", &["a blue ball"]; "qualifier narrows")]
    #[test_case("ALL BALL", &["a red ball", "a green ball", "a blue ball", "a yellow ball"]; "all")]
    #[test_case("2 BALL", &["a red ball", "a green ball"]; "count")]
    #[test_case("9 BALL", &["a red ball", "a green ball", "a blue ball", "a yellow ball"]; "count clamps")]
    #[test_case("3RD BALL", &["a blue ball"]; "ordinal")]
    #[test_case("FOURTH BALL", &["a yellow ball"]; "word ordinal")]
    #[test_case("5TH BALL", &["not enough: 5TH BALL"]; "ordinal past the end")]
    #[test_case("2-3 BALL", &["a green ball", "a blue ball"]; "range")]
    #[test_case("3-2 BALL", &["a green ball", "a blue ball"]; "descending range")]
    #[test_case("3-7 BALL", &["a blue ball", "a yellow ball"]; "range clamps")]
    #[test_case("5-7 BALL", &["not enough: 5-7 BALL"]; "range past the end")]
    #[test_case("ALL BALL 2-3 BALL", &["a red ball", "a yellow ball", "a green ball", "a blue ball"]; "overlap never repeats")]
    #[test_case("RED BALL RED BALL", &["a red ball"]; "repeated group")]
    #[test_case("PURPLE BALL", &["unknown: PURPLE", "a red ball"]; "unknown qualifier")]
    #[test_case("FROBNITZ", &["unknown: FROBNITZ"]; "unknown alias")]
    #[test_case("BIG SHINY FROBNITZ BALL", &["unknown: BIG SHINY FROBNITZ", "a red ball"]; "unknown words coalesce")]
    #[test_case("BLUE RED BALL", &["unknown: BLUE", "a red ball"]; "qualifier that narrows nothing stops")]
    #[test_case("RED RED BALL", &["unknown: RED", "a red ball"]; "repeated qualifier stops")]
    fn test_four_balls(input: &str, expected: &[&str]) {
        assert_eq!(resolve_four_balls(input), expected);
    }

    #[test]
    fn test_bound_qualifiers() {
        let swords = vec![long_sword(), sheathed_sword()];
        let resolved = |input: &str| describe(&resolve_all(&split_words(input), &[&swords]));

        assert_eq!(resolved("SWORD"), vec!["a long sword"]);
        assert_eq!(
            resolved("SHORT SWORD"),
            vec!["a short sword in a leather scabbard"]
        );
        assert_eq!(
            resolved("LEATHER SCABBARD"),
            vec!["a short sword in a leather scabbard"]
        );
        // Bound to the scabbard, so it doesn't narrow the swords.
        assert_eq!(
            resolved("LEATHER SWORD"),
            vec!["unknown: LEATHER", "a long sword"]
        );
    }

    #[test]
    fn test_searches_every_collection() {
        let balls = four_balls();
        let players = vec![Thing::player("Alice")];
        let results = resolve_all(&split_words("ALICE YELLOW BALL"), &[&balls, &players]);
        assert_eq!(describe(&results), vec!["Alice", "a yellow ball"]);
    }

    #[test]
    fn test_limit_leaves_the_rest() {
        let balls = four_balls();
        let boxes = vec![box_of("a box", vec![])];
        let words = split_words("ALL BALL BOX");
        let (results, rest) = resolve(&words, Some(1), &[&balls, &boxes]);
        assert_eq!(describe(&results), vec!["a box"]);
        assert_eq!(rest, &["ALL".to_string(), "BALL".to_string()]);

        let (results, rest) = resolve(&words, Some(0), &[&balls, &boxes]);
        assert!(results.is_empty());
        assert_eq!(rest.len(), 3);
    }

    #[test_case("ALL BALL"; "one group")]
    #[test_case("RED BALL 2ND BALL 4TH BALL"; "several groups")]
    #[test_case("FOO RED BALL BAR BAZ 9TH BALL"; "unknowns and shortfalls")]
    fn test_one_at_a_time_matches_all_at_once(input: &str) {
        let balls = four_balls();
        let words = split_words(input);

        let mut one_at_a_time = vec![];
        let mut rest: &[String] = &words;
        while !rest.is_empty() {
            let (mut results, remaining) = resolve_one(rest, &[&balls]);
            results.append(&mut one_at_a_time);
            one_at_a_time = results;
            rest = remaining;
        }

        assert_eq!(one_at_a_time, resolve_all(&words, &[&balls]));
    }

    #[test]
    fn test_deterministic() {
        let balls = four_balls();
        let words = split_words("ALL GREEN BALL 2-4 BALL ZOT 5TH BALL");
        let first = resolve_all(&words, &[&balls]);
        let second = resolve_all(&words, &[&balls]);
        assert_eq!(first, second);
    }
}
