//! Plain-text deck encoding, format v1.
//!
//! ```text
//! <draw pile in draw order>|<held aside, ascending>[|<retired, ascending>]
//! ```
//!
//! Cards within a group are comma separated. The retired group is only
//! written when it has cards, so `5,2,9|1` and `2,9|5|1` are both valid.
//! A string without any `|` is read as a draw pile with nothing set aside.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::core::{DeckPopulation, EventCard};
use crate::error::{DeckError, ParseReason};

const GROUP_SEPARATOR: char = '|';
const CARD_SEPARATOR: char = ',';
const MAX_GROUPS: usize = 3;

/// Decoded deck partitions.
#[derive(Debug, Default)]
pub(crate) struct Partitions {
    pub draw_pile: Vec<EventCard>,
    pub held_aside: BTreeSet<EventCard>,
    pub retired: BTreeSet<EventCard>,
}

/// Encode deck partitions.
pub(crate) fn encode(
    draw_pile: &[EventCard],
    held_aside: &BTreeSet<EventCard>,
    retired: &BTreeSet<EventCard>,
) -> String {
    let mut out = join(draw_pile.iter());
    out.push(GROUP_SEPARATOR);
    out.push_str(&join(held_aside.iter()));
    if !retired.is_empty() {
        out.push(GROUP_SEPARATOR);
        out.push_str(&join(retired.iter()));
    }
    out
}

fn join<'a>(cards: impl Iterator<Item = &'a EventCard>) -> String {
    cards
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a deck string and validate it against the population.
pub(crate) fn decode(input: &str, population: &DeckPopulation) -> Result<Partitions, DeckError> {
    let fail = |reason| DeckError::Parse {
        input: input.to_string(),
        reason,
    };

    let groups: Vec<&str> = input.trim().split(GROUP_SEPARATOR).collect();
    if groups.len() > MAX_GROUPS {
        return Err(fail(ParseReason::TooManyGroups(groups.len())));
    }

    let mut parsed: [Vec<EventCard>; MAX_GROUPS] = Default::default();
    for (slot, group) in parsed.iter_mut().zip(&groups) {
        *slot = parse_group(group).map_err(fail)?;
    }

    let mut seen = FxHashSet::default();
    for &card in parsed.iter().flatten() {
        if !seen.insert(card) {
            return Err(fail(ParseReason::Duplicate(card)));
        }
        if !population.contains(card) {
            return Err(fail(ParseReason::OutsidePopulation(card)));
        }
    }

    if seen.len() != population.len() {
        return Err(fail(ParseReason::PopulationMismatch {
            expected: population.len(),
            found: seen.len(),
        }));
    }

    let [draw_pile, held_aside, retired] = parsed;
    Ok(Partitions {
        draw_pile,
        held_aside: held_aside.into_iter().collect(),
        retired: retired.into_iter().collect(),
    })
}

fn parse_group(group: &str) -> Result<Vec<EventCard>, ParseReason> {
    let group = group.trim();
    if group.is_empty() {
        return Ok(Vec::new());
    }

    group
        .split(CARD_SEPARATOR)
        .map(|token| {
            let token = token.trim();
            let invalid = || ParseReason::InvalidToken(token.to_string());
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            token.parse::<u32>().map(EventCard).map_err(|_| invalid())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cards: &[u32]) -> BTreeSet<EventCard> {
        cards.iter().copied().map(EventCard).collect()
    }

    fn pile(cards: &[u32]) -> Vec<EventCard> {
        cards.iter().copied().map(EventCard).collect()
    }

    fn reason(result: Result<Partitions, DeckError>) -> ParseReason {
        match result {
            Err(DeckError::Parse { reason, .. }) => reason,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_two_groups() {
        let encoded = encode(&pile(&[5, 2, 9]), &set(&[3, 1]), &set(&[]));
        assert_eq!(encoded, "5,2,9|1,3");
    }

    #[test]
    fn test_encode_empty_held_aside() {
        assert_eq!(encode(&pile(&[5, 2, 9]), &set(&[]), &set(&[])), "5,2,9|");
    }

    #[test]
    fn test_encode_retired_group() {
        assert_eq!(encode(&pile(&[2, 9]), &set(&[5]), &set(&[1])), "2,9|5|1");
        assert_eq!(encode(&pile(&[]), &set(&[]), &set(&[1])), "||1");
    }

    #[test]
    fn test_decode_preserves_draw_order() {
        let population = DeckPopulation::range(1, 5);
        let parts = decode("4,1,3|5,2", &population).unwrap();

        assert_eq!(parts.draw_pile, pile(&[4, 1, 3]));
        assert_eq!(parts.held_aside, set(&[2, 5]));
        assert!(parts.retired.is_empty());
    }

    #[test]
    fn test_decode_retired_group() {
        let population = DeckPopulation::range(1, 3);
        let parts = decode("2|3|1", &population).unwrap();

        assert_eq!(parts.draw_pile, pile(&[2]));
        assert_eq!(parts.held_aside, set(&[3]));
        assert_eq!(parts.retired, set(&[1]));
    }

    #[test]
    fn test_decode_tolerates_whitespace() {
        let population = DeckPopulation::range(1, 3);
        let parts = decode(" 3, 1 | 2 \n", &population).unwrap();
        assert_eq!(parts.draw_pile, pile(&[3, 1]));
        assert_eq!(parts.held_aside, set(&[2]));
    }

    #[test]
    fn test_decode_without_separator() {
        let population = DeckPopulation::range(1, 3);
        let parts = decode("3,2,1", &population).unwrap();
        assert_eq!(parts.draw_pile, pile(&[3, 2, 1]));
        assert!(parts.held_aside.is_empty());
    }

    #[test]
    fn test_decode_invalid_token() {
        let population = DeckPopulation::range(1, 3);
        assert_eq!(
            reason(decode("1,two|3", &population)),
            ParseReason::InvalidToken("two".into())
        );
        assert_eq!(
            reason(decode("1,,2|3", &population)),
            ParseReason::InvalidToken(String::new())
        );
        assert_eq!(
            reason(decode("1,-2|3", &population)),
            ParseReason::InvalidToken("-2".into())
        );
        assert_eq!(
            reason(decode("+1,2|3", &population)),
            ParseReason::InvalidToken("+1".into())
        );
        assert_eq!(
            reason(decode("1,2|99999999999", &population)),
            ParseReason::InvalidToken("99999999999".into())
        );
    }

    #[test]
    fn test_decode_too_many_groups() {
        let population = DeckPopulation::range(1, 3);
        assert_eq!(reason(decode("1|2|3|", &population)), ParseReason::TooManyGroups(4));
    }

    #[test]
    fn test_decode_duplicate_across_groups() {
        let population = DeckPopulation::range(1, 3);
        assert_eq!(
            reason(decode("1,2|2,3", &population)),
            ParseReason::Duplicate(EventCard(2))
        );
    }

    #[test]
    fn test_decode_outside_population() {
        let population = DeckPopulation::range(1, 3);
        assert_eq!(
            reason(decode("1,2|4", &population)),
            ParseReason::OutsidePopulation(EventCard(4))
        );
    }

    #[test]
    fn test_decode_population_mismatch() {
        let population = DeckPopulation::range(1, 3);
        assert_eq!(
            reason(decode("1,2|", &population)),
            ParseReason::PopulationMismatch { expected: 3, found: 2 }
        );
        assert_eq!(
            reason(decode("", &population)),
            ParseReason::PopulationMismatch { expected: 3, found: 0 }
        );
    }
}
