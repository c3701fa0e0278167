use std::time::Duration;

use super::card::Card;
use super::slots::GuessPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

pub fn judge(cards: &[Card], pair: &GuessPair) -> Verdict {
    let first = cards.get(pair.first.card);
    let second = cards.get(pair.second.card);
    match (first, second) {
        (Some(a), Some(b)) if a.pair_id == b.pair_id => Verdict::Match,
        _ => Verdict::Mismatch,
    }
}

/// A match is a combo when the previous correct match happened strictly
/// less than `window` ago. Only the latest timestamp matters.
pub fn is_combo(last_correct: Option<Duration>, now: Duration, window: Duration) -> bool {
    match last_correct {
        Some(last) => now.saturating_sub(last) < window,
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Judgement {
    pub pair: GuessPair,
    pub verdict: Verdict,
    pub combo: bool,
    pub win_scheduled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetHandle;
    use crate::engine::slots::Selection;

    fn card(position_index: usize, pair_id: u32) -> Card {
        Card {
            position_index,
            pair_id,
            face: AssetHandle::new(format!("sprite-{pair_id}")),
            revealed: true,
            matched: false,
        }
    }

    fn pair(a: usize, b: usize) -> GuessPair {
        GuessPair {
            first: Selection { card: a, active: true },
            second: Selection { card: b, active: true },
        }
    }

    #[test]
    fn same_pair_id_matches() {
        let cards = vec![card(0, 0), card(1, 1), card(2, 0)];
        assert_eq!(judge(&cards, &pair(0, 2)), Verdict::Match);
        assert_eq!(judge(&cards, &pair(0, 1)), Verdict::Mismatch);
        assert_eq!(judge(&cards, &pair(0, 9)), Verdict::Mismatch);
    }

    #[test]
    fn combo_needs_a_previous_match_inside_the_window() {
        let window = Duration::from_millis(500);
        assert!(!is_combo(None, Duration::from_millis(100), window));
        assert!(is_combo(
            Some(Duration::from_millis(1000)),
            Duration::from_millis(1300),
            window
        ));
        assert!(!is_combo(
            Some(Duration::from_millis(1000)),
            Duration::from_millis(1500),
            window
        ));
    }
}
