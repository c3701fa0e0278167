use std::collections::VecDeque;

use super::slots::{GuessPair, Selection};

#[derive(Clone, Debug, Default)]
pub struct GuessQueue {
    guesses: VecDeque<Selection>,
}

impl GuessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, pair: GuessPair) {
        self.guesses.push_back(pair.first);
        self.guesses.push_back(pair.second);
    }

    pub fn try_dequeue_pair(&mut self) -> Option<GuessPair> {
        if self.guesses.len() < 2 {
            return None;
        }
        let first = self.guesses.pop_front()?;
        let second = self.guesses.pop_front()?;
        Some(GuessPair { first, second })
    }

    pub fn pending_pairs(&self) -> usize {
        self.guesses.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn clear(&mut self) {
        self.guesses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: usize, b: usize) -> GuessPair {
        GuessPair {
            first: Selection { card: a, active: true },
            second: Selection { card: b, active: true },
        }
    }

    #[test]
    fn pairs_come_out_in_order() {
        let mut queue = GuessQueue::new();
        queue.enqueue(pair(0, 1));
        queue.enqueue(pair(2, 3));
        assert_eq!(queue.pending_pairs(), 2);
        assert_eq!(queue.try_dequeue_pair(), Some(pair(0, 1)));
        assert_eq!(queue.try_dequeue_pair(), Some(pair(2, 3)));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_underflows_quietly() {
        let mut queue = GuessQueue::new();
        assert_eq!(queue.try_dequeue_pair(), None);
        queue.enqueue(pair(4, 5));
        queue.clear();
        assert_eq!(queue.try_dequeue_pair(), None);
    }
}
