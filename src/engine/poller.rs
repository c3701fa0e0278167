use std::time::Duration;

use super::queue::GuessQueue;
use super::slots::GuessPair;
use super::state::Generation;

#[derive(Clone, Debug)]
pub struct ResolutionPoller {
    interval: Duration,
    bound: Option<Generation>,
    ticks: u64,
}

impl ResolutionPoller {
    pub fn new(interval: Duration) -> Self {
        ResolutionPoller {
            interval,
            bound: None,
            ticks: 0,
        }
    }

    pub fn start(&mut self, generation: Generation) {
        self.bound = Some(generation);
        self.ticks = 0;
    }

    /// Idempotent.
    pub fn cancel(&mut self) {
        self.bound = None;
    }

    pub fn is_running(&self) -> bool {
        self.bound.is_some()
    }

    pub fn accepts(&self, generation: Generation) -> bool {
        self.bound == Some(generation)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self, queue: &mut GuessQueue) -> Option<GuessPair> {
        if !self.is_running() {
            return None;
        }
        self.ticks += 1;
        queue.try_dequeue_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::slots::Selection;

    fn pair(a: usize, b: usize) -> GuessPair {
        GuessPair {
            first: Selection { card: a, active: true },
            second: Selection { card: b, active: true },
        }
    }

    #[test]
    fn one_pair_per_tick() {
        let mut poller = ResolutionPoller::new(Duration::from_secs(1));
        let mut queue = GuessQueue::new();
        poller.start(Generation(1));
        queue.enqueue(pair(0, 1));
        queue.enqueue(pair(2, 3));
        queue.enqueue(pair(4, 5));

        assert_eq!(poller.tick(&mut queue), Some(pair(0, 1)));
        assert_eq!(queue.pending_pairs(), 2);
    }

    #[test]
    fn cancelled_poller_does_nothing() {
        let mut poller = ResolutionPoller::new(Duration::from_secs(1));
        let mut queue = GuessQueue::new();
        poller.start(Generation(4));
        queue.enqueue(pair(0, 1));
        poller.cancel();
        poller.cancel();

        assert!(!poller.accepts(Generation(4)));
        assert_eq!(poller.tick(&mut queue), None);
        assert_eq!(queue.pending_pairs(), 1);
        assert_eq!(poller.ticks(), 0);
    }
}
