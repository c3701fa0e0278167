use std::time::Duration;

use super::state::{Phase, RoundSummary};

#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    LevelShown(u32),
    PhaseChanged(Phase),
    CardRevealed { position: usize },
    Combo { combo_count: u32 },
    GuessCorrect { first: usize, second: usize },
    GuessWrong { first: usize, second: usize },
    TimeUpdate(Duration),
    MatchesUpdate(u32),
    TurnsUpdate(u32),
    RoundWon(RoundSummary),
    RoundLost(RoundSummary),
}

/// Receives round notifications. Each event reaches exactly one method.
/// Implementations must not call back into the controller that is
/// dispatching to them.
pub trait Presenter {
    fn on_level_shown(&mut self, _level_number: u32) {}
    fn on_phase_changed(&mut self, _phase: Phase) {}
    fn on_card_revealed(&mut self, _position: usize) {}
    fn on_combo(&mut self, _combo_count: u32) {}
    fn on_guess_correct(&mut self, _first: usize, _second: usize) {}
    fn on_guess_wrong(&mut self, _first: usize, _second: usize) {}
    fn on_time_update(&mut self, _remaining: Duration) {}
    fn on_matches_update(&mut self, _count: u32) {}
    fn on_turns_update(&mut self, _count: u32) {}
    fn on_round_won(&mut self, _summary: &RoundSummary) {}
    fn on_round_lost(&mut self, _summary: &RoundSummary) {}
}

pub fn dispatch(event: &RoundEvent, presenter: &mut dyn Presenter) {
    match event {
        RoundEvent::LevelShown(level) => presenter.on_level_shown(*level),
        RoundEvent::PhaseChanged(phase) => presenter.on_phase_changed(*phase),
        RoundEvent::CardRevealed { position } => presenter.on_card_revealed(*position),
        RoundEvent::Combo { combo_count } => presenter.on_combo(*combo_count),
        RoundEvent::GuessCorrect { first, second } => presenter.on_guess_correct(*first, *second),
        RoundEvent::GuessWrong { first, second } => presenter.on_guess_wrong(*first, *second),
        RoundEvent::TimeUpdate(remaining) => presenter.on_time_update(*remaining),
        RoundEvent::MatchesUpdate(count) => presenter.on_matches_update(*count),
        RoundEvent::TurnsUpdate(count) => presenter.on_turns_update(*count),
        RoundEvent::RoundWon(summary) => presenter.on_round_won(summary),
        RoundEvent::RoundLost(summary) => presenter.on_round_lost(summary),
    }
}

pub fn dispatch_all<I>(events: I, presenter: &mut dyn Presenter)
where
    I: IntoIterator<Item = RoundEvent>,
{
    for event in events {
        dispatch(&event, presenter);
    }
}
