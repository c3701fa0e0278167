use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use super::assets::{AssetSource, SymbolSprites};
use super::card::{Card, spawn_cards};
use super::config::EngineConfig;
use super::delayed::{DelayedCall, DelayedCalls, DelayedTask};
use super::error::EngineError;
use super::events::RoundEvent;
use super::judge::{Judgement, Verdict, is_combo, judge};
use super::level::{LevelSource, LevelTable};
use super::poller::ResolutionPoller;
use super::progress::{MemoryProgress, ProgressStore};
use super::queue::GuessQueue;
use super::slots::{GuessPair, SelectionSlots, SlotPick};
use super::state::{Generation, Phase, RoundState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    NoActiveRound,
    UnknownCard,
    AlreadyMatched,
    AlreadyPicked,
    SlotsFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    FirstPicked,
    PairQueued,
}

/// Owns one round at a time: cards, selection slots, the guess queue and
/// its poller, and the generation-tagged one-shots (settle and win delay).
///
/// Time is always supplied by the caller as an offset from a fixed epoch.
/// Two sources drive a live round: [`RoundController::poll`] at the poll
/// cadence and [`RoundController::frame`] once per frame.
pub struct RoundController {
    config: EngineConfig,
    levels: Box<dyn LevelSource>,
    assets: Box<dyn AssetSource>,
    progress: Box<dyn ProgressStore>,
    rng: StdRng,
    phase: Phase,
    generation: Generation,
    round: RoundState,
    cards: Vec<Card>,
    slots: SelectionSlots,
    queue: GuessQueue,
    poller: ResolutionPoller,
    delayed: DelayedCalls,
    last_frame: Option<Duration>,
    events: VecDeque<RoundEvent>,
}

impl RoundController {
    pub fn new(
        config: EngineConfig,
        levels: Box<dyn LevelSource>,
        assets: Box<dyn AssetSource>,
        progress: Box<dyn ProgressStore>,
    ) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let poller = ResolutionPoller::new(config.poll_interval());
        RoundController {
            config,
            levels,
            assets,
            progress,
            rng,
            phase: Phase::Idle,
            generation: Generation::default(),
            round: RoundState::default(),
            cards: Vec::new(),
            slots: SelectionSlots::new(),
            queue: GuessQueue::new(),
            poller,
            delayed: DelayedCalls::new(),
            last_frame: None,
            events: VecDeque::new(),
        }
    }

    pub fn with_defaults(config: EngineConfig) -> Result<Self, EngineError> {
        let levels = LevelTable::builtin()?;
        let assets = match config.shuffle_seed {
            Some(seed) => SymbolSprites::seeded(seed),
            None => SymbolSprites::new(),
        };
        Ok(Self::new(
            config,
            Box::new(levels),
            Box::new(assets),
            Box::new(MemoryProgress::new()),
        ))
    }

    pub fn start_game(&mut self, now: Duration) -> Result<Generation, EngineError> {
        let level_number = self.progress.level_index().saturating_add(1);
        let Some(level) = self.levels.level_config(level_number) else {
            warn!(level_number, "no level configuration available");
            return Err(EngineError::InvalidConfiguration {
                level: level_number,
                reason: "no level configuration".to_string(),
            });
        };
        let time_limit = match level.validate(level_number) {
            Ok(limit) => limit,
            Err(err) => {
                warn!(level_number, %err, "refusing to start round");
                return Err(err);
            }
        };
        let pair_count = level.total_pairs() as usize;
        let sprites = self.assets.pair_sprites(pair_count)?;
        if sprites.len() < pair_count {
            return Err(EngineError::NotEnoughSprites {
                requested: pair_count,
                available: sprites.len(),
            });
        }

        if self.phase.is_active() {
            debug!(generation = self.generation.0, "restarting over an active round");
            self.clean();
        }

        self.generation = self.generation.next();
        self.round = RoundState::new(level_number, time_limit, level.total_pairs());
        self.cards = spawn_cards(&sprites[..pair_count], &mut self.rng);
        self.slots.clear();
        self.queue.clear();
        self.last_frame = Some(now);
        self.poller.start(self.generation);
        self.delayed.schedule(
            self.generation,
            now + self.config.settle_delay(),
            DelayedTask::Settle,
        );

        info!(
            generation = self.generation.0,
            level_number,
            num_cards = level.num_cards,
            time_limit = level.time_limit,
            "round loading"
        );
        self.set_phase(Phase::Loading);
        self.emit(RoundEvent::LevelShown(level_number));
        self.emit(RoundEvent::TimeUpdate(self.round.timer));
        self.emit(RoundEvent::TurnsUpdate(0));
        self.emit(RoundEvent::MatchesUpdate(0));
        Ok(self.generation)
    }

    pub fn select(&mut self, position: usize) -> SelectOutcome {
        let outcome = self.try_select(position);
        if let SelectOutcome::Ignored(reason) = outcome {
            trace!(position, ?reason, "selection ignored");
        }
        outcome
    }

    fn try_select(&mut self, position: usize) -> SelectOutcome {
        if !self.phase.is_active() {
            return SelectOutcome::Ignored(IgnoreReason::NoActiveRound);
        }
        let Some(card) = self.cards.get(position) else {
            return SelectOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if card.matched {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if card.revealed || self.slots.holds(position) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyPicked);
        }

        match self.slots.select(position) {
            SlotPick::Full => SelectOutcome::Ignored(IgnoreReason::SlotsFull),
            SlotPick::First => {
                self.reveal(position);
                SelectOutcome::FirstPicked
            }
            SlotPick::Completed(pair) => {
                self.reveal(position);
                self.queue.enqueue(pair);
                SelectOutcome::PairQueued
            }
        }
    }

    fn reveal(&mut self, position: usize) {
        self.cards[position].revealed = true;
        self.emit(RoundEvent::CardRevealed { position });
    }

    /// One Resolution Poller tick. Ticks from another generation, or after
    /// the poller was cancelled, do nothing.
    pub fn poll(&mut self, generation: Generation, now: Duration) -> Option<Judgement> {
        if !self.poller.accepts(generation) {
            trace!(generation = generation.0, "poll tick for a retired round");
            return None;
        }
        let Some(pair) = self.poller.tick(&mut self.queue) else {
            trace!(generation = generation.0, "poll tick with nothing queued");
            return None;
        };
        Some(self.resolve(pair, now))
    }

    fn resolve(&mut self, pair: GuessPair, now: Duration) -> Judgement {
        let (first, second) = (pair.first.card, pair.second.card);
        let verdict = judge(&self.cards, &pair);
        let mut combo = false;
        let mut win_scheduled = false;

        match verdict {
            Verdict::Match => {
                combo = is_combo(self.round.last_correct_time, now, self.config.combo_window());
                if combo {
                    self.round.combo_count += 1;
                    debug!(combo_count = self.round.combo_count, "combo");
                    self.emit(RoundEvent::Combo {
                        combo_count: self.round.combo_count,
                    });
                } else {
                    self.round.combo_count = 0;
                }
                for idx in [first, second] {
                    if let Some(card) = self.cards.get_mut(idx) {
                        card.matched = true;
                    }
                }
                self.round.match_count += 1;
                self.round.last_correct_time = Some(now);
                debug!(first, second, matches = self.round.match_count, "correct guess");
                self.emit(RoundEvent::GuessCorrect { first, second });
                self.emit(RoundEvent::MatchesUpdate(self.round.match_count));
                win_scheduled = self.check_win(now);
            }
            Verdict::Mismatch => {
                for idx in [first, second] {
                    if let Some(card) = self.cards.get_mut(idx) {
                        card.revealed = false;
                    }
                }
                debug!(first, second, "wrong guess");
                self.emit(RoundEvent::GuessWrong { first, second });
            }
        }

        self.slots.clear();
        self.round.turn_count += 1;
        self.emit(RoundEvent::TurnsUpdate(self.round.turn_count));

        Judgement {
            pair,
            verdict,
            combo,
            win_scheduled,
        }
    }

    fn check_win(&mut self, now: Duration) -> bool {
        if self.phase != Phase::Playing || self.round.win_pending || !self.round.board_complete() {
            return false;
        }
        self.round.win_pending = true;
        self.delayed.schedule(
            self.generation,
            now + self.config.win_delay(),
            DelayedTask::Win,
        );
        info!(generation = self.generation.0, "board complete, win scheduled");
        true
    }

    pub fn frame(&mut self, now: Duration) {
        for call in self.delayed.take_due(now) {
            self.fire(call);
        }

        let last = self.last_frame.replace(now);
        if self.phase != Phase::Playing || self.round.win_pending {
            return;
        }
        let dt = last.map(|t| now.saturating_sub(t)).unwrap_or_default();
        self.round.timer = self.round.timer.saturating_sub(dt);
        self.emit(RoundEvent::TimeUpdate(self.round.timer));
        if self.round.timer.is_zero() {
            self.lose();
        }
    }

    fn fire(&mut self, call: DelayedCall) {
        if call.generation != self.generation {
            debug!(
                stale = call.generation.0,
                current = self.generation.0,
                task = ?call.task,
                "discarding stale callback"
            );
            return;
        }
        match call.task {
            DelayedTask::Settle => {
                if self.phase != Phase::Loading {
                    debug!(phase = self.phase.name(), "settle fired outside loading");
                    return;
                }
                self.set_phase(Phase::Playing);
                self.last_frame = Some(call.due);
                self.check_win(call.due);
            }
            DelayedTask::Win => {
                if self.phase != Phase::Playing || !self.round.win_pending {
                    debug!(phase = self.phase.name(), "win fired outside a pending win");
                    return;
                }
                self.win();
            }
        }
    }

    pub(crate) fn win(&mut self) {
        self.progress.advance_level();
        let summary = self.round.summary();
        self.clean();
        info!(generation = self.generation.0, turns = summary.turns, "round won");
        self.set_phase(Phase::Won);
        self.emit(RoundEvent::RoundWon(summary));
    }

    pub(crate) fn lose(&mut self) {
        let summary = self.round.summary();
        self.clean();
        info!(generation = self.generation.0, matches = summary.matches, "round lost");
        self.set_phase(Phase::Lost);
        self.emit(RoundEvent::RoundLost(summary));
    }

    pub fn return_to_menu(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        self.clean();
        self.round = RoundState::default();
        self.set_phase(Phase::Idle);
    }

    /// Releases the round. Runs before any outcome is announced.
    fn clean(&mut self) {
        self.poller.cancel();
        self.queue.clear();
        self.slots.clear();
        self.cards.clear();
        self.round.win_pending = false;
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.emit(RoundEvent::PhaseChanged(phase));
    }

    fn emit(&mut self, event: RoundEvent) {
        self.events.push_back(event);
    }

    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.events.drain(..).collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn slots(&self) -> &SelectionSlots {
        &self.slots
    }

    pub fn pending_pairs(&self) -> usize {
        self.queue.pending_pairs()
    }

    pub fn poller(&self) -> &ResolutionPoller {
        &self.poller
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn progress(&self) -> &dyn ProgressStore {
        self.progress.as_ref()
    }
}
