use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Loading | Phase::Playing)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Loading => "Loading",
            Phase::Playing => "Playing",
            Phase::Won => "Won",
            Phase::Lost => "Lost",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundState {
    pub level_number: u32,
    pub turn_count: u32,
    pub match_count: u32,
    pub combo_count: u32,
    pub last_correct_time: Option<Duration>,
    pub timer: Duration,
    pub time_limit: Duration,
    pub total_pairs: u32,
    pub win_pending: bool,
}

impl RoundState {
    pub fn new(level_number: u32, time_limit: Duration, total_pairs: u32) -> Self {
        RoundState {
            level_number,
            timer: time_limit,
            time_limit,
            total_pairs,
            ..Self::default()
        }
    }

    pub fn board_complete(&self) -> bool {
        self.total_pairs > 0 && self.match_count == self.total_pairs
    }

    pub fn precision_pct(&self) -> u8 {
        if self.turn_count == 0 {
            return 100;
        }
        ((self.match_count as u64 * 100) / self.turn_count as u64).min(100) as u8
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            level_number: self.level_number,
            turns: self.turn_count,
            matches: self.match_count,
            total_pairs: self.total_pairs,
            time_left: self.timer,
            precision_pct: self.precision_pct(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub level_number: u32,
    pub turns: u32,
    pub matches: u32,
    pub total_pairs: u32,
    pub time_left: Duration,
    pub precision_pct: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_tracks_matches_per_turn() {
        let mut st = RoundState::new(1, Duration::from_secs(10), 4);
        assert_eq!(st.precision_pct(), 100);
        st.turn_count = 8;
        st.match_count = 4;
        assert_eq!(st.precision_pct(), 50);
        assert!(st.board_complete());
        assert_eq!(st.summary().precision_pct, 50);
    }

    #[test]
    fn generation_wraps() {
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
    }
}
