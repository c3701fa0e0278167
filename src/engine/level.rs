use std::time::{Duration, TryFromFloatSecsError};

use serde::Deserialize;

use super::error::EngineError;

const BUILTIN_LEVELS: &str = include_str!("../../data/levels.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct LevelConfig {
    pub num_cards: u32,
    /// Seconds.
    pub time_limit: f32,
}

impl LevelConfig {
    /// Returns the checked time limit.
    pub fn validate(&self, level: u32) -> Result<Duration, EngineError> {
        if self.num_cards == 0 || self.num_cards % 2 != 0 {
            return Err(EngineError::InvalidConfiguration {
                level,
                reason: format!("num_cards must be even and positive, got {}", self.num_cards),
            });
        }
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(EngineError::InvalidConfiguration {
                level,
                reason: format!("time_limit must be positive, got {}", self.time_limit),
            });
        }
        self.time_limit().map_err(|_| EngineError::InvalidConfiguration {
            level,
            reason: format!("time_limit out of range, got {}", self.time_limit),
        })
    }

    pub fn total_pairs(&self) -> u32 {
        self.num_cards / 2
    }

    pub fn time_limit(&self) -> Result<Duration, TryFromFloatSecsError> {
        Duration::try_from_secs_f32(self.time_limit)
    }
}

pub trait LevelSource {
    /// `level_number` is 1-based.
    fn level_config(&self, level_number: u32) -> Option<LevelConfig>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl LevelTable {
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        LevelTable { levels }
    }

    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let levels: Vec<LevelConfig> = serde_json::from_str(raw)?;
        Ok(Self::new(levels))
    }

    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelSource for LevelTable {
    fn level_config(&self, level_number: u32) -> Option<LevelConfig> {
        if level_number == 0 {
            return None;
        }
        let idx = (level_number as usize - 1).min(self.levels.len().checked_sub(1)?);
        self.levels.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = LevelTable::builtin().expect("embedded table parses");
        assert!(!table.is_empty());
        for level in 1..=table.len() as u32 {
            let config = table.level_config(level).expect("level in range");
            config.validate(level).expect("embedded levels are playable");
        }
    }

    #[test]
    fn levels_past_the_end_reuse_the_last_entry() {
        let table = LevelTable::new(vec![
            LevelConfig { num_cards: 4, time_limit: 10.0 },
            LevelConfig { num_cards: 6, time_limit: 20.0 },
        ]);
        assert_eq!(table.level_config(0), None);
        assert_eq!(table.level_config(1).map(|c| c.num_cards), Some(4));
        assert_eq!(table.level_config(9).map(|c| c.num_cards), Some(6));
        assert_eq!(LevelTable::new(Vec::new()).level_config(1), None);
    }

    #[test]
    fn odd_card_counts_and_bad_timers_are_rejected() {
        let odd = LevelConfig { num_cards: 5, time_limit: 10.0 };
        assert!(matches!(
            odd.validate(3),
            Err(EngineError::InvalidConfiguration { level: 3, .. })
        ));
        let zero_time = LevelConfig { num_cards: 4, time_limit: 0.0 };
        assert!(zero_time.validate(1).is_err());
        let nan_time = LevelConfig { num_cards: 4, time_limit: f32::NAN };
        assert!(nan_time.validate(1).is_err());
        assert_eq!(LevelConfig { num_cards: 8, time_limit: 1.0 }.total_pairs(), 4);
    }

    #[test]
    fn huge_time_limits_are_rejected_instead_of_overflowing() {
        let table = LevelTable::from_json(r#"[{"num_cards":4,"time_limit":1e20}]"#)
            .expect("finite number parses");
        let config = table.level_config(1).expect("one level");
        assert!(matches!(
            config.validate(1),
            Err(EngineError::InvalidConfiguration { level: 1, .. })
        ));
        let ok = LevelConfig { num_cards: 4, time_limit: 2.5 };
        assert_eq!(ok.validate(1), Ok(Duration::from_millis(2500)));
    }
}
