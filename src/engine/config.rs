use std::time::Duration;

use serde::Deserialize;

use super::error::EngineError;

pub const POLL_INTERVAL_MS: u64 = 1000;
pub const COMBO_WINDOW_MS: u64 = 500;
pub const SETTLE_DELAY_MS: u64 = 2000;
pub const WIN_DELAY_MS: u64 = 1500;
pub const FRAME_INTERVAL_MS: u64 = 16;

const DEBUG_ENV_VAR: &str = "FLIPFLOP_DEBUG";

pub fn debug_mode_enabled() -> bool {
    match std::env::var(DEBUG_ENV_VAR) {
        Ok(value) => {
            let v = value.trim().to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "yes" | "on")
        }
        Err(_) => false,
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub poll_interval_ms: u64,
    pub combo_window_ms: u64,
    pub settle_delay_ms: u64,
    pub win_delay_ms: u64,
    pub frame_interval_ms: u64,
    pub shuffle_seed: Option<u64>,
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            poll_interval_ms: POLL_INTERVAL_MS,
            combo_window_ms: COMBO_WINDOW_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            win_delay_ms: WIN_DELAY_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            shuffle_seed: None,
            debug: debug_mode_enabled(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn combo_window(&self) -> Duration {
        Duration::from_millis(self.combo_window_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_pacing() {
        let config = EngineConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.combo_window(), Duration::from_millis(500));
        assert_eq!(config.settle_delay(), Duration::from_secs(2));
        assert_eq!(config.win_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn json_overrides_keep_missing_fields() {
        let config = EngineConfig::from_json(r#"{ "poll_interval_ms": 250, "shuffle_seed": 7 }"#)
            .expect("valid override");
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.shuffle_seed, Some(7));
        assert_eq!(config.win_delay_ms, WIN_DELAY_MS);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }
}
