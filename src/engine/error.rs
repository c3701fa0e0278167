use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration for level {level}: {reason}")]
    InvalidConfiguration { level: u32, reason: String },
    #[error("asset source returned {available} sprites, {requested} requested")]
    NotEnoughSprites { requested: usize, available: usize },
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
