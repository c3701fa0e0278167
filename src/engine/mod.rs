//! Deterministic turn engine: picks go into two selection slots, completed
//! pairs wait in a queue, and a fixed-cadence poller releases one pair per
//! tick for judgment.

pub mod assets;
pub mod card;
pub mod config;
pub mod controller;
pub mod debug_tools;
pub mod delayed;
pub mod error;
pub mod events;
pub mod judge;
pub mod layout;
pub mod level;
pub mod poller;
pub mod progress;
pub mod queue;
pub mod slots;
pub mod state;

pub use assets::{AssetHandle, AssetSource, SymbolSprites};
pub use card::Card;
pub use config::EngineConfig;
pub use controller::{IgnoreReason, RoundController, SelectOutcome};
pub use debug_tools::{DebugCommand, apply_debug_command};
pub use error::EngineError;
pub use events::{Presenter, RoundEvent, dispatch, dispatch_all};
pub use judge::{Judgement, Verdict};
pub use layout::BoardLayout;
pub use level::{LevelConfig, LevelSource, LevelTable};
pub use progress::{MemoryProgress, ProgressStore};
pub use state::{Generation, Phase, RoundState, RoundSummary};
