use tracing::warn;

use super::controller::RoundController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugCommand {
    ForceWin,
    ForceLose,
}

impl DebugCommand {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(DebugCommand::ForceWin),
            'q' => Some(DebugCommand::ForceLose),
            _ => None,
        }
    }
}

pub fn apply_debug_command(ctl: &mut RoundController, command: DebugCommand) -> bool {
    if !ctl.config().debug {
        warn!(?command, "debug command ignored | export FLIPFLOP_DEBUG=1");
        return false;
    }
    if !ctl.phase().is_active() {
        return false;
    }
    match command {
        DebugCommand::ForceWin => ctl.win(),
        DebugCommand::ForceLose => ctl.lose(),
    }
    true
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::config::EngineConfig;
    use crate::engine::state::Phase;

    fn controller(debug: bool) -> RoundController {
        let config = EngineConfig {
            debug,
            shuffle_seed: Some(9),
            ..EngineConfig::default()
        };
        RoundController::with_defaults(config).expect("builtin levels")
    }

    #[test]
    fn commands_need_debug_mode() {
        let mut ctl = controller(false);
        ctl.start_game(Duration::ZERO).expect("builtin level 1");
        assert!(!apply_debug_command(&mut ctl, DebugCommand::ForceWin));
        assert_eq!(ctl.phase(), Phase::Loading);
    }

    #[test]
    fn forced_win_advances_progress_without_delay() {
        let mut ctl = controller(true);
        ctl.start_game(Duration::ZERO).expect("builtin level 1");
        assert!(apply_debug_command(&mut ctl, DebugCommand::ForceWin));
        assert_eq!(ctl.phase(), Phase::Won);
        assert_eq!(ctl.progress().level_index(), 1);
        assert!(ctl.cards().is_empty());
        assert!(!ctl.poller().is_running());
        assert!(!apply_debug_command(&mut ctl, DebugCommand::ForceLose));
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(DebugCommand::from_key('W'), Some(DebugCommand::ForceWin));
        assert_eq!(DebugCommand::from_key('q'), Some(DebugCommand::ForceLose));
        assert_eq!(DebugCommand::from_key('x'), None);
    }
}
