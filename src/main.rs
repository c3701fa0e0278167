use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use flipflop::driver::{self, Session};
use flipflop::engine::{
    AssetHandle, BoardLayout, EngineConfig, LevelTable, MemoryProgress, Phase, Presenter,
    RoundController, RoundSummary, SymbolSprites,
};
use rand::seq::IndexedRandom;

const ROBOT_STEP_MS: u64 = 350;
const ROUNDS_TO_PLAY: u32 = 3;

struct ConsolePresenter {
    last_whole_second: Option<u64>,
}

impl Presenter for ConsolePresenter {
    fn on_level_shown(&mut self, level_number: u32) {
        println!("== Level {level_number} ==");
    }

    fn on_phase_changed(&mut self, phase: Phase) {
        println!("[phase] {}", phase.name());
    }

    fn on_combo(&mut self, combo_count: u32) {
        println!("COMBO x{combo_count}!");
    }

    fn on_guess_correct(&mut self, first: usize, second: usize) {
        println!("match: {first} + {second}");
    }

    fn on_guess_wrong(&mut self, first: usize, second: usize) {
        println!("miss: {first} + {second}");
    }

    fn on_time_update(&mut self, remaining: Duration) {
        let whole = remaining.as_secs();
        if self.last_whole_second != Some(whole) {
            self.last_whole_second = Some(whole);
            println!("time {:02}:{:02}", whole / 60, whole % 60);
        }
    }

    fn on_matches_update(&mut self, count: u32) {
        println!("matches {count}");
    }

    fn on_turns_update(&mut self, count: u32) {
        println!("turns {count}");
    }

    fn on_round_won(&mut self, summary: &RoundSummary) {
        println!(
            "Won level {} in {} turns ({}% precision, {:.1}s left)",
            summary.level_number,
            summary.turns,
            summary.precision_pct,
            summary.time_left.as_secs_f32()
        );
    }

    fn on_round_lost(&mut self, summary: &RoundSummary) {
        println!(
            "Out of time on level {}: {}/{} pairs",
            summary.level_number, summary.matches, summary.total_pairs
        );
    }
}

#[derive(Default)]
struct Robot {
    seen: HashMap<usize, AssetHandle>,
    rounds_played: u32,
}

impl Robot {
    fn pick(&mut self, ctl: &RoundController) -> Option<usize> {
        for card in ctl.cards().iter().filter(|c| c.revealed) {
            self.seen.insert(card.position_index, card.face.clone());
        }
        let selectable: Vec<usize> = ctl
            .cards()
            .iter()
            .filter(|c| c.is_selectable())
            .map(|c| c.position_index)
            .collect();

        let slots = ctl.slots();
        if slots.first().active {
            let face = ctl.cards().get(slots.first().card).map(|c| c.face.clone());
            if let Some(partner) = selectable
                .iter()
                .copied()
                .find(|pos| face.is_some() && self.seen.get(pos) == face.as_ref())
            {
                return Some(partner);
            }
        }
        let unseen: Vec<usize> = selectable
            .iter()
            .copied()
            .filter(|pos| !self.seen.contains_key(pos))
            .collect();
        let mut rng = rand::rng();
        unseen
            .choose(&mut rng)
            .or_else(|| selectable.choose(&mut rng))
            .copied()
    }
}

/// Usage: `flipflop [levels.json] [start-level]`.
fn build_controller() -> Result<RoundController, String> {
    let config = EngineConfig::default();
    let start_level = match std::env::args().nth(2) {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|level| *level > 0)
            .ok_or_else(|| format!("invalid start level: {raw}"))?,
        None => 1,
    };
    let levels = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|err| format!("{path}: {err}"))?;
            LevelTable::from_json(&raw).map_err(|err| err.to_string())?
        }
        None => LevelTable::builtin().map_err(|err| err.to_string())?,
    };
    Ok(RoundController::new(
        config,
        Box::new(levels),
        Box::new(SymbolSprites::new()),
        Box::new(MemoryProgress::starting_at(start_level - 1)),
    ))
}

fn run() -> Result<(), String> {
    let controller = build_controller()?;
    let presenter = ConsolePresenter {
        last_whole_second: None,
    };
    let session = Session::shared(controller, Box::new(presenter));
    let main_loop = glib::MainLoop::new(None, false);

    driver::start_game(&session).map_err(|err| err.to_string())?;
    {
        let st = session.borrow();
        let layout = BoardLayout::for_card_count(st.controller().cards().len() as u32);
        println!("board {}x{}", layout.rows, layout.cols);
    }

    let robot = Rc::new(RefCell::new(Robot::default()));
    let session_robot = session.clone();
    let loop_robot = main_loop.clone();
    glib::timeout_add_local(Duration::from_millis(ROBOT_STEP_MS), move || {
        let phase = session_robot.borrow().controller().phase();
        if phase.is_terminal() {
            let mut bot = robot.borrow_mut();
            bot.rounds_played += 1;
            bot.seen.clear();
            if phase == Phase::Won && bot.rounds_played < ROUNDS_TO_PLAY {
                if let Err(err) = driver::start_game(&session_robot) {
                    eprintln!("flipflop: {err}");
                    loop_robot.quit();
                    return glib::ControlFlow::Break;
                }
                return glib::ControlFlow::Continue;
            }
            loop_robot.quit();
            return glib::ControlFlow::Break;
        }

        let pick = {
            let st = session_robot.borrow();
            let layout = BoardLayout::for_card_count(st.controller().cards().len() as u32);
            robot
                .borrow_mut()
                .pick(st.controller())
                .map(|position| (position, layout.cell(position)))
        };
        if let Some((position, (row, col))) = pick {
            println!("robot flips row {row} col {col}");
            driver::select(&session_robot, position);
        }
        glib::ControlFlow::Continue
    });

    main_loop.run();
    driver::return_to_menu(&session);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("flipflop: {err}");
        std::process::exit(1);
    }
}
