//! Runs a [`RoundController`] on the GLib main loop of the current thread.
//!
//! The Resolution Poller and the frame step are two independent
//! `timeout_add_local` sources. Both are removed when the round ends, and
//! each callback checks the round generation before touching the
//! controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::engine::{
    DebugCommand, EngineError, Generation, Presenter, RoundController, SelectOutcome,
    apply_debug_command, dispatch_all,
};

#[derive(Default)]
struct RoundSources {
    generation: Generation,
    poll_handle: Option<glib::SourceId>,
    frame_handle: Option<glib::SourceId>,
}

#[derive(Clone, Copy)]
enum Source {
    Poll,
    Frame,
}

pub struct Session {
    controller: RoundController,
    presenter: Box<dyn Presenter>,
    epoch: Instant,
    sources: RoundSources,
}

impl Session {
    pub fn new(controller: RoundController, presenter: Box<dyn Presenter>) -> Self {
        Session {
            controller,
            presenter,
            epoch: Instant::now(),
            sources: RoundSources::default(),
        }
    }

    pub fn shared(controller: RoundController, presenter: Box<dyn Presenter>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(controller, presenter)))
    }

    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    pub fn has_live_sources(&self) -> bool {
        self.sources.poll_handle.is_some() || self.sources.frame_handle.is_some()
    }

    fn flush(&mut self) {
        let events = self.controller.drain_events();
        dispatch_all(events, self.presenter.as_mut());
    }
}

pub fn stop_round_sources(st: &mut Session) {
    if let Some(handle) = st.sources.poll_handle.take() {
        handle.remove();
    }
    if let Some(handle) = st.sources.frame_handle.take() {
        handle.remove();
    }
}

/// Called from inside a source callback that is about to return `Break`:
/// its own id is dropped (GLib removes it), the other one is removed.
fn release_sources_from(st: &mut Session, source: Source, generation: Generation) {
    if st.sources.generation != generation {
        return;
    }
    let (own, other) = match source {
        Source::Poll => (&mut st.sources.poll_handle, &mut st.sources.frame_handle),
        Source::Frame => (&mut st.sources.frame_handle, &mut st.sources.poll_handle),
    };
    own.take();
    if let Some(handle) = other.take() {
        handle.remove();
    }
}

fn finish_tick(st: &mut Session, source: Source, generation: Generation) -> glib::ControlFlow {
    if st.controller.generation() == generation && st.controller.phase().is_active() {
        st.flush();
        return glib::ControlFlow::Continue;
    }
    release_sources_from(st, source, generation);
    st.flush();
    glib::ControlFlow::Break
}

pub fn start_game(session: &Rc<RefCell<Session>>) -> Result<Generation, EngineError> {
    let (generation, poll_interval, frame_interval) = {
        let mut st = session.borrow_mut();
        let now = st.now();
        let started = st.controller.start_game(now);
        let generation = match started {
            Ok(generation) => generation,
            Err(err) => {
                st.flush();
                return Err(err);
            }
        };
        stop_round_sources(&mut st);
        st.sources.generation = generation;
        st.flush();
        (
            generation,
            st.controller.poller().interval(),
            st.controller.config().frame_interval(),
        )
    };

    let session_poll = session.clone();
    let poll_handle = glib::timeout_add_local(poll_interval, move || {
        let mut st = session_poll.borrow_mut();
        if st.controller.generation() != generation {
            debug!(generation = generation.0, "poll source outlived its round");
            release_sources_from(&mut st, Source::Poll, generation);
            return glib::ControlFlow::Break;
        }
        let now = st.now();
        st.controller.poll(generation, now);
        finish_tick(&mut st, Source::Poll, generation)
    });

    let session_frame = session.clone();
    let frame_handle = glib::timeout_add_local(frame_interval, move || {
        let mut st = session_frame.borrow_mut();
        if st.controller.generation() != generation {
            debug!(generation = generation.0, "frame source outlived its round");
            release_sources_from(&mut st, Source::Frame, generation);
            return glib::ControlFlow::Break;
        }
        let now = st.now();
        st.controller.frame(now);
        finish_tick(&mut st, Source::Frame, generation)
    });

    let mut st = session.borrow_mut();
    st.sources.poll_handle = Some(poll_handle);
    st.sources.frame_handle = Some(frame_handle);
    Ok(generation)
}

pub fn select(session: &Rc<RefCell<Session>>, position: usize) -> SelectOutcome {
    let mut st = session.borrow_mut();
    let outcome = st.controller.select(position);
    st.flush();
    outcome
}

pub fn return_to_menu(session: &Rc<RefCell<Session>>) {
    let mut st = session.borrow_mut();
    stop_round_sources(&mut st);
    st.controller.return_to_menu();
    st.flush();
}

pub fn debug_key(session: &Rc<RefCell<Session>>, key: char) -> bool {
    match DebugCommand::from_key(key) {
        Some(command) => debug_command(session, command),
        None => false,
    }
}

pub fn debug_command(session: &Rc<RefCell<Session>>, command: DebugCommand) -> bool {
    let mut st = session.borrow_mut();
    let applied = apply_debug_command(&mut st.controller, command);
    if applied {
        stop_round_sources(&mut st);
    }
    st.flush();
    applied
}
