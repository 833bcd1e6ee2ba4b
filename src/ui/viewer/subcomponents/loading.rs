// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.

use crate::config::defaults::LOADING_TIMEOUT_SECS;
use std::time::{Duration, Instant};

/// Timeout before considering a load operation as potentially stuck.
const LOADING_TIMEOUT: Duration = Duration::from_secs(LOADING_TIMEOUT_SECS);

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Which half of the load pipeline is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Acquiring the document's bytes (file read or fetch).
    Resolving,
    /// Waiting for the engine to open a session.
    Initializing,
}

impl LoadPhase {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LoadPhase::Resolving => "viewer-loading-resolving",
            LoadPhase::Initializing => "viewer-loading-initializing",
        }
    }
}

/// Loading state for the document viewer.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current phase; `Some` while a load is in flight.
    phase: Option<LoadPhase>,
    /// When loading started (for timeout detection).
    started_at: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start loading in the given phase.
    Start(LoadPhase),
    /// Move to a later phase without resetting the timeout clock.
    SetPhase(LoadPhase),
    /// Stop loading (success or failure).
    Stop,
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Loading has timed out.
    LoadingTimedOut,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(phase) => {
                self.phase = Some(phase);
                self.started_at = Some(Instant::now());
                Effect::None
            }
            Message::SetPhase(phase) => {
                if self.phase.is_some() {
                    self.phase = Some(phase);
                }
                Effect::None
            }
            Message::Stop => {
                self.phase = None;
                self.started_at = None;
                self.spinner_rotation = 0.0;
                Effect::None
            }
            Message::SpinnerTick => {
                if self.phase.is_some() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                    if let Some(started) = self.started_at {
                        if started.elapsed() > LOADING_TIMEOUT {
                            return Effect::LoadingTimedOut;
                        }
                    }
                }
                Effect::None
            }
        }
    }

    /// Check if currently loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_some()
    }

    /// Current load phase, if any.
    #[must_use]
    pub fn phase(&self) -> Option<LoadPhase> {
        self.phase
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_sets_phase_and_clock() {
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::Start(LoadPhase::Resolving));

        assert!(state.is_loading());
        assert_eq!(state.phase(), Some(LoadPhase::Resolving));
    }

    #[test]
    fn set_phase_advances_without_restart() {
        let mut state = State::default();
        state.handle(Message::Start(LoadPhase::Resolving));
        state.handle(Message::SetPhase(LoadPhase::Initializing));

        assert_eq!(state.phase(), Some(LoadPhase::Initializing));
    }

    #[test]
    fn set_phase_is_ignored_when_idle() {
        let mut state = State::default();
        state.handle(Message::SetPhase(LoadPhase::Initializing));
        assert!(!state.is_loading());
    }

    #[test]
    fn stop_clears_state() {
        let mut state = State::default();
        state.handle(Message::Start(LoadPhase::Resolving));
        state.handle(Message::Stop);

        assert!(!state.is_loading());
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn spinner_tick_advances_rotation_only_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        state.handle(Message::Start(LoadPhase::Resolving));
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }
}
