//! Clock-free playback state machine.
//!
//! [`PlaybackMachine`] owns the [`PlaybackState`] and decides every
//! transition, but never touches a timer itself. Each command returns a
//! [`TimerEffect`] telling the driver what to do with its single pending
//! tick. Ticks carry the generation they were armed for; `pause()` and
//! `reset()` advance the generation so a tick from an earlier run is
//! recognised and dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of demo progress handed to observers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackState {
    /// 0 before the first step, `N` once every step has been shown
    pub current_step: u32,
    /// True while ticks are being scheduled
    pub is_playing: bool,
    /// True once the final step has been reached
    pub is_complete: bool,
}

impl PlaybackState {
    /// Classifies the snapshot into one of the mutually exclusive phases.
    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if self.is_playing {
            Phase::Advancing
        } else if self.current_step == 0 {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }
}

/// Coarse playback phase derived from a [`PlaybackState`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing shown yet, not playing
    Idle,
    /// A tick is pending
    Advancing,
    /// Stopped part-way through
    Paused,
    /// Every step has been shown
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "idle",
            Phase::Advancing => "advancing",
            Phase::Paused => "paused",
            Phase::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Identifies the run a tick was armed for.
pub type Generation = u64;

/// What the driver must do with its pending tick after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// Leave the timer alone
    None,
    /// Schedule one tick for the given generation after the interval
    Arm(Generation),
    /// Drop any pending tick
    Cancel,
}

/// Deterministic playback state machine over a catalog of `len` steps.
#[derive(Debug, Clone)]
pub struct PlaybackMachine {
    len: u32,
    state: PlaybackState,
    generation: Generation,
}

impl PlaybackMachine {
    /// Creates an idle machine for a catalog with `len` steps.
    pub fn new(len: u32) -> Self {
        Self {
            len,
            state: PlaybackState::default(),
            generation: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Number of steps this machine plays through.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// True when the machine has no steps to play.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Generation that the next valid tick must carry.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts or resumes playback.
    ///
    /// Restarts from step 0 when complete. No-op while already advancing.
    pub fn play(&mut self) -> TimerEffect {
        if self.state.is_playing {
            return TimerEffect::None;
        }

        if self.state.is_complete {
            self.state = PlaybackState::default();
        }

        self.generation += 1;
        if self.len == 0 {
            self.complete();
            return TimerEffect::Cancel;
        }

        self.state.is_playing = true;
        TimerEffect::Arm(self.generation)
    }

    /// Stops advancing, keeping the current step. No-op unless advancing.
    pub fn pause(&mut self) -> TimerEffect {
        if !self.state.is_playing {
            return TimerEffect::None;
        }

        self.state.is_playing = false;
        self.generation += 1;
        TimerEffect::Cancel
    }

    /// Returns to idle at step 0 from any phase.
    pub fn reset(&mut self) -> TimerEffect {
        self.state = PlaybackState::default();
        self.generation += 1;
        TimerEffect::Cancel
    }

    /// Applies one elapsed interval armed for `generation`.
    ///
    /// Stale ticks (wrong generation, or not advancing) change nothing. The
    /// tick that lands on the last step completes the run in the same
    /// transition, so no step past `N` is ever observed.
    pub fn tick(&mut self, generation: Generation) -> TimerEffect {
        if generation != self.generation || !self.state.is_playing {
            return TimerEffect::None;
        }

        self.state.current_step += 1;
        if self.state.current_step >= self.len {
            self.complete();
            return TimerEffect::Cancel;
        }

        TimerEffect::Arm(self.generation)
    }

    fn complete(&mut self) {
        self.state = PlaybackState {
            current_step: self.len,
            is_playing: false,
            is_complete: true,
        };
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const N: u32 = 4;

    fn playing_at(step: u32) -> PlaybackState {
        PlaybackState {
            current_step: step,
            is_playing: true,
            is_complete: false,
        }
    }

    fn run_ticks(machine: &mut PlaybackMachine, count: u32) {
        for _ in 0..count {
            let generation = machine.generation();
            machine.tick(generation);
        }
    }

    #[test]
    fn test_new_machine_is_idle() {
        let machine = PlaybackMachine::new(N);
        assert_eq!(machine.state(), PlaybackState::default());
        assert_eq!(machine.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_full_run_completes_on_last_tick() {
        let mut machine = PlaybackMachine::new(N);
        assert!(matches!(machine.play(), TimerEffect::Arm(_)));
        assert_eq!(machine.state(), playing_at(0));

        run_ticks(&mut machine, 1);
        assert_eq!(machine.state(), playing_at(1));

        run_ticks(&mut machine, 3);
        assert_eq!(
            machine.state(),
            PlaybackState {
                current_step: 4,
                is_playing: false,
                is_complete: true,
            }
        );
    }

    #[test]
    fn test_terminates_after_exactly_n_ticks() {
        let mut machine = PlaybackMachine::new(N);
        let mut effect = machine.play();
        let mut ticks = 0;
        while let TimerEffect::Arm(generation) = effect {
            effect = machine.tick(generation);
            ticks += 1;
            assert!(ticks <= N, "machine kept arming ticks past the last step");
        }
        assert_eq!(ticks, N);
        assert_eq!(effect, TimerEffect::Cancel);
        assert_eq!(machine.state().phase(), Phase::Complete);
    }

    #[test]
    fn test_pause_preserves_step_and_ignores_pending_tick() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, 2);
        let armed = machine.generation();

        assert_eq!(machine.pause(), TimerEffect::Cancel);
        assert_eq!(machine.state().phase(), Phase::Paused);
        assert_eq!(machine.state().current_step, 2);

        assert_eq!(machine.tick(armed), TimerEffect::None);
        assert_eq!(machine.state().current_step, 2);
    }

    #[test]
    fn test_play_resumes_from_paused_step() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, 2);
        machine.pause();

        assert!(matches!(machine.play(), TimerEffect::Arm(_)));
        run_ticks(&mut machine, 1);
        assert_eq!(machine.state(), playing_at(3));
    }

    #[test]
    fn test_play_after_complete_restarts() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, N);
        assert!(machine.state().is_complete);

        machine.play();
        assert_eq!(machine.state(), playing_at(0));
        run_ticks(&mut machine, 1);
        assert_eq!(machine.state(), playing_at(1));
    }

    #[test]
    fn test_play_while_advancing_is_noop() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, 1);
        let generation = machine.generation();

        assert_eq!(machine.play(), TimerEffect::None);
        assert_eq!(machine.generation(), generation);
        assert_eq!(machine.state(), playing_at(1));
    }

    #[test]
    fn test_reset_then_play_drops_orphaned_tick() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, 2);
        let orphan = machine.generation();

        machine.reset();
        let fresh = match machine.play() {
            TimerEffect::Arm(generation) => generation,
            other => panic!("expected a tick to be armed, got {other:?}"),
        };

        assert_eq!(machine.tick(orphan), TimerEffect::None);
        assert_eq!(machine.state(), playing_at(0));
        machine.tick(fresh);
        assert_eq!(machine.state(), playing_at(1));
    }

    #[test]
    fn test_reset_while_advancing_retires_armed_tick() {
        let mut machine = PlaybackMachine::new(N);
        machine.play();
        run_ticks(&mut machine, 1);
        let armed = machine.generation();

        assert_eq!(machine.reset(), TimerEffect::Cancel);
        assert_ne!(machine.generation(), armed);
        assert_eq!(machine.tick(armed), TimerEffect::None);
        assert_eq!(machine.state(), PlaybackState::default());
    }

    #[test]
    fn test_misuse_is_silent() {
        let mut machine = PlaybackMachine::new(N);
        assert_eq!(machine.pause(), TimerEffect::None);
        machine.reset();
        assert_eq!(machine.state(), PlaybackState::default());
        assert_eq!(machine.tick(0), TimerEffect::None);
        assert_eq!(machine.state(), PlaybackState::default());
    }

    #[test]
    fn test_single_step_catalog_completes_on_first_tick() {
        let mut machine = PlaybackMachine::new(1);
        machine.play();
        run_ticks(&mut machine, 1);
        assert_eq!(machine.state().phase(), Phase::Complete);
        assert_eq!(machine.state().current_step, 1);
    }

    #[test]
    fn test_empty_machine_completes_immediately() {
        let mut machine = PlaybackMachine::new(0);
        assert!(machine.is_empty());
        assert_eq!(machine.play(), TimerEffect::Cancel);
        assert_eq!(machine.state().phase(), Phase::Complete);
    }

    #[derive(Debug, Clone)]
    enum Command {
        Play,
        Pause,
        Reset,
        Tick,
        StaleTick,
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            1 => Just(Command::Play),
            1 => Just(Command::Pause),
            1 => Just(Command::Reset),
            3 => Just(Command::Tick),
            1 => Just(Command::StaleTick),
        ]
    }

    proptest! {
        #[test]
        fn prop_state_invariants_hold(len in 1u32..8, commands in proptest::collection::vec(command(), 0..64)) {
            let mut machine = PlaybackMachine::new(len);
            for command in commands {
                let before = machine.state();
                match command {
                    Command::Play => { machine.play(); }
                    Command::Pause => { machine.pause(); }
                    Command::Reset => { machine.reset(); }
                    Command::Tick => {
                        let generation = machine.generation();
                        machine.tick(generation);
                    }
                    Command::StaleTick => {
                        let generation = machine.generation().wrapping_sub(1);
                        machine.tick(generation);
                        prop_assert_eq!(machine.state(), before);
                    }
                }

                let state = machine.state();
                prop_assert!(state.current_step <= len);
                prop_assert_eq!(
                    state.is_complete,
                    state.current_step == len && !state.is_playing
                );
                if state.is_complete {
                    prop_assert!(!state.is_playing);
                }
            }
        }

        #[test]
        fn prop_pause_and_reset_idempotent(len in 1u32..8, ticks in 0u32..8) {
            let mut machine = PlaybackMachine::new(len);
            machine.play();
            run_ticks(&mut machine, ticks.min(len.saturating_sub(1)));
            machine.pause();
            let paused = machine.state();
            machine.pause();
            prop_assert_eq!(machine.state(), paused);

            machine.reset();
            let idle = machine.state();
            machine.reset();
            prop_assert_eq!(machine.state(), idle);
            prop_assert_eq!(idle, PlaybackState::default());
        }
    }
}
