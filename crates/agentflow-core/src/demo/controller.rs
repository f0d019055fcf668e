//! Timer-driven playback controller.
//!
//! [`DemoController`] wraps a [`PlaybackMachine`] and turns its
//! [`TimerEffect`]s into at most one sleeping tokio task. Commands lock the
//! machine, apply the transition, adjust the pending task and publish the
//! new snapshot on a `watch` channel, all before returning.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{debug, trace};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};

use super::{
    catalog::Catalog,
    machine::{Generation, PlaybackMachine, PlaybackState, TimerEffect},
};
use crate::error::{AgentFlowError, Result};

/// Delay between two steps when none is configured.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// Plays a [`Catalog`] back one step per interval.
///
/// Observers call [`DemoController::subscribe`] and read snapshots from the
/// returned receiver; they never mutate playback state.
pub struct DemoController {
    catalog: Arc<Catalog>,
    shared: Arc<Shared>,
}

struct Shared {
    core: Mutex<Core>,
    state_tx: watch::Sender<PlaybackState>,
    interval: Duration,
    runtime: Handle,
}

struct Core {
    machine: PlaybackMachine,
    pending: Option<JoinHandle<()>>,
}

impl DemoController {
    /// Starts or resumes playback; restarts when complete.
    pub fn play(&self) {
        self.shared.command("play", PlaybackMachine::play);
    }

    /// Stops advancing and cancels the pending tick.
    pub fn pause(&self) {
        self.shared.command("pause", PlaybackMachine::pause);
    }

    /// Returns to step 0 and cancels the pending tick.
    pub fn reset(&self) {
        self.shared.command("reset", PlaybackMachine::reset);
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> PlaybackState {
        *self.shared.state_tx.borrow()
    }

    /// Receiver that observes every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.shared.state_tx.subscribe()
    }

    /// The steps being played.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Delay between ticks for this controller.
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }
}

impl Drop for DemoController {
    fn drop(&mut self) {
        let mut core = self.shared.lock();
        // Retire the generation first: a tick already past its sleep and
        // waiting on the lock cannot be aborted and must find itself stale.
        core.machine.reset();
        if let Some(pending) = core.pending.take() {
            pending.abort();
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn command(self: &Arc<Self>, name: &str, apply: fn(&mut PlaybackMachine) -> TimerEffect) {
        let mut core = self.lock();
        let before = core.machine.state();
        let effect = apply(&mut core.machine);
        let after = core.machine.state();

        match effect {
            TimerEffect::None => {}
            TimerEffect::Arm(generation) => {
                let handle = self.arm(generation);
                if let Some(previous) = core.pending.replace(handle) {
                    previous.abort();
                }
            }
            TimerEffect::Cancel => {
                if let Some(pending) = core.pending.take() {
                    pending.abort();
                }
            }
        }

        if before != after {
            debug!("demo {name}: {before:?} -> {after:?}");
            self.state_tx.send_replace(after);
        } else {
            trace!("demo {name}: no change in {:?} phase", after.phase());
        }
    }

    fn fire(self: &Arc<Self>, generation: Generation) {
        let mut core = self.lock();
        let before = core.machine.state();

        match core.machine.tick(generation) {
            TimerEffect::None => {
                trace!("demo tick: ignoring stale generation {generation}");
                return;
            }
            TimerEffect::Arm(next) => {
                // The running task is the one being replaced; it finishes on its own.
                let handle = self.arm(next);
                core.pending = Some(handle);
            }
            TimerEffect::Cancel => {
                core.pending = None;
            }
        }

        let after = core.machine.state();
        debug!("demo tick: {before:?} -> {after:?}");
        self.state_tx.send_replace(after);
    }

    fn arm(self: &Arc<Self>, generation: Generation) -> JoinHandle<()> {
        let shared = Arc::clone(self);
        let interval = self.interval;
        self.runtime.spawn(async move {
            tokio::time::sleep(interval).await;
            shared.fire(generation);
        })
    }
}

/// Builder for [`DemoController`].
#[derive(Debug, Clone)]
pub struct DemoControllerBuilder {
    catalog: Option<Catalog>,
    interval: Duration,
}

impl DemoControllerBuilder {
    /// Creates a builder for the reference catalog and default interval.
    pub fn new() -> Self {
        Self {
            catalog: None,
            interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Plays `catalog` instead of the reference walkthrough.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the delay between steps.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Builds the controller on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` for a zero interval and
    /// `AgentFlowError::Configuration` when called outside a tokio runtime.
    pub fn build(self) -> Result<DemoController> {
        if self.interval.is_zero() {
            return Err(AgentFlowError::invalid_input("interval")
                .with_reason("tick interval must be greater than zero"));
        }

        let runtime = Handle::try_current().map_err(|e| AgentFlowError::Configuration {
            message: format!("Demo playback needs a tokio runtime: {e}"),
        })?;

        let catalog = Arc::new(self.catalog.unwrap_or_default());
        let (state_tx, _) = watch::channel(PlaybackState::default());

        Ok(DemoController {
            shared: Arc::new(Shared {
                core: Mutex::new(Core {
                    machine: PlaybackMachine::new(catalog.len()),
                    pending: None,
                }),
                state_tx,
                interval: self.interval,
                runtime,
            }),
            catalog,
        })
    }
}

impl Default for DemoControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;
    use crate::demo::machine::Phase;

    const INTERVAL: Duration = DEFAULT_TICK_INTERVAL;

    fn controller() -> DemoController {
        DemoControllerBuilder::new()
            .build()
            .expect("Failed to build controller")
    }

    /// Sleeps to the middle of the interval after `ticks` ticks have fired.
    async fn wait_ticks(ticks: u32) {
        sleep(INTERVAL * ticks + INTERVAL / 2).await;
    }

    fn playing_at(step: u32) -> PlaybackState {
        PlaybackState {
            current_step: step,
            is_playing: true,
            is_complete: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_plays_through_to_completion() {
        let demo = controller();
        demo.play();
        assert_eq!(demo.state(), playing_at(0));

        wait_ticks(1).await;
        assert_eq!(demo.state(), playing_at(1));

        sleep(INTERVAL * 3).await;
        assert_eq!(
            demo.state(),
            PlaybackState {
                current_step: 4,
                is_playing: false,
                is_complete: true,
            }
        );

        sleep(INTERVAL * 5).await;
        assert_eq!(demo.state().current_step, 4);
        assert!(demo.shared.lock().pending.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_advancing() {
        let demo = controller();
        demo.play();
        wait_ticks(2).await;
        assert_eq!(demo.state(), playing_at(2));

        demo.pause();
        let paused = demo.state();
        assert_eq!(paused.phase(), Phase::Paused);
        assert_eq!(paused.current_step, 2);

        sleep(INTERVAL * 4).await;
        assert_eq!(demo.state(), paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_resumes_after_pause() {
        let demo = controller();
        demo.play();
        wait_ticks(2).await;
        demo.pause();
        sleep(INTERVAL * 3).await;

        demo.play();
        assert_eq!(demo.state(), playing_at(2));
        wait_ticks(1).await;
        assert_eq!(demo.state(), playing_at(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_after_complete() {
        let demo = controller();
        demo.play();
        wait_ticks(4).await;
        assert!(demo.state().is_complete);

        demo.play();
        assert_eq!(demo.state(), playing_at(0));
        wait_ticks(1).await;
        assert_eq!(demo.state(), playing_at(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_then_play_never_applies_orphaned_tick() {
        let demo = controller();
        demo.play();
        wait_ticks(2).await;
        assert_eq!(demo.state(), playing_at(2));

        demo.reset();
        demo.play();

        // The tick armed before the reset would have fired here.
        sleep(INTERVAL / 2 + INTERVAL / 4).await;
        assert_eq!(demo.state(), playing_at(0));

        sleep(INTERVAL / 2).await;
        assert_eq!(demo.state(), playing_at(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_misuse_is_silent() {
        let demo = controller();
        let mut rx = demo.subscribe();

        demo.pause();
        demo.reset();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(demo.state(), PlaybackState::default());

        demo.play();
        demo.play();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), playing_at(0));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_observers_see_every_tick() {
        let demo = controller();
        let mut rx = demo.subscribe();
        demo.play();

        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = *rx.borrow_and_update();
            seen.push(state.current_step);
            if state.is_complete {
                break;
            }
        }
        assert_eq!(seen, [0, 1, 2, 3, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_tick() {
        let demo = controller();
        let rx = demo.subscribe();
        demo.play();
        drop(demo);

        sleep(INTERVAL * 3).await;
        assert_eq!(*rx.borrow(), playing_at(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_from_before_drop_is_ignored() {
        let demo = controller();
        let rx = demo.subscribe();
        demo.play();
        let shared = Arc::clone(&demo.shared);
        let generation = shared.lock().machine.generation();
        drop(demo);

        // Same as a tick task that woke up and was waiting on the lock.
        shared.fire(generation);
        {
            let core = shared.lock();
            assert!(core.pending.is_none());
            assert_ne!(core.machine.generation(), generation);
        }
        assert_eq!(*rx.borrow(), playing_at(0));

        sleep(INTERVAL * 3).await;
        assert_eq!(*rx.borrow(), playing_at(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_catalog_and_interval() {
        let catalog = Catalog::new(Catalog::reference().iter().take(2).cloned().collect())
            .expect("Failed to build catalog");
        let demo = DemoControllerBuilder::new()
            .with_catalog(catalog)
            .with_interval(Duration::from_millis(100))
            .build()
            .expect("Failed to build controller");
        assert_eq!(demo.catalog().len(), 2);

        demo.play();
        sleep(Duration::from_millis(250)).await;
        assert!(demo.state().is_complete);
        assert_eq!(demo.state().current_step, 2);
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let result = DemoControllerBuilder::new()
            .with_interval(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(AgentFlowError::InvalidInput { .. })));
    }

    #[test]
    fn test_build_outside_runtime_fails() {
        let result = DemoControllerBuilder::new().build();
        assert!(matches!(result, Err(AgentFlowError::Configuration { .. })));
    }
}
