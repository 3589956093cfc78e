//! Meditation countdown state machine
//!
//! ```text
//! Idle/Paused --start()--> Running --pause() | tick() reaching 0--> Idle/Paused
//! ```
//!
//! `select_duration()` resets the remaining time in either state without
//! changing whether the countdown is running.

use std::fmt;

use tracing::{debug, info, warn};

use super::{timer_state::format_remaining, DurationPreset, TimerState};
use crate::tasks::ticker::{Generation, TickScheduler};

/// Result of delivering one tick to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the tick belongs to a cancelled schedule
    Ignored,
    /// One second was taken off the countdown
    Counted { remaining_seconds: u32 },
    /// The countdown hit zero and the timer paused itself
    Expired,
}

struct ActiveTick<H> {
    generation: Generation,
    _handle: H,
}

/// Owns the countdown and the at-most-one tick schedule driving it.
///
/// The tick handle is held only while running; dropping the controller
/// drops the handle and so cancels any pending ticks.
pub struct TimerController<S: TickScheduler> {
    scheduler: S,
    selected: DurationPreset,
    remaining_seconds: u32,
    active: Option<ActiveTick<S::Handle>>,
    next_generation: Generation,
}

impl<S: TickScheduler> fmt::Debug for TimerController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerController")
            .field("selected", &self.selected)
            .field("remaining_seconds", &self.remaining_seconds)
            .field("active_generation", &self.active_generation())
            .finish_non_exhaustive()
    }
}

impl<S: TickScheduler> TimerController<S> {
    /// Create an idle controller on the default preset
    pub fn new(scheduler: S) -> Self {
        let selected = DurationPreset::default();
        Self {
            scheduler,
            selected,
            remaining_seconds: selected.seconds(),
            active: None,
            next_generation: 0,
        }
    }

    pub fn selected_duration(&self) -> DurationPreset {
        self.selected
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Generation of the live tick schedule, if running
    pub fn active_generation(&self) -> Option<Generation> {
        self.active.as_ref().map(|active| active.generation)
    }

    /// Remaining time as `MM:SS`
    pub fn formatted_remaining(&self) -> String {
        format_remaining(self.remaining_seconds)
    }

    pub fn snapshot(&self) -> TimerState {
        TimerState::new(self.selected, self.remaining_seconds, self.is_running())
    }

    /// Pick a new duration and reset the remaining time to it.
    ///
    /// Running state is left as is.
    pub fn select_duration(&mut self, preset: DurationPreset) {
        info!(
            "Duration set to {} (running={})",
            preset,
            self.is_running()
        );
        self.selected = preset;
        self.remaining_seconds = preset.seconds();
    }

    /// Start counting down from the full selected duration.
    ///
    /// No-op while already running. Returns whether the timer was started.
    pub fn start(&mut self) -> bool {
        if self.active.is_some() {
            debug!("Start ignored, timer already running");
            return false;
        }

        // Restarts from the full duration even after a partial pause.
        self.remaining_seconds = self.selected.seconds();

        let generation = self.next_generation;
        self.next_generation += 1;
        let handle = self.scheduler.schedule(generation);
        self.active = Some(ActiveTick {
            generation,
            _handle: handle,
        });

        info!(
            "Meditation started for {} (generation {})",
            self.selected, generation
        );
        true
    }

    /// Cancel the tick schedule. Returns whether the timer was running.
    pub fn pause(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                info!(
                    "Meditation paused at {} (generation {})",
                    self.formatted_remaining(),
                    active.generation
                );
                true
            }
            None => false,
        }
    }

    /// Deliver one tick for the current schedule
    pub fn tick(&mut self) -> TickOutcome {
        if self.active.is_none() {
            return TickOutcome::Ignored;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            self.pause();
            info!("Meditation complete");
            return TickOutcome::Expired;
        }

        debug!("Tick, {} remaining", self.formatted_remaining());
        TickOutcome::Counted {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Deliver a tick tagged with the schedule it came from.
    ///
    /// Ticks from a cancelled schedule that were already in flight are dropped.
    pub fn tick_for(&mut self, generation: Generation) -> TickOutcome {
        match self.active_generation() {
            Some(current) if current == generation => self.tick(),
            current => {
                warn!(
                    "Ignoring stale tick for generation {} (active: {:?})",
                    generation, current
                );
                TickOutcome::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    /// Scheduler that never fires on its own and counts live handles
    #[derive(Debug, Default, Clone)]
    struct ManualTicks {
        live: Rc<Cell<usize>>,
        scheduled: Rc<Cell<usize>>,
    }

    impl ManualTicks {
        fn live(&self) -> usize {
            self.live.get()
        }

        fn scheduled(&self) -> usize {
            self.scheduled.get()
        }
    }

    #[derive(Debug)]
    struct ManualHandle {
        live: Rc<Cell<usize>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl TickScheduler for ManualTicks {
        type Handle = ManualHandle;

        fn schedule(&mut self, _generation: Generation) -> ManualHandle {
            self.live.set(self.live.get() + 1);
            self.scheduled.set(self.scheduled.get() + 1);
            ManualHandle {
                live: Rc::clone(&self.live),
            }
        }
    }

    fn controller() -> (TimerController<ManualTicks>, ManualTicks) {
        let ticks = ManualTicks::default();
        (TimerController::new(ticks.clone()), ticks)
    }

    #[test]
    fn starts_idle_on_ten_minutes() {
        let (timer, ticks) = controller();
        assert_eq!(timer.selected_duration(), DurationPreset::Ten);
        assert_eq!(timer.remaining_seconds(), 600);
        assert!(!timer.is_running());
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn select_duration_resets_remaining_for_every_preset() {
        let (mut timer, _) = controller();
        for preset in DurationPreset::ALL {
            timer.select_duration(preset);
            assert_eq!(timer.selected_duration(), preset);
            assert_eq!(timer.remaining_seconds(), preset.minutes() * 60);
        }
    }

    #[test]
    fn start_then_pause_keeps_full_duration() {
        let (mut timer, ticks) = controller();
        assert!(timer.start());
        assert!(timer.pause());

        assert_eq!(timer.remaining_seconds(), 600);
        assert!(!timer.is_running());
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn ticks_count_down_and_expire() {
        let (mut timer, ticks) = controller();
        timer.select_duration(DurationPreset::Five);
        timer.start();

        let mut previous = timer.remaining_seconds();
        loop {
            match timer.tick() {
                TickOutcome::Counted { remaining_seconds } => {
                    assert_eq!(remaining_seconds, previous - 1);
                    previous = remaining_seconds;
                }
                TickOutcome::Expired => break,
                TickOutcome::Ignored => panic!("tick ignored while running"),
            }
        }

        assert_eq!(previous, 1);
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
        assert_eq!(ticks.live(), 0);

        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn pause_is_idempotent() {
        let (mut timer, _) = controller();
        timer.start();
        timer.tick();

        assert!(timer.pause());
        let once = timer.snapshot();
        assert!(!timer.pause());
        assert_eq!(timer.snapshot(), once);
    }

    #[test]
    fn start_while_running_is_noop() {
        let (mut timer, ticks) = controller();
        timer.start();
        timer.tick();
        timer.tick();

        assert!(!timer.start());
        assert_eq!(timer.remaining_seconds(), 598);
        assert_eq!(ticks.live(), 1);
        assert_eq!(ticks.scheduled(), 1);
    }

    #[test]
    fn five_minute_session_after_three_ticks() {
        let (mut timer, _) = controller();
        timer.select_duration(DurationPreset::Five);
        assert_eq!(timer.remaining_seconds(), 300);

        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 300);

        for _ in 0..3 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 297);
        assert_eq!(timer.formatted_remaining(), "04:57");
    }

    #[test]
    fn twenty_minute_session_runs_to_zero() {
        let (mut timer, ticks) = controller();
        timer.select_duration(DurationPreset::Twenty);
        timer.start();

        for _ in 0..1200 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.formatted_remaining(), "00:00");
        assert_eq!(ticks.live(), 0);
    }

    #[test]
    fn start_after_partial_pause_restarts_full_duration() {
        let (mut timer, _) = controller();
        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        timer.pause();
        assert_eq!(timer.remaining_seconds(), 570);

        timer.start();
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn select_duration_while_running_keeps_running() {
        let (mut timer, ticks) = controller();
        timer.start();
        timer.tick();

        timer.select_duration(DurationPreset::Fifteen);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 900);
        assert_eq!(ticks.live(), 1);

        timer.tick();
        assert_eq!(timer.remaining_seconds(), 899);
    }

    #[test]
    fn never_more_than_one_live_schedule() {
        let (mut timer, ticks) = controller();
        for _ in 0..5 {
            timer.start();
            timer.start();
            assert_eq!(ticks.live(), 1);
            timer.pause();
            assert_eq!(ticks.live(), 0);
        }
        assert_eq!(ticks.scheduled(), 5);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let (mut timer, _) = controller();
        timer.start();
        let first = timer.active_generation().unwrap();
        timer.pause();
        timer.start();
        let second = timer.active_generation().unwrap();
        assert_ne!(first, second);

        assert_eq!(timer.tick_for(first), TickOutcome::Ignored);
        assert_eq!(timer.remaining_seconds(), 600);

        assert_eq!(
            timer.tick_for(second),
            TickOutcome::Counted { remaining_seconds: 599 }
        );
    }

    #[test]
    fn tick_after_pause_is_ignored() {
        let (mut timer, _) = controller();
        timer.start();
        let generation = timer.active_generation().unwrap();
        timer.pause();

        assert_eq!(timer.tick_for(generation), TickOutcome::Ignored);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn dropping_controller_cancels_schedule() {
        let (mut timer, ticks) = controller();
        timer.start();
        assert_eq!(ticks.live(), 1);

        drop(timer);
        assert_eq!(ticks.live(), 0);
    }
}
