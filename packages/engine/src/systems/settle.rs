//! Settlement detection - per-die awake/asleep with hysteresis.
//!
//! Physics never reports an exact zero, so a die is only considered settled
//! after its speed stays under the low threshold for a whole debounce delay.
//! Any spike above the high threshold wakes it again and cancels the pending
//! countdown. Speeds in between leave the state alone.

use crate::core::{TimerHandle, TimerQueue};
use crate::domain::config::SettleConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleState {
    Awake,
    /// Low speed seen; the handle is the live countdown
    PendingSleep(TimerHandle),
    Asleep,
}

#[derive(Clone, Debug)]
pub struct Settlement {
    state: SettleState,
}

impl Settlement {
    pub fn new() -> Self {
        Self { state: SettleState::Awake }
    }

    pub fn state(&self) -> SettleState {
        self.state
    }

    pub fn is_asleep(&self) -> bool {
        self.state == SettleState::Asleep
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        match self.state {
            SettleState::PendingSleep(handle) => Some(handle),
            _ => None,
        }
    }

    /// Feed one post-step speed sample.
    ///
    /// `event` builds the timer payload when a countdown has to be scheduled.
    pub fn observe<E>(
        &mut self,
        speed: f32,
        now_ms: f64,
        cfg: &SettleConfig,
        timers: &mut TimerQueue<E>,
        event: impl FnOnce() -> E,
    ) {
        match self.state {
            SettleState::Awake if speed < cfg.low_threshold => {
                let handle = timers.schedule(now_ms, cfg.sleep_delay_ms, event());
                self.state = SettleState::PendingSleep(handle);
            }
            SettleState::PendingSleep(handle) if speed > cfg.high_threshold => {
                timers.cancel(handle);
                self.state = SettleState::Awake;
            }
            SettleState::Asleep if speed > cfg.high_threshold => {
                self.state = SettleState::Awake;
            }
            _ => {}
        }
    }

    /// Countdown fired. Returns true if this put the die to sleep.
    ///
    /// A handle that is no longer the live countdown is ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        match self.state {
            SettleState::PendingSleep(live) if live == handle => {
                self.state = SettleState::Asleep;
                true
            }
            _ => false,
        }
    }

    /// Back to awake, dropping any countdown (reroll).
    pub fn reset<E>(&mut self, timers: &mut TimerQueue<E>) {
        self.cancel(timers);
        self.state = SettleState::Awake;
    }

    /// Drop any countdown without changing the sleep flag (disposal).
    pub fn cancel<E>(&mut self, timers: &mut TimerQueue<E>) {
        if let SettleState::PendingSleep(handle) = self.state {
            timers.cancel(handle);
            self.state = SettleState::Awake;
        }
    }
}

impl Default for Settlement {
    fn default() -> Self {
        Self::new()
    }
}
