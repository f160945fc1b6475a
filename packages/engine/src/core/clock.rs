//! Millisecond clock that drives frames and timers.
//!
//! Every timer deadline and every frame reads the same clock, so the host's
//! notion of "now" never has to be threaded through commands.

use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    /// Monotonic-enough milliseconds since an arbitrary origin
    fn now_ms(&self) -> f64;
}

/// Wall clock: `Date.now()` in the browser, `Instant` natively
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SystemClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(5.0);
        let other = clock.clone();
        clock.advance(10.0);
        assert_eq!(other.now_ms(), 15.0);
        other.set(1.0);
        assert_eq!(clock.now_ms(), 1.0);
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
