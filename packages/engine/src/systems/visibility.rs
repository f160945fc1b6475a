//! View state - visibility, pointer interaction and the force-render window.
//!
//! A freshly shown scene is rendered unconditionally for a while so lazily
//! realized meshes and shadows make it to the screen. Clearing the dice opens
//! a shorter window for the same reason.

use crate::api::host::InteractionHost;
use crate::core::{TimerHandle, TimerQueue};

#[derive(Clone, Copy, Debug, PartialEq)]
struct ForceWindow {
    handle: TimerHandle,
    until_ms: f64,
}

#[derive(Debug, Default)]
pub struct ViewState {
    visible: bool,
    interacting: bool,
    force_render: bool,
    window: Option<ForceWindow>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn interacting(&self) -> bool {
        self.interacting
    }

    pub fn force_render(&self) -> bool {
        self.force_render
    }

    pub fn force_timer(&self) -> Option<TimerHandle> {
        self.window.map(|w| w.handle)
    }

    /// Apply an open/close toggle. Returns false when nothing changed.
    pub fn set_open<E>(
        &mut self,
        open: bool,
        now_ms: f64,
        open_render_ms: f64,
        timers: &mut TimerQueue<E>,
        event: E,
    ) -> bool {
        if open == self.visible {
            return false;
        }
        self.visible = open;
        if open {
            // Opening always starts a fresh window, even over a longer one.
            if let Some(window) = self.window.take() {
                timers.cancel(window.handle);
            }
            self.arm(now_ms, open_render_ms, timers, event);
        }
        // Closing leaves a pending window alone; it ends harmlessly.
        true
    }

    /// Force rendering for `window_ms` from now.
    ///
    /// A pending window that already reaches further is kept; otherwise it
    /// is cancelled and replaced.
    pub fn force_render_for<E>(
        &mut self,
        now_ms: f64,
        window_ms: f64,
        timers: &mut TimerQueue<E>,
        event: E,
    ) {
        let until_ms = now_ms + window_ms.max(0.0);
        self.force_render = true;
        if let Some(window) = self.window.take() {
            if timers.is_pending(window.handle) && window.until_ms >= until_ms {
                self.window = Some(window);
                return;
            }
            timers.cancel(window.handle);
        }
        self.arm(now_ms, window_ms, timers, event);
    }

    fn arm<E>(&mut self, now_ms: f64, window_ms: f64, timers: &mut TimerQueue<E>, event: E) {
        let window_ms = window_ms.max(0.0);
        self.force_render = true;
        let handle = timers.schedule(now_ms, window_ms, event);
        self.window = Some(ForceWindow {
            handle,
            until_ms: now_ms + window_ms,
        });
    }

    /// Window timer fired. Returns true if it ended the live window.
    pub fn on_force_timer(&mut self, handle: TimerHandle) -> bool {
        match self.window {
            Some(window) if window.handle == handle => {
                self.window = None;
                self.force_render = false;
                true
            }
            _ => false,
        }
    }

    pub fn pointer_down(&mut self, host: &mut dyn InteractionHost) {
        self.interacting = true;
        host.set_interaction_suppressed(true);
    }

    pub fn pointer_up(&mut self, host: &mut dyn InteractionHost) {
        self.interacting = false;
        host.set_interaction_suppressed(false);
    }
}
