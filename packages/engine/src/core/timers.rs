//! One-shot timers keyed by cancellable handles.
//!
//! Timers never run on their own: the owner drains due entries with
//! [`TimerQueue::pop_due`] at the start of a frame. A cancelled handle is
//! removed outright, so it can never fire late.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

struct PendingTimer<E> {
    handle: TimerHandle,
    due_ms: f64,
    event: E,
}

pub struct TimerQueue<E> {
    pending: Vec<PendingTimer<E>>,
    next_handle: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 1,
        }
    }

    /// Schedule `event` to fire once `delay_ms` has elapsed after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            due_ms: now_ms + delay_ms.max(0.0),
            event,
        });
        handle
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|t| t.handle == handle) {
            Some(idx) => {
                self.pending.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn due_ms(&self, handle: TimerHandle) -> Option<f64> {
        self.pending.iter().find(|t| t.handle == handle).map(|t| t.due_ms)
    }

    /// Remove and return the earliest timer due at `now_ms`.
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerHandle, E)> {
        let mut best: Option<usize> = None;
        for (idx, t) in self.pending.iter().enumerate() {
            if t.due_ms > now_ms {
                continue;
            }
            best = match best {
                Some(b) => {
                    let cur = &self.pending[b];
                    if (t.due_ms, t.handle) < (cur.due_ms, cur.handle) {
                        Some(idx)
                    } else {
                        Some(b)
                    }
                }
                None => Some(idx),
            };
        }
        let t = self.pending.swap_remove(best?);
        Some((t.handle, t.event))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending timer without firing.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
