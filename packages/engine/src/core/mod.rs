//! Core building blocks shared by every tray system: math, timers, clock, errors.

pub mod clock;
pub mod error;
pub mod math;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TrayError;
pub use math::Vec3;
pub use timers::{TimerHandle, TimerQueue};
