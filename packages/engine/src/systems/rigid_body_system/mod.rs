//! RigidBodySystem - small dice stepper
//!
//! This is intentionally simple (no SAT / no constraint solver).
//! Goals:
//! - Dice fall, bounce off the tray and come to rest.
//! - Linear velocity after a step is meaningful for settlement.
//! - Bodies never leave the tray box.
//!
//! Current behavior:
//! - Semi-implicit Euler with a fixed timestep.
//! - Tray faces are planes: normal velocity reflects with restitution,
//!   tangential velocity loses speed to surface friction.
//! - Dice push each other apart as spheres.

mod collision;
mod system;

pub use system::RigidBodySystem;
