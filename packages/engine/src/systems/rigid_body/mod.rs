//! RigidBody - a single die body moving as a unit
//!
//! Dice collide with the tray as spheres of their style radius. Orientation
//! is integrated for display only; it never feeds back into contacts.

mod body;

pub use body::{BodyId, RigidBody};
