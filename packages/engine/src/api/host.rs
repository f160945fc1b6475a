//! Seams to the hosting application.
//!
//! The tray never draws anything itself. It hands body poses to a
//! [`TrayScene`] and asks an [`InteractionHost`] to hold off competing
//! pointer handling while the user drags inside the tray.

use serde::Serialize;

use crate::core::{TrayError, Vec3};
use crate::domain::dice::DieKind;
use crate::domain::style::BodyDesc;

/// Visual instance handle owned by the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MeshId(pub u32);

/// Per-body transform handed to the scene on every rendered frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BodyPose {
    pub mesh: MeshId,
    pub casts_shadow: bool,
    pub position: Vec3,
    /// Euler angles (radians)
    pub rotation: Vec3,
}

pub trait TrayScene {
    /// False once the scene has been torn down; commands then do nothing.
    fn is_live(&self) -> bool;

    fn spawn_mesh(&mut self, kind: DieKind, desc: &BodyDesc) -> Result<MeshId, TrayError>;

    fn dispose_mesh(&mut self, mesh: MeshId);

    fn render(&mut self, poses: &[BodyPose]);
}

pub trait InteractionHost {
    fn set_interaction_suppressed(&mut self, suppressed: bool);
}

/// Host without competing interaction handling
pub struct NoopInteractionHost;

impl InteractionHost for NoopInteractionHost {
    fn set_interaction_suppressed(&mut self, _suppressed: bool) {}
}
