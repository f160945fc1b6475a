use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{TrayError, Vec3};
use crate::domain::dice::DieKind;
use crate::domain::style::DieStyle;
use crate::rigid_body::BodyId;
use crate::rigid_body_system::RigidBodySystem;

use super::registry::{DieBody, DieEntity};
use super::TrayCore;

/// Build a die: one body, or two for a percentile die.
///
/// Nothing is left registered when any part fails.
pub(super) fn create_entity(
    core: &mut TrayCore,
    style: &dyn DieStyle,
    kind: DieKind,
) -> Result<DieEntity, TrayError> {
    let primary = spawn_body(core, style, kind)?;

    let secondary = match kind.secondary_kind() {
        Some(linked) => match spawn_body(core, style, linked) {
            Ok(part) => Some(part),
            Err(e) => {
                release_body(core, primary);
                return Err(e);
            }
        },
        None => None,
    };

    let id = core.registry.allocate_id();
    Ok(DieEntity::new(id, kind, primary, secondary))
}

/// Release every body of a die and drop its pending timers.
pub(super) fn dispose_entity(core: &mut TrayCore, mut entity: DieEntity) {
    entity.settle.cancel(&mut core.timers);
    for part in entity.bodies() {
        release_body(core, part);
    }
}

fn spawn_body(core: &mut TrayCore, style: &dyn DieStyle, kind: DieKind) -> Result<DieBody, TrayError> {
    let scene = core.scene.as_deref_mut().ok_or(TrayError::SceneUnavailable)?;
    let instance = style.create_instance(kind, scene)?;

    let body = core.physics.add_body(&instance.desc, Vec3::zero());
    core.environment.shadows_mut().add(instance.mesh);
    roll_body(&mut core.physics, body, &mut core.rng);

    Ok(DieBody { body, mesh: instance.mesh })
}

fn release_body(core: &mut TrayCore, part: DieBody) {
    core.physics.remove_body(part.body);
    core.environment.shadows_mut().remove(part.mesh);
    if let Some(scene) = core.scene.as_deref_mut() {
        scene.dispose_mesh(part.mesh);
    }
}

#[inline]
fn span(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

/// Throw a body: drop it high near the far end with a random orientation,
/// push it down the tray and give it spin.
pub(super) fn roll_body(physics: &mut RigidBodySystem, id: BodyId, rng: &mut StdRng) {
    let Some(bounds) = physics.bounds() else {
        return;
    };
    let Some(body) = physics.body_mut(id) else {
        return;
    };

    let r = body.radius;
    let depth = bounds.max.z - bounds.min.z;
    let pos = Vec3::new(
        span(rng, bounds.min.x + r, bounds.max.x - r),
        span(rng, bounds.min.y + r + 1.0, (bounds.min.y + r + 4.0).min(bounds.max.y - r)),
        span(rng, bounds.max.z - r - depth * 0.25, bounds.max.z - r),
    );
    let rotation = Vec3::new(rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU), rng.gen_range(0.0..TAU));
    body.reset_motion(pos, rotation);

    let throw = Vec3::new(
        rng.gen_range(-2.0..2.0),
        rng.gen_range(-1.0..1.0),
        -rng.gen_range(6.0..10.0),
    );
    body.apply_impulse(throw * body.mass);

    let spin = Vec3::new(
        rng.gen_range(-8.0..8.0),
        rng.gen_range(-8.0..8.0),
        rng.gen_range(-8.0..8.0),
    );
    body.apply_torque(spin * body.moment_of_inertia);
}
