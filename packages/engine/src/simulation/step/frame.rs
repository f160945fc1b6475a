use crate::core::Clock;
use crate::rigid_body_system::RigidBodySystem;
use crate::systems::gate::{self, GateDecision, GateInputs};

use super::registry::DieEntity;
use super::render_extract::collect_poses;
use super::timers::fire_due;
use super::{TrayCore, TrayTimer};

/// Fastest moving half of a die
fn entity_speed(physics: &RigidBodySystem, entity: &DieEntity) -> f32 {
    entity
        .bodies()
        .map(|part| physics.linear_speed(part.body))
        .fold(0.0, f32::max)
}

pub(super) fn frame(world: &mut TrayCore) -> GateDecision {
    let now = world.clock.now_ms();
    fire_due(world, now);

    let decision = gate::decide(GateInputs {
        // An unmounted or torn down scene counts as hidden.
        visible: world.view.visible() && super::commands::scene_live(world),
        force_render: world.view.force_render(),
        interacting: world.view.interacting(),
        any_awake: world.registry.any_awake(),
    });

    match decision {
        GateDecision::SkipHidden => {
            world.stats.frames_skipped_hidden = world.stats.frames_skipped_hidden.wrapping_add(1);
        }
        GateDecision::SkipIdle => {
            world.stats.frames_skipped_idle = world.stats.frames_skipped_idle.wrapping_add(1);
        }
        GateDecision::Step => step(world, now),
    }
    decision
}

fn step(world: &mut TrayCore, now: f64) {
    let t0 = world.perf_clock.now_ms();

    world.physics.step();

    // Speeds are sampled strictly after this frame's step.
    for entity in world.registry.iter_mut() {
        let speed = entity_speed(&world.physics, entity);
        let id = entity.id();
        entity.settle.observe(
            speed,
            now,
            &world.config.settle,
            &mut world.timers,
            || TrayTimer::Sleep(id),
        );
    }

    collect_poses(world);
    if let Some(scene) = world.scene.as_deref_mut() {
        scene.render(&world.poses);
    }

    world.stats.frames_stepped = world.stats.frames_stepped.wrapping_add(1);
    world.stats.last_step_ms = world.perf_clock.now_ms() - t0;
}
