use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::host::{NoopInteractionHost, TrayScene};
use crate::core::{Clock, SystemClock, TimerQueue};
use crate::domain::config::TrayConfig;
use crate::rigid_body_system::RigidBodySystem;
use crate::systems::environment::TrayEnvironment;
use crate::systems::visibility::ViewState;

use super::factory::dispose_entity;
use super::registry::DiceRegistry;
use super::{TrayCore, TrayStats};

pub(super) fn create_tray_core(config: TrayConfig, clock: Box<dyn Clock>) -> TrayCore {
    let seed = config
        .seed
        .unwrap_or_else(|| clock.now_ms().to_bits() ^ 0x9E37_79B9_7F4A_7C15);

    TrayCore {
        physics: RigidBodySystem::new(config.physics.clone()),
        config,
        clock,
        perf_clock: SystemClock::new(),
        scene: None,
        interaction: Box::new(NoopInteractionHost),
        environment: TrayEnvironment::new(),
        registry: DiceRegistry::new(),
        view: ViewState::new(),
        timers: TimerQueue::new(),
        rng: StdRng::seed_from_u64(seed),
        poses: Vec::with_capacity(32),
        stats: TrayStats::default(),
    }
}

pub(super) fn mount(world: &mut TrayCore, scene: Box<dyn TrayScene>) {
    if world.scene.is_some() {
        unmount(world);
    }

    let bounds = world.environment.build(&world.config.dimensions);
    world.physics.set_bounds(bounds);
    world.scene = Some(scene);
    log::info!("dice tray mounted");
}

pub(super) fn unmount(world: &mut TrayCore) {
    let live = super::commands::scene_live(world);
    for entity in world.registry.take_all() {
        if live {
            dispose_entity(world, entity);
        } else {
            // Meshes went down with the scene; only local state is left.
            let mut entity = entity;
            entity.settle.cancel(&mut world.timers);
        }
    }
    world.physics.clear();
    world.environment = TrayEnvironment::new();
    world.poses.clear();
    world.scene = None;
}
