use crate::core::TrayError;
use crate::domain::dice::DieKind;
use crate::domain::style::DieStyle;

use super::factory::{create_entity, dispose_entity, roll_body};
use super::registry::EntityId;
use super::{TrayCore, TrayTimer};

pub(super) fn scene_live(world: &TrayCore) -> bool {
    world.scene.as_ref().map_or(false, |scene| scene.is_live())
}

pub(super) fn add_die(
    world: &mut TrayCore,
    style: &dyn DieStyle,
    kind: DieKind,
) -> Result<Option<EntityId>, TrayError> {
    if !scene_live(world) {
        log::debug!("add_die({kind}) ignored: no live scene");
        return Ok(None);
    }

    match create_entity(world, style, kind) {
        Ok(entity) => {
            let id = entity.id();
            world.registry.add(entity);
            log::debug!("rolled {kind} as die {} in style {}", id.0, style.name());
            Ok(Some(id))
        }
        // Scene went away while building the die.
        Err(TrayError::SceneUnavailable) => Ok(None),
        Err(e) => {
            log::warn!("add_die({kind}) failed: {e}");
            Err(e)
        }
    }
}

pub(super) fn clear_all(world: &mut TrayCore) {
    if !scene_live(world) || world.registry.is_empty() {
        return;
    }

    let dice = world.registry.take_all();
    let count = dice.len();
    for entity in dice {
        dispose_entity(world, entity);
    }

    // Draw the emptied tray at least once.
    let now = world.clock.now_ms();
    world.view.force_render_for(
        now,
        world.config.view.clear_render_ms,
        &mut world.timers,
        TrayTimer::ForceRenderEnd,
    );
    log::debug!("cleared {count} dice");
}

pub(super) fn reroll_all(world: &mut TrayCore) {
    if !scene_live(world) {
        return;
    }

    for entity in world.registry.iter_mut() {
        for part in entity.bodies() {
            roll_body(&mut world.physics, part.body, &mut world.rng);
        }
        entity.settle.reset(&mut world.timers);
    }
}

pub(super) fn set_open(world: &mut TrayCore, open: bool) {
    let now = world.clock.now_ms();
    let changed = world.view.set_open(
        open,
        now,
        world.config.view.open_render_ms,
        &mut world.timers,
        TrayTimer::ForceRenderEnd,
    );
    if changed {
        log::debug!("tray {}", if open { "opened" } else { "closed" });
    }
}

pub(super) fn pointer_down(world: &mut TrayCore) {
    world.view.pointer_down(world.interaction.as_mut());
}

pub(super) fn pointer_up(world: &mut TrayCore) {
    world.view.pointer_up(world.interaction.as_mut());
}
