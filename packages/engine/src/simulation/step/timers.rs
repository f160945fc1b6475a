use super::{TrayCore, TrayTimer};

/// Fire every timer due at `now`, earliest first.
///
/// Each event re-checks its target: a countdown whose die is gone, or that
/// was replaced by a newer one, does nothing.
pub(super) fn fire_due(world: &mut TrayCore, now: f64) {
    while let Some((handle, event)) = world.timers.pop_due(now) {
        world.stats.timers_fired = world.stats.timers_fired.wrapping_add(1);
        match event {
            TrayTimer::Sleep(id) => {
                let settled = world
                    .registry
                    .get_mut(id)
                    .map_or(false, |entity| entity.settle.on_timer(handle));
                if settled {
                    log::debug!("die {} settled", id.0);
                }
            }
            TrayTimer::ForceRenderEnd => {
                world.view.on_force_timer(handle);
            }
        }
    }
}
