use wasm_bindgen::prelude::*;

use super::TrayCore;

/// Frame loop counters. Snapshot via `TrayCore::stats()`.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct TrayStats {
    pub(super) frames_stepped: u32,
    pub(super) frames_skipped_hidden: u32,
    pub(super) frames_skipped_idle: u32,
    pub(super) timers_fired: u32,
    pub(super) last_step_ms: f64,
    pub(super) dice: u32,
    pub(super) bodies: u32,
    pub(super) awake: u32,
    pub(super) pending_timers: u32,
}

pub(super) fn snapshot(world: &TrayCore) -> TrayStats {
    TrayStats {
        dice: world.registry.len() as u32,
        bodies: world.physics.body_count() as u32,
        awake: world.registry.awake_count() as u32,
        pending_timers: world.timers.len() as u32,
        ..world.stats.clone()
    }
}

#[wasm_bindgen]
impl TrayStats {
    #[wasm_bindgen(getter)]
    pub fn frames_stepped(&self) -> u32 { self.frames_stepped }
    #[wasm_bindgen(getter)]
    pub fn frames_skipped_hidden(&self) -> u32 { self.frames_skipped_hidden }
    #[wasm_bindgen(getter)]
    pub fn frames_skipped_idle(&self) -> u32 { self.frames_skipped_idle }
    #[wasm_bindgen(getter)]
    pub fn timers_fired(&self) -> u32 { self.timers_fired }
    #[wasm_bindgen(getter)]
    pub fn last_step_ms(&self) -> f64 { self.last_step_ms }
    #[wasm_bindgen(getter)]
    pub fn dice(&self) -> u32 { self.dice }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn awake(&self) -> u32 { self.awake }
    #[wasm_bindgen(getter)]
    pub fn pending_timers(&self) -> u32 { self.pending_timers }
}
