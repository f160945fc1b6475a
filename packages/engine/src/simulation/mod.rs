//! Dice tray - mounted scene, active dice and the gated frame loop
//!
//! TrayCore only orchestrates. Settlement, gating and visibility logic live
//! in systems/, body stepping in the rigid body system.
//!
//! Everything runs on one thread: commands and `frame()` both take
//! `&mut self`, and timers only fire at the start of a frame (or from
//! `poll_timers()`), never in the middle of a step. A multi-threaded host
//! should put the whole core behind one mutex.

use rand::rngs::StdRng;

use crate::api::host::{BodyPose, InteractionHost, TrayScene};
use crate::core::{Clock, SystemClock, TimerQueue, TrayError};
use crate::domain::config::{SettleConfig, TrayConfig, ViewConfig};
use crate::domain::dice::DieKind;
use crate::domain::style::DieStyle;
use crate::rigid_body::{BodyId, RigidBody};
use crate::rigid_body_system::RigidBodySystem;
use crate::systems::environment::TrayEnvironment;
use crate::systems::gate::GateDecision;
use crate::systems::visibility::ViewState;

#[path = "dice/registry.rs"]
mod registry;
#[path = "dice/factory.rs"]
mod factory;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/frame.rs"]
mod frame;
#[path = "step/timers.rs"]
mod timers;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
pub mod facade;

pub use facade::DiceTray;
pub use perf_stats::TrayStats;
pub use registry::{DieBody, DieEntity, EntityId};

use registry::DiceRegistry;

/// Payload of every timer the tray schedules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrayTimer {
    /// Settlement countdown of one die
    Sleep(EntityId),
    /// End of the force-render window
    ForceRenderEnd,
}

/// The dice tray
pub struct TrayCore {
    config: TrayConfig,
    clock: Box<dyn Clock>,
    perf_clock: SystemClock,
    scene: Option<Box<dyn TrayScene>>,
    interaction: Box<dyn InteractionHost>,
    environment: TrayEnvironment,
    physics: RigidBodySystem,
    registry: DiceRegistry,
    view: ViewState,
    timers: TimerQueue<TrayTimer>,
    rng: StdRng,

    // Render output of the last stepped frame
    poses: Vec<BodyPose>,

    stats: TrayStats,
}

impl TrayCore {
    /// Create a tray on the wall clock
    pub fn new(config: TrayConfig) -> Result<Self, TrayError> {
        Self::with_clock(config, Box::new(SystemClock::new()))
    }

    pub fn with_clock(config: TrayConfig, clock: Box<dyn Clock>) -> Result<Self, TrayError> {
        config.validate()?;
        Ok(init::create_tray_core(config, clock))
    }

    pub fn set_interaction_host(&mut self, host: Box<dyn InteractionHost>) {
        self.interaction = host;
    }

    /// Attach the scene and build the tray inside it
    pub fn mount(&mut self, scene: Box<dyn TrayScene>) {
        init::mount(self, scene);
    }

    /// Detach the scene, dropping every die
    pub fn unmount(&mut self) {
        init::unmount(self);
    }

    pub fn is_mounted(&self) -> bool {
        commands::scene_live(self)
    }

    // === COMMANDS ===

    /// Roll a new die of `kind` in `style`.
    ///
    /// `Ok(None)` when no scene is mounted; errors only for styles that
    /// cannot produce the kind.
    pub fn add_die(&mut self, style: &dyn DieStyle, kind: DieKind) -> Result<Option<EntityId>, TrayError> {
        commands::add_die(self, style, kind)
    }

    /// Dispose every die
    pub fn clear_all(&mut self) {
        commands::clear_all(self);
    }

    /// Throw every die again
    pub fn reroll_all(&mut self) {
        commands::reroll_all(self);
    }

    pub fn set_open(&mut self, open: bool) {
        commands::set_open(self, open);
    }

    pub fn on_pointer_down(&mut self) {
        commands::pointer_down(self);
    }

    pub fn on_pointer_up(&mut self) {
        commands::pointer_up(self);
    }

    // === FRAME LOOP ===

    /// Run one animation frame: fire due timers, then step and render if the gate allows.
    pub fn frame(&mut self) -> GateDecision {
        frame::frame(self)
    }

    /// Fire due timers without stepping
    pub fn poll_timers(&mut self) {
        let now = self.clock.now_ms();
        timers::fire_due(self, now);
    }

    // === STATE ===

    pub fn dice(&self) -> &[DieEntity] {
        self.registry.as_slice()
    }

    pub fn die(&self, id: EntityId) -> Option<&DieEntity> {
        self.registry.get(id)
    }

    pub fn die_count(&self) -> usize {
        self.registry.len()
    }

    pub fn awake_count(&self) -> usize {
        self.registry.awake_count()
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.physics.body(id)
    }

    pub fn body_count(&self) -> usize {
        self.physics.body_count()
    }

    pub fn shadow_caster_count(&self) -> usize {
        self.environment.shadows().len()
    }

    pub fn visible(&self) -> bool {
        self.view.visible()
    }

    pub fn interacting(&self) -> bool {
        self.view.interacting()
    }

    pub fn force_render(&self) -> bool {
        self.view.force_render()
    }

    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Poses rendered by the last stepped frame
    pub fn poses(&self) -> &[BodyPose] {
        &self.poses
    }

    pub fn config(&self) -> &TrayConfig {
        settings::config(self)
    }

    pub fn stats(&self) -> TrayStats {
        perf_stats::snapshot(self)
    }

    // === SETTINGS ===

    pub fn set_settle_config(&mut self, settle: SettleConfig) -> Result<(), TrayError> {
        settings::set_settle_config(self, settle)
    }

    pub fn set_view_config(&mut self, view: ViewConfig) -> Result<(), TrayError> {
        settings::set_view_config(self, view)
    }

    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
