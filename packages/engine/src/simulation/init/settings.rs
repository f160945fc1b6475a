use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::TrayError;
use crate::domain::config::{SettleConfig, TrayConfig, ViewConfig};

use super::TrayCore;

pub(super) fn config(world: &TrayCore) -> &TrayConfig {
    &world.config
}

/// Takes effect on the next speed sample; pending countdowns keep their deadline.
pub(super) fn set_settle_config(world: &mut TrayCore, settle: SettleConfig) -> Result<(), TrayError> {
    let candidate = TrayConfig { settle, ..world.config.clone() };
    candidate.validate()?;
    world.config = candidate;
    Ok(())
}

pub(super) fn set_view_config(world: &mut TrayCore, view: ViewConfig) -> Result<(), TrayError> {
    let candidate = TrayConfig { view, ..world.config.clone() };
    candidate.validate()?;
    world.config = candidate;
    Ok(())
}

pub(super) fn reseed(world: &mut TrayCore, seed: u64) {
    world.rng = StdRng::seed_from_u64(seed);
    world.config.seed = Some(seed);
}
